//! Highlights the nav link of the section under the header.

use pw_common::timing::SCROLL_THROTTLE_MS;
use pw_common::{Millis, Throttle};
use pw_dom::{Document, NodeId, Result};

use crate::header::header_height;
use crate::selectors::NavSelectors;

/// Distance below the header at which a section counts as current.
pub const SCROLL_SPY_OFFSET: f64 = 50.0;

#[derive(Debug, Clone)]
pub struct ScrollSpy {
    sections: Vec<NodeId>,
    links: Vec<NodeId>,
    header_height: f64,
    throttle: Throttle,
}

impl ScrollSpy {
    /// Returns `Ok(None)` when there are no sections or no section links.
    pub fn attach(doc: &Document, selectors: &NavSelectors) -> Result<Option<Self>> {
        let sections = doc.query_selector_all(&selectors.sections)?;
        let links = doc.query_selector_all(&selectors.spy_links)?;
        if sections.is_empty() || links.is_empty() {
            tracing::debug!("No sections to track, scroll spy disabled");
            return Ok(None);
        }
        let header_height = header_height(doc, &selectors.header)?;
        tracing::debug!(
            sections = sections.len(),
            links = links.len(),
            "Scroll spy attached"
        );
        Ok(Some(Self {
            sections,
            links,
            header_height,
            throttle: Throttle::new(SCROLL_THROTTLE_MS),
        }))
    }

    pub fn links(&self) -> &[NodeId] {
        &self.links
    }

    /// Throttled scroll handler. Returns whether the update ran.
    pub fn on_scroll(&mut self, doc: &mut Document, now: Millis) -> Result<bool> {
        if !self.throttle.call(now) {
            return Ok(false);
        }
        self.update(doc)?;
        Ok(true)
    }

    /// Mark the link of the section containing the probe position.
    ///
    /// Leaves the links untouched when no section contains it.
    pub fn update(&self, doc: &mut Document) -> Result<Option<NodeId>> {
        let probe = doc.scroll_y() + self.header_height + SCROLL_SPY_OFFSET;
        let current = self.sections.iter().copied().find(|section| {
            let layout = doc.layout(*section);
            probe >= layout.top && probe < layout.top + layout.height
        });
        let Some(section) = current else {
            return Ok(None);
        };

        let href = format!("#{}", doc.attr(section, "id").unwrap_or_default());
        for link in &self.links {
            if doc.attr(*link, "href") == Some(href.as_str()) {
                doc.add_class(*link, "active")?;
            } else {
                doc.remove_class(*link, "active")?;
            }
        }
        Ok(Some(section))
    }
}
