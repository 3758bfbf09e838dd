//! Smooth scrolling for in-page anchors.

use pw_dom::{Document, NodeId, Result, ScrollBehavior};

use crate::header::header_height;
use crate::selectors::NavSelectors;

/// Turns clicks on `#fragment` links into smooth scrolls that keep the
/// target clear of the fixed header.
#[derive(Debug, Clone)]
pub struct SmoothScroll {
    anchors: String,
    header_height: f64,
}

impl SmoothScroll {
    pub fn attach(doc: &Document, selectors: &NavSelectors) -> Result<Self> {
        Ok(Self {
            anchors: selectors.anchors.clone(),
            header_height: header_height(doc, &selectors.header)?,
        })
    }

    /// Handle a click on `target`. Returns `true` when the click was turned
    /// into a scroll and its default action must be prevented.
    pub fn on_click(&self, doc: &mut Document, target: NodeId) -> Result<bool> {
        let Some(anchor) = doc.closest(target, &self.anchors)? else {
            return Ok(false);
        };
        let href = doc.attr(anchor, "href").unwrap_or_default();
        if href == "#" || href == "#!" {
            return Ok(false);
        }
        let Some(destination) = href
            .strip_prefix('#')
            .and_then(|id| doc.get_element_by_id(id))
        else {
            return Ok(false);
        };

        let top = (doc.layout(destination).top - self.header_height).max(0.0);
        tracing::debug!(href, top, "Smooth scroll");
        doc.scroll_to(top, ScrollBehavior::Smooth);
        Ok(true)
    }
}
