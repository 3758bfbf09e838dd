use std::collections::BTreeSet;

use pw_dom::{Document, NodeId};

use crate::error::Result;

/// Minimum visible ratio that counts as an intersection.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Fades elements in the first time they scroll into view.
#[derive(Debug, Clone, Default)]
pub struct EntranceAnimator {
    observed: BTreeSet<NodeId>,
}

impl EntranceAnimator {
    /// Hide every matching element and start observing it.
    pub fn attach(doc: &mut Document, selector: &str) -> Result<Option<Self>> {
        let elements = doc.query_selector_all(selector)?;
        if elements.is_empty() {
            return Ok(None);
        }
        for (index, element) in elements.iter().enumerate() {
            doc.set_style(*element, "opacity", "0")?;
            doc.set_style(*element, "transform", "translateY(30px)")?;
            doc.set_style(
                *element,
                "transition",
                "opacity 0.8s ease-out, transform 0.8s ease-out",
            )?;
            doc.set_style(
                *element,
                "transition-delay",
                &format!("{:.2}s", index as f64 * 0.05),
            )?;
        }
        tracing::debug!(elements = elements.len(), "Entrance animation attached");
        Ok(Some(Self {
            observed: elements.into_iter().collect(),
        }))
    }

    pub fn observed(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.observed.iter().copied()
    }

    /// Reveal `element` on its first intersection. Returns `true` when the
    /// element was revealed and should no longer be observed.
    pub fn on_intersect(&mut self, doc: &mut Document, element: NodeId, ratio: f64) -> Result<bool> {
        if ratio < REVEAL_THRESHOLD || !self.observed.remove(&element) {
            return Ok(false);
        }
        doc.set_style(element, "opacity", "1")?;
        doc.set_style(element, "transform", "translateY(0)")?;
        Ok(true)
    }
}
