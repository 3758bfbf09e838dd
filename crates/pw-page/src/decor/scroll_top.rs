use pw_common::timing::SCROLL_THROTTLE_MS;
use pw_common::{Millis, Throttle};
use pw_dom::{Document, ElementSpec, NodeId, ScrollBehavior};

use crate::error::Result;

/// Scroll offset past which the control is shown.
pub const SHOW_AFTER_SCROLL_Y: f64 = 300.0;

/// Fixed "back to top" control appended to the body.
#[derive(Debug, Clone)]
pub struct ScrollTop {
    button: NodeId,
    throttle: Throttle,
}

impl ScrollTop {
    pub fn create(doc: &mut Document) -> Result<Self> {
        let body = doc.body();
        let button = doc.append(
            body,
            ElementSpec::new("button")
                .class("scroll-to-top")
                .attr("aria-label", "Zurück nach oben")
                .text("↑")
                .style("position", "fixed")
                .style("bottom", "30px")
                .style("right", "30px")
                .style("width", "50px")
                .style("height", "50px")
                .style("border-radius", "50%")
                .style("opacity", "0")
                .style("visibility", "hidden")
                .style("transition", "all 0.3s ease-in-out")
                .style("z-index", "1000")
                .style("box-shadow", "0 4px 12px rgba(0, 102, 255, 0.3)"),
        )?;
        Ok(Self {
            button,
            throttle: Throttle::new(SCROLL_THROTTLE_MS),
        })
    }

    pub fn button(&self) -> NodeId {
        self.button
    }

    pub fn is_visible(&self, doc: &Document) -> bool {
        doc.style(self.button, "visibility") == Some("visible")
    }

    /// Throttled scroll handler. Returns whether the update ran.
    pub fn on_scroll(&mut self, doc: &mut Document, now: Millis) -> Result<bool> {
        if !self.throttle.call(now) {
            return Ok(false);
        }
        let (opacity, visibility) = if doc.scroll_y() > SHOW_AFTER_SCROLL_Y {
            ("1", "visible")
        } else {
            ("0", "hidden")
        };
        doc.set_style(self.button, "opacity", opacity)?;
        doc.set_style(self.button, "visibility", visibility)?;
        Ok(true)
    }

    pub fn on_click(&self, doc: &mut Document) {
        doc.scroll_to(0.0, ScrollBehavior::Smooth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_follows_scroll() {
        let mut doc = Document::new();
        let mut control = ScrollTop::create(&mut doc).unwrap();
        assert!(!control.is_visible(&doc));

        doc.set_scroll_y(301.0);
        assert!(control.on_scroll(&mut doc, 0).unwrap());
        assert!(control.is_visible(&doc));

        doc.set_scroll_y(300.0);
        assert!(!control.on_scroll(&mut doc, 50).unwrap());
        assert!(control.is_visible(&doc));
        assert!(control.on_scroll(&mut doc, 100).unwrap());
        assert!(!control.is_visible(&doc));

        control.on_click(&mut doc);
        assert_eq!(doc.scroll_y(), 0.0);
    }
}
