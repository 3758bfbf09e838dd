use pw_dom::{Document, NodeId};
use serde::Serialize;

use crate::error::Result;
use crate::event::EventKind;

/// Hover styling families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HoverStyle {
    Button,
    Card,
    NavLink,
    ScrollTop,
}

impl HoverStyle {
    /// Events each family listens to.
    pub fn events(&self) -> &'static [EventKind] {
        match self {
            Self::Button => &[
                EventKind::MouseEnter,
                EventKind::MouseLeave,
                EventKind::MouseDown,
                EventKind::MouseUp,
            ],
            Self::Card | Self::NavLink | Self::ScrollTop => {
                &[EventKind::MouseEnter, EventKind::MouseLeave]
            }
        }
    }

    /// `(transform, box-shadow)` for an event; `None` leaves a property alone.
    fn styles(&self, kind: EventKind) -> Option<(&'static str, Option<&'static str>)> {
        let styles = match (self, kind) {
            (Self::Button, EventKind::MouseEnter) => ("translateY(-2px)", None),
            (Self::Button, EventKind::MouseLeave) => ("translateY(0)", None),
            (Self::Button, EventKind::MouseDown) => ("translateY(0) scale(0.98)", None),
            (Self::Button, EventKind::MouseUp) => ("translateY(-2px) scale(1)", None),
            (Self::Card, EventKind::MouseEnter) => {
                ("translateY(-8px)", Some("0 16px 48px rgba(0, 0, 0, 0.2)"))
            }
            (Self::Card, EventKind::MouseLeave) => ("translateY(0)", Some("")),
            (Self::NavLink, EventKind::MouseEnter) => ("translateX(4px)", None),
            (Self::NavLink, EventKind::MouseLeave) => ("translateX(0)", None),
            (Self::ScrollTop, EventKind::MouseEnter) => (
                "translateY(-5px) scale(1.1)",
                Some("0 8px 20px rgba(0, 102, 255, 0.4)"),
            ),
            (Self::ScrollTop, EventKind::MouseLeave) => (
                "translateY(0) scale(1)",
                Some("0 4px 12px rgba(0, 102, 255, 0.3)"),
            ),
            _ => return None,
        };
        Some(styles)
    }
}

/// Apply the hover feedback for `kind` to `element`.
pub fn apply_hover(
    doc: &mut Document,
    element: NodeId,
    style: HoverStyle,
    kind: EventKind,
) -> Result<()> {
    let Some((transform, shadow)) = style.styles(kind) else {
        return Ok(());
    };
    doc.set_style(element, "transform", transform)?;
    if let Some(shadow) = shadow {
        doc.set_style(element, "box-shadow", shadow)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pw_dom::ElementSpec;

    #[test]
    fn test_card_lift_and_settle() {
        let mut doc = Document::new();
        let card = doc
            .append(doc.body(), ElementSpec::new("div").class("card"))
            .unwrap();

        apply_hover(&mut doc, card, HoverStyle::Card, EventKind::MouseEnter).unwrap();
        assert_eq!(doc.style(card, "transform"), Some("translateY(-8px)"));
        assert!(doc.style(card, "box-shadow").is_some());

        apply_hover(&mut doc, card, HoverStyle::Card, EventKind::MouseLeave).unwrap();
        assert_eq!(doc.style(card, "transform"), Some("translateY(0)"));
        assert_eq!(doc.style(card, "box-shadow"), None);
    }

    #[test]
    fn test_button_press() {
        let mut doc = Document::new();
        let button = doc
            .append(doc.body(), ElementSpec::new("button").class("btn"))
            .unwrap();
        apply_hover(&mut doc, button, HoverStyle::Button, EventKind::MouseDown).unwrap();
        assert_eq!(
            doc.style(button, "transform"),
            Some("translateY(0) scale(0.98)")
        );
        // unrelated events leave styles untouched
        apply_hover(&mut doc, button, HoverStyle::Button, EventKind::Click).unwrap();
        assert_eq!(
            doc.style(button, "transform"),
            Some("translateY(0) scale(0.98)")
        );
    }
}
