use pw_dom::{Document, ElementSpec, NodeId};

use crate::error::Result;

/// Append a ripple centred on the click at viewport coordinates `(x, y)`.
pub fn spawn_ripple(doc: &mut Document, button: NodeId, x: f64, y: f64) -> Result<NodeId> {
    let layout = doc.layout(button);
    let size = layout.width.max(layout.height);
    let left = x - layout.left - size / 2.0;
    let top = y - (layout.top - doc.scroll_y()) - size / 2.0;

    doc.set_style(button, "position", "relative")?;
    doc.set_style(button, "overflow", "hidden")?;
    let ripple = doc.append(
        button,
        ElementSpec::new("span")
            .class("ripple")
            .style("position", "absolute")
            .style("width", &format!("{size}px"))
            .style("height", &format!("{size}px"))
            .style("border-radius", "50%")
            .style("background", "rgba(255, 255, 255, 0.6)")
            .style("left", &format!("{left}px"))
            .style("top", &format!("{top}px"))
            .style("transform", "scale(0)")
            .style("animation", "ripple 0.6s ease-out")
            .style("pointer-events", "none"),
    )?;
    Ok(ripple)
}

/// Remove a ripple if it is still attached.
pub fn expire_ripple(doc: &mut Document, ripple: NodeId) -> Result<()> {
    if doc.is_connected(ripple) {
        doc.remove(ripple)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ripple_geometry() {
        let mut doc = Document::new();
        let button = doc
            .append(
                doc.body(),
                ElementSpec::new("button")
                    .class("btn")
                    .at(100.0, 40.0)
                    .size(120.0, 40.0),
            )
            .unwrap();
        doc.set_scroll_y(50.0);

        // button spans viewport y 50..90
        let ripple = spawn_ripple(&mut doc, button, 60.0, 70.0).unwrap();
        assert_eq!(doc.style(ripple, "width"), Some("120px"));
        assert_eq!(doc.style(ripple, "left"), Some("0px"));
        assert_eq!(doc.style(ripple, "top"), Some("-40px"));
        assert_eq!(doc.style(button, "overflow"), Some("hidden"));

        expire_ripple(&mut doc, ripple).unwrap();
        assert!(!doc.is_connected(ripple));
        expire_ripple(&mut doc, ripple).unwrap();
    }
}
