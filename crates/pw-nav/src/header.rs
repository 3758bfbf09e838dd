use pw_dom::{Document, Result};

/// Header height used when the page has no measurable header.
pub const FALLBACK_HEADER_HEIGHT: f64 = 72.0;

/// Rendered height of the header, or [`FALLBACK_HEADER_HEIGHT`] when the
/// header is missing or has no height.
pub fn header_height(doc: &Document, selector: &str) -> Result<f64> {
    let height = doc
        .query_selector(selector)?
        .map(|header| doc.layout(header).height)
        .filter(|height| *height > 0.0)
        .unwrap_or(FALLBACK_HEADER_HEIGHT);
    Ok(height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pw_dom::ElementSpec;

    #[test]
    fn test_header_height_fallback() {
        let mut doc = Document::new();
        assert_eq!(header_height(&doc, ".navbar").unwrap(), 72.0);

        let header = doc
            .append(doc.body(), ElementSpec::new("nav").class("navbar"))
            .unwrap();
        assert_eq!(header_height(&doc, ".navbar").unwrap(), 72.0);

        let mut layout = doc.layout(header);
        layout.height = 80.0;
        doc.set_layout(header, layout).unwrap();
        assert_eq!(header_height(&doc, ".navbar").unwrap(), 80.0);
    }
}
