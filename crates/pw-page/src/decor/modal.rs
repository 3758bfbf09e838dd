use pw_dom::{Document, ElementSpec, NodeId};
use serde::Serialize;

use crate::error::Result;

/// The only privacy link target that opens the in-page modal.
pub const PRIVACY_MODAL_HREF: &str = "#privacy-modal";

/// Elements of an open modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct OpenModal {
    pub overlay: NodeId,
    pub close_button: NodeId,
}

/// Privacy-policy modal opened from in-page privacy links.
#[derive(Debug, Clone, Default)]
pub struct PrivacyModal {
    links: Vec<NodeId>,
}

impl PrivacyModal {
    pub fn attach(doc: &Document, selector: &str) -> Result<Self> {
        Ok(Self {
            links: doc.query_selector_all(selector)?,
        })
    }

    pub fn links(&self) -> &[NodeId] {
        &self.links
    }

    /// Whether a click on `link` should open the modal instead of navigating.
    pub fn intercepts(doc: &Document, link: NodeId) -> bool {
        doc.attr(link, "href") == Some(PRIVACY_MODAL_HREF)
    }

    /// Build the overlay and lock page scrolling.
    pub fn open(doc: &mut Document) -> Result<OpenModal> {
        let body = doc.body();
        let overlay = doc.append(
            body,
            ElementSpec::new("div")
                .class("privacy-modal-overlay")
                .attr("role", "dialog")
                .attr("aria-modal", "true")
                .style("position", "fixed")
                .style("inset", "0")
                .style("background", "rgba(0, 0, 0, 0.6)")
                .style("backdrop-filter", "blur(5px)")
                .style("z-index", "1020")
                .style("display", "flex")
                .style("align-items", "center")
                .style("justify-content", "center"),
        )?;
        let modal = doc.append(
            overlay,
            ElementSpec::new("div")
                .class("privacy-modal")
                .style("max-width", "600px")
                .style("max-height", "80vh")
                .style("overflow-y", "auto"),
        )?;
        doc.append(modal, ElementSpec::new("h2").text("Datenschutzerklärung"))?;
        doc.append(
            modal,
            ElementSpec::new("p").text(
                "Bitte lesen Sie unsere vollständige Datenschutzerklärung auf der entsprechenden Seite.",
            ),
        )?;
        let close_button = doc.append(
            modal,
            ElementSpec::new("button")
                .attr("type", "button")
                .text("Schließen"),
        )?;
        doc.set_style(body, "overflow", "hidden")?;
        tracing::debug!(%overlay, "Privacy modal opened");

        Ok(OpenModal {
            overlay,
            close_button,
        })
    }

    /// Remove the overlay and unlock scrolling. Returns `false` when it was
    /// already closed.
    pub fn close(doc: &mut Document, overlay: NodeId) -> Result<bool> {
        if !doc.is_connected(overlay) {
            return Ok(false);
        }
        doc.remove(overlay)?;
        let body = doc.body();
        doc.set_style(body, "overflow", "")?;
        tracing::debug!(%overlay, "Privacy modal closed");
        Ok(true)
    }
}
