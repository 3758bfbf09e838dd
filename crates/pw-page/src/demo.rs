//! A small landing page with every element the controllers look for.

use pw_dom::{Document, ElementSpec, Layout, NodeId};

use crate::error::Result;

pub const HEADER_HEIGHT: f64 = 72.0;

/// Build the demo landing page.
///
/// Layout: fixed 72 px navbar, then hero (700 px), services (900 px) and
/// contact (1100 px) sections, then a footer.
pub fn landing_page() -> Result<Document> {
    let mut doc = Document::new();
    let body = doc.body();

    let header = doc.append(
        body,
        ElementSpec::new("nav")
            .class("navbar navbar-expand-lg fixed-top")
            .at(0.0, HEADER_HEIGHT)
            .size(390.0, HEADER_HEIGHT),
    )?;
    let logo = doc.append(header, ElementSpec::new("a").class("c-logo").attr("href", "index.html"))?;
    doc.append(
        logo,
        ElementSpec::new("img")
            .class("c-logo__img")
            .attr("src", "logo.svg")
            .attr("alt", "Logo"),
    )?;
    doc.append(
        header,
        ElementSpec::new("button")
            .class("navbar-toggler")
            .attr("type", "button")
            .attr("aria-controls", "navbarNav")
            .attr("aria-label", "Navigation umschalten")
            .size(44.0, 44.0),
    )?;
    let panel = doc.append(header, ElementSpec::new("div").id("navbarNav").class("collapse navbar-collapse"))?;
    let list = doc.append(panel, ElementSpec::new("ul").class("navbar-nav"))?;
    for (href, label) in [
        ("#section-hero", "Start"),
        ("#section-services", "Leistungen"),
        ("#section-contact", "Kontakt"),
    ] {
        let item = doc.append(list, ElementSpec::new("li").class("nav-item"))?;
        doc.append(
            item,
            ElementSpec::new("a")
                .class("nav-link")
                .attr("href", href)
                .text(label),
        )?;
    }

    let hero = section(&mut doc, "section-hero", HEADER_HEIGHT, 700.0)?;
    doc.append(hero, ElementSpec::new("h1").text("Willkommen"))?;
    doc.append(
        hero,
        ElementSpec::new("a")
            .class("btn btn-primary c-button")
            .attr("href", "#section-contact")
            .text("Jetzt anfragen")
            .at(500.0, 48.0)
            .size(200.0, 48.0),
    )?;
    doc.append(hero, ElementSpec::new("video").attr("src", "intro.mp4"))?;

    let services = section(&mut doc, "section-services", 772.0, 900.0)?;
    for title in ["Beratung", "Planung", "Umsetzung"] {
        let card = doc.append(services, ElementSpec::new("div").class("card"))?;
        doc.append(card, ElementSpec::new("img").attr("src", "service.jpg").attr("alt", title))?;
        doc.append(card, ElementSpec::new("h3").text(title))?;
    }
    let stats = doc.append(services, ElementSpec::new("div").class("c-trust-badge"))?;
    doc.append(stats, ElementSpec::new("span").attr("data-count", "250").text("0"))?;
    doc.append(stats, ElementSpec::new("span").attr("data-count", "98").text("0"))?;

    let contact = section(&mut doc, "section-contact", 1672.0, 1100.0)?;
    contact_form(&mut doc, contact)?;

    let footer = doc.append(body, ElementSpec::new("footer").at(2772.0, 200.0))?;
    doc.append(
        footer,
        ElementSpec::new("a")
            .attr("href", "privacy.html")
            .text("Datenschutz"),
    )?;

    Ok(doc)
}

fn section(doc: &mut Document, id: &str, top: f64, height: f64) -> Result<NodeId> {
    let body = doc.body();
    let node = doc.append(body, ElementSpec::new("section").id(id))?;
    doc.set_layout(
        node,
        Layout {
            top,
            height,
            width: 390.0,
            left: 0.0,
        },
    )?;
    Ok(node)
}

fn contact_form(doc: &mut Document, parent: NodeId) -> Result<NodeId> {
    let form = doc.append(
        parent,
        ElementSpec::new("form")
            .id("contact-form")
            .attr("novalidate", ""),
    )?;

    let text_fields = [
        ("name", "text", true),
        ("email", "email", true),
        ("phone", "tel", false),
    ];
    for (id, kind, required) in text_fields {
        let group = doc.append(form, ElementSpec::new("div").class("mb-3"))?;
        let mut spec = ElementSpec::new("input")
            .id(id)
            .class("form-control")
            .attr("type", kind)
            .attr("name", id);
        if required {
            spec = spec.attr("required", "");
        }
        doc.append(group, spec)?;
    }

    let group = doc.append(form, ElementSpec::new("div").class("mb-3"))?;
    doc.append(
        group,
        ElementSpec::new("textarea")
            .id("message")
            .class("form-control")
            .attr("name", "message")
            .attr("required", ""),
    )?;

    let group = doc.append(form, ElementSpec::new("div").class("form-check mb-3"))?;
    doc.append(
        group,
        ElementSpec::new("input")
            .id("privacy")
            .class("form-check-input")
            .attr("type", "checkbox")
            .attr("name", "privacy")
            .attr("required", ""),
    )?;
    let label = doc.append(
        group,
        ElementSpec::new("label")
            .class("form-check-label")
            .attr("for", "privacy")
            .text("Ich akzeptiere die "),
    )?;
    doc.append(
        label,
        ElementSpec::new("a")
            .attr("href", "#privacy-modal")
            .text("Datenschutzerklärung"),
    )?;

    doc.append(
        form,
        ElementSpec::new("button")
            .class("btn btn-primary")
            .attr("type", "submit")
            .text("Nachricht senden")
            .size(200.0, 48.0),
    )?;
    Ok(form)
}
