//! End-to-end behavior of the demo landing page.

use std::cell::RefCell;
use std::rc::Rc;

use pw_common::timing::{RESIZE_DEBOUNCE_MS, RIPPLE_LIFETIME_MS, SUBMIT_LATENCY_MS};
use pw_dom::{Document, NodeId};
use pw_page::{EventKind, EventScript, Job, Page, PageConfig, Target, demo};
use pw_validate::{
    CONFIRMATION_PAGE, FieldState, FormPayload, Issue, LOADING_MARKUP, TransportError,
};

fn started(page: Page) -> Page {
    let mut page = page;
    assert!(page.start().unwrap());
    page
}

fn landing() -> Page {
    started(Page::new(demo::landing_page().unwrap()))
}

fn node(page: &Page, selector: &str) -> NodeId {
    page.document()
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element for {selector}"))
}

fn is_open(page: &Page) -> bool {
    page.menu_state().unwrap().is_open
}

fn fill_valid_form(page: &mut Page) {
    for (selector, text) in [
        ("#name", "Anna-Marie O'Brien"),
        ("#email", "anna@example.de"),
        ("#phone", "+49 30 1234567"),
        ("#message", "Bitte rufen Sie mich zurück."),
    ] {
        let field = node(page, selector);
        page.type_text(field, text).unwrap();
    }
    let privacy = node(page, "#privacy");
    page.click(privacy).unwrap();
}

fn submission_timers(page: &Page) -> usize {
    page.timers()
        .iter()
        .filter(|timer| matches!(timer.job, Job::SubmissionComplete { .. }))
        .count()
}

// =============================================================================
// Bootstrap
// =============================================================================

#[test]
fn start_is_idempotent() {
    let mut page = landing();
    let listeners = page.listeners().count();
    let toggle = node(&page, ".navbar-toggler");
    assert_eq!(page.listeners().count_for(Target::Node(toggle), EventKind::Click), 1);

    assert!(!page.start().unwrap());
    assert_eq!(page.listeners().count(), listeners);
    assert_eq!(page.document().query_selector_all(".scroll-to-top").unwrap().len(), 1);

    // one toggle per activation, not two
    page.click(toggle).unwrap();
    assert!(is_open(&page));
}

#[test]
fn missing_elements_disable_controllers() {
    let mut page = Page::new(Document::new());
    assert!(page.start().unwrap());
    assert!(page.menu_state().is_none());
    assert!(page.forms().is_none());
    assert!(page.controllers().scroll_spy.is_none());
    assert!(page.controllers().scroll_top.is_some());
}

#[test]
fn bad_selector_disables_only_its_controller() {
    let config = PageConfig {
        counters: "[data-count".to_string(),
        ..PageConfig::default()
    };
    let mut page = Page::with_config(demo::landing_page().unwrap(), config);
    assert!(page.start().unwrap());

    assert!(page.controllers().count_up.is_none());
    assert!(page.menu_state().is_some());
    assert!(page.forms().is_some());
    assert!(page.controllers().modal.is_some());
    let button = node(&page, ".btn");
    assert_eq!(page.listeners().count_for(Target::Node(button), EventKind::Click), 1);

    assert!(!page.start().unwrap());
    let toggle = node(&page, ".navbar-toggler");
    page.click(toggle).unwrap();
    assert!(is_open(&page));
}

// =============================================================================
// Menu
// =============================================================================

#[test]
fn toggle_opens_and_closes() {
    let mut page = landing();
    let toggle = node(&page, ".navbar-toggler");
    let panel = node(&page, "#navbarNav");

    let outcome = page.click(toggle).unwrap();
    assert!(outcome.default_prevented);
    assert!(outcome.propagation_stopped);
    assert!(is_open(&page));
    assert!(page.document().has_class(panel, "show"));
    assert_eq!(page.document().attr(toggle, "aria-expanded"), Some("true"));
    assert_eq!(
        page.document().style(panel, "height"),
        Some("calc(100vh - 72px)")
    );

    page.click(toggle).unwrap();
    assert!(!is_open(&page));
    assert_eq!(page.document().attr(toggle, "aria-expanded"), Some("false"));
}

#[test]
fn outside_click_closes_header_click_does_not() {
    let mut page = landing();
    let toggle = node(&page, ".navbar-toggler");
    page.click(toggle).unwrap();

    let logo = node(&page, ".c-logo__img");
    page.click(logo).unwrap();
    assert!(is_open(&page));

    let heading = node(&page, "h1");
    page.click(heading).unwrap();
    assert!(!is_open(&page));
    assert_eq!(page.document().style(page.document().body(), "overflow"), None);
}

#[test]
fn escape_closes_and_returns_focus() {
    let mut page = landing();
    let toggle = node(&page, ".navbar-toggler");
    page.click(toggle).unwrap();

    page.key_down("Tab").unwrap();
    assert!(is_open(&page));

    page.key_down("Escape").unwrap();
    assert!(!is_open(&page));
    assert_eq!(page.document().focused(), Some(toggle));
}

#[test]
fn nav_link_closes_menu_and_scrolls() {
    let mut page = landing();
    let toggle = node(&page, ".navbar-toggler");
    page.click(toggle).unwrap();

    let link = node(&page, r##".nav-link[href="#section-contact"]"##);
    let outcome = page.click(link).unwrap();
    assert!(outcome.default_prevented);
    assert!(!is_open(&page));
    assert_eq!(page.document().scroll_y(), 1672.0 - demo::HEADER_HEIGHT);
    assert_eq!(page.document().location(), "index.html");
}

#[test]
fn resize_to_wide_layout_closes_after_debounce() {
    let mut page = landing();
    let toggle = node(&page, ".navbar-toggler");
    page.click(toggle).unwrap();

    page.resize(1200).unwrap();
    page.advance(RESIZE_DEBOUNCE_MS - 1);
    assert!(is_open(&page));
    page.advance(1);
    assert!(!is_open(&page));
}

#[test]
fn resize_to_narrow_layout_stays_open() {
    let mut page = landing();
    let toggle = node(&page, ".navbar-toggler");
    page.click(toggle).unwrap();

    page.resize(800).unwrap();
    page.advance(RESIZE_DEBOUNCE_MS);
    assert!(is_open(&page));
}

#[test]
fn resize_burst_uses_last_width() {
    let mut page = landing();
    let toggle = node(&page, ".navbar-toggler");
    page.click(toggle).unwrap();

    page.resize(1200).unwrap();
    page.advance(100);
    page.resize(800).unwrap();
    page.advance(RESIZE_DEBOUNCE_MS * 2);
    assert!(is_open(&page));
}

// =============================================================================
// Forms
// =============================================================================

#[test]
fn blur_shows_error_and_input_clears_it() {
    let mut page = landing();
    let email = node(&page, "#email");
    page.type_text(email, "anna@").unwrap();
    page.blur(email).unwrap();

    let forms = page.forms().unwrap();
    assert_eq!(
        forms.field_state(0, email),
        FieldState::Invalid(Issue::InvalidEmail)
    );
    assert!(page.document().has_class(email, "is-invalid"));
    let feedback = page
        .document()
        .query_within(page.document().parent(email).unwrap(), ".invalid-feedback")
        .unwrap()
        .unwrap();
    assert_eq!(page.document().text(feedback), Issue::InvalidEmail.message());

    page.type_text(email, "anna@example").unwrap();
    assert!(!page.document().has_class(email, "is-invalid"));
    assert_eq!(page.document().text(feedback), "");
    assert_eq!(page.forms().unwrap().field_state(0, email), FieldState::Pristine);

    // the feedback element is reused
    page.blur(email).unwrap();
    let group = page.document().parent(email).unwrap();
    assert_eq!(
        page.document()
            .query_all_within(group, ".invalid-feedback")
            .unwrap()
            .len(),
        1
    );
}

#[test]
fn submit_with_invalid_field_is_aborted() {
    let mut page = landing();
    fill_valid_form(&mut page);
    let email = node(&page, "#email");
    page.type_text(email, "anna@").unwrap();

    let button = node(&page, r#"button[type="submit"]"#);
    page.click(button).unwrap();

    assert_eq!(submission_timers(&page), 0);
    let doc = page.document();
    assert!(!doc.element(button).unwrap().disabled());
    assert_eq!(doc.text(button), "Nachricht senden");
    assert_eq!(doc.query_selector_all(".is-invalid").unwrap(), vec![email]);

    page.advance(SUBMIT_LATENCY_MS * 2);
    assert_eq!(page.document().location(), "index.html");
}

#[test]
fn empty_form_marks_every_required_field() {
    let mut page = landing();
    let form = node(&page, "form");
    page.submit(form).unwrap();

    let invalid: Vec<String> = page
        .snapshot()
        .fields
        .into_iter()
        .filter(|field| matches!(field.state, FieldState::Invalid(_)))
        .map(|field| field.field)
        .collect();
    assert_eq!(invalid, vec!["name", "email", "message", "privacy"]);
}

#[test]
fn valid_submit_disables_button_then_redirects() {
    let sent = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&sent);
    let page = Page::new(demo::landing_page().unwrap()).with_transport(
        move |payload: &FormPayload| -> Result<(), TransportError> {
            sink.borrow_mut().push(payload.clone());
            Ok(())
        },
    );
    let mut page = started(page);
    fill_valid_form(&mut page);

    let button = node(&page, r#"button[type="submit"]"#);
    page.click(button).unwrap();
    assert_eq!(submission_timers(&page), 1);
    assert!(page.document().element(button).unwrap().disabled());
    assert_eq!(page.document().text(button), LOADING_MARKUP);

    // disabled controls swallow clicks; direct submits are ignored
    page.click(button).unwrap();
    let form = node(&page, "form");
    page.submit(form).unwrap();
    assert_eq!(submission_timers(&page), 1);

    page.advance(SUBMIT_LATENCY_MS - 1);
    assert_eq!(page.document().location(), "index.html");
    assert!(sent.borrow().is_empty());

    page.advance(1);
    assert_eq!(page.document().location(), CONFIRMATION_PAGE);
    assert!(!page.document().element(button).unwrap().disabled());
    assert_eq!(page.document().text(button), "Nachricht senden");

    let sent = sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].get("email"), Some("anna@example.de"));
    assert_eq!(sent[0].get("privacy"), Some("on"));
    assert_eq!(sent[0].len(), 5);
}

#[test]
fn transport_failure_reenables_without_redirect() {
    let page = Page::new(demo::landing_page().unwrap()).with_transport(
        |_: &FormPayload| -> Result<(), TransportError> {
            Err(TransportError::Unavailable("offline".to_string()))
        },
    );
    let mut page = started(page);
    fill_valid_form(&mut page);

    let button = node(&page, r#"button[type="submit"]"#);
    page.click(button).unwrap();
    page.advance(SUBMIT_LATENCY_MS);

    let doc = page.document();
    assert_eq!(doc.location(), "index.html");
    assert!(!doc.element(button).unwrap().disabled());
    assert_eq!(doc.text(button), "Nachricht senden");
    let notice = node(&page, ".form-feedback");
    assert_eq!(
        page.document().text(notice),
        TransportError::Unavailable(String::new()).user_message()
    );
    assert!(page.document().query_selector(".is-invalid").unwrap().is_none());

    // resubmission is possible and clears the notice
    page.click(button).unwrap();
    assert_eq!(page.document().text(notice), "");
    assert_eq!(submission_timers(&page), 1);
}

// =============================================================================
// Scrolling and decorations
// =============================================================================

#[test]
fn scroll_updates_spy_and_scroll_top() {
    let mut page = landing();
    let hero_link = node(&page, r##".nav-link[href="#section-hero"]"##);
    let contact_link = node(&page, r##".nav-link[href="#section-contact"]"##);
    let scroll_top = node(&page, ".scroll-to-top");
    assert!(page.document().has_class(hero_link, "active"));

    page.scroll(400.0).unwrap();
    assert_eq!(page.document().style(scroll_top, "visibility"), Some("visible"));

    // throttled
    page.scroll(1700.0).unwrap();
    assert!(page.document().has_class(hero_link, "active"));

    page.advance(100);
    page.scroll(1700.0).unwrap();
    assert!(page.document().has_class(contact_link, "active"));
    assert!(!page.document().has_class(hero_link, "active"));

    page.click(scroll_top).unwrap();
    assert_eq!(page.document().scroll_y(), 0.0);
}

#[test]
fn count_up_runs_once_to_target() {
    let mut page = landing();
    let counter = node(&page, r#"[data-count="250"]"#);

    page.intersect(counter, 0.3).unwrap();
    page.advance(100);
    assert_eq!(page.document().text(counter), "0");

    page.intersect(counter, 0.8).unwrap();
    page.advance(1000);
    let midway: i64 = page.document().text(counter).parse().unwrap();
    assert!(midway > 0 && midway < 250);

    page.advance(1100);
    assert_eq!(page.document().text(counter), "250");
    assert!(page.timers().is_empty());

    page.intersect(counter, 1.0).unwrap();
    assert!(page.timers().is_empty());
}

#[test]
fn entrance_animation_reveals_once() {
    let mut page = landing();
    let card = node(&page, ".card");
    assert_eq!(page.document().style(card, "opacity"), Some("0"));

    page.intersect(card, 0.05).unwrap();
    assert_eq!(page.document().style(card, "opacity"), Some("0"));

    page.intersect(card, 0.5).unwrap();
    assert_eq!(page.document().style(card, "opacity"), Some("1"));
    assert_eq!(page.document().style(card, "transform"), Some("translateY(0)"));
    assert_eq!(
        page.listeners().count_for(Target::Node(card), EventKind::Intersect),
        0
    );
}

#[test]
fn ripple_is_removed_after_lifetime() {
    let mut page = landing();
    let button = node(&page, ".c-button");
    page.click(button).unwrap();
    assert_eq!(
        page.document().query_all_within(button, ".ripple").unwrap().len(),
        1
    );

    page.advance(RIPPLE_LIFETIME_MS);
    assert!(page.document().query_all_within(button, ".ripple").unwrap().is_empty());
}

#[test]
fn hover_feedback() {
    let mut page = landing();
    let card = node(&page, ".card");
    page.hover(card).unwrap();
    assert_eq!(page.document().style(card, "transform"), Some("translateY(-8px)"));
    page.leave(card).unwrap();
    assert_eq!(page.document().style(card, "transform"), Some("translateY(0)"));
}

#[test]
fn privacy_modal_opens_and_closes() {
    let mut page = landing();
    let listeners = page.listeners().count();
    let link = node(&page, r##"a[href="#privacy-modal"]"##);

    let outcome = page.click(link).unwrap();
    assert!(outcome.default_prevented);
    let overlay = node(&page, ".privacy-modal-overlay");
    let body = page.document().body();
    assert_eq!(page.document().style(body, "overflow"), Some("hidden"));

    // clicks inside the dialog keep it open
    let heading = page.document().query_within(overlay, "h2").unwrap().unwrap();
    page.click(heading).unwrap();
    assert!(page.document().is_connected(overlay));

    let close = page.document().query_within(overlay, "button").unwrap().unwrap();
    page.click(close).unwrap();
    assert!(!page.document().is_connected(overlay));
    assert_eq!(page.document().style(body, "overflow"), None);
    assert_eq!(page.listeners().count(), listeners);

    // the overlay itself closes too
    page.click(link).unwrap();
    let overlay = node(&page, ".privacy-modal-overlay");
    page.click(overlay).unwrap();
    assert!(!page.document().is_connected(overlay));
}

#[test]
fn footer_privacy_link_navigates() {
    let mut page = landing();
    let link = node(&page, r#"a[href="privacy.html"]"#);
    page.click(link).unwrap();
    assert_eq!(page.document().location(), "privacy.html");
}

#[test]
fn lazy_loading_skips_logo() {
    let page = landing();
    let logo = node(&page, ".c-logo__img");
    assert_eq!(page.document().attr(logo, "loading"), None);
    let video = node(&page, "video");
    assert_eq!(page.document().attr(video, "loading"), Some("lazy"));
}

// =============================================================================
// Scripts
// =============================================================================

#[test]
fn script_replay_submits_form() {
    let script = EventScript::from_toml_str(
        r##"
[[step]]
action = "click"
target = ".navbar-toggler"

[[step]]
action = "click"
target = ".nav-link[href='#section-contact']"

[[step]]
action = "type"
target = "#name"
text = "Anna"

[[step]]
action = "type"
target = "#email"
text = "anna@example.de"

[[step]]
action = "type"
target = "#message"
text = "Bitte um Rückruf am Montag."

[[step]]
action = "click"
target = "#privacy"

[[step]]
action = "click"
target = "button[type='submit']"

[[step]]
action = "wait"
ms = 1000
"##,
    )
    .unwrap();

    let mut page = landing();
    script.run(&mut page).unwrap();
    let snapshot = page.snapshot();
    assert_eq!(snapshot.menu_open, Some(false));
    assert_eq!(snapshot.location, CONFIRMATION_PAGE);
    assert_eq!(snapshot.now, 1000);

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["submit"][0]["disabled"], false);
}

#[test]
fn script_with_unknown_target_fails() {
    let script = EventScript::from_toml_str(
        r##"
[[step]]
action = "click"
target = "#missing"
"##,
    )
    .unwrap();
    let mut page = landing();
    let err = script.run(&mut page).unwrap_err();
    assert_eq!(err.to_string(), "No element matches '#missing'");
}
