//! Controller registry with an idempotent start.

use pw_dom::Document;
use pw_nav::{MenuController, ScrollSpy, SmoothScroll};

use crate::config::PageConfig;
use crate::decor::{
    CountUp, EntranceAnimator, HoverStyle, PrivacyModal, ScrollTop, apply_lazy_loading,
};
use crate::error::Result;
use crate::event::{EventKind, Target};
use crate::forms::FormController;
use crate::listeners::{Handler, ListenerStore};

/// Every controller attached to the page. `None` means disabled because
/// its elements are missing or it failed to attach.
#[derive(Debug, Clone, Default)]
pub struct Controllers {
    pub menu: Option<MenuController>,
    pub scroll_spy: Option<ScrollSpy>,
    pub smooth_scroll: Option<SmoothScroll>,
    pub forms: Option<FormController>,
    pub animator: Option<EntranceAnimator>,
    pub scroll_top: Option<ScrollTop>,
    pub count_up: Option<CountUp>,
    pub modal: Option<PrivacyModal>,
}

/// Owns the controllers and guards their one-time start.
#[derive(Debug, Clone, Default)]
pub struct ControllerRegistry {
    started: bool,
    controllers: Controllers,
}

impl ControllerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn controllers(&self) -> &Controllers {
        &self.controllers
    }

    pub fn controllers_mut(&mut self) -> &mut Controllers {
        &mut self.controllers
    }

    /// Attach every controller and register its listeners.
    ///
    /// Controllers attach independently. One that fails is logged and
    /// left disabled; the rest still start. Returns `false` without
    /// touching anything when already started.
    pub fn start(
        &mut self,
        doc: &mut Document,
        listeners: &mut ListenerStore,
        config: &PageConfig,
    ) -> Result<bool> {
        if self.started {
            tracing::debug!("Controllers already started");
            return Ok(false);
        }
        self.started = true;

        let c = &mut self.controllers;
        let mut failed = 0usize;
        let mut check = |feature: &'static str, outcome: Result<()>| {
            if let Err(error) = outcome {
                failed += 1;
                tracing::warn!(feature, %error, "Controller disabled");
            }
        };

        check("menu", attach_menu(c, doc, listeners, config));
        check("scroll_spy", attach_scroll_spy(c, doc, listeners, config));
        check("smooth_scroll", attach_smooth_scroll(c, doc, listeners, config));
        check("forms", attach_forms(c, doc, listeners, config));
        check("animation", attach_animator(c, doc, listeners, config));
        check("hover", attach_hover(doc, listeners, config));
        check("lazy_loading", apply_lazy_loading(doc, config).map(|_| ()));
        check("scroll_top", attach_scroll_top(c, doc, listeners));
        check("count_up", attach_count_up(c, doc, listeners, config));
        check("privacy_modal", attach_modal(c, doc, listeners, config));
        check("ripple", attach_ripple(doc, listeners, config));

        tracing::info!(
            menu = c.menu.is_some(),
            scroll_spy = c.scroll_spy.is_some(),
            forms = c.forms.as_ref().map_or(0, FormController::len),
            failed,
            listeners = listeners.count(),
            "Page controllers started"
        );
        Ok(true)
    }
}

// Each attach step finishes its fallible document work before it
// registers a listener, so a failed step leaves nothing wired.

fn attach_menu(
    c: &mut Controllers,
    doc: &mut Document,
    listeners: &mut ListenerStore,
    config: &PageConfig,
) -> Result<()> {
    let Some(menu) = MenuController::attach(doc, &config.nav_selectors())? else {
        return Ok(());
    };
    listeners.add(Target::Node(menu.toggle()), EventKind::Click, Handler::MenuToggle);
    listeners.add(Target::Document, EventKind::Click, Handler::MenuDocumentClick);
    listeners.add(Target::Document, EventKind::KeyDown, Handler::MenuKeyDown);
    listeners.add(Target::Window, EventKind::Resize, Handler::MenuResize);
    for link in menu.nav_links() {
        listeners.add(Target::Node(*link), EventKind::Click, Handler::MenuNavLink);
    }
    c.menu = Some(menu);
    Ok(())
}

fn attach_scroll_spy(
    c: &mut Controllers,
    doc: &mut Document,
    listeners: &mut ListenerStore,
    config: &PageConfig,
) -> Result<()> {
    let Some(spy) = ScrollSpy::attach(doc, &config.nav_selectors())? else {
        return Ok(());
    };
    spy.update(doc)?;
    listeners.add(Target::Window, EventKind::Scroll, Handler::ScrollSpy);
    c.scroll_spy = Some(spy);
    Ok(())
}

fn attach_smooth_scroll(
    c: &mut Controllers,
    doc: &mut Document,
    listeners: &mut ListenerStore,
    config: &PageConfig,
) -> Result<()> {
    let smooth_scroll = SmoothScroll::attach(doc, &config.nav_selectors())?;
    listeners.add(Target::Document, EventKind::Click, Handler::SmoothScroll);
    c.smooth_scroll = Some(smooth_scroll);
    Ok(())
}

fn attach_forms(
    c: &mut Controllers,
    doc: &mut Document,
    listeners: &mut ListenerStore,
    config: &PageConfig,
) -> Result<()> {
    let Some(forms) = FormController::attach(doc, config)? else {
        return Ok(());
    };
    for index in 0..forms.len() {
        if let Some(form) = forms.form(index) {
            listeners.add(
                Target::Node(form),
                EventKind::Submit,
                Handler::FormSubmit { form: index },
            );
        }
        for field in forms.fields(index) {
            let target = Target::Node(*field);
            listeners.add(target, EventKind::Blur, Handler::FieldBlur { form: index });
            listeners.add(target, EventKind::Input, Handler::FieldInput { form: index });
        }
    }
    c.forms = Some(forms);
    Ok(())
}

fn attach_animator(
    c: &mut Controllers,
    doc: &mut Document,
    listeners: &mut ListenerStore,
    config: &PageConfig,
) -> Result<()> {
    let Some(animator) = EntranceAnimator::attach(doc, &config.animated)? else {
        return Ok(());
    };
    for element in animator.observed() {
        listeners.add(Target::Node(element), EventKind::Intersect, Handler::Reveal);
    }
    c.animator = Some(animator);
    Ok(())
}

fn attach_hover(
    doc: &Document,
    listeners: &mut ListenerStore,
    config: &PageConfig,
) -> Result<()> {
    let mut targets = Vec::new();
    for (selector, style) in [
        (&config.buttons, HoverStyle::Button),
        (&config.cards, HoverStyle::Card),
        (&config.nav_link, HoverStyle::NavLink),
    ] {
        for element in doc.query_selector_all(selector)? {
            targets.push((Target::Node(element), style));
        }
    }
    for (target, style) in targets {
        add_hover(listeners, target, style);
    }
    Ok(())
}

fn attach_scroll_top(
    c: &mut Controllers,
    doc: &mut Document,
    listeners: &mut ListenerStore,
) -> Result<()> {
    let scroll_top = ScrollTop::create(doc)?;
    let button = Target::Node(scroll_top.button());
    listeners.add(Target::Window, EventKind::Scroll, Handler::ScrollTopVisibility);
    listeners.add(button, EventKind::Click, Handler::ScrollTopClick);
    add_hover(listeners, button, HoverStyle::ScrollTop);
    c.scroll_top = Some(scroll_top);
    Ok(())
}

fn attach_count_up(
    c: &mut Controllers,
    doc: &Document,
    listeners: &mut ListenerStore,
    config: &PageConfig,
) -> Result<()> {
    let Some(count_up) = CountUp::attach(doc, &config.counters)? else {
        return Ok(());
    };
    for node in count_up.nodes() {
        listeners.add(Target::Node(node), EventKind::Intersect, Handler::CountUp);
    }
    c.count_up = Some(count_up);
    Ok(())
}

fn attach_modal(
    c: &mut Controllers,
    doc: &Document,
    listeners: &mut ListenerStore,
    config: &PageConfig,
) -> Result<()> {
    let modal = PrivacyModal::attach(doc, &config.privacy_links)?;
    for link in modal.links() {
        listeners.add(Target::Node(*link), EventKind::Click, Handler::PrivacyLink);
    }
    c.modal = Some(modal);
    Ok(())
}

fn attach_ripple(
    doc: &Document,
    listeners: &mut ListenerStore,
    config: &PageConfig,
) -> Result<()> {
    for button in doc.query_selector_all(&config.buttons)? {
        listeners.add(Target::Node(button), EventKind::Click, Handler::Ripple);
    }
    Ok(())
}

fn add_hover(listeners: &mut ListenerStore, target: Target, style: HoverStyle) {
    for kind in style.events() {
        listeners.add(target, *kind, Handler::Hover(style));
    }
}
