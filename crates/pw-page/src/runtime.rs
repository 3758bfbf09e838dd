//! The page: document, listeners, timers and controllers on one virtual clock.

use pw_common::Millis;
use pw_common::timing::{COUNT_UP_FRAME_MS, RIPPLE_LIFETIME_MS};
use pw_dom::{Document, DomError, NodeId, Viewport};
use pw_nav::{MenuInput, MenuState};
use pw_validate::{SimulatedTransport, Transport};
use serde::Serialize;

use crate::config::PageConfig;
use crate::decor::{OpenModal, PrivacyModal, apply_hover, expire_ripple, spawn_ripple};
use crate::error::Result;
use crate::event::{DispatchOutcome, EventKind, EventState, PageEvent, Target};
use crate::forms::{FieldView, FormController, SubmitView};
use crate::listeners::{Handler, ListenerStore};
use crate::registry::{ControllerRegistry, Controllers};
use crate::timers::{Job, TimerQueue};

/// Observable state of a page, for reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageSnapshot {
    pub now: Millis,
    pub location: String,
    pub scroll_y: f64,
    /// `None` when the menu controller is disabled.
    pub menu_open: Option<bool>,
    /// `href`s of links marked active by the scroll spy.
    pub active_links: Vec<String>,
    pub fields: Vec<FieldView>,
    pub submit: Vec<SubmitView>,
    pub pending_timers: usize,
    pub listeners: usize,
}

/// A page session.
///
/// All work happens synchronously inside [`Page::dispatch`] and
/// [`Page::advance`]; time only moves when `advance` is called.
pub struct Page {
    doc: Document,
    config: PageConfig,
    listeners: ListenerStore,
    timers: TimerQueue,
    registry: ControllerRegistry,
    transport: Box<dyn Transport>,
    now: Millis,
}

impl Page {
    /// A page with the default selectors and the simulated transport.
    pub fn new(doc: Document) -> Self {
        Self::with_config(doc, PageConfig::default())
    }

    pub fn with_config(doc: Document, config: PageConfig) -> Self {
        Self {
            doc,
            config,
            listeners: ListenerStore::new(),
            timers: TimerQueue::new(),
            registry: ControllerRegistry::new(),
            transport: Box::new(SimulatedTransport),
            now: 0,
        }
    }

    /// Replace the submission transport.
    #[must_use]
    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Box::new(transport);
        self
    }

    /// Attach all controllers once. Later calls are no-ops returning `false`.
    pub fn start(&mut self) -> Result<bool> {
        self.registry
            .start(&mut self.doc, &mut self.listeners, &self.config)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn listeners(&self) -> &ListenerStore {
        &self.listeners
    }

    pub fn timers(&self) -> &TimerQueue {
        &self.timers
    }

    pub fn controllers(&self) -> &Controllers {
        self.registry.controllers()
    }

    pub fn is_started(&self) -> bool {
        self.registry.is_started()
    }

    /// Current virtual time.
    pub fn now(&self) -> Millis {
        self.now
    }

    pub fn menu_state(&self) -> Option<MenuState> {
        self.controllers().menu.as_ref().map(|menu| menu.state())
    }

    pub fn forms(&self) -> Option<&FormController> {
        self.controllers().forms.as_ref()
    }

    pub fn snapshot(&self) -> PageSnapshot {
        let active_links = self
            .doc
            .query_selector_all(&self.config.nav_link)
            .unwrap_or_default()
            .into_iter()
            .filter(|link| self.doc.has_class(*link, "active"))
            .filter_map(|link| self.doc.attr(link, "href").map(str::to_string))
            .collect();
        let (fields, submit) = match self.forms() {
            Some(forms) => (forms.field_views(&self.doc), forms.submit_views(&self.doc)),
            None => (Vec::new(), Vec::new()),
        };
        PageSnapshot {
            now: self.now,
            location: self.doc.location().to_string(),
            scroll_y: self.doc.scroll_y(),
            menu_open: self.menu_state().map(|state| state.is_open),
            active_links,
            fields,
            submit,
            pending_timers: self.timers.len(),
            listeners: self.listeners.count(),
        }
    }

    // =========================================================================
    // Input helpers
    // =========================================================================

    /// Click the centre of an element.
    pub fn click(&mut self, node: NodeId) -> Result<DispatchOutcome> {
        let layout = self.doc.layout(node);
        let event = PageEvent::Click {
            x: layout.left + layout.width / 2.0,
            y: layout.top - self.doc.scroll_y() + layout.height / 2.0,
        };
        self.dispatch(Target::Node(node), event)
    }

    /// Replace a control's value and fire `input`.
    pub fn type_text(&mut self, node: NodeId, text: &str) -> Result<DispatchOutcome> {
        self.doc.focus(node)?;
        self.doc.set_value(node, text)?;
        self.dispatch(Target::Node(node), PageEvent::Input)
    }

    pub fn blur(&mut self, node: NodeId) -> Result<DispatchOutcome> {
        self.dispatch(Target::Node(node), PageEvent::Blur)
    }

    pub fn submit(&mut self, form: NodeId) -> Result<DispatchOutcome> {
        self.dispatch(Target::Node(form), PageEvent::Submit)
    }

    /// Press a key on the focused element (or the body).
    pub fn key_down(&mut self, key: &str) -> Result<DispatchOutcome> {
        let target = self.doc.focused().unwrap_or_else(|| self.doc.body());
        self.dispatch(
            Target::Node(target),
            PageEvent::KeyDown {
                key: key.to_string(),
            },
        )
    }

    pub fn resize(&mut self, width: u32) -> Result<DispatchOutcome> {
        let height = self.doc.viewport().height;
        self.doc.set_viewport(Viewport { width, height });
        self.dispatch(Target::Window, PageEvent::Resize { width })
    }

    pub fn scroll(&mut self, y: f64) -> Result<DispatchOutcome> {
        self.doc.set_scroll_y(y);
        let y = self.doc.scroll_y();
        self.dispatch(Target::Window, PageEvent::Scroll { y })
    }

    /// Report an intersection-observer entry for `node`.
    pub fn intersect(&mut self, node: NodeId, ratio: f64) -> Result<DispatchOutcome> {
        self.dispatch(Target::Node(node), PageEvent::Intersect { ratio })
    }

    pub fn hover(&mut self, node: NodeId) -> Result<DispatchOutcome> {
        self.dispatch(Target::Node(node), PageEvent::MouseEnter)
    }

    pub fn leave(&mut self, node: NodeId) -> Result<DispatchOutcome> {
        self.dispatch(Target::Node(node), PageEvent::MouseLeave)
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Deliver an event to its target and, for bubbling kinds, every
    /// ancestor, then the document and the window.
    ///
    /// Handler errors are logged and do not stop the dispatch.
    pub fn dispatch(&mut self, target: Target, event: PageEvent) -> Result<DispatchOutcome> {
        let kind = event.kind();
        if let Target::Node(node) = target {
            if !self.doc.is_connected(node) {
                return Err(DomError::Detached(node).into());
            }
            if kind == EventKind::Click && self.doc.element(node)?.disabled() {
                tracing::debug!(%node, "Click on disabled control dropped");
                return Ok(DispatchOutcome::default());
            }
        }

        let toggled = self.pre_activate(target, kind)?;
        let mut state = EventState::new(target);
        let mut outcome = DispatchOutcome::default();

        for current in self.propagation_path(target, kind) {
            for handler in self.listeners.handlers(current, kind) {
                match self.run_handler(handler, current, &event, &mut state) {
                    Ok(()) => outcome.handled += 1,
                    Err(error) => {
                        outcome.failed += 1;
                        tracing::warn!(?handler, %current, event = %kind, %error, "Handler failed");
                    }
                }
            }
            if state.propagation_stopped {
                break;
            }
        }

        if state.default_prevented {
            if let Some(node) = toggled {
                let checked = self.doc.element(node)?.checked();
                self.doc.set_checked(node, !checked)?;
            }
        } else {
            self.default_action(target, kind)?;
        }

        outcome.default_prevented = state.default_prevented;
        outcome.propagation_stopped = state.propagation_stopped;
        Ok(outcome)
    }

    fn propagation_path(&self, target: Target, kind: EventKind) -> Vec<Target> {
        let mut path = Vec::new();
        match target {
            Target::Node(node) if kind.bubbles() => {
                path.extend(self.doc.path(node).into_iter().map(Target::Node));
                path.push(Target::Document);
                path.push(Target::Window);
            }
            Target::Document if kind.bubbles() => {
                path.push(Target::Document);
                path.push(Target::Window);
            }
            other => path.push(other),
        }
        path
    }

    /// Toggle a clicked checkbox before listeners run.
    fn pre_activate(&mut self, target: Target, kind: EventKind) -> Result<Option<NodeId>> {
        let Target::Node(node) = target else {
            return Ok(None);
        };
        if kind != EventKind::Click || !self.doc.matches(node, r#"input[type="checkbox"]"#)? {
            return Ok(None);
        }
        let checked = self.doc.element(node)?.checked();
        self.doc.set_checked(node, !checked)?;
        Ok(Some(node))
    }

    /// Browser default actions for events nobody prevented.
    fn default_action(&mut self, target: Target, kind: EventKind) -> Result<()> {
        let Target::Node(node) = target else {
            return Ok(());
        };
        match kind {
            EventKind::Click => {
                if let Some(button) = self.doc.closest(node, &self.config.submit_button)?
                    && let Some(form) = self.doc.closest(button, "form")?
                {
                    self.submit(form)?;
                } else if let Some(link) = self.doc.closest(node, "a[href]")? {
                    let href = self.doc.attr(link, "href").unwrap_or_default().to_string();
                    if !href.starts_with('#') {
                        self.doc.navigate(&href);
                    }
                }
            }
            EventKind::Submit => {
                let action = self.doc.attr(node, "action").map(str::to_string);
                if let Some(action) = action {
                    self.doc.navigate(&action);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn run_handler(
        &mut self,
        handler: Handler,
        current: Target,
        event: &PageEvent,
        state: &mut EventState,
    ) -> Result<()> {
        let now = self.now;
        let doc = &mut self.doc;
        let controllers = self.registry.controllers_mut();
        let current_node = match current {
            Target::Node(node) => Some(node),
            Target::Window | Target::Document => None,
        };

        match handler {
            Handler::MenuToggle => {
                state.prevent_default();
                state.stop_propagation();
                if let Some(menu) = &mut controllers.menu {
                    menu.handle(doc, MenuInput::ToggleActivated)?;
                }
            }
            Handler::MenuDocumentClick => {
                if let (Some(menu), Some(target)) = (&mut controllers.menu, state.target_node()) {
                    menu.on_document_click(doc, target)?;
                }
            }
            Handler::MenuKeyDown => {
                if let (Some(menu), PageEvent::KeyDown { key }) = (&mut controllers.menu, event) {
                    menu.on_key(doc, key)?;
                }
            }
            Handler::MenuResize => {
                if let (Some(menu), PageEvent::Resize { width }) = (&mut controllers.menu, event) {
                    let due_at = menu.schedule_resize(now, *width);
                    self.timers.schedule(due_at, Job::MenuResize);
                }
            }
            Handler::MenuNavLink => {
                if let Some(menu) = &mut controllers.menu {
                    menu.handle(doc, MenuInput::NavLinkSelected)?;
                }
            }
            Handler::ScrollSpy => {
                if let Some(spy) = &mut controllers.scroll_spy {
                    spy.on_scroll(doc, now)?;
                }
            }
            Handler::SmoothScroll => {
                if let (Some(smooth), Some(target)) =
                    (&controllers.smooth_scroll, state.target_node())
                    && smooth.on_click(doc, target)?
                {
                    state.prevent_default();
                }
            }
            Handler::FieldBlur { form } => {
                if let (Some(forms), Some(field)) = (&mut controllers.forms, current_node) {
                    forms.on_blur(doc, form, field)?;
                }
            }
            Handler::FieldInput { form } => {
                if let (Some(forms), Some(field)) = (&mut controllers.forms, current_node) {
                    forms.on_input(doc, form, field)?;
                }
            }
            Handler::FormSubmit { form } => {
                state.prevent_default();
                state.stop_propagation();
                if let Some(forms) = &mut controllers.forms
                    && let Some(due_at) = forms.on_submit(doc, form, now)?
                {
                    self.timers
                        .schedule(due_at, Job::SubmissionComplete { form });
                }
            }
            Handler::Reveal => {
                if let (Some(animator), Some(node), PageEvent::Intersect { ratio }) =
                    (&mut controllers.animator, current_node, event)
                    && animator.on_intersect(doc, node, *ratio)?
                {
                    self.listeners
                        .remove(current, EventKind::Intersect, Handler::Reveal);
                }
            }
            Handler::Hover(style) => {
                if let Some(node) = current_node {
                    apply_hover(doc, node, style, event.kind())?;
                }
            }
            Handler::Ripple => {
                if let (Some(button), PageEvent::Click { x, y }) = (current_node, event) {
                    let ripple = spawn_ripple(doc, button, *x, *y)?;
                    self.timers
                        .schedule(now + RIPPLE_LIFETIME_MS, Job::RippleExpire { ripple });
                }
            }
            Handler::ScrollTopVisibility => {
                if let Some(scroll_top) = &mut controllers.scroll_top {
                    scroll_top.on_scroll(doc, now)?;
                }
            }
            Handler::ScrollTopClick => {
                if let Some(scroll_top) = &controllers.scroll_top {
                    scroll_top.on_click(doc);
                }
            }
            Handler::CountUp => {
                if let (Some(count_up), Some(node), PageEvent::Intersect { ratio }) =
                    (&mut controllers.count_up, current_node, event)
                    && let Some(counter) = count_up.on_intersect(doc, node, *ratio)?
                {
                    self.timers
                        .schedule(now + COUNT_UP_FRAME_MS, Job::CountUpFrame { counter });
                }
            }
            Handler::PrivacyLink => {
                if let Some(link) = current_node
                    && PrivacyModal::intercepts(doc, link)
                {
                    state.prevent_default();
                    let open = PrivacyModal::open(doc)?;
                    self.listeners.add(
                        Target::Node(open.close_button),
                        EventKind::Click,
                        Handler::ModalClose(open),
                    );
                    self.listeners.add(
                        Target::Node(open.overlay),
                        EventKind::Click,
                        Handler::ModalOverlay(open),
                    );
                }
            }
            Handler::ModalClose(open) => {
                PrivacyModal::close(doc, open.overlay)?;
                forget_modal(&mut self.listeners, open);
            }
            Handler::ModalOverlay(open) => {
                if state.target == Target::Node(open.overlay) {
                    PrivacyModal::close(doc, open.overlay)?;
                    forget_modal(&mut self.listeners, open);
                }
            }
        }
        Ok(())
    }

    // =========================================================================
    // Time
    // =========================================================================

    /// Move the clock forward by `ms`, firing due timers in order.
    ///
    /// Returns the number of timers fired.
    pub fn advance(&mut self, ms: Millis) -> usize {
        let until = self.now.saturating_add(ms);
        let mut fired = 0;
        while let Some(timer) = self.timers.pop_due(until) {
            self.now = self.now.max(timer.due_at);
            if let Err(error) = self.run_job(timer.job) {
                tracing::warn!(job = ?timer.job, %error, "Timer job failed");
            }
            fired += 1;
        }
        self.now = until;
        fired
    }

    fn run_job(&mut self, job: Job) -> Result<()> {
        let now = self.now;
        let doc = &mut self.doc;
        let controllers = self.registry.controllers_mut();

        match job {
            Job::MenuResize => {
                if let Some(menu) = &mut controllers.menu {
                    menu.resize_elapsed(doc, now)?;
                }
            }
            Job::SubmissionComplete { form } => {
                if let Some(forms) = &mut controllers.forms {
                    forms.complete(doc, form, now, &mut *self.transport)?;
                }
            }
            Job::RippleExpire { ripple } => expire_ripple(doc, ripple)?,
            Job::CountUpFrame { counter } => {
                if let Some(count_up) = &mut controllers.count_up
                    && count_up.frame(doc, counter)?
                {
                    self.timers
                        .schedule(now + COUNT_UP_FRAME_MS, Job::CountUpFrame { counter });
                }
            }
        }
        Ok(())
    }
}

fn forget_modal(listeners: &mut ListenerStore, open: OpenModal) {
    listeners.remove(
        Target::Node(open.close_button),
        EventKind::Click,
        Handler::ModalClose(open),
    );
    listeners.remove(
        Target::Node(open.overlay),
        EventKind::Click,
        Handler::ModalOverlay(open),
    );
}
