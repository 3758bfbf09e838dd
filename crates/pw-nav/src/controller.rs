//! Document adapter for the menu state machine.

use pw_common::timing::RESIZE_DEBOUNCE_MS;
use pw_common::{Debouncer, Millis};
use pw_dom::{Document, NodeId, Result};

use crate::selectors::NavSelectors;
use crate::state::{MenuInput, MenuState, MenuTransition};

/// Owns the menu state and mirrors it onto the toggle, panel and body.
#[derive(Debug, Clone)]
pub struct MenuController {
    toggle: NodeId,
    panel: NodeId,
    header: NodeId,
    nav_links: Vec<NodeId>,
    state: MenuState,
    resize: Debouncer<u32>,
}

impl MenuController {
    /// Look up the menu elements.
    ///
    /// Returns `Ok(None)` when the toggle, panel or header is missing.
    pub fn attach(doc: &mut Document, selectors: &NavSelectors) -> Result<Option<Self>> {
        let toggle = doc.query_selector(&selectors.toggle)?;
        let panel = doc.query_selector(&selectors.panel)?;
        let header = doc.query_selector(&selectors.header)?;
        let (Some(toggle), Some(panel), Some(header)) = (toggle, panel, header) else {
            tracing::debug!(
                toggle = %selectors.toggle,
                panel = %selectors.panel,
                "Menu elements missing, menu disabled"
            );
            return Ok(None);
        };

        let nav_links = doc.query_all_within(panel, &selectors.nav_link)?;
        doc.set_attr(toggle, "aria-expanded", "false")?;
        tracing::debug!(links = nav_links.len(), "Menu controller attached");

        Ok(Some(Self {
            toggle,
            panel,
            header,
            nav_links,
            state: MenuState::default(),
            resize: Debouncer::new(RESIZE_DEBOUNCE_MS),
        }))
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn toggle(&self) -> NodeId {
        self.toggle
    }

    pub fn panel(&self) -> NodeId {
        self.panel
    }

    pub fn header(&self) -> NodeId {
        self.header
    }

    pub fn nav_links(&self) -> &[NodeId] {
        &self.nav_links
    }

    /// Feed one input through the state machine and apply its effects.
    pub fn handle(
        &mut self,
        doc: &mut Document,
        input: MenuInput,
    ) -> Result<Option<MenuTransition>> {
        let (next, transition) = self.state.apply(input);
        self.state = next;
        if let Some(transition) = transition {
            self.render(doc, transition)?;
            tracing::debug!(?input, ?transition, "Menu transition");
        }
        Ok(transition)
    }

    /// A click anywhere in the document.
    pub fn on_document_click(
        &mut self,
        doc: &mut Document,
        target: NodeId,
    ) -> Result<Option<MenuTransition>> {
        let inside_header = doc.contains(self.header, target);
        self.handle(doc, MenuInput::Click { inside_header })
    }

    /// A keydown anywhere in the document.
    pub fn on_key(&mut self, doc: &mut Document, key: &str) -> Result<Option<MenuTransition>> {
        if key != "Escape" {
            return Ok(None);
        }
        self.handle(doc, MenuInput::EscapePressed)
    }

    /// Record a resize. Returns when the debounced handler is due.
    pub fn schedule_resize(&mut self, now: Millis, width: u32) -> Millis {
        self.resize.call(now, width)
    }

    /// Run the debounced resize handler if it is due.
    ///
    /// Timers scheduled for superseded resizes find nothing to run.
    pub fn resize_elapsed(
        &mut self,
        doc: &mut Document,
        now: Millis,
    ) -> Result<Option<MenuTransition>> {
        match self.resize.poll(now) {
            Some(width) => self.handle(doc, MenuInput::ViewportResized { width }),
            None => Ok(None),
        }
    }

    /// Apply entry/exit effects. Every effect lands before control returns
    /// to the dispatcher.
    fn render(&self, doc: &mut Document, transition: MenuTransition) -> Result<()> {
        for node in [self.toggle, self.panel, self.header] {
            doc.element(node)?;
        }
        let body = doc.body();
        match transition {
            MenuTransition::Opened => {
                let header_height = doc.layout(self.header).height;
                doc.add_class(self.panel, "show")?;
                doc.set_attr(self.toggle, "aria-expanded", "true")?;
                doc.set_style(body, "overflow", "hidden")?;
                doc.set_style(
                    self.panel,
                    "height",
                    &format!("calc(100vh - {header_height}px)"),
                )?;
            }
            MenuTransition::Closed { restore_focus } => {
                doc.remove_class(self.panel, "show")?;
                doc.set_attr(self.toggle, "aria-expanded", "false")?;
                doc.set_style(body, "overflow", "")?;
                doc.set_style(self.panel, "height", "")?;
                if restore_focus {
                    doc.focus(self.toggle)?;
                }
            }
        }
        Ok(())
    }
}
