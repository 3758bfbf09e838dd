//! Listener registration.

use std::collections::HashMap;

use serde::Serialize;

use crate::decor::{HoverStyle, OpenModal};
use crate::event::{EventKind, Target};

/// What a listener does when it runs.
///
/// Handlers are plain values so the store can be inspected and counted;
/// the page maps each one to the owning controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Handler {
    MenuToggle,
    MenuDocumentClick,
    MenuKeyDown,
    MenuResize,
    MenuNavLink,
    ScrollSpy,
    SmoothScroll,
    FieldBlur { form: usize },
    FieldInput { form: usize },
    FormSubmit { form: usize },
    Reveal,
    Hover(HoverStyle),
    Ripple,
    ScrollTopVisibility,
    ScrollTopClick,
    CountUp,
    PrivacyLink,
    ModalClose(OpenModal),
    ModalOverlay(OpenModal),
}

/// Listeners keyed by target and event kind, in registration order.
#[derive(Debug, Clone, Default)]
pub struct ListenerStore {
    listeners: HashMap<Target, HashMap<EventKind, Vec<Handler>>>,
}

impl ListenerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, target: Target, kind: EventKind, handler: Handler) {
        self.listeners
            .entry(target)
            .or_default()
            .entry(kind)
            .or_default()
            .push(handler);
    }

    /// Remove the first matching registration. Returns whether one existed.
    pub fn remove(&mut self, target: Target, kind: EventKind, handler: Handler) -> bool {
        let Some(handlers) = self
            .listeners
            .get_mut(&target)
            .and_then(|by_kind| by_kind.get_mut(&kind))
        else {
            return false;
        };
        match handlers.iter().position(|h| *h == handler) {
            Some(index) => {
                handlers.remove(index);
                true
            }
            None => false,
        }
    }

    /// Snapshot of the handlers for one target and kind.
    pub fn handlers(&self, target: Target, kind: EventKind) -> Vec<Handler> {
        self.listeners
            .get(&target)
            .and_then(|by_kind| by_kind.get(&kind))
            .cloned()
            .unwrap_or_default()
    }

    /// Total registrations.
    pub fn count(&self) -> usize {
        self.listeners
            .values()
            .flat_map(HashMap::values)
            .map(Vec::len)
            .sum()
    }

    pub fn count_for(&self, target: Target, kind: EventKind) -> usize {
        self.listeners
            .get(&target)
            .and_then(|by_kind| by_kind.get(&kind))
            .map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_order_and_removal() {
        let mut store = ListenerStore::new();
        store.add(Target::Document, EventKind::Click, Handler::MenuDocumentClick);
        store.add(Target::Document, EventKind::Click, Handler::SmoothScroll);
        store.add(Target::Window, EventKind::Scroll, Handler::ScrollSpy);

        assert_eq!(store.count(), 3);
        assert_eq!(
            store.handlers(Target::Document, EventKind::Click),
            vec![Handler::MenuDocumentClick, Handler::SmoothScroll]
        );

        assert!(store.remove(Target::Document, EventKind::Click, Handler::MenuDocumentClick));
        assert!(!store.remove(Target::Document, EventKind::Click, Handler::MenuDocumentClick));
        assert_eq!(store.count_for(Target::Document, EventKind::Click), 1);
        assert!(store.handlers(Target::Window, EventKind::Resize).is_empty());
    }
}
