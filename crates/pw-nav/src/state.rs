//! Menu state machine.
//!
//! `Closed` (initial) and `Open`. The transition function is pure; effects
//! live in [`crate::MenuController`].

use pw_common::timing::WIDE_LAYOUT_MIN_WIDTH;
use serde::Serialize;

/// Open/closed state of the collapsible menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MenuState {
    pub is_open: bool,
}

/// A trigger the menu reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    /// The toggle control was activated.
    ToggleActivated,
    /// A click somewhere in the document.
    Click { inside_header: bool },
    /// The Escape key was pressed.
    EscapePressed,
    /// The debounced resize handler fired with this viewport width.
    ViewportResized { width: u32 },
    /// A navigation link inside the panel was selected.
    NavLinkSelected,
}

/// A state change and the effects it requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MenuTransition {
    Opened,
    Closed {
        /// Return focus to the toggle control.
        restore_focus: bool,
    },
}

impl MenuState {
    pub fn open() -> Self {
        Self { is_open: true }
    }

    /// Compute the next state for `input`.
    ///
    /// Returns `None` when the input leaves the state unchanged.
    pub fn apply(self, input: MenuInput) -> (Self, Option<MenuTransition>) {
        let close = |restore_focus| {
            (
                Self { is_open: false },
                Some(MenuTransition::Closed { restore_focus }),
            )
        };

        match (self.is_open, input) {
            (false, MenuInput::ToggleActivated) => (Self::open(), Some(MenuTransition::Opened)),
            (true, MenuInput::ToggleActivated) => close(false),
            (true, MenuInput::Click { inside_header: false }) => close(false),
            (true, MenuInput::EscapePressed) => close(true),
            (true, MenuInput::ViewportResized { width }) if width >= WIDE_LAYOUT_MIN_WIDTH => {
                close(false)
            }
            (true, MenuInput::NavLinkSelected) => close(false),
            _ => (self, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let (open, transition) = MenuState::default().apply(MenuInput::ToggleActivated);
        assert!(open.is_open);
        assert_eq!(transition, Some(MenuTransition::Opened));

        let (closed, transition) = open.apply(MenuInput::ToggleActivated);
        assert!(!closed.is_open);
        assert_eq!(
            transition,
            Some(MenuTransition::Closed {
                restore_focus: false
            })
        );
    }

    #[test]
    fn test_clicks_inside_header_keep_menu_open() {
        let open = MenuState::open();
        let (state, transition) = open.apply(MenuInput::Click {
            inside_header: true,
        });
        assert!(state.is_open);
        assert!(transition.is_none());

        let (state, _) = open.apply(MenuInput::Click {
            inside_header: false,
        });
        assert!(!state.is_open);
    }

    #[test]
    fn test_escape_restores_focus() {
        let (_, transition) = MenuState::open().apply(MenuInput::EscapePressed);
        assert_eq!(
            transition,
            Some(MenuTransition::Closed {
                restore_focus: true
            })
        );
    }

    #[test]
    fn test_resize_threshold() {
        let open = MenuState::open();
        assert!(open.apply(MenuInput::ViewportResized { width: 1023 }).1.is_none());
        assert!(!open.apply(MenuInput::ViewportResized { width: 1024 }).0.is_open);
    }

    #[test]
    fn test_closed_menu_ignores_close_triggers() {
        let closed = MenuState::default();
        for input in [
            MenuInput::Click {
                inside_header: false,
            },
            MenuInput::EscapePressed,
            MenuInput::ViewportResized { width: 1400 },
            MenuInput::NavLinkSelected,
        ] {
            assert_eq!(closed.apply(input), (closed, None));
        }
    }
}
