//! Events delivered to the page and the per-dispatch event state.

use std::fmt;

use pw_dom::NodeId;
use serde::Serialize;

/// Where a listener is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Target {
    Window,
    Document,
    Node(NodeId),
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Window => f.write_str("window"),
            Self::Document => f.write_str("document"),
            Self::Node(node) => write!(f, "node {node}"),
        }
    }
}

/// Event type, used to key listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EventKind {
    Click,
    MouseEnter,
    MouseLeave,
    MouseDown,
    MouseUp,
    Blur,
    Input,
    Submit,
    KeyDown,
    Resize,
    Scroll,
    /// Intersection-observer notification for one element.
    Intersect,
}

impl EventKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::MouseEnter => "mouseenter",
            Self::MouseLeave => "mouseleave",
            Self::MouseDown => "mousedown",
            Self::MouseUp => "mouseup",
            Self::Blur => "blur",
            Self::Input => "input",
            Self::Submit => "submit",
            Self::KeyDown => "keydown",
            Self::Resize => "resize",
            Self::Scroll => "scroll",
            Self::Intersect => "intersect",
        }
    }

    /// Whether the event travels from the target up to the window.
    pub fn bubbles(&self) -> bool {
        matches!(
            self,
            Self::Click
                | Self::MouseDown
                | Self::MouseUp
                | Self::Input
                | Self::Submit
                | Self::KeyDown
        )
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An event with its payload.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// Pointer activation at viewport coordinates.
    Click { x: f64, y: f64 },
    MouseEnter,
    MouseLeave,
    MouseDown,
    MouseUp,
    Blur,
    Input,
    Submit,
    KeyDown { key: String },
    Resize { width: u32 },
    Scroll { y: f64 },
    Intersect { ratio: f64 },
}

impl PageEvent {
    /// A click in the top-left corner of the viewport.
    pub fn click() -> Self {
        Self::Click { x: 0.0, y: 0.0 }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Self::Click { .. } => EventKind::Click,
            Self::MouseEnter => EventKind::MouseEnter,
            Self::MouseLeave => EventKind::MouseLeave,
            Self::MouseDown => EventKind::MouseDown,
            Self::MouseUp => EventKind::MouseUp,
            Self::Blur => EventKind::Blur,
            Self::Input => EventKind::Input,
            Self::Submit => EventKind::Submit,
            Self::KeyDown { .. } => EventKind::KeyDown,
            Self::Resize { .. } => EventKind::Resize,
            Self::Scroll { .. } => EventKind::Scroll,
            Self::Intersect { .. } => EventKind::Intersect,
        }
    }
}

/// Mutable state of one dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventState {
    /// Where the event was dispatched.
    pub target: Target,
    pub default_prevented: bool,
    pub propagation_stopped: bool,
}

impl EventState {
    pub fn new(target: Target) -> Self {
        Self {
            target,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Stop after the listeners of the current target have run.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Target node, when the event was dispatched to an element.
    pub fn target_node(&self) -> Option<NodeId> {
        match self.target {
            Target::Node(node) => Some(node),
            Target::Window | Target::Document => None,
        }
    }
}

/// What happened during a dispatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DispatchOutcome {
    /// Number of listeners that ran.
    pub handled: usize,
    /// Listeners that returned an error (logged and skipped).
    pub failed: usize,
    pub default_prevented: bool,
    pub propagation_stopped: bool,
}
