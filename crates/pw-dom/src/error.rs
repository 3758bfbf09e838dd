//! Error types for the document model.

use thiserror::Error;

use crate::element::NodeId;

/// Errors raised by document operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// Selector could not be parsed.
    #[error("invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// Selector uses syntax the engine does not implement.
    #[error("unsupported selector '{selector}': {reason}")]
    UnsupportedSelector { selector: String, reason: String },

    /// Node id does not belong to this document.
    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    /// Operation needs an attached node.
    #[error("node {0} is not attached to the document")]
    Detached(NodeId),
}

/// Result type for document operations.
pub type Result<T> = std::result::Result<T, DomError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DomError::InvalidSelector {
            selector: "a[".to_string(),
            reason: "unterminated attribute".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid selector 'a[': unterminated attribute"
        );
    }
}
