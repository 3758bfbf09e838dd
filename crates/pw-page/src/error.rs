//! Page error types.

use std::path::PathBuf;

use pw_dom::DomError;
use thiserror::Error;

/// Errors raised while building, starting or driving a page.
#[derive(Debug, Error)]
pub enum PageError {
    /// Document operation failed.
    #[error(transparent)]
    Dom(#[from] DomError),

    /// File could not be read.
    #[error("Failed to read file: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML document could not be parsed.
    #[error("Invalid {what}")]
    Parse {
        what: &'static str,
        #[source]
        source: toml::de::Error,
    },

    /// A script step names a selector that matches nothing.
    #[error("No element matches '{selector}'")]
    TargetNotFound { selector: String },
}

/// Result type for page operations.
pub type Result<T> = std::result::Result<T, PageError>;
