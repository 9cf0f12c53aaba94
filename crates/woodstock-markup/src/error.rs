//! Error types for markup buffer operations.
//!
//! Every variant is a contract violation by the caller. Operations that fail
//! leave the buffer untouched, but the fragment being built is no longer
//! meaningful and should be discarded.

use thiserror::Error;

/// Errors raised by [`Markup`](crate::Markup) operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// A required value was [`Value::Null`](crate::Value::Null).
    #[error("missing required argument: {argument}")]
    InvalidArgument {
        /// Which argument was absent (`"value"`, `"text"`, ...).
        argument: &'static str,
    },

    /// An attribute was written while no start tag was open.
    #[error("No element is currently open")]
    IllegalState,

    /// The declared character encoding is not a known encoding label.
    #[error("unsupported character encoding: {label}")]
    UnsupportedEncoding {
        /// The label as it was declared on the buffer.
        label: String,
    },
}

/// Result alias for markup buffer operations.
pub type Result<T> = std::result::Result<T, MarkupError>;
