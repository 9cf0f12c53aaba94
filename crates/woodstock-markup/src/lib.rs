//! Accumulating buffer for well-formed HTML markup fragments.
//!
//! # Scope
//!
//! This crate implements:
//! - **Markup buffer** ([`Markup`]) - a write-only accumulator that tracks
//!   whether a start tag is still accepting attributes and closes it at the
//!   right moment
//! - **Text and attribute escaping** ([`escape`]) - `&amp;`/`&lt;`/`&gt;`/
//!   `&quot;`, ISO-8859-1 named entities, numeric character references
//! - **URI escaping** ([`uri`]) - percent-encoding with a form-encoded query
//!   string and a pass-through for `javascript:` values
//!
//! # Not Implemented
//!
//! - Parsing, validation, or decoding of markup
//! - Checking that elements are ended in the order they were started
//! - Correct percent-encoding of path characters above U+00FF

/// ISO-8859-1 named character references.
pub mod entities;
/// Error type for buffer operations.
pub mod error;
/// Text and attribute-value escaping helpers.
pub mod escape;
/// The markup buffer.
pub mod markup;
/// URI attribute escaping.
pub mod uri;
/// Attribute and content values.
pub mod value;

pub use error::{MarkupError, Result};
pub use markup::Markup;
pub use value::Value;
