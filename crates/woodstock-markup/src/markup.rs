//! The accumulating markup buffer.
//!
//! # State
//!
//! The buffer is in one of two states:
//!
//! - **Closed** - no start tag is pending. Initial state.
//! - **Open** - `<name` (plus any attributes) has been written and the
//!   closing `>` has not. Only attribute writes keep the buffer open.
//!
//! Any content write closes a pending start tag with `>`. Ending an element,
//! or reading the markup, while its start tag is still pending self-closes
//! it with `/>`.

use std::fmt;

use woodstock_common::charset::DEFAULT_LABEL;

use crate::error::{MarkupError, Result};
use crate::escape::{escape_attribute_value, escape_text};
use crate::uri::escape_uri_value;
use crate::value::Value;

/// Accumulating buffer for well-formed markup fragments.
///
/// The API follows the shape of a response writer: start an element, add
/// attributes, write content, end the element. Nothing is written anywhere
/// until the caller takes the result with [`Markup::markup`] or
/// [`Markup::into_markup`].
///
/// # Example
///
/// ```
/// use woodstock_markup::Markup;
///
/// let mut markup = Markup::new();
/// markup.start_element("a", Some("form1:link"));
/// markup.write_uri_attribute("href", "/faces/page.jsp?q=x y", Some("url"))?;
/// markup.write_attribute("disabled", false, None)?;
/// markup.write_text("Fish & Chips", Some("text"))?;
/// markup.end_element("a");
///
/// assert_eq!(
///     markup.markup(),
///     r#"<a href="/faces/page.jsp?q%3Dx+y">Fish &amp; Chips</a>"#
/// );
/// # Ok::<(), woodstock_markup::MarkupError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markup {
    /// Markup accumulated so far.
    buffer: String,
    /// Label of the character encoding the markup will be rendered in.
    encoding: String,
    /// Whether a start tag is waiting for its closing `>`.
    open: bool,
}

impl Default for Markup {
    fn default() -> Self {
        Self::new()
    }
}

impl Markup {
    /// Create an empty buffer assuming the default `ISO-8859-1` encoding.
    #[must_use]
    pub fn new() -> Self {
        Self::with_encoding(DEFAULT_LABEL)
    }

    /// Create an empty buffer that assumes the given encoding label.
    #[must_use]
    pub fn with_encoding(encoding: impl Into<String>) -> Self {
        Self {
            buffer: String::new(),
            encoding: encoding.into(),
            open: false,
        }
    }

    /// The character encoding label assumed for the rendered markup.
    #[must_use]
    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    /// Set the character encoding label assumed for the rendered markup.
    ///
    /// The label is not checked here; an unknown label is reported by the
    /// first URI attribute that needs to encode a query string.
    pub fn set_encoding(&mut self, encoding: impl Into<String>) {
        self.encoding = encoding.into();
    }

    /// Returns `true` while a start tag is accepting attributes.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Returns `true` if nothing has been accumulated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Length in bytes of the markup accumulated so far, not counting the
    /// close of a pending start tag.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Finish any pending start tag and return the accumulated markup.
    pub fn markup(&mut self) -> &str {
        self.self_close();
        &self.buffer
    }

    /// Finish any pending start tag and take the accumulated markup.
    #[must_use]
    pub fn into_markup(mut self) -> String {
        self.self_close();
        self.buffer
    }

    /// Discard all accumulated markup so the buffer can be reused.
    ///
    /// The declared encoding is kept.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.open = false;
    }

    /// Start a new element, up to and including its name.
    ///
    /// Any pending start tag is closed first. Until the next content write,
    /// attributes may be added with [`Markup::write_attribute`] and
    /// [`Markup::write_uri_attribute`].
    ///
    /// `owner` identifies the component the element belongs to. It is only
    /// recorded in trace diagnostics.
    pub fn start_element(&mut self, name: &str, owner: Option<&str>) {
        tracing::trace!(element = name, owner, "start element");
        self.close();
        self.buffer.push('<');
        self.buffer.push_str(name);
        self.open = true;
    }

    /// End an element.
    ///
    /// If the element's start tag is still pending it is self-closed with
    /// `/>`; otherwise `</name>` is written. Elements must be ended in the
    /// reverse order they were started; the buffer does not check this.
    pub fn end_element(&mut self, name: &str) {
        if self.open {
            self.self_close();
        } else {
            self.buffer.push_str("</");
            self.buffer.push_str(name);
            self.buffer.push('>');
        }
    }

    /// Add an attribute to the pending start tag.
    ///
    /// Text values are written as ` name="value"` with attribute escaping.
    /// [`Value::Bool`] follows XHTML boolean attributes: `true` is written as
    /// ` name="name"` and `false` writes nothing.
    ///
    /// `property` names the component property the value came from, for
    /// trace diagnostics.
    ///
    /// # Errors
    ///
    /// - [`MarkupError::InvalidArgument`] if `value` is [`Value::Null`].
    /// - [`MarkupError::IllegalState`] if no start tag is pending.
    pub fn write_attribute<'v>(
        &mut self,
        name: &str,
        value: impl Into<Value<'v>>,
        property: Option<&str>,
    ) -> Result<()> {
        let value = value.into();
        let text = require_value(&value, "value")?;
        self.require_open()?;
        tracing::trace!(attribute = name, property, "write attribute");

        match &value {
            Value::Bool(true) => {
                self.buffer.push(' ');
                self.buffer.push_str(name);
                self.buffer.push_str("=\"");
                self.buffer.push_str(name);
                self.buffer.push('"');
            }
            Value::Bool(false) => {}
            _ => {
                self.buffer.push(' ');
                self.buffer.push_str(name);
                self.buffer.push_str("=\"");
                escape_attribute_value(&mut self.buffer, text);
                self.buffer.push('"');
            }
        }
        Ok(())
    }

    /// Add a URI-valued attribute to the pending start tag.
    ///
    /// The value is percent-encoded as described in [`crate::uri`]; a
    /// `javascript:` value gets plain attribute escaping instead. Boolean
    /// values are written as their text.
    ///
    /// # Errors
    ///
    /// - [`MarkupError::InvalidArgument`] if `value` is [`Value::Null`].
    /// - [`MarkupError::IllegalState`] if no start tag is pending.
    /// - [`MarkupError::UnsupportedEncoding`] if the value has a query
    ///   string and the declared encoding label is unknown. Nothing is
    ///   written in that case.
    pub fn write_uri_attribute<'v>(
        &mut self,
        name: &str,
        value: impl Into<Value<'v>>,
        property: Option<&str>,
    ) -> Result<()> {
        let value = value.into();
        let text = require_value(&value, "value")?;
        self.require_open()?;
        tracing::trace!(attribute = name, property, "write URI attribute");

        let mut escaped = String::with_capacity(text.len());
        escape_uri_value(&mut escaped, text, &self.encoding)?;

        self.buffer.push(' ');
        self.buffer.push_str(name);
        self.buffer.push_str("=\"");
        self.buffer.push_str(&escaped);
        self.buffer.push('"');
        Ok(())
    }

    /// Write a comment, closing any pending start tag first.
    ///
    /// The text is written as `<!-- text -->` without escaping.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::InvalidArgument`] if `comment` is
    /// [`Value::Null`].
    pub fn write_comment<'v>(&mut self, comment: impl Into<Value<'v>>) -> Result<()> {
        let comment = comment.into();
        let text = require_value(&comment, "comment")?;
        self.close();
        self.buffer.push_str("<!-- ");
        self.buffer.push_str(text);
        self.buffer.push_str(" -->");
        Ok(())
    }

    /// Write content verbatim, without escaping, closing any pending start
    /// tag first.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::InvalidArgument`] if `raw` is [`Value::Null`].
    pub fn write_raw<'v>(&mut self, raw: impl Into<Value<'v>>, property: Option<&str>) -> Result<()> {
        let raw = raw.into();
        let text = require_value(&raw, "raw")?;
        tracing::trace!(property, "write raw");
        self.close();
        self.buffer.push_str(text);
        Ok(())
    }

    /// Write escaped text content, closing any pending start tag first.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::InvalidArgument`] if `text` is [`Value::Null`].
    pub fn write_text<'v>(&mut self, text: impl Into<Value<'v>>, property: Option<&str>) -> Result<()> {
        let text = text.into();
        let content = require_value(&text, "text")?;
        tracing::trace!(property, "write text");
        self.close();
        escape_text(&mut self.buffer, content);
        Ok(())
    }

    /// Close the pending start tag, if any, with `>`.
    fn close(&mut self) {
        if self.open {
            self.buffer.push('>');
            self.open = false;
        }
    }

    /// Close the pending start tag, if any, with `/>`.
    fn self_close(&mut self) {
        if self.open {
            self.buffer.push_str("/>");
            self.open = false;
        }
    }

    fn require_open(&self) -> Result<()> {
        if self.open {
            Ok(())
        } else {
            Err(MarkupError::IllegalState)
        }
    }
}

/// Renders the finished markup without modifying the buffer: a pending
/// start tag is shown self-closed.
impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)?;
        if self.open {
            f.write_str("/>")?;
        }
        Ok(())
    }
}

fn require_value<'a>(value: &'a Value<'_>, argument: &'static str) -> Result<&'a str> {
    value
        .as_text()
        .ok_or(MarkupError::InvalidArgument { argument })
}
