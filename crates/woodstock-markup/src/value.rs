//! Attribute and content values.
//!
//! Renderers hand the buffer whatever a component property holds: a
//! string, a flag, a number, or nothing at all. [`Value`] is the closed set
//! of those shapes, so the buffer can give booleans their attribute
//! semantics and reject absent values without inspecting types at runtime.

use std::borrow::Cow;
use std::fmt::Display;

/// A value written into the buffer as attribute value or element content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value<'a> {
    /// No value. Every write operation rejects it.
    Null,
    /// A flag. As an attribute, `true` renders `name="name"` and `false`
    /// renders nothing; elsewhere it renders `true` or `false`.
    Bool(bool),
    /// Text, written after the escaping the operation calls for.
    Text(Cow<'a, str>),
}

impl Value<'_> {
    /// Convert anything printable into a text value.
    #[must_use]
    pub fn display<T: Display + ?Sized>(value: &T) -> Value<'static> {
        Value::Text(Cow::Owned(value.to_string()))
    }

    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The text rendering of this value, or `None` for [`Value::Null`].
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Null => None,
            Self::Bool(true) => Some("true"),
            Self::Bool(false) => Some("false"),
            Self::Text(text) => Some(text),
        }
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(Cow::Borrowed(text.as_str()))
    }
}

impl From<String> for Value<'_> {
    fn from(text: String) -> Self {
        Self::Text(Cow::Owned(text))
    }
}

impl<'a> From<Cow<'a, str>> for Value<'a> {
    fn from(text: Cow<'a, str>) -> Self {
        Self::Text(text)
    }
}

impl From<bool> for Value<'_> {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<char> for Value<'_> {
    fn from(c: char) -> Self {
        Self::Text(Cow::Owned(c.to_string()))
    }
}

/// Absent property values become [`Value::Null`].
impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

macro_rules! impl_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value<'_> {
                fn from(value: $ty) -> Self {
                    Self::Text(Cow::Owned(value.to_string()))
                }
            }
        )*
    };
}

impl_from_display!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
