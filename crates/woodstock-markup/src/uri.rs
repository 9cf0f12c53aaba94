//! URI attribute escaping.
//!
//! URI values are percent-encoded rather than entity-escaped. The part
//! before the first `?` is encoded one character at a time; the query string
//! after it is form-encoded in the buffer's declared character encoding,
//! since that is how the server will decode the parameters.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_encode};
use woodstock_common::charset;
use woodstock_common::warning::warn_once;

use crate::error::{MarkupError, Result};
use crate::escape::{escape_attribute_value, hexadecimals};

/// Scheme prefix whose values are scripts, not locations.
pub const JAVASCRIPT_SCHEME: &str = "javascript:";

/// [HTML 4.01 § 17.13.4 Form content types](https://www.w3.org/TR/html401/interact/forms.html#h-17.13.4.1)
///
/// "Control names and values are escaped. Space characters are replaced by
/// `+', and then reserved characters are escaped as described in [RFC1738]"
///
/// Alphanumerics and `*`, `-`, `.`, `_` are left alone. Spaces are handled
/// separately because they become `+` rather than `%20`.
const FORM: &AsciiSet = &NON_ALPHANUMERIC.remove(b'*').remove(b'-').remove(b'.').remove(b'_');

/// Append `text` escaped for use inside a double-quoted URI attribute value.
///
/// - `javascript:` values are scripts and get plain attribute escaping.
/// - Space becomes `+`, `"` becomes `%22`.
/// - `%` is never re-encoded, so pre-encoded sequences survive.
/// - Other printable ASCII passes through.
/// - Anything else becomes `%XX` of its low byte.
/// - The first `?` starts the query string; the rest of the value is handed
///   to [`encode_query`].
///
/// NOTE: Only code points up to U+00FF survive the low-byte escape. Higher
/// code points are truncated; a warning is reported once per process.
///
/// # Errors
///
/// Returns [`MarkupError::UnsupportedEncoding`] if the value has a query
/// string and `encoding` is not a known encoding label.
pub fn escape_uri_value(out: &mut String, text: &str, encoding: &str) -> Result<()> {
    if text.starts_with(JAVASCRIPT_SCHEME) {
        escape_attribute_value(out, text);
        return Ok(());
    }

    for (index, c) in text.char_indices() {
        match c {
            ' ' => out.push('+'),
            '"' => out.push_str("%22"),
            '?' => {
                out.push('?');
                encode_query(out, &text[index + 1..], encoding)?;
                break;
            }
            '\u{21}'..='\u{7E}' => out.push(c),
            _ => {
                let code = u32::from(c);
                if code > 0xFF {
                    tracing::debug!(code, "URI character outside ISO-8859-1");
                    warn_once(
                        "Markup",
                        "URI characters above U+00FF are truncated to their low byte",
                    );
                }
                hexadecimals(out, code.to_le_bytes()[0]);
            }
        }
    }
    Ok(())
}

/// Append `query` form-encoded in the encoding named by `label`.
///
/// The query is first converted to the bytes of that encoding, with `?`
/// standing in for characters it cannot represent. Then each byte outside
/// the unreserved set is percent-encoded and each space becomes `+`.
///
/// # Errors
///
/// Returns [`MarkupError::UnsupportedEncoding`] if `label` is not a known
/// encoding label.
pub fn encode_query(out: &mut String, query: &str, label: &str) -> Result<()> {
    let charset = charset::resolve(label).ok_or_else(|| MarkupError::UnsupportedEncoding {
        label: label.to_owned(),
    })?;
    tracing::debug!(charset = charset.name(), "form-encoding URI query string");

    let bytes = charset::encode(query, charset);
    for (index, chunk) in bytes.split(|byte| *byte == b' ').enumerate() {
        if index > 0 {
            out.push('+');
        }
        out.extend(percent_encode(chunk, FORM));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uri(input: &str) -> String {
        let mut out = String::new();
        escape_uri_value(&mut out, input, "ISO-8859-1").unwrap();
        out
    }

    #[test]
    fn test_query_string_form_encoding() {
        let mut out = String::new();
        encode_query(&mut out, "c=d e&f*g", "UTF-8").unwrap();
        assert_eq!(out, "c%3Dd+e%26f*g");
    }

    #[test]
    fn test_query_string_uses_declared_encoding() {
        let mut latin = String::new();
        encode_query(&mut latin, "\u{E9}", "ISO-8859-1").unwrap();
        assert_eq!(latin, "%E9");

        let mut utf8 = String::new();
        encode_query(&mut utf8, "\u{E9}", "UTF-8").unwrap();
        assert_eq!(utf8, "%C3%A9");
    }

    #[test]
    fn test_query_string_unmappable_becomes_question_mark() {
        let mut latin = String::new();
        encode_query(&mut latin, "a\u{20AC}\u{80}\u{4E2D}", "ISO-8859-1").unwrap();
        assert_eq!(latin, "a%3F%80%3F");

        let mut sjis = String::new();
        encode_query(&mut sjis, "\u{E9}\u{4E2D}", "Shift_JIS").unwrap();
        assert_eq!(sjis, "%3F%92%86");
    }

    #[test]
    fn test_unknown_label() {
        let mut out = String::new();
        let err = encode_query(&mut out, "a", "no-such-charset").unwrap_err();
        assert_eq!(
            err,
            MarkupError::UnsupportedEncoding {
                label: "no-such-charset".to_string()
            }
        );
    }

    #[test]
    fn test_path_characters() {
        assert_eq!(uri("/a b/%41\"x\""), "/a+b/%41%22x%22");
        assert_eq!(uri("tab\there"), "tab%09here");
        assert_eq!(uri("caf\u{E9}"), "caf%E9");
    }

    #[test]
    fn test_high_code_point_uses_low_byte() {
        assert_eq!(uri("\u{4E2D}"), "%2D");
    }

    #[test]
    fn test_only_first_question_mark_switches() {
        assert_eq!(uri("p?a=1?b"), "p?a%3D1%3Fb");
    }
}
