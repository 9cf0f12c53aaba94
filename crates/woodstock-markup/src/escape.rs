//! Text and attribute-value escaping.
//!
//! Both escapers walk their input one `char` at a time and append to an
//! output `String`. They share the same character classes:
//!
//! | Input | Output |
//! |---|---|
//! | U+0000..=U+009F | unchanged, except the markup-significant characters below |
//! | `&` | `&amp;` |
//! | `>` | `&gt;` |
//! | U+00A0..=U+00FF | named entity from [`crate::entities`] |
//! | U+20AC | `&euro;` |
//! | anything above U+00FF | `&NNNN;` (decimal code point) |
//!
//! Text content additionally escapes `<`. Attribute values keep `<`, escape
//! `"`, and leave an `&` that is immediately followed by `{` alone.

use crate::entities;

/// Append `text` escaped for use as element content.
///
/// Double quotes are not escaped; they carry no meaning outside a tag.
pub fn escape_text(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\u{0}'..='\u{9F}' => out.push(c),
            _ => non_ascii(out, c),
        }
    }
}

/// Append `text` escaped for use inside a double-quoted attribute value.
///
/// [HTML 4.01 § B.7.1.1 Ampersands in attribute values](https://www.w3.org/TR/html401/appendix/notes.html#h-B.7.1.1)
///
/// "Authors should use "&amp;" (ASCII decimal 38) instead of "&" to avoid
/// confusion with the beginning of a character reference." An `&` followed by
/// `{` opens a script-macro reference and is written through as-is.
///
/// NOTE: `<` is not escaped; it is legal inside a quoted attribute value.
pub fn escape_attribute_value(out: &mut String, text: &str) {
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '&' if chars.peek() == Some(&'{') => out.push('&'),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '>' => out.push_str("&gt;"),
            '\u{0}'..='\u{9F}' => out.push(c),
            _ => non_ascii(out, c),
        }
    }
}

/// Escape a character at or above U+00A0.
fn non_ascii(out: &mut String, c: char) {
    match entities::lookup(c) {
        Some(name) => {
            out.push('&');
            out.push_str(name);
            out.push(';');
        }
        None => numeric(out, c),
    }
}

/// Append a numeric escape for `c`.
///
/// The euro sign is the one character outside Latin-1 with a named entity
/// in common use, so it is written as `&euro;`. Everything else becomes
/// `&` + decimal code point + `;`.
pub fn numeric(out: &mut String, c: char) {
    if c == '\u{20AC}' {
        out.push_str("&euro;");
        return;
    }
    out.push('&');
    decimal(out, u32::from(c));
    out.push(';');
}

/// Append the decimal digits of `value`, without leading zeros.
pub fn decimal(out: &mut String, value: u32) {
    let start = out.len();
    let mut rest = value;
    loop {
        if let Some(digit) = char::from_digit(rest % 10, 10) {
            out.insert(start, digit);
        }
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
}

/// Append `byte` as a `%XX` escape with uppercase hex digits.
pub fn hexadecimals(out: &mut String, byte: u8) {
    out.push('%');
    out.push(hexadecimal(byte >> 4));
    out.push(hexadecimal(byte & 0x0F));
}

/// The uppercase hex digit for the low four bits of `nibble`.
#[must_use]
pub fn hexadecimal(nibble: u8) -> char {
    char::from_digit(u32::from(nibble & 0x0F), 16).map_or('0', |digit| digit.to_ascii_uppercase())
}
