//! ISO-8859-1 named character reference table.
//!
//! [HTML 4.01 § 24.2.1 The list of characters](https://www.w3.org/TR/html401/sgml/entities.html#h-24.2.1)
//!
//! "The following sections present the complete lists of character entity
//! references." Section 24.2.1 covers the Latin-1 code points U+00A0 through
//! U+00FF, one entity per code point, in code point order.

/// First code point covered by [`ISO_8859_1_ENTITIES`].
pub const FIRST: u32 = 0xA0;

/// Last code point covered by [`ISO_8859_1_ENTITIES`].
pub const LAST: u32 = 0xFF;

/// Entity names (without `&` and `;`) for U+00A0..=U+00FF, indexed by
/// `code point - 0xA0`.
pub static ISO_8859_1_ENTITIES: [&str; 96] = [
    // 0xA0
    "nbsp", "iexcl", "cent", "pound", "curren", "yen", "brvbar", "sect",
    "uml", "copy", "ordf", "laquo", "not", "shy", "reg", "macr",
    // 0xB0
    "deg", "plusmn", "sup2", "sup3", "acute", "micro", "para", "middot",
    "cedil", "sup1", "ordm", "raquo", "frac14", "frac12", "frac34", "iquest",
    // 0xC0
    "Agrave", "Aacute", "Acirc", "Atilde", "Auml", "Aring", "AElig", "Ccedil",
    "Egrave", "Eacute", "Ecirc", "Euml", "Igrave", "Iacute", "Icirc", "Iuml",
    // 0xD0
    "ETH", "Ntilde", "Ograve", "Oacute", "Ocirc", "Otilde", "Ouml", "times",
    "Oslash", "Ugrave", "Uacute", "Ucirc", "Uuml", "Yacute", "THORN", "szlig",
    // 0xE0
    "agrave", "aacute", "acirc", "atilde", "auml", "aring", "aelig", "ccedil",
    "egrave", "eacute", "ecirc", "euml", "igrave", "iacute", "icirc", "iuml",
    // 0xF0
    "eth", "ntilde", "ograve", "oacute", "ocirc", "otilde", "ouml", "divide",
    "oslash", "ugrave", "uacute", "ucirc", "uuml", "yacute", "thorn", "yuml",
];

/// Look up the entity name for a Latin-1 supplement character.
///
/// Returns `None` for characters outside U+00A0..=U+00FF.
#[must_use]
pub fn lookup(c: char) -> Option<&'static str> {
    let code = u32::from(c);
    if !(FIRST..=LAST).contains(&code) {
        return None;
    }
    usize::try_from(code - FIRST)
        .ok()
        .and_then(|index| ISO_8859_1_ENTITIES.get(index))
        .copied()
}
