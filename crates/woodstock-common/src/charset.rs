//! Character-encoding label resolution.
//!
//! [Encoding Standard § 4.2 Names and labels](https://encoding.spec.whatwg.org/#names-and-labels)
//!
//! Markup buffers carry the *label* of the encoding their output will be
//! rendered in (for example `"ISO-8859-1"` or `"UTF-8"`). Labels are only
//! resolved when bytes are actually needed, which today means encoding the
//! query string of a URI attribute.

use std::borrow::Cow;

use encoding_rs::{Encoding, EncoderResult, UTF_8};

/// The label assumed when nothing else has been declared.
///
/// A conservative single-byte Western European encoding.
pub const DEFAULT_LABEL: &str = "ISO-8859-1";

/// Byte written in place of a character the charset cannot represent.
pub const REPLACEMENT: u8 = b'?';

/// Labels naming true ISO-8859-1, compared ASCII case-insensitively.
///
/// The Encoding Standard folds these into windows-1252, which gives
/// U+0080..=U+009F and U+20AC different bytes than a Latin-1 decoder expects.
const LATIN1_LABELS: &[&str] = &[
    "iso-8859-1",
    "iso8859-1",
    "iso_8859-1",
    "iso_8859_1",
    "iso8859_1",
    "8859_1",
    "iso_8859-1:1987",
    "iso-ir-100",
    "latin1",
    "l1",
    "ibm819",
    "cp819",
    "819",
    "csisolatin1",
];

/// A resolved character encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    /// ISO-8859-1: each code point up to U+00FF is its own byte.
    Latin1,
    /// Any other encoding known to the Encoding Standard.
    Other(&'static Encoding),
}

impl Charset {
    /// Canonical name of the charset.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Latin1 => DEFAULT_LABEL,
            Self::Other(encoding) => encoding.name(),
        }
    }
}

/// [Encoding Standard § 4.2](https://encoding.spec.whatwg.org/#concept-encoding-get)
///
/// "To get an encoding from a string label, run these steps:
///  1. Remove any leading and trailing ASCII whitespace from label.
///  2. If label is an ASCII case-insensitive match for any of the labels
///     listed in the table below, then return the corresponding encoding;
///     otherwise return failure."
///
/// NOTE: The Latin-1 labels are matched first and resolve to
/// [`Charset::Latin1`] instead of windows-1252. The UTF-16 labels resolve to
/// encodings whose output encoding is UTF-8.
#[must_use]
pub fn resolve(label: &str) -> Option<Charset> {
    let trimmed = label.trim_matches(|c: char| c.is_ascii_whitespace());
    if LATIN1_LABELS
        .iter()
        .any(|latin1| latin1.eq_ignore_ascii_case(trimmed))
    {
        return Some(Charset::Latin1);
    }
    Encoding::for_label(trimmed.as_bytes()).map(Charset::Other)
}

/// Encode `text` into the bytes of `charset`.
///
/// Characters the charset cannot represent become a single `?` byte.
#[must_use]
pub fn encode(text: &str, charset: Charset) -> Cow<'_, [u8]> {
    match charset {
        Charset::Latin1 => Cow::Owned(
            text.chars()
                .map(|c| u8::try_from(u32::from(c)).unwrap_or(REPLACEMENT))
                .collect(),
        ),
        Charset::Other(encoding) if encoding.output_encoding() == UTF_8 => {
            Cow::Borrowed(text.as_bytes())
        }
        Charset::Other(encoding) => Cow::Owned(encode_with_replacement(text, encoding)),
    }
}

fn encode_with_replacement(text: &str, encoding: &'static Encoding) -> Vec<u8> {
    let mut encoder = encoding.new_encoder();
    let mut bytes = Vec::with_capacity(text.len());
    let mut chunk = [0u8; 1024];
    let mut rest = text;
    loop {
        let (result, read, written) =
            encoder.encode_from_utf8_without_replacement(rest, &mut chunk, true);
        bytes.extend_from_slice(&chunk[..written]);
        rest = &rest[read..];
        match result {
            EncoderResult::InputEmpty => break,
            EncoderResult::OutputFull => {}
            EncoderResult::Unmappable(_) => bytes.push(REPLACEMENT),
        }
    }
    bytes
}
