//! UTF-8 <-> Unicode scalar value conversion.
//!
//! Two decoding policies are offered:
//!
//! - [`decode`] never fails. Each maximal ill-formed subpart of the input is
//!   replaced by a single U+FFFD, which is the substitution `String::from_utf8_lossy`
//!   performs.
//! - [`try_decode`] rejects the input at the first ill-formed subpart.
//!
//! Overlong forms, surrogate code points and values above U+10FFFF are all
//! ill-formed, as is a multi-byte sequence truncated by the end of input.

use std::iter::FusedIterator;
use std::ops::RangeInclusive;

/// A single Unicode scalar value.
///
/// `char` cannot hold a surrogate or an out-of-range value, so encoding is total.
pub type Codepoint = char;

pub const REPLACEMENT_CHARACTER: Codepoint = '\u{FFFD}';

const CONTINUATION: RangeInclusive<u8> = 0x80..=0xBF;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid UTF-8 sequence of {error_len} byte(s) at offset {valid_up_to}")]
pub struct DecodeError {
    /// Number of leading bytes that decoded cleanly.
    pub valid_up_to: usize,
    /// Length of the maximal ill-formed subpart starting at `valid_up_to`.
    pub error_len: usize,
}

/// Decode one scalar value from the front of `bytes`.
///
/// On success returns the scalar and the number of bytes consumed. On failure
/// returns the length of the maximal ill-formed subpart (always at least 1).
/// `bytes` must be non-empty.
fn decode_one(bytes: &[u8]) -> Result<(Codepoint, usize), usize> {
    let lead = bytes[0];
    // Second-byte ranges follow Table 3-7 of the Unicode core specification; they
    // exclude overlongs (E0, F0), surrogates (ED) and values past U+10FFFF (F4).
    let (width, second) = match lead {
        0x00..=0x7F => return Ok((Codepoint::from(lead), 1)),
        0xC2..=0xDF => (2, CONTINUATION),
        0xE0 => (3, 0xA0..=0xBF),
        0xE1..=0xEC | 0xEE..=0xEF => (3, CONTINUATION),
        0xED => (3, 0x80..=0x9F),
        0xF0 => (4, 0x90..=0xBF),
        0xF1..=0xF3 => (4, CONTINUATION),
        0xF4 => (4, 0x80..=0x8F),
        _ => return Err(1),
    };

    let mut scalar = u32::from(lead) & (0x7F >> width);
    for i in 1..width {
        let Some(&byte) = bytes.get(i) else {
            return Err(i);
        };
        let allowed = if i == 1 { &second } else { &CONTINUATION };
        if !allowed.contains(&byte) {
            return Err(i);
        }
        scalar = (scalar << 6) | u32::from(byte & 0x3F);
    }

    Codepoint::from_u32(scalar)
        .map(|c| (c, width))
        .ok_or(width)
}

/// Lossy decoding iterator over a UTF-8 byte slice.
///
/// Yields U+FFFD once per maximal ill-formed subpart.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Decoder<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Byte offset of the next undecoded byte.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }
}

impl Iterator for Decoder<'_> {
    type Item = Codepoint;

    fn next(&mut self) -> Option<Codepoint> {
        let rest = &self.bytes[self.pos..];
        if rest.is_empty() {
            return None;
        }
        match decode_one(rest) {
            Ok((c, len)) => {
                self.pos += len;
                Some(c)
            }
            Err(len) => {
                self.pos += len;
                Some(REPLACEMENT_CHARACTER)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bytes.len() - self.pos;
        (remaining.div_ceil(4), Some(remaining))
    }
}

impl FusedIterator for Decoder<'_> {}

/// Decode `bytes` into scalar values, substituting U+FFFD for ill-formed input.
pub fn decode(bytes: &[u8]) -> Vec<Codepoint> {
    Decoder::new(bytes).collect()
}

/// Decode `bytes` into scalar values, failing on the first ill-formed subpart.
pub fn try_decode(bytes: &[u8]) -> Result<Vec<Codepoint>, DecodeError> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut pos = 0;
    while pos < bytes.len() {
        match decode_one(&bytes[pos..]) {
            Ok((c, len)) => {
                out.push(c);
                pos += len;
            }
            Err(error_len) => {
                return Err(DecodeError {
                    valid_up_to: pos,
                    error_len,
                })
            }
        }
    }
    Ok(out)
}

/// Encode scalar values as UTF-8 bytes.
pub fn encode(codepoints: &[Codepoint]) -> Vec<u8> {
    let len = codepoints.iter().map(|c| c.len_utf8()).sum();
    let mut out = Vec::with_capacity(len);
    let mut buf = [0u8; 4];
    for c in codepoints {
        out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
    }
    out
}

/// Encode a stream of scalar values straight into a `String`.
pub fn encode_to_string(codepoints: impl IntoIterator<Item = Codepoint>) -> String {
    let iter = codepoints.into_iter();
    let mut out = String::with_capacity(iter.size_hint().0);
    out.extend(iter);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_each_encoding_width() {
        let text = "a\u{e9}\u{4e2d}\u{1f980}";
        assert_eq!(decode(text.as_bytes()), vec!['a', 'é', '中', '🦀']);
        assert_eq!(try_decode(text.as_bytes()).unwrap(), decode(text.as_bytes()));
    }

    #[test]
    fn encode_inverts_decode() {
        let text = "Ærøskøbing Ψυχή Москва Երևան";
        assert_eq!(encode(&decode(text.as_bytes())), text.as_bytes());
        assert_eq!(encode_to_string(decode(text.as_bytes())), text);
    }

    #[test]
    fn empty_input() {
        assert!(decode(b"").is_empty());
        assert_eq!(try_decode(b""), Ok(Vec::new()));
        assert!(encode(&[]).is_empty());
    }

    #[test]
    fn truncated_sequence_is_replaced_once() {
        // First two bytes of a three-byte sequence.
        assert_eq!(decode(b"ab\xE4\xB8"), vec!['a', 'b', REPLACEMENT_CHARACTER]);
        assert_eq!(
            try_decode(b"ab\xE4\xB8"),
            Err(DecodeError {
                valid_up_to: 2,
                error_len: 2
            })
        );
    }

    #[test]
    fn overlong_and_surrogate_forms_are_rejected() {
        // Overlong '/' and an encoded surrogate U+D800.
        assert_eq!(
            decode(b"\xC0\xAF\xED\xA0\x80"),
            vec![REPLACEMENT_CHARACTER; 5]
        );
        assert_eq!(try_decode(b"\xC0\xAF").unwrap_err().error_len, 1);
        assert_eq!(try_decode(b"\xE0\x80\x80").unwrap_err().error_len, 1);
    }

    #[test]
    fn beyond_unicode_range_is_rejected() {
        assert_eq!(decode(b"\xF4\x90\x80\x80"), vec![REPLACEMENT_CHARACTER; 4]);
        assert_eq!(decode(b"\xF5"), vec![REPLACEMENT_CHARACTER]);
    }

    #[test]
    fn lossy_decoding_matches_std() {
        let samples: &[&[u8]] = &[
            b"plain ascii",
            b"\xFF\xFEx",
            b"\xE2\x82",
            b"caf\xC3\xA9 \xC3",
            b"\xF0\x9F\xA6\x80\xF0\x9F",
            b"\x80\x80\xC2",
        ];
        for bytes in samples {
            let expected: Vec<char> = String::from_utf8_lossy(bytes).chars().collect();
            assert_eq!(decode(bytes), expected, "{bytes:?}");
        }
    }

    #[test]
    fn decoder_reports_offset() {
        let mut decoder = Decoder::new("é!".as_bytes());
        assert_eq!(decoder.next(), Some('é'));
        assert_eq!(decoder.offset(), 2);
        assert_eq!(decoder.next(), Some('!'));
        assert_eq!(decoder.next(), None);
        assert_eq!(decoder.next(), None);
    }
}
