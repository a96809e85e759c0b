//! Parsing and formatting of human-friendly numbers.
//!
//! Accepted inputs look like `3.14`, `1,500`, `2.5k`, `16M`, `1T`. Parsing is
//! all-or-nothing: trailing characters after the numeric literal are an error,
//! never silently ignored.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumberError {
    #[error("malformed number: {input:?}")]
    Malformed { input: String },
    #[error("invalid or unsupported unit suffix '{suffix}' in {input:?}")]
    InvalidUnitSuffix { suffix: char, input: String },
}

/// `isspace` in the C locale.
fn is_c_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Parse a decimal floating-point literal that must span the whole input.
///
/// Leading whitespace is skipped; anything after the literal (including
/// trailing whitespace) makes the input malformed. Besides plain decimals and
/// exponents, `inf`, `infinity` and `nan` are accepted in any case.
pub fn parse_strict_decimal(text: &str) -> Result<f64, NumberError> {
    text.trim_start_matches(is_c_space)
        .parse::<f64>()
        .map_err(|_| {
            tracing::trace!(input = text, "rejected malformed number");
            NumberError::Malformed {
                input: text.to_owned(),
            }
        })
}

fn unit_factor(suffix: char) -> Option<f64> {
    match suffix {
        'k' => Some(1e3),
        'M' => Some(1e6),
        'G' => Some(1e9),
        'T' => Some(1e12),
        _ => None,
    }
}

/// Parse a number with an optional unit suffix and optional thousands separators.
///
/// A final ASCII character at or above `'A'` is a unit suffix: `k` (10^3),
/// `M` (10^6), `G` (10^9) or `T` (10^12); any other is
/// [`NumberError::InvalidUnitSuffix`]. Every `,` is then removed without
/// checking where it sits, so `"1,2,3"` reads as `123`.
pub fn parse_unit_number(text: &str) -> Result<f64, NumberError> {
    let mut body = text;
    let mut factor = 1.0;

    if let Some(suffix) = text.chars().next_back().filter(|c| c.is_ascii() && *c >= 'A') {
        factor = unit_factor(suffix).ok_or_else(|| {
            tracing::trace!(input = text, %suffix, "rejected unit suffix");
            NumberError::InvalidUnitSuffix {
                suffix,
                input: text.to_owned(),
            }
        })?;
        body = &text[..text.len() - 1];
    }

    let digits: String = body.chars().filter(|&c| c != ',').collect();
    match parse_strict_decimal(&digits) {
        Ok(value) => Ok(value * factor),
        Err(_) => Err(NumberError::Malformed {
            input: text.to_owned(),
        }),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.char_indices() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

/// Render `n` with a `,` between every group of three digits, e.g. `1,234,567`.
pub fn format_with_thousands_separators(n: u64) -> String {
    group_thousands(&n.to_string())
}

pub fn format_with_thousands_separators_u128(n: u128) -> String {
    group_thousands(&n.to_string())
}

/// A number read from configuration or command-line text.
///
/// Deserializes from either a plain number or a string understood by
/// [`parse_unit_number`] (e.g. `"16M"`, `"1,500"`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct HumanNumber(pub f64);

impl HumanNumber {
    /// The value as an integer, if it is finite, non-negative, integral and fits.
    pub fn as_u64(self) -> Option<u64> {
        let value = self.0;
        let fits = value.is_finite() && value >= 0.0 && value.fract() == 0.0;
        // 2^64 is the first float that no longer fits.
        (fits && value < 18_446_744_073_709_551_616.0).then_some(value as u64)
    }
}

impl FromStr for HumanNumber {
    type Err = NumberError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_unit_number(s).map(HumanNumber)
    }
}

impl fmt::Display for HumanNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_u64() {
            Some(n) => f.write_str(&format_with_thousands_separators(n)),
            None => write!(f, "{}", self.0),
        }
    }
}

impl From<f64> for HumanNumber {
    fn from(value: f64) -> Self {
        HumanNumber(value)
    }
}

impl Serialize for HumanNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for HumanNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(f64),
            Human(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(value) => Ok(HumanNumber(value)),
            Repr::Human(text) => text.parse().map_err(serde::de::Error::custom),
        }
    }
}
