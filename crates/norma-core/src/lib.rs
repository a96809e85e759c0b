//! Locale-independent text normalization and human-friendly number helpers.
//!
//! Uppercasing goes through a fixed case map table instead of the host's locale
//! tables, so results are identical on every machine regardless of which
//! locales happen to be installed.

pub mod case_map;
mod case_table;
pub mod codec;
pub mod number;
pub mod text;

pub use case_map::{to_upper, to_upper_bytes, CaseMap, CaseMapError};
pub use codec::{decode, encode, encode_to_string, try_decode, Codepoint, DecodeError};
pub use number::{
    format_with_thousands_separators, format_with_thousands_separators_u128,
    parse_strict_decimal, parse_unit_number, HumanNumber, NumberError,
};
pub use text::{
    begins_with, ends_with, join, split, split_any, split_any_into, split_into, trim,
    trim_in_place, trim_left, trim_left_in_place, trim_left_with, trim_left_with_in_place,
    trim_right, trim_right_in_place, trim_right_with, trim_right_with_in_place, trim_with,
    trim_with_in_place, DEFAULT_DELIMITER, DEFAULT_WHITESPACE,
};
