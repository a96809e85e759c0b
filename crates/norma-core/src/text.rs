//! Tokenizing, trimming and joining helpers.
//!
//! Everything here is total: an empty delimiter (or an empty delimiter set)
//! never matches, so the whole line comes back as a single token.

/// Characters stripped by [`trim`], [`trim_left`] and [`trim_right`].
pub const DEFAULT_WHITESPACE: &str = " \t\n";

/// Delimiter callers use when they have no better choice.
pub const DEFAULT_DELIMITER: &str = " ";

#[inline]
fn push_token<'a>(pieces: &mut Vec<&'a str>, token: &'a str, keep_empty: bool) {
    if keep_empty || !token.is_empty() {
        pieces.push(token);
    }
}

pub fn trim(s: &str) -> &str {
    trim_with(s, DEFAULT_WHITESPACE)
}

pub fn trim_left(s: &str) -> &str {
    trim_left_with(s, DEFAULT_WHITESPACE)
}

pub fn trim_right(s: &str) -> &str {
    trim_right_with(s, DEFAULT_WHITESPACE)
}

/// Strip every character of `whitespace` from both ends of `s`.
pub fn trim_with<'a>(s: &'a str, whitespace: &str) -> &'a str {
    s.trim_matches(|c: char| whitespace.contains(c))
}

pub fn trim_left_with<'a>(s: &'a str, whitespace: &str) -> &'a str {
    s.trim_start_matches(|c: char| whitespace.contains(c))
}

pub fn trim_right_with<'a>(s: &'a str, whitespace: &str) -> &'a str {
    s.trim_end_matches(|c: char| whitespace.contains(c))
}

/// In-place form of [`trim`]; reuses the existing allocation.
pub fn trim_in_place(s: &mut String) {
    trim_with_in_place(s, DEFAULT_WHITESPACE);
}

pub fn trim_left_in_place(s: &mut String) {
    trim_left_with_in_place(s, DEFAULT_WHITESPACE);
}

pub fn trim_right_in_place(s: &mut String) {
    trim_right_with_in_place(s, DEFAULT_WHITESPACE);
}

/// In-place form of [`trim_with`].
pub fn trim_with_in_place(s: &mut String, whitespace: &str) {
    trim_right_with_in_place(s, whitespace);
    trim_left_with_in_place(s, whitespace);
}

pub fn trim_left_with_in_place(s: &mut String, whitespace: &str) {
    let start = s.len() - trim_left_with(s, whitespace).len();
    s.drain(..start);
}

pub fn trim_right_with_in_place(s: &mut String, whitespace: &str) {
    let end = trim_right_with(s, whitespace).len();
    s.truncate(end);
}

/// Split `line` at every non-overlapping occurrence of `delimiter`, scanning
/// left to right.
///
/// Empty tokens (from adjacent delimiters or a delimiter at either end) are
/// dropped unless `keep_empty` is set. With `keep_empty`, joining the tokens
/// back with `delimiter` reproduces `line`.
pub fn split<'a>(line: &'a str, delimiter: &str, keep_empty: bool) -> Vec<&'a str> {
    let mut pieces = Vec::new();
    split_into(line, &mut pieces, delimiter, keep_empty);
    pieces
}

/// Like [`split`], appending the tokens to `pieces`.
pub fn split_into<'a>(
    line: &'a str,
    pieces: &mut Vec<&'a str>,
    delimiter: &str,
    keep_empty: bool,
) {
    // `str::split("")` matches between every character.
    if delimiter.is_empty() {
        push_token(pieces, line, keep_empty);
        return;
    }
    for token in line.split(delimiter) {
        push_token(pieces, token, keep_empty);
    }
}

/// Split `line` at any single character contained in `delimiters`.
pub fn split_any<'a>(line: &'a str, delimiters: &str, keep_empty: bool) -> Vec<&'a str> {
    let mut pieces = Vec::new();
    split_any_into(line, &mut pieces, delimiters, keep_empty);
    pieces
}

/// Like [`split_any`], appending the tokens to `pieces`.
pub fn split_any_into<'a>(
    line: &'a str,
    pieces: &mut Vec<&'a str>,
    delimiters: &str,
    keep_empty: bool,
) {
    for token in line.split(|c: char| delimiters.contains(c)) {
        push_token(pieces, token, keep_empty);
    }
}

/// Concatenate `tokens`, placing `delimiter` between neighbours.
pub fn join<S: AsRef<str>>(tokens: &[S], delimiter: &str) -> String {
    let Some((first, rest)) = tokens.split_first() else {
        return String::new();
    };

    let len = tokens.iter().map(|t| t.as_ref().len()).sum::<usize>()
        + delimiter.len() * rest.len();
    let mut out = String::with_capacity(len);
    out.push_str(first.as_ref());
    for token in rest {
        out.push_str(delimiter);
        out.push_str(token.as_ref());
    }
    out
}

/// Byte-wise prefix test.
#[inline]
pub fn begins_with(text: &str, prefix: &str) -> bool {
    text.as_bytes().starts_with(prefix.as_bytes())
}

/// Byte-wise suffix test.
#[inline]
pub fn ends_with(text: &str, suffix: &str) -> bool {
    text.as_bytes().ends_with(suffix.as_bytes())
}
