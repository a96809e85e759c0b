//! Locale-independent uppercasing.
//!
//! [`CaseMap`] is an immutable lowercase -> uppercase scalar table. The built-in
//! table is constructed once per process on first use ([`CaseMap::builtin`]) and
//! only read afterwards, so concurrent callers need no locking.
//!
//! Scalars without an entry pass through unchanged. There is no titlecase,
//! no locale tailoring and no one-to-many expansion.

use std::fmt;
use std::sync::OnceLock;

use crate::case_table::UPPERCASE_PAIRS;
use crate::codec::{self, Codepoint, Decoder};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaseMapError {
    #[error("case map entry {index} ({lower:?} -> {upper:?}) must map exactly one scalar value to exactly one scalar value")]
    MalformedEntry {
        index: usize,
        lower: String,
        upper: String,
    },
    #[error("case map maps {lower:?} to both {first:?} and {second:?}")]
    ConflictingEntry {
        lower: Codepoint,
        first: Codepoint,
        second: Codepoint,
    },
}

/// Lowercase -> uppercase scalar mapping.
#[derive(Clone, PartialEq, Eq)]
pub struct CaseMap {
    /// Sorted by the lowercase scalar, no duplicate keys.
    entries: Vec<(Codepoint, Codepoint)>,
}

impl fmt::Debug for CaseMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaseMap")
            .field("entries", &self.entries.len())
            .finish()
    }
}

fn single_scalar(bytes: &[u8]) -> Option<Codepoint> {
    match codec::try_decode(bytes).ok()?.as_slice() {
        [c] => Some(*c),
        _ => None,
    }
}

impl CaseMap {
    /// Build a table from `(lowercase, uppercase)` UTF-8 pairs.
    ///
    /// Each side must decode to exactly one scalar value. Repeating an entry is
    /// allowed; mapping the same lowercase scalar to two different uppercase
    /// scalars is not.
    pub fn from_pairs<I, L, U>(pairs: I) -> Result<Self, CaseMapError>
    where
        I: IntoIterator<Item = (L, U)>,
        L: AsRef<[u8]>,
        U: AsRef<[u8]>,
    {
        let mut entries = Vec::new();
        for (index, (lower, upper)) in pairs.into_iter().enumerate() {
            let (lower, upper) = (lower.as_ref(), upper.as_ref());
            match (single_scalar(lower), single_scalar(upper)) {
                (Some(l), Some(u)) => entries.push((l, u)),
                _ => {
                    return Err(CaseMapError::MalformedEntry {
                        index,
                        lower: String::from_utf8_lossy(lower).into_owned(),
                        upper: String::from_utf8_lossy(upper).into_owned(),
                    })
                }
            }
        }

        entries.sort_by_key(|&(lower, _)| lower);
        entries.dedup();
        if let Some(pair) = entries.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(CaseMapError::ConflictingEntry {
                lower: pair[0].0,
                first: pair[0].1,
                second: pair[1].1,
            });
        }

        Ok(Self { entries })
    }

    /// The process-wide built-in table.
    ///
    /// Built on first call. The built-in data is part of the binary, so a
    /// malformed entry is a build defect: it is logged and the process panics.
    pub fn builtin() -> &'static CaseMap {
        static BUILTIN: OnceLock<CaseMap> = OnceLock::new();
        BUILTIN.get_or_init(|| match CaseMap::from_pairs(UPPERCASE_PAIRS.iter().copied()) {
            Ok(map) => {
                tracing::debug!(entries = map.len(), "built-in case map initialized");
                map
            }
            Err(err) => {
                tracing::error!(error = %err, "built-in case map table is corrupt");
                panic!("built-in case map table is corrupt: {err}");
            }
        })
    }

    /// Uppercase form of `c`, or `c` itself when the table has no entry.
    #[inline]
    pub fn to_upper_codepoint(&self, c: Codepoint) -> Codepoint {
        match self.entries.binary_search_by_key(&c, |&(lower, _)| lower) {
            Ok(ix) => self.entries[ix].1,
            Err(_) => c,
        }
    }

    fn map_bytes(&self, bytes: &[u8]) -> String {
        codec::encode_to_string(Decoder::new(bytes).map(|c| self.to_upper_codepoint(c)))
    }

    pub fn to_upper(&self, text: &str) -> String {
        self.map_bytes(text.as_bytes())
    }

    /// Like [`CaseMap::to_upper`] for raw bytes. Ill-formed UTF-8 is replaced by
    /// U+FFFD before mapping.
    pub fn to_upper_bytes(&self, bytes: &[u8]) -> Vec<u8> {
        self.map_bytes(bytes).into_bytes()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, lower: Codepoint) -> bool {
        self.entries
            .binary_search_by_key(&lower, |&(l, _)| l)
            .is_ok()
    }

    /// Entries in ascending order of the lowercase scalar.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Codepoint, Codepoint)> + '_ {
        self.entries.iter().copied()
    }
}

/// Uppercase `text` with the built-in table.
pub fn to_upper(text: &str) -> String {
    CaseMap::builtin().to_upper(text)
}

/// Uppercase UTF-8 `bytes` with the built-in table.
pub fn to_upper_bytes(bytes: &[u8]) -> Vec<u8> {
    CaseMap::builtin().to_upper_bytes(bytes)
}
