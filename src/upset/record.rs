//! Intersection records and combination keys.

use std::fmt;

use crate::plotting::error::{PlotError, PlotResult};

/// Delimiter used by the legacy `"0-1-"` index encoding.
const INDEX_DELIMITER: char = '-';

/// Ascending member-set indices of one set combination.
///
/// Ordering is lexicographic over the indices, which matches string
/// ordering of the concatenated key while every index is a single digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CombinationKey(Vec<usize>);

impl CombinationKey {
    pub fn singleton(index: usize) -> Self {
        CombinationKey(vec![index])
    }

    pub fn pair(first: usize, second: usize) -> Self {
        debug_assert!(first < second);
        CombinationKey(vec![first, second])
    }

    /// Key for this combination plus `index`, which must exceed every
    /// current member.
    pub fn extended(&self, index: usize) -> Self {
        debug_assert!(self.0.last().is_none_or(|&last| last < index));
        let mut indices = Vec::with_capacity(self.0.len() + 1);
        indices.extend_from_slice(&self.0);
        indices.push(index);
        CombinationKey(indices)
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn is_singleton(&self) -> bool {
        self.0.len() == 1
    }

    /// Key as shown in a collection of `num_sets` sets.
    ///
    /// Up to ten sets every index is one digit and the indices are
    /// concatenated (`"012"`). Past ten, every key of the collection is
    /// `.`-joined (`"1.2"`, `"12"`), so `{1, 2}` and `{12}` stay distinct.
    pub fn display(&self, num_sets: usize) -> String {
        let separator = if num_sets > 10 { "." } else { "" };
        self.joined(separator)
    }

    fn joined(&self, separator: &str) -> String {
        let parts: Vec<String> = self.0.iter().map(|i| i.to_string()).collect();
        parts.join(separator)
    }

    /// Parse the legacy delimited form.
    ///
    /// Empty tokens are skipped, so `"0-1--2-"` parses to `[0, 1, 2]`. Any
    /// non-integer token fails the whole parse. Indices are sorted and
    /// deduplicated.
    pub fn parse_delimited(s: &str) -> PlotResult<Self> {
        let mut indices = s
            .split(INDEX_DELIMITER)
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| PlotError::InvalidSetIndex(token.to_string()))
            })
            .collect::<PlotResult<Vec<usize>>>()?;

        if indices.is_empty() {
            return Err(PlotError::InvalidData(format!(
                "set index list '{}' names no sets",
                s
            )));
        }
        indices.sort_unstable();
        indices.dedup();
        Ok(CombinationKey(indices))
    }
}

/// Indices joined with `-` (`"0-1-2"`), for log messages.
impl fmt::Display for CombinationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.joined("-"))
    }
}

/// One discovered set combination and the elements shared by all members.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionRecord<T> {
    pub key: CombinationKey,
    pub elements: Vec<T>,
}

impl<T> IntersectionRecord<T> {
    pub fn new(key: CombinationKey, elements: Vec<T>) -> Self {
        IntersectionRecord { key, elements }
    }

    /// Build a record from the legacy `{set, names, setIndices}` triple.
    ///
    /// `set_indices` is parsed exactly once here; `set` is only checked for
    /// agreement with the parsed indices, in either the concatenated or
    /// the `.`-joined form.
    pub fn from_legacy(set: &str, elements: Vec<T>, set_indices: &str) -> PlotResult<Self> {
        let key = CombinationKey::parse_delimited(set_indices)?;
        if key.joined("") != set && key.joined(".") != set {
            log::warn!(
                "Combination key '{}' does not match set indices {}; using indices",
                set,
                key
            );
        }
        Ok(IntersectionRecord { key, elements })
    }

    pub fn set_indices(&self) -> &[usize] {
        self.key.indices()
    }

    /// Intersection cardinality.
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    pub fn is_singleton(&self) -> bool {
        self.key.is_singleton()
    }
}
