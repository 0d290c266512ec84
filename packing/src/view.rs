//! Read-only views over the packing list: sorted projections and progress.
//!
//! Nothing here mutates state. A projection borrows the entries and returns
//! them in a new order; the list itself always stays in insertion order.

use crate::types::Entry;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;
use thiserror::Error;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Order in which to show the list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// The order items were added
    #[default]
    #[serde(alias = "input")]
    Insertion,
    /// Alphabetical by description
    Description,
    /// Unpacked items first
    #[serde(alias = "packed")]
    PackedStatus,
}

impl SortKey {
    /// Every sort key, in menu order
    pub const ALL: [Self; 3] = [Self::Insertion, Self::Description, Self::PackedStatus];

    /// Short name accepted by [`SortKey::from_str`]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Insertion => "input",
            Self::Description => "description",
            Self::PackedStatus => "packed",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized sort key name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown sort order '{0}' (expected input, description or packed)")]
pub struct ParseSortKeyError(pub String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "input" | "insertion" => Ok(Self::Insertion),
            "description" => Ok(Self::Description),
            "packed" | "packedstatus" | "packed-status" => Ok(Self::PackedStatus),
            other => Err(ParseSortKeyError(other.to_string())),
        }
    }
}

/// Returns the entries in `key` order without touching `entries`
///
/// All orders are stable: entries that compare equal keep insertion order.
#[must_use]
pub fn project(entries: &[Entry], key: SortKey) -> Vec<&Entry> {
    let mut projected: Vec<&Entry> = entries.iter().collect();
    match key {
        SortKey::Insertion => {}
        SortKey::Description => {
            projected.sort_by(|a, b| locale_cmp(&a.description, &b.description));
        }
        SortKey::PackedStatus => projected.sort_by_key(|e| e.packed),
    }
    projected
}

/// Human-friendly string comparison
///
/// Compares level by level and only moves on when the previous level ties:
/// 1. base letters, ignoring accents and case
/// 2. accents
/// 3. case, lowercase first
/// 4. raw code points, so distinct strings never compare equal
#[must_use]
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| with_accents(a).cmp(with_accents(b)))
        .then_with(|| case_pattern(a).cmp(case_pattern(b)))
        .then_with(|| a.cmp(b))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn with_accents(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn case_pattern(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
}

/// How far along the packing is
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Statistics {
    /// Nothing on the list yet
    Empty,
    /// At least one entry on the list
    Progress {
        /// Number of entries
        total: usize,
        /// Number of packed entries
        packed: usize,
        /// `packed / total` as a whole percentage, rounded half up
        percentage: u8,
    },
}

impl Statistics {
    /// Computes statistics for `entries`
    #[must_use]
    pub fn of(entries: &[Entry]) -> Self {
        let total = entries.len();
        if total == 0 {
            return Self::Empty;
        }

        let packed = entries.iter().filter(|e| e.packed).count();
        Self::Progress {
            total,
            packed,
            percentage: rounded_percentage(packed, total),
        }
    }

    /// True once every entry is packed. An empty list is never complete.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        match self {
            Self::Empty => false,
            Self::Progress { total, packed, .. } => *packed == *total,
        }
    }
}

/// `round(part / whole * 100)` in integer arithmetic; `whole` must be non-zero
fn rounded_percentage(part: usize, whole: usize) -> u8 {
    let part = part as u128;
    let whole = whole as u128;
    let percentage = (part * 200 + whole) / (whole * 2);
    u8::try_from(percentage).unwrap_or(u8::MAX)
}
