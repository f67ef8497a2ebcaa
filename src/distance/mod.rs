//! Edit distance with selectable metrics.
//!
//! The caller picks a [`DistanceMetric`], [`calculate_edit_distance`]
//! resolves it to the matching engine with an exhaustive match, and the
//! engine runs in isolation over the two borrowed strings. No state is
//! shared between calls.
//!
//! Unimplemented metrics resolve to an explicit
//! [`DistanceResult::NotImplemented`] rather than a max-value sentinel, so a
//! sentinel can never be mistaken for a legitimate distance.

mod levenshtein;
mod metric;

pub use levenshtein::levenshtein_distance;
pub use metric::DistanceMetric;

/// Outcome of an edit distance calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistanceResult {
    /// The metric is implemented and produced this distance.
    Computed(usize),

    /// The metric is a recognized selector without a working engine.
    NotImplemented,
}

impl DistanceResult {
    /// The computed distance, or `None` for an unimplemented metric.
    pub fn value(&self) -> Option<usize> {
        match self {
            DistanceResult::Computed(distance) => Some(*distance),
            DistanceResult::NotImplemented => None,
        }
    }

    /// Check whether a distance was actually computed.
    pub fn is_implemented(&self) -> bool {
        matches!(self, DistanceResult::Computed(_))
    }
}

impl std::fmt::Display for DistanceResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DistanceResult::Computed(distance) => write!(f, "{}", distance),
            DistanceResult::NotImplemented => f.write_str("not implemented"),
        }
    }
}

/// Calculate the edit distance between `a` and `b` under the selected metric.
///
/// Returns [`DistanceResult::Computed`] for implemented metrics and
/// [`DistanceResult::NotImplemented`] for the rest; see the
/// [`DistanceMetric`] variant docs for which is which.
///
/// # Example
///
/// ```rust
/// use libstralg::distance::{calculate_edit_distance, DistanceMetric, DistanceResult};
///
/// let result = calculate_edit_distance(DistanceMetric::Levenshtein, "kitten", "sitting");
/// assert_eq!(result, DistanceResult::Computed(3));
///
/// let result = calculate_edit_distance(DistanceMetric::Hamming, "abc", "abd");
/// assert_eq!(result, DistanceResult::NotImplemented);
/// ```
pub fn calculate_edit_distance(metric: DistanceMetric, a: &str, b: &str) -> DistanceResult {
    match metric {
        DistanceMetric::Levenshtein => {
            DistanceResult::Computed(levenshtein::levenshtein_distance(a, b))
        }
        DistanceMetric::LongestCommonSubsequence => DistanceResult::NotImplemented,
        DistanceMetric::Hamming => DistanceResult::NotImplemented,
        DistanceMetric::DamerauLevenshtein => DistanceResult::NotImplemented,
        DistanceMetric::Jaro => DistanceResult::NotImplemented,
    }
}
