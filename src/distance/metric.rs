//! Edit distance metric variants.

use crate::search::ParseAlgorithmError;

/// Edit distance metric.
///
/// Each variant selects one concrete engine in
/// [`calculate_edit_distance`](crate::distance::calculate_edit_distance).
/// Only [`Levenshtein`](DistanceMetric::Levenshtein) has a working engine;
/// the other metrics are recognized selectors that resolve to
/// [`NotImplemented`](crate::distance::DistanceResult::NotImplemented).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Default)]
pub enum DistanceMetric {
    /// Minimum number of single-character insertions, deletions, and
    /// substitutions to transform one string into the other.
    ///
    /// Fully implemented (Wagner-Fischer dynamic programming), and the
    /// default metric.
    #[default]
    Levenshtein,

    /// Distance derived from the longest common subsequence. Not implemented.
    LongestCommonSubsequence,

    /// Count of positions at which equal-length strings differ. Not implemented.
    Hamming,

    /// Levenshtein extended with adjacent transposition. Not implemented.
    DamerauLevenshtein,

    /// Jaro similarity-based distance. Not implemented.
    Jaro,
}

impl DistanceMetric {
    /// Get a human-readable name for this metric
    pub fn name(&self) -> &'static str {
        match self {
            DistanceMetric::Levenshtein => "levenshtein",
            DistanceMetric::LongestCommonSubsequence => "longest-common-subsequence",
            DistanceMetric::Hamming => "hamming",
            DistanceMetric::DamerauLevenshtein => "damerau-levenshtein",
            DistanceMetric::Jaro => "jaro",
        }
    }

    /// Check whether this metric has a working engine behind it.
    pub fn is_implemented(&self) -> bool {
        matches!(self, DistanceMetric::Levenshtein)
    }

    /// Resolve a raw numeric selector tag.
    ///
    /// An out-of-range tag is recovered locally: a warning is emitted and the
    /// default metric is used, so the caller always gets a usable selector.
    pub fn from_tag(tag: u32) -> Self {
        match tag {
            0 => DistanceMetric::Levenshtein,
            1 => DistanceMetric::LongestCommonSubsequence,
            2 => DistanceMetric::Hamming,
            3 => DistanceMetric::DamerauLevenshtein,
            4 => DistanceMetric::Jaro,
            _ => {
                let fallback = DistanceMetric::default();
                tracing::warn!(
                    tag,
                    fallback = fallback.name(),
                    "unrecognized distance metric tag, falling back to default"
                );
                fallback
            }
        }
    }
}

impl std::fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for DistanceMetric {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "levenshtein" => Ok(DistanceMetric::Levenshtein),
            "longest-common-subsequence" | "lcs" => Ok(DistanceMetric::LongestCommonSubsequence),
            "hamming" => Ok(DistanceMetric::Hamming),
            "damerau-levenshtein" | "damerau" => Ok(DistanceMetric::DamerauLevenshtein),
            "jaro" => Ok(DistanceMetric::Jaro),
            _ => Err(ParseAlgorithmError {
                name: s.to_string(),
                valid: "levenshtein, longest-common-subsequence, hamming, damerau-levenshtein, jaro",
            }),
        }
    }
}
