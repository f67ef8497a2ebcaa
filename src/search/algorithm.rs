//! Substring search algorithm variants.

use thiserror::Error;

/// Substring search strategy.
///
/// Each variant selects one concrete engine in
/// [`find_substring`](crate::search::find_substring). The enum is closed, so
/// dispatch is an exhaustive match and an unimplemented variant is visible at
/// the call site rather than hidden behind a dangling function pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Default)]
pub enum SearchAlgorithm {
    /// Brute-force scan over every candidate offset.
    ///
    /// O((n - m + 1) * m) worst case. Fully implemented.
    Naive,

    /// Rabin-Karp rolling-hash search.
    ///
    /// Stub: resolves successfully but always reports no match,
    /// regardless of input.
    RabinKarp,

    /// Finite-automaton search.
    ///
    /// Stub: resolves successfully but always reports no match,
    /// regardless of input.
    FiniteAutomaton,

    /// Knuth-Morris-Pratt search.
    ///
    /// Precomputes a prefix function over the pattern, then scans the text
    /// in one pass with failure-function backtracking. O(n + m) total work.
    /// Fully implemented, and the default strategy.
    #[default]
    KnuthMorrisPratt,
}

/// Error returned when an algorithm or metric name fails to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm: {name}. Valid options: {valid}")]
pub struct ParseAlgorithmError {
    /// The name that failed to parse.
    pub name: String,
    /// Comma-separated list of accepted names.
    pub valid: &'static str,
}

impl SearchAlgorithm {
    /// Get a human-readable name for this algorithm
    pub fn name(&self) -> &'static str {
        match self {
            SearchAlgorithm::Naive => "naive",
            SearchAlgorithm::RabinKarp => "rabin-karp",
            SearchAlgorithm::FiniteAutomaton => "finite-automaton",
            SearchAlgorithm::KnuthMorrisPratt => "knuth-morris-pratt",
        }
    }

    /// Check whether this strategy has a working engine behind it.
    ///
    /// Rabin-Karp and finite-automaton are recognized selectors whose engines
    /// are stubs; they report no match for every input.
    pub fn is_implemented(&self) -> bool {
        matches!(
            self,
            SearchAlgorithm::Naive | SearchAlgorithm::KnuthMorrisPratt
        )
    }

    /// Resolve a raw numeric selector tag.
    ///
    /// Intended for callers that receive the selector as an integer (config
    /// files, foreign interfaces). An out-of-range tag is recovered locally:
    /// a warning is emitted and the default strategy is used.
    pub fn from_tag(tag: u32) -> Self {
        match tag {
            0 => SearchAlgorithm::Naive,
            1 => SearchAlgorithm::RabinKarp,
            2 => SearchAlgorithm::FiniteAutomaton,
            3 => SearchAlgorithm::KnuthMorrisPratt,
            _ => {
                let fallback = SearchAlgorithm::default();
                tracing::warn!(
                    tag,
                    fallback = fallback.name(),
                    "unrecognized search algorithm tag, falling back to default"
                );
                fallback
            }
        }
    }
}

impl std::fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for SearchAlgorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "naive" => Ok(SearchAlgorithm::Naive),
            "rabin-karp" | "rabinkarp" => Ok(SearchAlgorithm::RabinKarp),
            "finite-automaton" | "automaton" => Ok(SearchAlgorithm::FiniteAutomaton),
            "knuth-morris-pratt" | "kmp" => Ok(SearchAlgorithm::KnuthMorrisPratt),
            _ => Err(ParseAlgorithmError {
                name: s.to_string(),
                valid: "naive, rabin-karp, finite-automaton, knuth-morris-pratt",
            }),
        }
    }
}
