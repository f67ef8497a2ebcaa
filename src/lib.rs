//! # libstralg
//!
//! Pluggable substring search and edit distance algorithms.
//!
//! This library provides two independent, structurally identical subsystems
//! composed through the same dispatch pattern:
//!
//! - **Substring search**: four selectable strategies (naive, Rabin-Karp,
//!   finite automaton, Knuth-Morris-Pratt), dispatched by
//!   [`SearchAlgorithm`](search::SearchAlgorithm). KMP and naive search are
//!   fully implemented; the other two are documented stubs that always report
//!   no match.
//! - **Edit distance**: five selectable metrics (Levenshtein, longest common
//!   subsequence, Hamming, Damerau-Levenshtein, Jaro), dispatched by
//!   [`DistanceMetric`](distance::DistanceMetric). Levenshtein is fully
//!   implemented; the rest resolve to an explicit
//!   [`NotImplemented`](distance::DistanceResult::NotImplemented) result.
//!
//! Every operation is a pure, synchronous function over `&str`. Working
//! storage (the KMP prefix table, the Levenshtein rows) is owned by a single
//! call and dropped on every exit path; nothing is cached across calls.
//!
//! ## Example
//!
//! ```rust
//! use libstralg::prelude::*;
//!
//! let position = find_substring(SearchAlgorithm::KnuthMorrisPratt, "ABABC", "ABABDABABCABAB");
//! assert_eq!(position, Some(5));
//!
//! let distance = calculate_edit_distance(DistanceMetric::Levenshtein, "kitten", "sitting");
//! assert_eq!(distance.value(), Some(3));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod distance;
pub mod math;
pub mod search;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::distance::{calculate_edit_distance, DistanceMetric, DistanceResult};
    pub use crate::search::{find_substring, SearchAlgorithm};
}
