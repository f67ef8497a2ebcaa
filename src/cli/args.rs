//! CLI argument definitions

use clap::{Parser, Subcommand};

use crate::distance::DistanceMetric;
use crate::search::SearchAlgorithm;

/// Top-level CLI arguments.
#[derive(Parser)]
#[command(name = "libstralg")]
#[command(about = "Pluggable substring search and edit distance algorithms")]
#[command(version)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Find the first occurrence of a pattern in a text
    Search {
        /// The substring to look for
        needle: String,

        /// The string to look in
        haystack: String,

        /// Search algorithm
        #[arg(short, long, default_value = "knuth-morris-pratt")]
        algorithm: SearchAlgorithm,
    },

    /// Calculate the edit distance between two strings
    Distance {
        /// The first string to compare
        a: String,

        /// The second string to compare
        b: String,

        /// Distance metric
        #[arg(short, long, default_value = "levenshtein")]
        metric: DistanceMetric,
    },

    /// Greatest common divisor
    Gcd {
        /// First operand
        a: u64,

        /// Second operand
        b: u64,
    },

    /// Least common multiple
    Lcm {
        /// First operand
        a: u64,

        /// Second operand
        b: u64,
    },

    /// Test a number for primality
    Prime {
        /// The number to test
        n: u64,
    },

    /// Modular exponentiation
    Modpow {
        /// Base
        base: u64,

        /// Exponent
        exponent: u64,

        /// Modulus
        modulus: u64,
    },
}
