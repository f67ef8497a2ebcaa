//! Command execution shared between the CLI binary and tests.
//!
//! Handlers render their result to a display string so they can be unit
//! tested without spawning the binary.

use colored::Colorize;

use crate::cli::args::{Cli, Commands};
use crate::distance::{calculate_edit_distance, DistanceMetric, DistanceResult};
use crate::math;
use crate::search::{find_substring, SearchAlgorithm};

/// Run the `search` subcommand and render the outcome.
pub fn run_search(algorithm: SearchAlgorithm, needle: &str, haystack: &str) -> String {
    match find_substring(algorithm, needle, haystack) {
        Some(offset) => format!(
            "{} at character offset {} ({})",
            "match".green().bold(),
            offset,
            algorithm
        ),
        None if !algorithm.is_implemented() => format!(
            "{} ({} is not implemented)",
            "no match".yellow(),
            algorithm
        ),
        None => format!("{} ({})", "no match".red(), algorithm),
    }
}

/// Run the `distance` subcommand and render the outcome.
pub fn run_distance(metric: DistanceMetric, a: &str, b: &str) -> String {
    match calculate_edit_distance(metric, a, b) {
        DistanceResult::Computed(distance) => {
            format!("{} = {}", metric, distance.to_string().green().bold())
        }
        DistanceResult::NotImplemented => {
            format!("{} is {}", metric, "not implemented".yellow())
        }
    }
}

/// Run the `prime` subcommand and render the outcome.
pub fn run_prime(n: u64) -> String {
    if math::is_prime(n) {
        format!("{} is {}", n, "prime".green().bold())
    } else {
        format!("{} is {}", n, "composite".red())
    }
}

/// Execute a parsed command line, printing the result to stdout.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let output = match cli.command {
        Commands::Search {
            needle,
            haystack,
            algorithm,
        } => run_search(algorithm, &needle, &haystack),
        Commands::Distance { a, b, metric } => run_distance(metric, &a, &b),
        Commands::Gcd { a, b } => format!("gcd({}, {}) = {}", a, b, math::gcd(a, b)),
        Commands::Lcm { a, b } => format!("lcm({}, {}) = {}", a, b, math::lcm(a, b)),
        Commands::Prime { n } => run_prime(n),
        Commands::Modpow {
            base,
            exponent,
            modulus,
        } => {
            anyhow::ensure!(modulus > 0, "modulus must be positive");
            format!(
                "{}^{} mod {} = {}",
                base,
                exponent,
                modulus,
                math::mod_pow(base, exponent, modulus)
            )
        }
    };

    println!("{}", output);
    Ok(())
}
