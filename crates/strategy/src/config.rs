//! Application configuration from CLI flags and environment.

use clap::Parser;

/// Invoke alpha, beta and delta in a random order with counters 1 to 3.
#[derive(Parser, Debug, Default)]
#[command(
    name = "randomized-dispatch",
    version,
    about = "Invoke alpha, beta and delta in a random order with counters 1 to 3"
)]
pub struct RandomizedConfig {
    /// Seed for the shuffle; omit for a fresh random order each run.
    #[arg(long, env = "STRATEGY_SEED")]
    pub seed: Option<u64>,
}

impl RandomizedConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

/// Dispatch a fixed key, then a key and value read from the console.
#[derive(Parser, Debug, Default)]
#[command(
    name = "keyed-dispatch",
    version,
    about = "Dispatch a fixed key, then a key and value read from the console"
)]
pub struct KeyedConfig {}

impl KeyedConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
