//! Statistical fairness of the randomized dispatcher.
//!
//! Counts how often each of the 3! orderings of the standard catalog is
//! produced and runs a chi-square goodness-of-fit test against the uniform
//! distribution.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::SeedableRng;

use strategy_core::{randomized_dispatch, standard_actions};

/// Trials per ordering; 6 orderings.
const EXPECTED_PER_ORDERING: usize = 1_000;

/// Chi-square critical value for 5 degrees of freedom at p = 0.001.
const CHI_SQUARE_CRITICAL: f64 = 20.515;

fn ordering_counts(seed: u64, trials: usize) -> HashMap<Vec<String>, usize> {
    let actions = standard_actions();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut counts = HashMap::new();
    for _ in 0..trials {
        let labels: Vec<String> = randomized_dispatch(&actions, &mut rng)
            .into_iter()
            .map(|line| line.split(' ').next().unwrap_or_default().to_string())
            .collect();
        *counts.entry(labels).or_insert(0) += 1;
    }
    counts
}

#[allow(clippy::cast_precision_loss)]
fn chi_square(counts: &HashMap<Vec<String>, usize>, expected: usize) -> f64 {
    let expected = expected as f64;
    counts
        .values()
        .map(|&observed| {
            let diff = observed as f64 - expected;
            diff * diff / expected
        })
        .sum()
}

#[test]
fn every_ordering_appears() {
    let counts = ordering_counts(2024, 600);
    assert_eq!(counts.len(), 6);
}

#[test]
fn orderings_are_uniform() {
    let trials = EXPECTED_PER_ORDERING * 6;
    let counts = ordering_counts(7, trials);
    assert_eq!(counts.len(), 6);
    assert_eq!(counts.values().sum::<usize>(), trials);

    let stat = chi_square(&counts, EXPECTED_PER_ORDERING);
    assert!(
        stat < CHI_SQUARE_CRITICAL,
        "chi-square {stat:.2} exceeds {CHI_SQUARE_CRITICAL}: {counts:?}"
    );
}

#[test]
fn counters_match_print_position() {
    let actions = standard_actions();
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..600 {
        let lines = randomized_dispatch(&actions, &mut rng);
        for (i, line) in lines.iter().enumerate() {
            assert!(line.ends_with(&format!(" {}", i + 1)), "{line}");
        }
    }
}
