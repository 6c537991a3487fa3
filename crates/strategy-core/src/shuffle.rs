//! Fair shuffling and sequential dispatch of an ordered catalog.

use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::action::Action;
use crate::value::Value;

/// Return a uniformly random permutation of `items`.
///
/// The input is left untouched. With a seeded `rng` the result is
/// deterministic.
#[must_use]
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(rng);
    out
}

/// Invoke each action with its 1-based position in `actions`.
#[must_use]
pub fn dispatch_in_order(actions: &[Arc<dyn Action>]) -> Vec<String> {
    (1_i64..)
        .zip(actions)
        .map(|(count, action)| {
            debug!(count, action = action.name(), "dispatch");
            action.apply(&Value::Int(count))
        })
        .collect()
}

/// Shuffle `actions`, then dispatch them in the shuffled order.
///
/// Counters follow the printed order, not the catalog order.
#[must_use]
pub fn randomized_dispatch<R: Rng + ?Sized>(
    actions: &[Arc<dyn Action>],
    rng: &mut R,
) -> Vec<String> {
    let order = shuffled(actions, rng);
    dispatch_in_order(&order)
}
