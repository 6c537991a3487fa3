//! # strategy-core
//!
//! Core library for the strategy dispatch programs.
//! Provides interchangeable actions, the keyed dispatch table with its
//! identity fallback, and the fair shuffle behind randomized dispatch.

pub mod action;
pub mod catalog;
pub mod constants;
pub mod dispatch;
pub mod error;
pub mod shuffle;
pub mod value;

// Re-exports
pub use action::{Action, ActionFn, FnAction};
pub use catalog::{standard_actions, ActionCatalog, StandardCatalog};
pub use constants::{exit_codes, FIXED_KEY, FIXED_VALUE};
pub use dispatch::{DispatchTable, DispatchTableBuilder};
pub use error::DispatchError;
pub use shuffle::{dispatch_in_order, randomized_dispatch, shuffled};
pub use value::Value;

/// Resolve `key` against the standard table and apply it to `value`.
///
/// Unknown keys fall back to the identity action, so this never fails.
///
/// # Example
/// ```
/// assert_eq!(strategy_core::dispatch_lookup("alpha", 100_i64), "alpha 100");
/// assert_eq!(strategy_core::dispatch_lookup("beta", "x"), "beta x");
/// assert_eq!(strategy_core::dispatch_lookup("unknown-key", "x"), "x");
/// ```
#[must_use]
pub fn dispatch_lookup(key: &str, value: impl Into<Value>) -> String {
    DispatchTable::standard().dispatch(key, &value.into())
}
