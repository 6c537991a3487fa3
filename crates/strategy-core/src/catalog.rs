//! The standard action catalog and lookup by name.

use std::sync::Arc;

use crate::action::{Action, FnAction};
use crate::constants::FALLBACK_NAME;
use crate::value::Value;

/// Tag the value with `alpha`.
#[must_use]
pub fn alpha(value: &Value) -> String {
    format!("alpha {value}")
}

/// Tag the value with `beta`.
#[must_use]
pub fn beta(value: &Value) -> String {
    format!("beta {value}")
}

/// Tag the value with `delta`.
#[must_use]
pub fn delta(value: &Value) -> String {
    format!("delta {value}")
}

/// Return the value unchanged.
#[must_use]
pub fn identity(value: &Value) -> String {
    value.to_string()
}

/// The fallback action used for unknown keys.
#[must_use]
pub fn fallback_action() -> Arc<dyn Action> {
    Arc::new(FnAction::new(FALLBACK_NAME, identity))
}

/// The standard catalog, in its fixed order: alpha, beta, delta.
#[must_use]
pub fn standard_actions() -> Vec<Arc<dyn Action>> {
    vec![
        Arc::new(FnAction::new("alpha", alpha)),
        Arc::new(FnAction::new("beta", beta)),
        Arc::new(FnAction::new("delta", delta)),
    ]
}

/// Lookup of catalog actions by name.
pub trait ActionCatalog: Send + Sync {
    /// Get an action by name.
    fn get(&self, name: &str) -> Option<Arc<dyn Action>>;

    /// List all available action names, in catalog order.
    fn available(&self) -> Vec<&str>;
}

/// Catalog backed by [`standard_actions`].
pub struct StandardCatalog {
    actions: Vec<Arc<dyn Action>>,
}

impl StandardCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self {
            actions: standard_actions(),
        }
    }

    /// The ordered actions.
    #[must_use]
    pub fn actions(&self) -> &[Arc<dyn Action>] {
        &self.actions
    }
}

impl Default for StandardCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionCatalog for StandardCatalog {
    fn get(&self, name: &str) -> Option<Arc<dyn Action>> {
        self.actions
            .iter()
            .find(|action| action.name() == name)
            .map(Arc::clone)
    }

    fn available(&self) -> Vec<&str> {
        self.actions.iter().map(|action| action.name()).collect()
    }
}
