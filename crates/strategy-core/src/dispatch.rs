//! Keyed dispatch table with a fallback action.
//!
//! A `DispatchTable` is immutable once built. Keys resolve by exact match;
//! unknown keys resolve to the fallback instead of failing.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info};

use crate::action::Action;
use crate::catalog::{fallback_action, standard_actions};
use crate::error::DispatchError;
use crate::value::Value;

/// Builder for a [`DispatchTable`].
pub struct DispatchTableBuilder {
    order: Vec<String>,
    entries: HashMap<String, Arc<dyn Action>>,
    fallback: Arc<dyn Action>,
}

impl DispatchTableBuilder {
    /// Create an empty builder with the identity fallback.
    #[must_use]
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            entries: HashMap::new(),
            fallback: fallback_action(),
        }
    }

    /// Register `action` under `key`.
    pub fn register(
        mut self,
        key: impl Into<String>,
        action: Arc<dyn Action>,
    ) -> Result<Self, DispatchError> {
        let key = key.into();
        if self.entries.contains_key(&key) {
            return Err(DispatchError::DuplicateAction(key));
        }
        self.order.push(key.clone());
        self.entries.insert(key, action);
        Ok(self)
    }

    /// Replace the fallback action.
    #[must_use]
    pub fn fallback(mut self, action: Arc<dyn Action>) -> Self {
        self.fallback = action;
        self
    }

    /// Finish the table. Fails if nothing was registered.
    pub fn build(self) -> Result<DispatchTable, DispatchError> {
        if self.entries.is_empty() {
            return Err(DispatchError::EmptyCatalog);
        }
        Ok(DispatchTable {
            order: self.order,
            entries: self.entries,
            fallback: self.fallback,
        })
    }
}

impl Default for DispatchTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable mapping from dispatch key to action.
pub struct DispatchTable {
    order: Vec<String>,
    entries: HashMap<String, Arc<dyn Action>>,
    fallback: Arc<dyn Action>,
}

impl DispatchTable {
    /// Start building a table.
    #[must_use]
    pub fn builder() -> DispatchTableBuilder {
        DispatchTableBuilder::new()
    }

    /// The standard table: alpha, beta, delta keyed by name, identity fallback.
    #[must_use]
    pub fn standard() -> Self {
        let mut order = Vec::new();
        let mut entries = HashMap::new();
        for action in standard_actions() {
            let key = action.name().to_string();
            order.push(key.clone());
            entries.insert(key, action);
        }
        Self {
            order,
            entries,
            fallback: fallback_action(),
        }
    }

    /// Strict lookup.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Arc<dyn Action>> {
        self.entries.get(key)
    }

    /// Lookup with fallback. Never fails.
    #[must_use]
    pub fn resolve(&self, key: &str) -> &dyn Action {
        match self.entries.get(key) {
            Some(action) => action.as_ref(),
            None => {
                info!(key, fallback = self.fallback.name(), "unknown action, using fallback");
                self.fallback.as_ref()
            }
        }
    }

    /// Resolve `key` and apply the action to `value`.
    #[must_use]
    pub fn dispatch(&self, key: &str, value: &Value) -> String {
        let action = self.resolve(key);
        debug!(key, action = action.name(), %value, "dispatch");
        action.apply(value)
    }

    /// Apply the action registered under `key`, failing if there is none.
    pub fn dispatch_strict(&self, key: &str, value: &Value) -> Result<String, DispatchError> {
        let action = self
            .get(key)
            .ok_or_else(|| DispatchError::UnknownAction(key.to_string()))?;
        debug!(key, action = action.name(), %value, "dispatch");
        Ok(action.apply(value))
    }

    /// Registered keys in registration order.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    /// The fallback action.
    #[must_use]
    pub fn fallback(&self) -> &dyn Action {
        self.fallback.as_ref()
    }

    /// Number of registered entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for DispatchTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::FnAction;
    use crate::catalog::{alpha, beta};

    fn upper(value: &Value) -> String {
        value.to_string().to_uppercase()
    }

    #[test]
    fn standard_table_dispatch() {
        let table = DispatchTable::standard();
        assert_eq!(table.dispatch("alpha", &Value::Int(100)), "alpha 100");
        assert_eq!(table.dispatch("beta", &Value::from("x")), "beta x");
        assert_eq!(table.dispatch("delta", &Value::from("x")), "delta x");
    }

    #[test]
    fn unknown_key_uses_fallback() {
        let table = DispatchTable::standard();
        assert_eq!(table.dispatch("unknown-key", &Value::from("x")), "x");
        assert_eq!(table.dispatch("nope", &Value::from("")), "");
        assert_eq!(table.dispatch("", &Value::Int(5)), "5");
    }

    #[test]
    fn resolve_returns_fallback_for_unknown() {
        let table = DispatchTable::standard();
        assert_eq!(table.resolve("alpha").name(), "alpha");
        assert_eq!(table.resolve("gamma").name(), "identity");
    }

    #[test]
    fn strict_dispatch() {
        let table = DispatchTable::standard();
        assert_eq!(
            table.dispatch_strict("alpha", &Value::Int(100)).unwrap(),
            "alpha 100"
        );
        assert_eq!(
            table.dispatch_strict("gamma", &Value::Int(1)),
            Err(DispatchError::UnknownAction("gamma".into()))
        );
    }

    #[test]
    fn keys_in_registration_order() {
        let table = DispatchTable::standard();
        assert_eq!(table.keys(), vec!["alpha", "beta", "delta"]);
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
    }

    #[test]
    fn builder_registers_entries() {
        let table = DispatchTable::builder()
            .register("b", Arc::new(FnAction::new("beta", beta)))
            .unwrap()
            .register("a", Arc::new(FnAction::new("alpha", alpha)))
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(table.keys(), vec!["b", "a"]);
        assert_eq!(table.dispatch("a", &Value::Int(1)), "alpha 1");
        assert!(table.get("alpha").is_none());
    }

    #[test]
    fn builder_rejects_duplicate_key() {
        let result = DispatchTableBuilder::new()
            .register("a", Arc::new(FnAction::new("alpha", alpha)))
            .unwrap()
            .register("a", Arc::new(FnAction::new("beta", beta)));
        assert!(matches!(result, Err(DispatchError::DuplicateAction(k)) if k == "a"));
    }

    #[test]
    fn builder_rejects_empty_table() {
        let result = DispatchTableBuilder::default().build();
        assert!(matches!(result, Err(DispatchError::EmptyCatalog)));
    }

    #[test]
    fn custom_fallback() {
        let table = DispatchTable::builder()
            .register("alpha", Arc::new(FnAction::new("alpha", alpha)))
            .unwrap()
            .fallback(Arc::new(FnAction::new("upper", upper)))
            .build()
            .unwrap();
        assert_eq!(table.fallback().name(), "upper");
        assert_eq!(table.dispatch("missing", &Value::from("quiet")), "QUIET");
    }

    #[test]
    fn dispatch_is_idempotent() {
        let table = DispatchTable::default();
        let value = Value::from("same");
        let outputs: Vec<String> = (0..5).map(|_| table.dispatch("beta", &value)).collect();
        assert!(outputs.iter().all(|o| o == "beta same"));
    }
}
