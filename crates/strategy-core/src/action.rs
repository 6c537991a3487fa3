//! The `Action` strategy trait and its function-pointer adapter.

/// Signature shared by every catalog function.
pub type ActionFn = fn(&crate::Value) -> String;

/// An interchangeable strategy: takes one value, returns a formatted string.
pub trait Action: Send + Sync {
    /// Apply the action to a value.
    fn apply(&self, value: &crate::Value) -> String;

    /// Get the name of this action.
    fn name(&self) -> &str;
}

/// Adapts a named plain function to the `Action` trait.
#[derive(Debug, Clone, Copy)]
pub struct FnAction {
    name: &'static str,
    func: ActionFn,
}

impl FnAction {
    #[must_use]
    pub const fn new(name: &'static str, func: ActionFn) -> Self {
        Self { name, func }
    }
}

impl Action for FnAction {
    fn apply(&self, value: &crate::Value) -> String {
        (self.func)(value)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
