//! Error type for catalog construction and strict dispatch.

/// Error type for dispatch operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// No action is registered under the key.
    #[error("unknown action: {0}")]
    UnknownAction(String),

    /// The key was registered twice.
    #[error("duplicate action: {0}")]
    DuplicateAction(String),

    /// A table was built without any entries.
    #[error("catalog is empty")]
    EmptyCatalog,
}
