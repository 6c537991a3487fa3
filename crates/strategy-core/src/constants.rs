//! Fixed keys, prompts, and exit codes.

/// Key used for the non-interactive keyed invocation.
pub const FIXED_KEY: &str = "alpha";

/// Value used for the non-interactive keyed invocation.
pub const FIXED_VALUE: i64 = 100;

/// Prompt shown before reading the dispatch key.
pub const ACTION_PROMPT: &str = "Action: ";

/// Prompt shown before reading the invocation value.
pub const VALUE_PROMPT: &str = "Value: ";

/// Name of the fallback action.
pub const FALLBACK_NAME: &str = "identity";

/// Process exit codes.
pub mod exit_codes {
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Standard input closed or unreadable.
    pub const ERROR_INPUT: i32 = 2;
    /// Invalid catalog configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
