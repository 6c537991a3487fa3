//! Error handling and exit codes.

use strategy_cli::PromptError;
use strategy_core::exit_codes;
use strategy_core::DispatchError;

/// Map an application error to a process exit code.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(err) = err.downcast_ref::<DispatchError>() {
        return match err {
            DispatchError::DuplicateAction(_) | DispatchError::EmptyCatalog => {
                exit_codes::ERROR_CONFIG
            }
            DispatchError::UnknownAction(_) => exit_codes::ERROR_GENERIC,
        };
    }
    if err.downcast_ref::<PromptError>().is_some() {
        return exit_codes::ERROR_INPUT;
    }
    exit_codes::ERROR_GENERIC
}
