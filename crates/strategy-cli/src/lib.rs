//! # strategy-cli
//!
//! Console prompting and result presentation.

pub mod input;
pub mod presenter;

pub use input::{PromptError, Prompter};
pub use presenter::{LinePresenter, ResultPresenter};
