#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod client;
mod error;
mod protocol;
mod types;

pub use client::LlmClient;
pub use error::{LlmError, Result};
pub use types::{CompletionParams, CompletionRequest, Message, Role};
