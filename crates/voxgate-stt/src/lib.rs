#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod client;
mod error;
mod http_client;
mod types;

pub use client::SttClient;
pub use error::{Result, SttError};
pub use http_client::http_client;
pub use types::{AudioPayload, TranscriptionRequest, TranscriptionResponse};
