//! Shared integration test harness
//!
//! Not every test file uses every helper, hence the blanket allow.
#![allow(dead_code)]

pub mod config;
pub mod mock_openai;
pub mod server;
