//! goalbot-ollama
//!
//! Blocking client for a local Ollama text-generation endpoint, with a
//! degraded-result policy: callers always get text back, failures
//! included.

pub mod client;
pub mod error;
