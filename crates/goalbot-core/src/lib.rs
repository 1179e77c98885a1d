//! goalbot-core
//!
//! Pure domain types, context selection, and prompt templates.
//! No I/O — this is the shared vocabulary of the Goalbot system.

pub mod context;
pub mod document;
pub mod models;
pub mod prompt;
pub mod time;
