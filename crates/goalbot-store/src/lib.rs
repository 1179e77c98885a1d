//! goalbot-store
//!
//! Durable file persistence for the Goalbot document: one JSON file,
//! written atomically, with quarantine-and-reseed recovery for corrupt
//! content.

pub mod error;
pub mod store;
