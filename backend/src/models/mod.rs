//! Models for the Smart Field server
//!
//! Re-exports models from the shared crate

pub use shared::models::*;
