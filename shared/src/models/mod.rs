//! Domain models for the Smart Field platform

pub mod chat;
pub mod field;

pub use chat::*;
pub use field::*;
