//! Shared types and models for the Smart Field (Pametna Njiva) platform
//!
//! This crate contains types shared between the backend, the frontend (via
//! WASM), and other components of the system.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::*;
