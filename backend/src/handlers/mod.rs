//! HTTP handlers for the Smart Field server

pub mod chatbot;
pub mod field_data;
pub mod fields;
pub mod health;
pub mod ops;

pub use chatbot::*;
pub use field_data::*;
pub use fields::*;
pub use health::*;
pub use ops::*;
