//! Business logic services for the Smart Field server

pub mod chatbot;
pub mod field_store;
pub mod gateway;
pub mod synthetic;

pub use chatbot::ChatLog;
pub use field_store::FieldStore;
pub use gateway::{FallbackGateway, FieldDataSource, SyntheticSource};
