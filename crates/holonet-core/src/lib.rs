pub mod config;
pub mod serde;
pub mod tracing;
