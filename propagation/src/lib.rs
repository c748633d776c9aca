pub mod config;
pub mod meta;
pub mod status;
pub mod tracing;
pub mod version;
