//! Infrastructure layer for the evaluation engine
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;

// Re-export commonly used types
pub use config::{ConfigLoadError, ConfigLoader, FileConfig, FileOutputConfig, FileTraceConfig};
pub use logging::{JsonlAnswerObserver, TracingAnswerObserver};
