//! Presentation layer for the evaluation engine
//!
//! This crate contains CLI definitions, output formatters and the console
//! answer observer.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, EngineLevel, OutputFormat, QuestionKind};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use output::observer::ConsoleAnswerObserver;
