//! Configuration file loading for the evaluation engine
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./evaluation.toml` or `./.evaluation.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/evaluation-engine/config.toml`
//! 4. Fallback: `~/.config/evaluation-engine/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{FileConfig, FileOutputConfig, FileTraceConfig};
pub use loader::{ConfigLoadError, ConfigLoader};
