//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod output;
mod trace;

pub use output::FileOutputConfig;
pub use trace::FileTraceConfig;

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Output settings
    pub output: FileOutputConfig,
    /// Answer trace settings
    pub trace: FileTraceConfig,
}
