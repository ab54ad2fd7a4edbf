//! Answer trace configuration from TOML (`[trace]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw trace configuration from TOML
///
/// ```toml
/// [trace]
/// log_answers = true
/// jsonl_path = "answers.jsonl"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTraceConfig {
    /// Emit a tracing event for every answered question
    pub log_answers: bool,
    /// Append every answer trace to this JSONL file
    pub jsonl_path: Option<PathBuf>,
}
