//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for answered questions
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Answer together with the evaluated expressions
    Full,
    /// Only the answer
    Answer,
    /// JSON trace
    Json,
}

impl From<OutputFormat> for evaluation_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => Self::Full,
            OutputFormat::Answer => Self::Answer,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// Questions the demo fruit basket can answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum QuestionKind {
    /// How many fruits are in the basket?
    #[default]
    Fruits,
    /// How many fruits start with the letter given by --letter?
    StartingWith,
    /// Which fruits are in the basket?
    Basket,
}

/// Which engine of the demo hierarchy answers the question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum EngineLevel {
    /// The parent engine with the shared fruit definitions
    Parent,
    /// The child engine, which adds its own fruits
    #[default]
    Child,
}

/// CLI arguments for the evaluation engine
#[derive(Parser, Debug)]
#[command(name = "evaluation-engine")]
#[command(author, version, about = "Answer typed questions by evaluating configured expressions")]
#[command(long_about = r#"
Evaluation Engine answers questions by evaluating the expressions configured
for them and aggregating the results into a single answer.

This binary ships a demo fruit basket: a parent engine knows the shared
fruits and a child engine adds its own. Asking the child merges both
definitions, parent expressions first.

Configuration files are loaded from (in priority order):
1. --config <path>        Explicit config file
2. ./evaluation.toml      Project-level config
3. ~/.config/evaluation-engine/config.toml   Global config

Example:
  evaluation-engine fruits
  evaluation-engine starting-with --letter A -o full
  evaluation-engine basket --ask parent -o json
"#)]
pub struct Cli {
    /// The question to ask
    #[arg(value_enum, default_value_t = QuestionKind::Fruits)]
    pub question: QuestionKind,

    /// Letter for the starting-with question
    #[arg(short, long, default_value_t = 'A')]
    pub letter: char,

    /// Engine that answers the question
    #[arg(long, value_enum, default_value_t = EngineLevel::Child)]
    pub ask: EngineLevel,

    /// Output format (overrides the configured one)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Do not print the answer (observers still run)
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["evaluation-engine"]);
        assert_eq!(cli.question, QuestionKind::Fruits);
        assert_eq!(cli.letter, 'A');
        assert_eq!(cli.ask, EngineLevel::Child);
        assert_eq!(cli.output, None);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
        assert!(!cli.no_config);
    }

    #[test]
    fn test_parse_question_and_options() {
        let cli = Cli::parse_from([
            "evaluation-engine",
            "starting-with",
            "--letter",
            "B",
            "--ask",
            "parent",
            "-o",
            "json",
            "-vv",
        ]);
        assert_eq!(cli.question, QuestionKind::StartingWith);
        assert_eq!(cli.letter, 'B');
        assert_eq!(cli.ask, EngineLevel::Parent);
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_config_flags() {
        let cli = Cli::parse_from(["evaluation-engine", "--config", "custom.toml", "--show-config"]);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        assert!(cli.show_config);
    }

    #[test]
    fn test_invalid_question_is_rejected() {
        assert!(Cli::try_parse_from(["evaluation-engine", "vegetables"]).is_err());
    }

    #[test]
    fn test_output_format_conversion() {
        assert_eq!(
            evaluation_domain::OutputFormat::from(OutputFormat::Full),
            evaluation_domain::OutputFormat::Full
        );
        assert_eq!(
            evaluation_domain::OutputFormat::from(OutputFormat::Json),
            evaluation_domain::OutputFormat::Json
        );
    }
}
