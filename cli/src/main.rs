//! CLI entrypoint for the evaluation engine
//!
//! This is the main binary that wires together all layers: it loads the
//! configuration, builds the demo engine hierarchy, registers the answer
//! observers and answers the selected question.

mod basket;

use anyhow::{Context as _, Result, bail};
use basket::{HowManyFruits, HowManyFruitsStartingWith, WhatIsInTheBasket};
use clap::Parser;
use evaluation_application::Engine;
use evaluation_domain::OutputFormat;
use evaluation_infrastructure::{ConfigLoader, JsonlAnswerObserver, TracingAnswerObserver};
use evaluation_presentation::{Cli, ConsoleAnswerObserver, EngineLevel, QuestionKind};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.no_config && cli.config.is_some() {
        bail!("--config cannot be combined with --no-config");
    }
    if cli.question != QuestionKind::StartingWith && cli.letter != 'A' {
        bail!("--letter only applies to the starting-with question");
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    if !config.output.color {
        colored::control::set_override(false);
    }

    let format: OutputFormat = match cli.output {
        Some(format) => format.into(),
        None => config.output.format.unwrap_or_default(),
    };

    info!("Starting evaluation engine");

    // === Dependency Injection ===
    let (parent, child) = basket::engines().context("Failed to configure the fruit basket")?;
    let mut engine = match cli.ask {
        EngineLevel::Parent => parent,
        EngineLevel::Child => child,
    };

    if config.trace.log_answers {
        engine.add_observer(Arc::new(TracingAnswerObserver));
    }
    if let Some(path) = &config.trace.jsonl_path {
        match JsonlAnswerObserver::new(path) {
            Some(observer) => engine.add_observer(Arc::new(observer)),
            None => warn!("Answers will not be logged to {}", path.display()),
        }
    }
    if !cli.quiet {
        engine.add_observer(Arc::new(ConsoleAnswerObserver::new(format)));
    }

    ask(&engine, &cli)
}

/// Answer the question selected on the command line
///
/// The console observer prints the answer, so results are only discarded here.
fn ask(engine: &Engine, cli: &Cli) -> Result<()> {
    match cli.question {
        QuestionKind::Fruits => {
            engine.answer(&HowManyFruits)?;
        }
        QuestionKind::StartingWith => {
            engine.answer_with(&HowManyFruitsStartingWith, cli.letter)?;
        }
        QuestionKind::Basket => {
            engine.answer(&WhatIsInTheBasket)?;
        }
    }

    Ok(())
}
