//! Domain layer for the evaluation engine
//!
//! This crate contains the core types of the engine: questions, definitions,
//! expressions, aggregators and strategies. It has no dependencies on the
//! engine runtime, infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Question
//!
//! A [`Question`] is a typed request. Its Rust type is the key under which
//! the engine stores how to answer it, and its associated types fix the
//! answer and parameter types.
//!
//! ## Definition
//!
//! A [`Definition`] describes how to answer one question type:
//!
//! - **Strategy**: the overall policy ([`Strategy`])
//! - **Aggregator**: reduces expression results to the answer ([`Aggregator`])
//! - **Expression provider sets**: ordered, optionally constrained groups of
//!   [`ExpressionProvider`]s creating the [`Expression`]s to evaluate
//!
//! Definitions of parent and child engines are merged with
//! [`Definition::merged_with`]: the child's strategy and aggregator win, and
//! the parent's expressions come first.

pub mod aggregation;
pub mod config;
pub mod core;
pub mod definition;
pub mod expression;
pub mod strategy;
pub mod validation;

// Re-export commonly used types
pub use aggregation::{
    Aggregator, Evaluated, ExpressionAggregator, MappingAggregator, SingleExpressionAggregator,
};
pub use config::OutputFormat;
pub use core::{
    context::{Context, ExpressionTrace},
    error::EngineError,
    question::{Question, question_key, question_name},
};
pub use definition::{Definition, DefinitionAggregator, ResolvedDefinition};
pub use expression::{
    Constraint, Expression, ExpressionProvider, ExpressionProviderSet, InlineExpression,
    InlineExpressionProvider, MultipleExpressionsProvider, Parameterless,
    ParameterlessExpression, SingleExpressionProvider, provider::BoxedExpression,
};
pub use strategy::Strategy;
pub use validation::{ValidationAggregator, ValidationResult, ValidationViolation, Violation};
