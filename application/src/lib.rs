//! Application layer for the evaluation engine
//!
//! This crate contains the engine itself: the definition store, expression
//! selection, the default strategy, the configuration builders and the
//! answer observer port. It depends only on the domain layer.

pub mod builder;
pub mod engine;
pub mod factory;
pub mod host;
pub mod module;
pub mod ports;
pub mod selector;
pub mod strategies;

// Re-export commonly used types
pub use builder::{ConstrainedBuilder, DefinitionBuilder};
pub use engine::Engine;
pub use factory::DefinitionFactory;
pub use host::{DefinitionHandle, DefinitionHost};
pub use module::EngineModule;
pub use ports::answer_observer::{AnswerObserver, NoAnswerObserver};
pub use selector::ExpressionSelector;
pub use strategies::AggregatorStrategy;
