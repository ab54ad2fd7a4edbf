//! Built-in strategies

pub mod aggregator_strategy;

pub use aggregator_strategy::AggregatorStrategy;
