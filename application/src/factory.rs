//! Creation of default definitions

use crate::strategies::AggregatorStrategy;
use evaluation_domain::{Definition, Question};
use std::fmt::Debug;
use std::sync::Arc;

/// Creates the definition used when a question is solved for the first time
///
/// New definitions use the [`AggregatorStrategy`] and have neither an
/// aggregator nor expressions.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefinitionFactory;

impl DefinitionFactory {
    pub fn new() -> Self {
        Self
    }

    pub fn create_definition<Q, E>(&self) -> Definition<Q, E>
    where
        Q: Question,
        E: Debug + 'static,
    {
        let mut definition = Definition::new();
        definition.set_strategy(Arc::new(AggregatorStrategy::<Q, E>::new()));
        definition
    }
}
