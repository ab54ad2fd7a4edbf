//! Aggregator for definitions with exactly one expression

use super::{Aggregator, Evaluated};
use crate::core::context::Context;
use crate::core::error::EngineError;

/// Returns the result of the single evaluated expression
///
/// Fails when no expression or more than one expression was evaluated.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleExpressionAggregator;

impl<E, P> Aggregator<E, E, P> for SingleExpressionAggregator {
    fn aggregate(
        &self,
        evaluated: Vec<Evaluated<'_, E, P>>,
        _parameter: &P,
        _context: &Context,
    ) -> Result<E, EngineError> {
        let count = evaluated.len();
        let mut results = evaluated.into_iter();

        match (results.next(), count) {
            (Some(only), 1) => Ok(only.into_result()),
            _ => Err(EngineError::Aggregation {
                aggregator: Aggregator::<E, E, P>::describe(self),
                reason: format!("expected exactly one expression, got {}", count),
            }),
        }
    }

    fn describe(&self) -> String {
        "single expression aggregator".to_string()
    }
}
