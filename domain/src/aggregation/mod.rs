//! Aggregators reduce evaluated expressions to an answer
//!
//! - [`ExpressionAggregator`]: folds all results into a seed
//! - [`SingleExpressionAggregator`]: returns the result of the only expression
//! - [`MappingAggregator`]: converts the output of another aggregator

mod expression;
mod mapping;
mod single;

pub use expression::ExpressionAggregator;
pub use mapping::MappingAggregator;
pub use single::SingleExpressionAggregator;

use crate::core::context::Context;
use crate::core::error::EngineError;
use crate::expression::provider::BoxedExpression;

/// An evaluated expression together with its intermediate result
pub struct Evaluated<'a, E, P> {
    expression: BoxedExpression<'a, E, P>,
    result: E,
}

impl<'a, E, P> Evaluated<'a, E, P> {
    pub fn new(expression: BoxedExpression<'a, E, P>, result: E) -> Self {
        Self { expression, result }
    }

    pub fn describe(&self) -> String {
        self.expression.describe()
    }

    pub fn result(&self) -> &E {
        &self.result
    }

    pub fn into_result(self) -> E {
        self.result
    }
}

/// Reduces the ordered results of all evaluated expressions to a value
///
/// `E` is the expression result type, `A` the produced value and `P` the
/// parameter the question was asked with.
pub trait Aggregator<E, A, P>: Send + Sync {
    /// Aggregate results, given in evaluation order
    fn aggregate(
        &self,
        evaluated: Vec<Evaluated<'_, E, P>>,
        parameter: &P,
        context: &Context,
    ) -> Result<A, EngineError>;

    /// Human-readable description, used in answer traces
    fn describe(&self) -> String;
}
