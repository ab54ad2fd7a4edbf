//! Fold-based aggregator

use super::{Aggregator, Evaluated};
use crate::core::context::Context;
use crate::core::error::EngineError;
use std::fmt::Debug;

type Fold<A, E> = dyn Fn(A, E) -> A + Send + Sync;

/// Folds expression results into a seed value
///
/// # Example
///
/// ```
/// use evaluation_domain::{Aggregator, ExpressionAggregator};
///
/// let sum = ExpressionAggregator::new(0, |aggregate, value: i32| aggregate + value);
/// let description = Aggregator::<i32, i32, ()>::describe(&sum);
/// assert_eq!(description, "expression aggregator with seed '0'");
/// ```
pub struct ExpressionAggregator<A, E> {
    seed: A,
    fold: Box<Fold<A, E>>,
    function_description: Option<String>,
}

impl<A, E> ExpressionAggregator<A, E> {
    pub fn new<F>(seed: A, fold: F) -> Self
    where
        F: Fn(A, E) -> A + Send + Sync + 'static,
    {
        Self {
            seed,
            fold: Box::new(fold),
            function_description: None,
        }
    }

    /// Describe the fold function, e.g. `(aggregate, value) => aggregate + value`
    pub fn with_function_description(mut self, description: impl Into<String>) -> Self {
        self.function_description = Some(description.into());
        self
    }

    pub fn seed(&self) -> &A {
        &self.seed
    }
}

impl<A, E, P> Aggregator<E, A, P> for ExpressionAggregator<A, E>
where
    A: Clone + Debug + Send + Sync,
{
    fn aggregate(
        &self,
        evaluated: Vec<Evaluated<'_, E, P>>,
        _parameter: &P,
        _context: &Context,
    ) -> Result<A, EngineError> {
        Ok(evaluated
            .into_iter()
            .map(Evaluated::into_result)
            .fold(self.seed.clone(), |aggregate, value| (self.fold)(aggregate, value)))
    }

    fn describe(&self) -> String {
        match &self.function_description {
            Some(function) => format!(
                "expression aggregator with seed '{:?}' and aggregate function {}",
                self.seed, function
            ),
            None => format!("expression aggregator with seed '{:?}'", self.seed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::Expression;

    struct Constant(i32);

    impl Expression<i32, ()> for Constant {
        fn evaluate(&self, _parameter: &()) -> i32 {
            self.0
        }
    }

    fn evaluated(values: &[i32]) -> Vec<Evaluated<'static, i32, ()>> {
        values
            .iter()
            .map(|v| Evaluated::new(Box::new(Constant(*v)), *v))
            .collect()
    }

    #[test]
    fn test_folds_results_in_order() {
        let aggregator = ExpressionAggregator::new(String::new(), |a: String, v: i32| {
            format!("{}{}", a, v)
        });

        let answer = aggregator
            .aggregate(evaluated(&[1, 2, 3]), &(), &Context::default())
            .unwrap();
        assert_eq!(answer, "123");
    }

    #[test]
    fn test_empty_input_returns_seed() {
        let aggregator = ExpressionAggregator::new(7, |a: i32, v: i32| a + v);
        assert_eq!(*aggregator.seed(), 7);

        let answer = aggregator
            .aggregate(evaluated(&[]), &(), &Context::default())
            .unwrap();
        assert_eq!(answer, 7);
    }

    #[test]
    fn test_describe_with_function() {
        let aggregator = ExpressionAggregator::new(0, |a: i32, v: i32| a + v)
            .with_function_description("(aggregate, value) => aggregate + value");

        assert_eq!(
            Aggregator::<i32, i32, ()>::describe(&aggregator),
            "expression aggregator with seed '0' and aggregate function (aggregate, value) => aggregate + value"
        );
    }
}
