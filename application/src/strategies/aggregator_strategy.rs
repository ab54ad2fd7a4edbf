//! Default strategy: evaluate the selected expressions and aggregate them

use crate::selector::ExpressionSelector;
use evaluation_domain::{
    Context, EngineError, Evaluated, Question, ResolvedDefinition, Strategy, question_name,
};
use std::fmt::Debug;
use std::marker::PhantomData;
use tracing::trace;

/// Answers a question by aggregating the results of its expressions
///
/// 1. selects the active expression providers of the definition
/// 2. creates their expressions for the question, keeping provider order
/// 3. evaluates every expression with the parameter and records it
/// 4. hands all results to the definition's aggregator
///
/// `E` is the expression result type of the definitions it is used with.
pub struct AggregatorStrategy<Q, E> {
    selector: ExpressionSelector,
    _types: PhantomData<fn(&Q) -> E>,
}

impl<Q, E> AggregatorStrategy<Q, E> {
    pub fn new() -> Self {
        Self::with_selector(ExpressionSelector::new())
    }

    pub fn with_selector(selector: ExpressionSelector) -> Self {
        Self {
            selector,
            _types: PhantomData,
        }
    }
}

impl<Q, E> Default for AggregatorStrategy<Q, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q, E> Strategy<Q> for AggregatorStrategy<Q, E>
where
    Q: Question,
    E: Debug + 'static,
{
    fn execute(
        &self,
        question: &Q,
        parameter: &Q::Parameter,
        definition: &dyn ResolvedDefinition<Q>,
        context: &mut Context,
    ) -> Result<Q::Answer, EngineError> {
        let definition = definition.downcast::<E>()?;
        let aggregator = definition
            .aggregator()
            .ok_or_else(|| EngineError::NoAggregator {
                question: question_name::<Q>().to_string(),
            })?;
        context.set_aggregator(aggregator.describe());

        let providers = self
            .selector
            .select_expression_providers(question, definition);

        let mut evaluated = Vec::new();
        for provider in providers {
            for expression in provider.expressions(question) {
                let result = expression.evaluate(parameter);
                let description = expression.describe();
                trace!(
                    question = question_name::<Q>(),
                    expression = %description,
                    result = ?result,
                    "Evaluated expression"
                );
                context.record_expression(description, &result);
                evaluated.push(Evaluated::new(expression, result));
            }
        }

        aggregator.aggregate(evaluated, parameter, context)
    }

    fn describe(&self) -> String {
        "aggregator strategy".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evaluation_domain::{
        Definition, ExpressionAggregator, ExpressionProviderSet, InlineExpressionProvider,
    };
    use std::sync::Arc;

    struct HowManyFruits;

    impl Question for HowManyFruits {
        type Answer = i32;
        type Parameter = ();
    }

    fn definition(values: &[i32]) -> Definition<HowManyFruits, i32> {
        let mut definition = Definition::new();
        for value in values.iter().copied() {
            definition.add_expression_provider_set(
                ExpressionProviderSet::unconditional().with_provider(Arc::new(
                    InlineExpressionProvider::new(move |_: &HowManyFruits, _: &()| value),
                )),
            );
        }
        definition
    }

    #[test]
    fn test_aggregates_expression_results() {
        let mut definition = definition(&[3, 2]);
        definition.set_aggregator(Arc::new(ExpressionAggregator::new(0, |a: i32, v: i32| a + v)));

        let strategy = AggregatorStrategy::<HowManyFruits, i32>::new();
        let mut context = Context::new("how many fruits?", &());
        let answer = strategy
            .execute(&HowManyFruits, &(), &definition, &mut context)
            .unwrap();

        assert_eq!(answer, 5);
        assert_eq!(context.aggregator(), Some("expression aggregator with seed '0'"));
        let results: Vec<_> = context.expressions().iter().map(|e| e.result.as_str()).collect();
        assert_eq!(results, vec!["3", "2"]);
        assert_eq!(context.expressions()[0].expression, "inline expression");
    }

    #[test]
    fn test_fails_without_aggregator() {
        let definition = definition(&[1]);

        let strategy = AggregatorStrategy::<HowManyFruits, i32>::new();
        let mut context = Context::default();
        let error = strategy
            .execute(&HowManyFruits, &(), &definition, &mut context)
            .unwrap_err();

        assert_eq!(
            error,
            EngineError::NoAggregator {
                question: "HowManyFruits".to_string()
            }
        );
        assert!(error.is_resolution_error());
        assert!(context.expressions().is_empty());
    }

    #[test]
    fn test_fails_for_definition_of_other_result_type() {
        let definition: Definition<HowManyFruits, String> = Definition::new();

        let strategy = AggregatorStrategy::<HowManyFruits, i32>::new();
        let error = strategy
            .execute(&HowManyFruits, &(), &definition, &mut Context::default())
            .unwrap_err();
        assert!(matches!(error, EngineError::DefinitionTypeMismatch { .. }));
    }

    #[test]
    fn test_describe() {
        let strategy = AggregatorStrategy::<HowManyFruits, i32>::new();
        assert_eq!(strategy.describe(), "aggregator strategy");
    }
}
