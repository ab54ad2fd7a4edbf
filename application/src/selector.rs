//! Expression selection
//!
//! Picks the expression providers that take part in answering a question.

use evaluation_domain::{Definition, ExpressionProvider, Question};
use std::sync::Arc;

/// Filters a definition's provider sets by their constraints
///
/// Unconditional sets are always selected. Conditional sets are selected
/// when their predicate holds for the question; predicates are evaluated on
/// every call. The filter is inclusive: every fulfilled set contributes, and
/// providers keep the order of their sets and of their declaration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpressionSelector;

impl ExpressionSelector {
    pub fn new() -> Self {
        Self
    }

    pub fn select_expression_providers<'d, Q: Question, E>(
        &self,
        question: &Q,
        definition: &'d Definition<Q, E>,
    ) -> Vec<&'d Arc<dyn ExpressionProvider<Q, E>>> {
        definition
            .expression_provider_sets()
            .iter()
            .filter(|set| set.is_active_for(question))
            .flat_map(|set| set.providers())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evaluation_domain::{Constraint, ExpressionProviderSet, InlineExpressionProvider};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Basket {
        apples: bool,
    }

    impl Question for Basket {
        type Answer = String;
        type Parameter = ();
    }

    fn provider(name: &'static str) -> Arc<dyn ExpressionProvider<Basket, String>> {
        Arc::new(InlineExpressionProvider::new(move |_: &Basket, _: &()| name.to_string()))
    }

    fn evaluate(selected: &[&Arc<dyn ExpressionProvider<Basket, String>>], question: &Basket) -> Vec<String> {
        selected
            .iter()
            .flat_map(|provider| {
                provider
                    .expressions(question)
                    .iter()
                    .map(|expression| expression.evaluate(&()))
                    .collect::<Vec<_>>()
            })
            .collect()
    }

    #[test]
    fn test_filters_by_constraint() {
        let mut definition: Definition<Basket, String> = Definition::new();
        definition.add_expression_provider_set(ExpressionProviderSet::unconditional().with_provider(provider("E0")));
        definition.add_expression_provider_set(
            ExpressionProviderSet::new(Constraint::when(|_: &Basket| false)).with_provider(provider("E1")),
        );
        definition.add_expression_provider_set(
            ExpressionProviderSet::new(Constraint::when(|_: &Basket| true)).with_provider(provider("E2")),
        );

        let question = Basket { apples: true };
        let selected = ExpressionSelector.select_expression_providers(&question, &definition);
        assert_eq!(evaluate(&selected, &question), vec!["E0", "E2"]);
    }

    #[test]
    fn test_all_fulfilled_sets_contribute() {
        let mut definition: Definition<Basket, String> = Definition::new();
        definition.add_expression_provider_set(
            ExpressionProviderSet::new(Constraint::when(|q: &Basket| q.apples))
                .with_provider(provider("A"))
                .with_provider(provider("B")),
        );
        definition.add_expression_provider_set(
            ExpressionProviderSet::new(Constraint::when(|q: &Basket| q.apples)).with_provider(provider("C")),
        );

        let with_apples = Basket { apples: true };
        let selected = ExpressionSelector.select_expression_providers(&with_apples, &definition);
        assert_eq!(evaluate(&selected, &with_apples), vec!["A", "B", "C"]);

        let without_apples = Basket { apples: false };
        assert!(
            ExpressionSelector
                .select_expression_providers(&without_apples, &definition)
                .is_empty()
        );
    }

    #[test]
    fn test_predicates_evaluated_on_every_call() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let mut definition: Definition<Basket, String> = Definition::new();
        definition.add_expression_provider_set(
            ExpressionProviderSet::new(Constraint::when(move |_: &Basket| {
                counter.fetch_add(1, Ordering::SeqCst);
                true
            }))
            .with_provider(provider("E")),
        );

        let question = Basket { apples: false };
        ExpressionSelector.select_expression_providers(&question, &definition);
        ExpressionSelector.select_expression_providers(&question, &definition);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
