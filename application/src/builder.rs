//! Fluent configuration of definitions
//!
//! ```text
//! engine.solve::<HowManyFruits>()?
//!     .aggregate_with_expression_aggregator(0, |sum, count| sum + count)
//!     .by_evaluating(|q| CountApples::new(q))
//!     .when(|q| q.include_bananas)
//!         .by_evaluating(|q| CountBananas::new(q));
//! ```

use crate::host::DefinitionHandle;
use crate::strategies::AggregatorStrategy;
use evaluation_domain::{
    Aggregator, Constraint, Definition, Expression, ExpressionAggregator, ExpressionProvider,
    ExpressionProviderSet, InlineExpressionProvider, MultipleExpressionsProvider, Question,
    SingleExpressionAggregator, SingleExpressionProvider, Strategy, ValidationAggregator,
    ValidationResult,
};
use std::fmt::Debug;
use std::sync::{Arc, PoisonError};

fn update<Q: Question, E>(
    definition: &DefinitionHandle<Q, E>,
    change: impl FnOnce(&mut Definition<Q, E>),
) {
    let mut definition = definition.write().unwrap_or_else(PoisonError::into_inner);
    change(&mut *definition);
}

/// Configuration handle bound to a stored definition
///
/// Every method changes the stored definition in place, so all handles for
/// the same question type in the same engine see each other's changes.
pub struct DefinitionBuilder<Q: Question, E> {
    definition: DefinitionHandle<Q, E>,
}

impl<Q: Question, E: 'static> DefinitionBuilder<Q, E> {
    pub fn new(definition: DefinitionHandle<Q, E>) -> Self {
        Self { definition }
    }

    /// The stored definition this builder configures
    pub fn definition(&self) -> &DefinitionHandle<Q, E> {
        &self.definition
    }

    /// Use a custom strategy
    pub fn with(self, strategy: impl Strategy<Q> + 'static) -> Self {
        update(&self.definition, |d| d.set_strategy(Arc::new(strategy)));
        self
    }

    /// Use the default [`AggregatorStrategy`]
    pub fn with_aggregator_strategy(self) -> Self
    where
        E: Debug,
    {
        self.with(AggregatorStrategy::<Q, E>::new())
    }

    pub fn aggregate_with(
        self,
        aggregator: impl Aggregator<E, Q::Answer, Q::Parameter> + 'static,
    ) -> Self {
        update(&self.definition, |d| d.set_aggregator(Arc::new(aggregator)));
        self
    }

    /// Aggregate by folding all expression results into `seed`
    pub fn aggregate_with_expression_aggregator<F>(self, seed: Q::Answer, fold: F) -> Self
    where
        Q::Answer: Clone + Sync,
        F: Fn(Q::Answer, E) -> Q::Answer + Send + Sync + 'static,
    {
        self.aggregate_with(ExpressionAggregator::new(seed, fold))
    }

    /// Add an expression created by `factory` for every question
    pub fn by_evaluating<F, X>(self, factory: F) -> Self
    where
        F: Fn(&Q) -> X + Send + Sync + 'static,
        X: Expression<E, Q::Parameter> + 'static,
    {
        self.add_unconditional(Arc::new(SingleExpressionProvider::new(factory)))
    }

    /// Add all expressions created by `factory` for every question
    pub fn by_evaluating_many<F, I, X>(self, factory: F) -> Self
    where
        F: Fn(&Q) -> I + Send + Sync + 'static,
        I: IntoIterator<Item = X>,
        X: Expression<E, Q::Parameter> + 'static,
    {
        self.add_unconditional(Arc::new(MultipleExpressionsProvider::new(factory)))
    }

    /// Add an anonymous expression computing its result from question and parameter
    pub fn by_evaluating_inline<F>(self, function: F) -> Self
    where
        F: Fn(&Q, &Q::Parameter) -> E + Send + Sync + 'static,
    {
        self.add_unconditional(Arc::new(InlineExpressionProvider::new(function)))
    }

    /// Start a group of expressions that only take part when `predicate` holds
    pub fn when<F>(self, predicate: F) -> ConstrainedBuilder<Q, E>
    where
        F: Fn(&Q) -> bool + Send + Sync + 'static,
    {
        ConstrainedBuilder::start(self.definition, predicate)
    }

    fn add_unconditional(self, provider: Arc<dyn ExpressionProvider<Q, E>>) -> Self {
        update(&self.definition, |d| {
            let set = ExpressionProviderSet::unconditional().with_provider(provider);
            d.add_expression_provider_set(set);
        });
        self
    }
}

impl<Q: Question> DefinitionBuilder<Q, Q::Answer> {
    /// Answer with the result of the only expression
    pub fn aggregate_with_single_expression_aggregator(self) -> Self {
        self.aggregate_with(SingleExpressionAggregator)
    }
}

impl<Q, V> DefinitionBuilder<Q, ValidationResult<V>>
where
    Q: Question<Answer = ValidationResult<V>>,
    V: 'static,
{
    /// Combine the results of all validation rules
    pub fn aggregate_with_validation_aggregator(self) -> Self {
        self.aggregate_with(ValidationAggregator::<V>::new())
    }
}

impl<Q, V> DefinitionBuilder<Q, Option<ValidationResult<V>>>
where
    Q: Question<Answer = ValidationResult<V>>,
    V: 'static,
{
    /// Combine the results of all applicable validation rules
    pub fn aggregate_with_validation_aggregator(self) -> Self {
        self.aggregate_with(ValidationAggregator::<V>::new())
    }
}

/// Configuration handle for one conditional group of expressions
///
/// All expressions added through the same `ConstrainedBuilder` share a
/// single provider set guarded by the predicate passed to `when`.
pub struct ConstrainedBuilder<Q: Question, E> {
    definition: DefinitionHandle<Q, E>,
    set: usize,
}

impl<Q: Question, E: 'static> ConstrainedBuilder<Q, E> {
    fn start<F>(definition: DefinitionHandle<Q, E>, predicate: F) -> Self
    where
        F: Fn(&Q) -> bool + Send + Sync + 'static,
    {
        let mut set = 0;
        update(&definition, |d| {
            let constrained = ExpressionProviderSet::new(Constraint::when(predicate));
            set = d.add_expression_provider_set(constrained);
        });
        Self { definition, set }
    }

    pub fn by_evaluating<F, X>(self, factory: F) -> Self
    where
        F: Fn(&Q) -> X + Send + Sync + 'static,
        X: Expression<E, Q::Parameter> + 'static,
    {
        self.add(Arc::new(SingleExpressionProvider::new(factory)))
    }

    pub fn by_evaluating_many<F, I, X>(self, factory: F) -> Self
    where
        F: Fn(&Q) -> I + Send + Sync + 'static,
        I: IntoIterator<Item = X>,
        X: Expression<E, Q::Parameter> + 'static,
    {
        self.add(Arc::new(MultipleExpressionsProvider::new(factory)))
    }

    pub fn by_evaluating_inline<F>(self, function: F) -> Self
    where
        F: Fn(&Q, &Q::Parameter) -> E + Send + Sync + 'static,
    {
        self.add(Arc::new(InlineExpressionProvider::new(function)))
    }

    /// Start another conditional group
    pub fn when<F>(self, predicate: F) -> ConstrainedBuilder<Q, E>
    where
        F: Fn(&Q) -> bool + Send + Sync + 'static,
    {
        ConstrainedBuilder::start(self.definition, predicate)
    }

    /// Continue with unconditional configuration
    pub fn otherwise(self) -> DefinitionBuilder<Q, E> {
        DefinitionBuilder::new(self.definition)
    }

    fn add(self, provider: Arc<dyn ExpressionProvider<Q, E>>) -> Self {
        let set = self.set;
        update(&self.definition, |d| {
            d.add_expression_provider(set, provider);
        });
        self
    }
}
