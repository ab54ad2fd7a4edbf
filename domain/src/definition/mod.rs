//! Definitions: how a question type is answered
//!
//! A [`Definition`] holds the strategy, the aggregator and the ordered
//! expression provider sets configured for one question type at one engine
//! level. Stored definitions are only changed while configuring; answering
//! always works on a clone (see [`ResolvedDefinition`]).

mod resolved;

pub use resolved::ResolvedDefinition;

use crate::aggregation::Aggregator;
use crate::core::question::Question;
use crate::expression::{ExpressionProvider, ExpressionProviderSet};
use crate::strategy::Strategy;
use std::fmt;
use std::sync::Arc;

/// Aggregator stored in a definition
pub type DefinitionAggregator<Q, E> =
    dyn Aggregator<E, <Q as Question>::Answer, <Q as Question>::Parameter>;

/// Configuration for one question type
///
/// `E` is the type produced by the expressions. It equals `Q::Answer` unless
/// the definition was created with result mapping.
pub struct Definition<Q: Question, E> {
    strategy: Option<Arc<dyn Strategy<Q>>>,
    aggregator: Option<Arc<DefinitionAggregator<Q, E>>>,
    expression_provider_sets: Vec<ExpressionProviderSet<Q, E>>,
}

impl<Q: Question, E> Definition<Q, E> {
    /// Create an empty definition without strategy, aggregator or expressions
    pub fn new() -> Self {
        Self {
            strategy: None,
            aggregator: None,
            expression_provider_sets: Vec::new(),
        }
    }

    pub fn strategy(&self) -> Option<&Arc<dyn Strategy<Q>>> {
        self.strategy.as_ref()
    }

    pub fn set_strategy(&mut self, strategy: Arc<dyn Strategy<Q>>) {
        self.strategy = Some(strategy);
    }

    pub fn aggregator(&self) -> Option<&Arc<DefinitionAggregator<Q, E>>> {
        self.aggregator.as_ref()
    }

    pub fn set_aggregator(&mut self, aggregator: Arc<DefinitionAggregator<Q, E>>) {
        self.aggregator = Some(aggregator);
    }

    /// Provider sets in evaluation order
    pub fn expression_provider_sets(&self) -> &[ExpressionProviderSet<Q, E>] {
        &self.expression_provider_sets
    }

    /// Append a provider set, returning its index
    pub fn add_expression_provider_set(&mut self, set: ExpressionProviderSet<Q, E>) -> usize {
        self.expression_provider_sets.push(set);
        self.expression_provider_sets.len() - 1
    }

    /// Append a provider to an existing set
    ///
    /// Returns `false` when there is no set at `index`.
    pub fn add_expression_provider(
        &mut self,
        index: usize,
        provider: Arc<dyn ExpressionProvider<Q, E>>,
    ) -> bool {
        match self.expression_provider_sets.get_mut(index) {
            Some(set) => {
                set.add_provider(provider);
                true
            }
            None => false,
        }
    }

    /// Merge a more specific definition into this one, producing a new definition
    ///
    /// Strategy and aggregator of `child` win when set. Provider sets are
    /// concatenated with this definition's sets first, so inherited
    /// expressions are evaluated before the child's own.
    pub fn merged_with(&self, child: &Self) -> Self {
        let mut expression_provider_sets = Vec::with_capacity(
            self.expression_provider_sets.len() + child.expression_provider_sets.len(),
        );
        expression_provider_sets.extend(self.expression_provider_sets.iter().cloned());
        expression_provider_sets.extend(child.expression_provider_sets.iter().cloned());

        Self {
            strategy: child.strategy.clone().or_else(|| self.strategy.clone()),
            aggregator: child.aggregator.clone().or_else(|| self.aggregator.clone()),
            expression_provider_sets,
        }
    }

    /// Check whether both definitions use the very same strategy, aggregator and providers
    pub fn same_configuration_as(&self, other: &Self) -> bool {
        fn same<T: ?Sized>(a: Option<&Arc<T>>, b: Option<&Arc<T>>) -> bool {
            match (a, b) {
                (Some(a), Some(b)) => std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b)),
                (None, None) => true,
                _ => false,
            }
        }

        same(self.strategy(), other.strategy())
            && same(self.aggregator(), other.aggregator())
            && self.expression_provider_sets.len() == other.expression_provider_sets.len()
            && self
                .expression_provider_sets
                .iter()
                .zip(&other.expression_provider_sets)
                .all(|(a, b)| {
                    a.constraint().is_conditional() == b.constraint().is_conditional()
                        && a.providers().len() == b.providers().len()
                        && a
                            .providers()
                            .iter()
                            .zip(b.providers())
                            .all(|(a, b)| std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b)))
                })
    }
}

impl<Q: Question, E> Default for Definition<Q, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q: Question, E> Clone for Definition<Q, E> {
    fn clone(&self) -> Self {
        Self {
            strategy: self.strategy.clone(),
            aggregator: self.aggregator.clone(),
            expression_provider_sets: self.expression_provider_sets.clone(),
        }
    }
}

impl<Q: Question, E> fmt::Debug for Definition<Q, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Definition")
            .field("strategy", &self.strategy.as_ref().map(|s| s.describe()))
            .field("aggregator", &self.aggregator.as_ref().map(|a| a.describe()))
            .field("expression_provider_sets", &self.expression_provider_sets)
            .finish()
    }
}
