//! Constraint-gated groups of expression providers

use super::provider::ExpressionProvider;
use crate::core::question::Question;
use std::fmt;
use std::sync::Arc;

type Predicate<Q> = dyn Fn(&Q) -> bool + Send + Sync;

/// Condition deciding whether a provider set takes part in an answer
pub enum Constraint<Q> {
    /// Always active
    Unconditional,
    /// Active when the predicate holds for the question being answered
    Conditional(Arc<Predicate<Q>>),
}

impl<Q> Constraint<Q> {
    pub fn when<F>(predicate: F) -> Self
    where
        F: Fn(&Q) -> bool + Send + Sync + 'static,
    {
        Constraint::Conditional(Arc::new(predicate))
    }

    /// Evaluate the constraint for a question
    ///
    /// Predicates are evaluated on every call; results are never cached.
    pub fn is_fulfilled(&self, question: &Q) -> bool {
        match self {
            Constraint::Unconditional => true,
            Constraint::Conditional(predicate) => predicate(question),
        }
    }

    pub fn is_conditional(&self) -> bool {
        matches!(self, Constraint::Conditional(_))
    }
}

impl<Q> Clone for Constraint<Q> {
    fn clone(&self) -> Self {
        match self {
            Constraint::Unconditional => Constraint::Unconditional,
            Constraint::Conditional(predicate) => Constraint::Conditional(Arc::clone(predicate)),
        }
    }
}

impl<Q> fmt::Debug for Constraint<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Unconditional => write!(f, "Unconditional"),
            Constraint::Conditional(_) => write!(f, "Conditional(..)"),
        }
    }
}

/// Ordered providers sharing one constraint
pub struct ExpressionProviderSet<Q: Question, E> {
    constraint: Constraint<Q>,
    providers: Vec<Arc<dyn ExpressionProvider<Q, E>>>,
}

impl<Q: Question, E> ExpressionProviderSet<Q, E> {
    pub fn new(constraint: Constraint<Q>) -> Self {
        Self {
            constraint,
            providers: Vec::new(),
        }
    }

    pub fn unconditional() -> Self {
        Self::new(Constraint::Unconditional)
    }

    /// Builder-style: append a provider
    pub fn with_provider(mut self, provider: Arc<dyn ExpressionProvider<Q, E>>) -> Self {
        self.providers.push(provider);
        self
    }

    pub fn add_provider(&mut self, provider: Arc<dyn ExpressionProvider<Q, E>>) {
        self.providers.push(provider);
    }

    pub fn constraint(&self) -> &Constraint<Q> {
        &self.constraint
    }

    /// Providers in declaration order
    pub fn providers(&self) -> &[Arc<dyn ExpressionProvider<Q, E>>] {
        &self.providers
    }

    pub fn is_active_for(&self, question: &Q) -> bool {
        self.constraint.is_fulfilled(question)
    }
}

impl<Q: Question, E> Clone for ExpressionProviderSet<Q, E> {
    fn clone(&self) -> Self {
        Self {
            constraint: self.constraint.clone(),
            providers: self.providers.clone(),
        }
    }
}

impl<Q: Question, E> fmt::Debug for ExpressionProviderSet<Q, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpressionProviderSet")
            .field("constraint", &self.constraint)
            .field("providers", &self.providers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestQuestion {
        flag: bool,
    }

    impl Question for TestQuestion {
        type Answer = i32;
        type Parameter = ();
    }

    #[test]
    fn test_unconditional_is_always_fulfilled() {
        let set: ExpressionProviderSet<TestQuestion, i32> = ExpressionProviderSet::unconditional();
        assert!(set.is_active_for(&TestQuestion { flag: false }));
        assert!(!set.constraint().is_conditional());
    }

    #[test]
    fn test_conditional_evaluates_predicate_per_question() {
        let set: ExpressionProviderSet<TestQuestion, i32> =
            ExpressionProviderSet::new(Constraint::when(|q: &TestQuestion| q.flag));

        assert!(set.is_active_for(&TestQuestion { flag: true }));
        assert!(!set.is_active_for(&TestQuestion { flag: false }));
    }

    #[test]
    fn test_clone_shares_providers_but_not_list() {
        use crate::expression::provider::InlineExpressionProvider;

        let original: ExpressionProviderSet<TestQuestion, i32> = ExpressionProviderSet::unconditional()
            .with_provider(Arc::new(InlineExpressionProvider::new(|_: &TestQuestion, _: &()| 1)));

        let mut clone = original.clone();
        clone.add_provider(Arc::new(InlineExpressionProvider::new(|_: &TestQuestion, _: &()| 2)));

        assert_eq!(original.providers().len(), 1);
        assert_eq!(clone.providers().len(), 2);
        assert!(Arc::ptr_eq(&original.providers()[0], &clone.providers()[0]));
    }
}
