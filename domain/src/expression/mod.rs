//! Expressions and the providers that create them
//!
//! An [`Expression`] is a single unit of computation contributing to an
//! answer. Definitions do not store expressions directly: they store
//! [`ExpressionProvider`]s, grouped into [`ExpressionProviderSet`]s guarded by
//! a [`Constraint`], and create fresh expressions for every answer call.
//!
//! ```text
//! Definition
//!   └─ ExpressionProviderSet (Unconditional | Conditional(predicate))
//!        └─ ExpressionProvider ── expressions(question) ──> [Expression]
//! ```

pub mod provider;
pub mod provider_set;

pub use provider::{
    ExpressionProvider, InlineExpression, InlineExpressionProvider, MultipleExpressionsProvider,
    SingleExpressionProvider,
};
pub use provider_set::{Constraint, ExpressionProviderSet};

use crate::core::question::short_type_name;

/// A unit of computation bound to a question
///
/// `E` is the intermediate result type and `P` the parameter type of the
/// question. Expressions are created per answer call, so they may capture
/// whatever they need from the question at construction time.
pub trait Expression<E, P> {
    /// Evaluate this expression with the parameter the question was asked with
    fn evaluate(&self, parameter: &P) -> E;

    /// Human-readable description, used in answer traces
    fn describe(&self) -> String {
        short_type_name(std::any::type_name::<Self>()).to_string()
    }
}

impl<E, P, X> Expression<E, P> for Box<X>
where
    X: Expression<E, P> + ?Sized,
{
    fn evaluate(&self, parameter: &P) -> E {
        (**self).evaluate(parameter)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// An expression for questions without a parameter
///
/// Implement this instead of [`Expression`] when the parameter is `()`; the
/// blanket implementation relays `evaluate(&())` to [`evaluate`](Self::evaluate).
pub trait ParameterlessExpression<E> {
    fn evaluate(&self) -> E;

    fn describe(&self) -> String {
        short_type_name(std::any::type_name::<Self>()).to_string()
    }
}

/// Wrapper turning a [`ParameterlessExpression`] into an [`Expression`]
#[derive(Debug, Clone)]
pub struct Parameterless<X>(pub X);

impl<E, X: ParameterlessExpression<E>> Expression<E, ()> for Parameterless<X> {
    fn evaluate(&self, _parameter: &()) -> E {
        self.0.evaluate()
    }

    fn describe(&self) -> String {
        self.0.describe()
    }
}
