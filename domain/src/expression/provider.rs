//! Expression providers
//!
//! Providers are the stored, shareable part of a definition. Each answer call
//! asks them for fresh expressions bound to the question being answered.

use super::Expression;
use crate::core::question::Question;

/// Boxed expression borrowing from the question and provider that created it
pub type BoxedExpression<'a, E, P> = Box<dyn Expression<E, P> + 'a>;

type ExpressionFactory<Q, E> =
    dyn Fn(&Q) -> BoxedExpression<'static, E, <Q as Question>::Parameter> + Send + Sync;

type ExpressionsFactory<Q, E> =
    dyn Fn(&Q) -> Vec<BoxedExpression<'static, E, <Q as Question>::Parameter>> + Send + Sync;

type InlineFunction<Q, E> = dyn Fn(&Q, &<Q as Question>::Parameter) -> E + Send + Sync;

/// Creates the expressions for a question
pub trait ExpressionProvider<Q: Question, E>: Send + Sync {
    fn expressions<'a>(&'a self, question: &'a Q) -> Vec<BoxedExpression<'a, E, Q::Parameter>>;
}

/// Provides exactly one expression per question
pub struct SingleExpressionProvider<Q: Question, E> {
    factory: Box<ExpressionFactory<Q, E>>,
}

impl<Q: Question, E: 'static> SingleExpressionProvider<Q, E> {
    pub fn new<F, X>(factory: F) -> Self
    where
        F: Fn(&Q) -> X + Send + Sync + 'static,
        X: Expression<E, Q::Parameter> + 'static,
    {
        Self {
            factory: Box::new(
                move |question: &Q| -> BoxedExpression<'static, E, Q::Parameter> {
                    Box::new(factory(question))
                },
            ),
        }
    }
}

impl<Q: Question, E> ExpressionProvider<Q, E> for SingleExpressionProvider<Q, E> {
    fn expressions<'a>(&'a self, question: &'a Q) -> Vec<BoxedExpression<'a, E, Q::Parameter>> {
        vec![(self.factory)(question) as BoxedExpression<'a, E, Q::Parameter>]
    }
}

/// Provides any number of expressions per question
pub struct MultipleExpressionsProvider<Q: Question, E> {
    factory: Box<ExpressionsFactory<Q, E>>,
}

impl<Q: Question, E: 'static> MultipleExpressionsProvider<Q, E> {
    pub fn new<F, I, X>(factory: F) -> Self
    where
        F: Fn(&Q) -> I + Send + Sync + 'static,
        I: IntoIterator<Item = X>,
        X: Expression<E, Q::Parameter> + 'static,
    {
        Self {
            factory: Box::new(
                move |question: &Q| -> Vec<BoxedExpression<'static, E, Q::Parameter>> {
                    factory(question)
                        .into_iter()
                        .map(|expression| {
                            Box::new(expression) as BoxedExpression<'static, E, Q::Parameter>
                        })
                        .collect()
                },
            ),
        }
    }
}

impl<Q: Question, E> ExpressionProvider<Q, E> for MultipleExpressionsProvider<Q, E> {
    fn expressions<'a>(&'a self, question: &'a Q) -> Vec<BoxedExpression<'a, E, Q::Parameter>> {
        (self.factory)(question)
            .into_iter()
            .map(|expression| expression as BoxedExpression<'a, E, Q::Parameter>)
            .collect()
    }
}

/// Wraps a plain `(question, parameter) -> result` function as an expression
pub struct InlineExpressionProvider<Q: Question, E> {
    function: Box<InlineFunction<Q, E>>,
    description: String,
}

impl<Q: Question, E: 'static> InlineExpressionProvider<Q, E> {
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(&Q, &Q::Parameter) -> E + Send + Sync + 'static,
    {
        Self {
            function: Box::new(function),
            description: "inline expression".to_string(),
        }
    }

    /// Describe the wrapped function, e.g. with its source text
    pub fn described_as(mut self, description: impl Into<String>) -> Self {
        self.description = format!("inline expression = {}", description.into());
        self
    }
}

impl<Q: Question, E> ExpressionProvider<Q, E> for InlineExpressionProvider<Q, E> {
    fn expressions<'a>(&'a self, question: &'a Q) -> Vec<BoxedExpression<'a, E, Q::Parameter>> {
        let expression = InlineExpression {
            question,
            function: self.function.as_ref(),
            description: &self.description,
        };
        vec![Box::new(expression) as BoxedExpression<'a, E, Q::Parameter>]
    }
}

/// Anonymous expression created by [`InlineExpressionProvider`]
pub struct InlineExpression<'a, Q: Question, E> {
    question: &'a Q,
    function: &'a InlineFunction<Q, E>,
    description: &'a str,
}

impl<Q: Question, E> Expression<E, Q::Parameter> for InlineExpression<'_, Q, E> {
    fn evaluate(&self, parameter: &Q::Parameter) -> E {
        (self.function)(self.question, parameter)
    }

    fn describe(&self) -> String {
        self.description.to_string()
    }
}
