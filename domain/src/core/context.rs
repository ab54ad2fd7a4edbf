//! Execution context of a single answer call

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// One evaluated expression and the intermediate result it returned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpressionTrace {
    pub expression: String,
    pub result: String,
}

/// Trace of how a single answer was derived
///
/// A fresh context is created for every `answer` call. The strategy records
/// each expression it evaluates, the engine records the final answer, and the
/// completed context is handed to the registered answer observers. Values
/// are kept in their `Debug` rendering so observers never need to know the
/// concrete answer or parameter types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    question: String,
    parameter: Option<String>,
    strategy: Option<String>,
    aggregator: Option<String>,
    expressions: Vec<ExpressionTrace>,
    answer: Option<String>,
}

impl Context {
    /// Create a context for a question and the parameter it was asked with
    pub fn new(question: impl Into<String>, parameter: &impl Debug) -> Self {
        Self {
            question: question.into(),
            parameter: Some(format!("{:?}", parameter)),
            ..Self::default()
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn parameter(&self) -> Option<&str> {
        self.parameter.as_deref()
    }

    pub fn strategy(&self) -> Option<&str> {
        self.strategy.as_deref()
    }

    pub fn aggregator(&self) -> Option<&str> {
        self.aggregator.as_deref()
    }

    /// Expressions in the order they were evaluated
    pub fn expressions(&self) -> &[ExpressionTrace] {
        &self.expressions
    }

    pub fn answer(&self) -> Option<&str> {
        self.answer.as_deref()
    }

    pub fn set_strategy(&mut self, description: impl Into<String>) {
        self.strategy = Some(description.into());
    }

    pub fn set_aggregator(&mut self, description: impl Into<String>) {
        self.aggregator = Some(description.into());
    }

    /// Record an evaluated expression with its intermediate result
    pub fn record_expression(&mut self, expression: impl Into<String>, result: &impl Debug) {
        self.expressions.push(ExpressionTrace {
            expression: expression.into(),
            result: format!("{:?}", result),
        });
    }

    pub fn set_answer(&mut self, answer: &impl Debug) {
        self.answer = Some(format!("{:?}", answer));
    }

    /// Convert to a JSON value (used by structured loggers)
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_context_renders_parameter() {
        let context = Context::new("How many fruits?", &'A');
        assert_eq!(context.question(), "How many fruits?");
        assert_eq!(context.parameter(), Some("'A'"));
        assert!(context.answer().is_none());
        assert!(context.expressions().is_empty());
    }

    #[test]
    fn test_records_expressions_in_order() {
        let mut context = Context::new("q", &());
        context.record_expression("apples", &3);
        context.record_expression("bananas", &2);

        let names: Vec<_> = context
            .expressions()
            .iter()
            .map(|e| e.expression.as_str())
            .collect();
        assert_eq!(names, vec!["apples", "bananas"]);
        assert_eq!(context.expressions()[0].result, "3");
    }

    #[test]
    fn test_to_json() {
        let mut context = Context::new("q", &7);
        context.set_strategy("aggregator strategy");
        context.set_answer(&"done");

        let json = context.to_json();
        assert_eq!(json["question"], "q");
        assert_eq!(json["parameter"], "7");
        assert_eq!(json["strategy"], "aggregator strategy");
        assert_eq!(json["answer"], "\"done\"");
    }
}
