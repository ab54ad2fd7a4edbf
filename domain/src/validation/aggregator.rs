//! Aggregator combining the results of validation rules

use super::{ValidationResult, ValidationViolation};
use crate::aggregation::{Aggregator, Evaluated};
use crate::core::context::Context;
use crate::core::error::EngineError;
use std::marker::PhantomData;

/// Combines rule results into a single [`ValidationResult`]
///
/// Rules returning `Option<ValidationResult<V>>` may answer `None` to mean
/// "not applicable"; those results are skipped.
pub struct ValidationAggregator<V = ValidationViolation> {
    _violation: PhantomData<fn() -> V>,
}

impl<V> ValidationAggregator<V> {
    pub fn new() -> Self {
        Self {
            _violation: PhantomData,
        }
    }

    fn combine(results: impl Iterator<Item = ValidationResult<V>>) -> ValidationResult<V> {
        results.fold(ValidationResult::new(), |mut combined, result| {
            if !result.is_valid() {
                combined.set_valid(false);
            }
            for violation in result.into_violations() {
                combined.add_violation(violation);
            }
            combined
        })
    }
}

impl<V> Default for ValidationAggregator<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, P> Aggregator<ValidationResult<V>, ValidationResult<V>, P> for ValidationAggregator<V> {
    fn aggregate(
        &self,
        evaluated: Vec<Evaluated<'_, ValidationResult<V>, P>>,
        _parameter: &P,
        _context: &Context,
    ) -> Result<ValidationResult<V>, EngineError> {
        Ok(Self::combine(evaluated.into_iter().map(Evaluated::into_result)))
    }

    fn describe(&self) -> String {
        "validation aggregator".to_string()
    }
}

impl<V, P> Aggregator<Option<ValidationResult<V>>, ValidationResult<V>, P>
    for ValidationAggregator<V>
{
    fn aggregate(
        &self,
        evaluated: Vec<Evaluated<'_, Option<ValidationResult<V>>, P>>,
        _parameter: &P,
        _context: &Context,
    ) -> Result<ValidationResult<V>, EngineError> {
        Ok(Self::combine(
            evaluated.into_iter().filter_map(Evaluated::into_result),
        ))
    }

    fn describe(&self) -> String {
        "validation aggregator".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expression::Expression;
    use crate::validation::Violation;

    struct Rule(Option<&'static str>);

    impl Expression<ValidationResult, ()> for Rule {
        fn evaluate(&self, _parameter: &()) -> ValidationResult {
            match self.0 {
                Some(reason) => ValidationResult::invalid(ValidationViolation::new(reason)),
                None => ValidationResult::new(),
            }
        }
    }

    fn evaluated(rules: Vec<Rule>) -> Vec<Evaluated<'static, ValidationResult, ()>> {
        rules
            .into_iter()
            .map(|rule| {
                let result = rule.evaluate(&());
                Evaluated::new(Box::new(rule), result)
            })
            .collect()
    }

    fn aggregate(rules: Vec<Rule>) -> ValidationResult {
        ValidationAggregator::new()
            .aggregate(evaluated(rules), &(), &Context::default())
            .unwrap()
    }

    #[test]
    fn test_valid_when_all_rules_are_valid() {
        let result = aggregate(vec![Rule(None), Rule(None)]);
        assert!(result.is_valid());
        assert!(result.violations().is_empty());
    }

    #[test]
    fn test_valid_without_rules() {
        assert!(aggregate(vec![]).is_valid());
    }

    #[test]
    fn test_invalid_when_one_rule_fails() {
        let result = aggregate(vec![Rule(None), Rule(Some("name is empty")), Rule(None)]);
        assert!(!result.is_valid());
        assert_eq!(result.violations().len(), 1);
    }

    #[test]
    fn test_violations_are_concatenated_in_order() {
        let result = aggregate(vec![Rule(Some("first")), Rule(None), Rule(Some("second"))]);
        let reasons: Vec<_> = result.violations().iter().map(|v| v.reason()).collect();
        assert_eq!(reasons, vec!["first", "second"]);
    }

    struct OptionalRule(Option<bool>);

    impl Expression<Option<ValidationResult>, ()> for OptionalRule {
        fn evaluate(&self, _parameter: &()) -> Option<ValidationResult> {
            self.0.map(|valid| {
                if valid {
                    ValidationResult::new()
                } else {
                    ValidationResult::invalid(ValidationViolation::new("failed"))
                }
            })
        }
    }

    #[test]
    fn test_not_applicable_results_are_ignored() {
        let evaluated: Vec<Evaluated<'static, Option<ValidationResult>, ()>> =
            [None, Some(true), None]
                .into_iter()
                .map(|outcome| {
                    let rule = OptionalRule(outcome);
                    let result = rule.evaluate(&());
                    Evaluated::new(Box::new(rule), result)
                })
                .collect();

        let result: ValidationResult = ValidationAggregator::new()
            .aggregate(evaluated, &(), &Context::default())
            .unwrap();
        assert!(result.is_valid());
    }

    #[test]
    fn test_describe() {
        let aggregator: ValidationAggregator = ValidationAggregator::new();
        assert_eq!(
            Aggregator::<ValidationResult, ValidationResult, ()>::describe(&aggregator),
            "validation aggregator"
        );
    }
}
