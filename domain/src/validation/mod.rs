//! Validation answers
//!
//! A validation question is answered with a [`ValidationResult`]. Every
//! expression acts as one rule returning its own result, and the
//! [`ValidationAggregator`] combines them: the answer is valid only when
//! every rule is valid, and it carries the violations of all rules in
//! evaluation order.

mod aggregator;

pub use aggregator::ValidationAggregator;

use serde::{Deserialize, Serialize};

/// A single reason why validation failed
///
/// Implement this for a custom type to attach additional data, e.g. a hint
/// for the user, to violations.
pub trait Violation {
    fn reason(&self) -> &str;
}

/// Plain violation carrying only a reason
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationViolation {
    pub reason: String,
}

impl ValidationViolation {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Violation for ValidationViolation {
    fn reason(&self) -> &str {
        &self.reason
    }
}

/// Outcome of validating something
///
/// A new result is valid and has no violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult<V = ValidationViolation> {
    valid: bool,
    violations: Vec<V>,
}

impl<V> ValidationResult<V> {
    pub fn new() -> Self {
        Self {
            valid: true,
            violations: Vec::new(),
        }
    }

    /// Create an invalid result with a single violation
    pub fn invalid(violation: V) -> Self {
        let mut result = Self::new();
        result.set_valid(false);
        result.add_violation(violation);
        result
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn set_valid(&mut self, valid: bool) {
        self.valid = valid;
    }

    pub fn violations(&self) -> &[V] {
        &self.violations
    }

    pub fn add_violation(&mut self, violation: V) {
        self.violations.push(violation);
    }

    pub fn into_violations(self) -> Vec<V> {
        self.violations
    }
}

impl<V> Default for ValidationResult<V> {
    fn default() -> Self {
        Self::new()
    }
}
