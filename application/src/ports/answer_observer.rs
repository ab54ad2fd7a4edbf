//! Answer observation port
//!
//! Defines the hook through which answered questions are reported.

use evaluation_domain::Context;

/// Callback invoked after every successfully answered question
///
/// The context holds the question, the parameter, the strategy and
/// aggregator descriptions, every evaluated expression with its result, and
/// the final answer. Observers are called synchronously on the answering
/// thread, in registration order, and only see a shared reference: they
/// cannot change the answer.
///
/// Implementations live in the infrastructure layer (tracing, JSONL files)
/// or in tests.
pub trait AnswerObserver: Send + Sync {
    fn on_answered(&self, context: &Context);
}

/// No-op observer for when answers are not observed
pub struct NoAnswerObserver;

impl AnswerObserver for NoAnswerObserver {
    fn on_answered(&self, _context: &Context) {}
}
