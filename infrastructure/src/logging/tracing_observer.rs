//! Answer observer emitting `tracing` events

use evaluation_application::AnswerObserver;
use evaluation_domain::Context;
use tracing::{debug, info};

/// Reports every answered question as a structured `info` event
///
/// Each evaluated expression follows as a `debug` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAnswerObserver;

impl AnswerObserver for TracingAnswerObserver {
    fn on_answered(&self, context: &Context) {
        info!(
            question = context.question(),
            parameter = context.parameter().unwrap_or_default(),
            strategy = context.strategy().unwrap_or_default(),
            aggregator = context.aggregator().unwrap_or_default(),
            expressions = context.expressions().len(),
            answer = context.answer().unwrap_or_default(),
            "Answered question"
        );

        for (index, trace) in context.expressions().iter().enumerate() {
            debug!(
                question = context.question(),
                index,
                expression = %trace.expression,
                result = %trace.result,
                "Expression result"
            );
        }
    }
}
