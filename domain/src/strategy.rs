//! Strategy trait
//!
//! A strategy is the overall policy turning a question, its parameter and
//! the resolved definition into an answer. The default strategy evaluates
//! the selected expressions and aggregates their results; custom strategies
//! can answer in any other way.

use crate::core::context::Context;
use crate::core::error::EngineError;
use crate::core::question::Question;
use crate::definition::ResolvedDefinition;

/// Policy for answering questions of type `Q`
pub trait Strategy<Q: Question>: Send + Sync {
    /// Answer the question
    ///
    /// `definition` is a private, already merged copy owned by the current
    /// answer call. Implementations record every expression they evaluate
    /// into `context`.
    fn execute(
        &self,
        question: &Q,
        parameter: &Q::Parameter,
        definition: &dyn ResolvedDefinition<Q>,
        context: &mut Context,
    ) -> Result<Q::Answer, EngineError>;

    /// Human-readable description, used in answer traces
    fn describe(&self) -> String;
}
