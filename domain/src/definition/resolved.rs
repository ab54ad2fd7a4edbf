//! Type-erased view of a definition

use super::Definition;
use crate::core::error::EngineError;
use crate::core::question::{Question, question_name};
use crate::strategy::Strategy;
use std::any::Any;
use std::sync::Arc;

/// A definition for `Q` whose expression result type has been erased
///
/// Definitions of one question type may use different expression result
/// types, so the engine handles them through this trait. Strategies that
/// need the concrete definition recover it with [`downcast`](Self::downcast).
pub trait ResolvedDefinition<Q: Question>: Send + Sync + 'static {
    fn as_any(&self) -> &dyn Any;

    fn strategy(&self) -> Option<Arc<dyn Strategy<Q>>>;

    /// Name of the expression result type, used in error messages
    fn expression_result_type(&self) -> &'static str;

    /// Independent copy of this definition
    fn clone_definition(&self) -> Box<dyn ResolvedDefinition<Q>>;

    /// Merge a more specific definition into a copy of this one
    ///
    /// Fails when `child` uses a different expression result type.
    fn merge(
        &self,
        child: &dyn ResolvedDefinition<Q>,
    ) -> Result<Box<dyn ResolvedDefinition<Q>>, EngineError>;
}

impl<'a, Q: Question> dyn ResolvedDefinition<Q> + 'a {
    /// Recover the concrete definition with expression result type `E`
    pub fn downcast<E: 'static>(&self) -> Result<&Definition<Q, E>, EngineError> {
        self.as_any()
            .downcast_ref::<Definition<Q, E>>()
            .ok_or_else(|| EngineError::DefinitionTypeMismatch {
                question: question_name::<Q>().to_string(),
                expected: question_name::<E>().to_string(),
                found: self.expression_result_type().to_string(),
            })
    }
}

impl<Q: Question, E: 'static> ResolvedDefinition<Q> for Definition<Q, E> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn strategy(&self) -> Option<Arc<dyn Strategy<Q>>> {
        Definition::strategy(self).cloned()
    }

    fn expression_result_type(&self) -> &'static str {
        question_name::<E>()
    }

    fn clone_definition(&self) -> Box<dyn ResolvedDefinition<Q>> {
        Box::new(self.clone())
    }

    fn merge(
        &self,
        child: &dyn ResolvedDefinition<Q>,
    ) -> Result<Box<dyn ResolvedDefinition<Q>>, EngineError> {
        let child = child.downcast::<E>()?;
        Ok(Box::new(self.merged_with(child)))
    }
}
