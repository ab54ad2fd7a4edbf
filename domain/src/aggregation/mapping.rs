//! Result mapping on top of another aggregator

use super::{Aggregator, Evaluated};
use crate::core::context::Context;
use crate::core::error::EngineError;
use crate::core::question::question_name;

type Mapping<I, A> = dyn Fn(I) -> A + Send + Sync;

/// Runs an inner aggregator and converts its output as a final step
///
/// Used when the natural aggregation target differs from the answer type of
/// the question, e.g. counting characters and answering with a `String`.
pub struct MappingAggregator<E, I, A, P> {
    inner: Box<dyn Aggregator<E, I, P>>,
    map: Box<Mapping<I, A>>,
}

impl<E, I, A, P> MappingAggregator<E, I, A, P> {
    pub fn new<G, F>(inner: G, map: F) -> Self
    where
        G: Aggregator<E, I, P> + 'static,
        F: Fn(I) -> A + Send + Sync + 'static,
    {
        Self {
            inner: Box::new(inner),
            map: Box::new(map),
        }
    }
}

impl<E, I, A, P> Aggregator<E, A, P> for MappingAggregator<E, I, A, P> {
    fn aggregate(
        &self,
        evaluated: Vec<Evaluated<'_, E, P>>,
        parameter: &P,
        context: &Context,
    ) -> Result<A, EngineError> {
        let intermediate = self.inner.aggregate(evaluated, parameter, context)?;
        Ok((self.map)(intermediate))
    }

    fn describe(&self) -> String {
        format!(
            "{} mapped to {}",
            self.inner.describe(),
            question_name::<A>()
        )
    }
}
