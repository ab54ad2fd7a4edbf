//! The evaluation engine
//!
//! [`Engine`] is the entry point: questions are configured with
//! [`solve`](Engine::solve) and asked with [`answer`](Engine::answer).
//!
//! ```text
//! answer_with(question, parameter)
//!   ├─ host.find_in_hierarchy_and_clone::<Q>()   ancestors first, merged copy
//!   ├─ strategy.execute(question, parameter, definition, context)
//!   │    └─ AggregatorStrategy: select → evaluate → aggregate
//!   ├─ context.set_answer(answer)
//!   └─ observers[*].on_answered(context)
//! ```

use crate::builder::DefinitionBuilder;
use crate::factory::DefinitionFactory;
use crate::host::DefinitionHost;
use crate::module::EngineModule;
use crate::ports::answer_observer::AnswerObserver;
use evaluation_domain::{Context, EngineError, Question, question_name};
use std::fmt::Debug;
use std::sync::Arc;
use tracing::{debug, warn};

/// Answers questions according to the definitions configured on it and its ancestors
///
/// A child engine created with [`with_parent`](Self::with_parent) sees all
/// definitions of its parent. When both define the same question, the
/// parent's expressions are evaluated first and the child's strategy and
/// aggregator are used when set. The parent is never affected by its
/// children.
pub struct Engine {
    host: Arc<DefinitionHost>,
    factory: DefinitionFactory,
    observers: Vec<Arc<dyn AnswerObserver>>,
}

impl Engine {
    /// Create a root engine
    pub fn new() -> Self {
        Self::with_host(Arc::new(DefinitionHost::new()))
    }

    /// Create a child engine inheriting the definitions of `parent`
    ///
    /// Observers are not inherited.
    pub fn with_parent(parent: &Engine) -> Self {
        Self::with_host(Arc::new(DefinitionHost::with_parent(parent.host.clone())))
    }

    fn with_host(host: Arc<DefinitionHost>) -> Self {
        Self {
            host,
            factory: DefinitionFactory::new(),
            observers: Vec::new(),
        }
    }

    /// The definition store of this engine
    pub fn host(&self) -> &Arc<DefinitionHost> {
        &self.host
    }

    /// Register an observer notified after every answered question
    pub fn add_observer(&mut self, observer: Arc<dyn AnswerObserver>) {
        self.observers.push(observer);
    }

    /// Builder-style: register an observer
    pub fn with_observer(mut self, observer: Arc<dyn AnswerObserver>) -> Self {
        self.add_observer(observer);
        self
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Configure how questions of type `Q` are answered
    ///
    /// Creates a default definition in this engine's store on first use.
    /// Later calls return handles to the same definition.
    pub fn solve<Q: Question>(&self) -> Result<DefinitionBuilder<Q, Q::Answer>, EngineError> {
        self.solve_with_result_mapping::<Q, Q::Answer>()
    }

    /// Like [`solve`](Self::solve), for expressions producing `E` instead of the answer type
    ///
    /// The aggregator of such a definition turns the `E` results into the
    /// answer.
    pub fn solve_with_result_mapping<Q, E>(&self) -> Result<DefinitionBuilder<Q, E>, EngineError>
    where
        Q: Question,
        E: Debug + 'static,
    {
        let definition = match self.host.find_local::<Q, E>()? {
            Some(definition) => definition,
            None => {
                debug!(
                    question = question_name::<Q>(),
                    expression_result = question_name::<E>(),
                    "Creating definition"
                );
                self.host.add(self.factory.create_definition::<Q, E>())?
            }
        };

        Ok(DefinitionBuilder::new(definition))
    }

    /// Load the definitions of a module into this engine
    pub fn load(&self, module: &dyn EngineModule) -> Result<(), EngineError> {
        module.load(self)
    }

    /// Answer a question without parameter
    pub fn answer<Q>(&self, question: &Q) -> Result<Q::Answer, EngineError>
    where
        Q: Question<Parameter = ()>,
    {
        self.answer_with(question, ())
    }

    /// Answer a question asked with `parameter`
    pub fn answer_with<Q: Question>(
        &self,
        question: &Q,
        parameter: Q::Parameter,
    ) -> Result<Q::Answer, EngineError> {
        self.resolve(question, parameter).inspect_err(|error| {
            warn!(
                question = question_name::<Q>(),
                error = %error,
                "Failed to answer question"
            );
        })
    }

    fn resolve<Q: Question>(
        &self,
        question: &Q,
        parameter: Q::Parameter,
    ) -> Result<Q::Answer, EngineError> {
        let definition = self
            .host
            .find_in_hierarchy_and_clone::<Q>()?
            .ok_or_else(|| EngineError::NoDefinition {
                question: question_name::<Q>().to_string(),
            })?;

        let strategy = definition
            .strategy()
            .ok_or_else(|| EngineError::NoStrategy {
                question: question_name::<Q>().to_string(),
            })?;

        let mut context = Context::new(question.describe(), &parameter);
        context.set_strategy(strategy.describe());

        let answer = strategy.execute(question, &parameter, definition.as_ref(), &mut context)?;
        context.set_answer(&answer);

        debug!(
            question = question_name::<Q>(),
            expressions = context.expressions().len(),
            answer = ?answer,
            "Answered question"
        );

        for observer in &self.observers {
            observer.on_answered(&context);
        }

        Ok(answer)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("host", &self.host)
            .field("observers", &self.observers.len())
            .finish()
    }
}
