//! Definition store
//!
//! [`DefinitionHost`] maps question types to their [`Definition`]s and
//! optionally links to a parent host. Definitions are stored behind a lock so
//! configuration handles can keep mutating them in place, while answering
//! only ever sees clones.

use evaluation_domain::{
    Definition, EngineError, Question, ResolvedDefinition, question_key, question_name,
};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// Shared handle to a stored definition
pub type DefinitionHandle<Q, E> = Arc<RwLock<Definition<Q, E>>>;

/// A stored definition of question `Q` with its expression result type erased
trait StoredDefinition<Q: Question>: Send + Sync + 'static {
    /// Clone the current state of the definition
    fn snapshot(&self) -> Box<dyn ResolvedDefinition<Q>>;

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;

    fn expression_result_type(&self) -> &'static str;
}

impl<Q: Question, E: 'static> StoredDefinition<Q> for RwLock<Definition<Q, E>> {
    fn snapshot(&self) -> Box<dyn ResolvedDefinition<Q>> {
        let definition = self.read().unwrap_or_else(PoisonError::into_inner);
        ResolvedDefinition::clone_definition(&*definition)
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }

    fn expression_result_type(&self) -> &'static str {
        question_name::<E>()
    }
}

/// Stores one definition per question type, with an optional parent
///
/// Each entry is an `Arc<dyn StoredDefinition<Q>>` boxed as `Any`, keyed by
/// the `TypeId` of `Q`.
#[derive(Default)]
pub struct DefinitionHost {
    definitions: RwLock<HashMap<TypeId, Box<dyn Any + Send + Sync>>>,
    parent: Option<Arc<DefinitionHost>>,
}

impl DefinitionHost {
    /// Create a root host
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a host whose lookups fall back to `parent`
    pub fn with_parent(parent: Arc<DefinitionHost>) -> Self {
        Self {
            definitions: RwLock::new(HashMap::new()),
            parent: Some(parent),
        }
    }

    pub fn parent(&self) -> Option<&Arc<DefinitionHost>> {
        self.parent.as_ref()
    }

    /// Number of definitions stored locally
    pub fn len(&self) -> usize {
        self.read_definitions().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check whether this host holds a definition for `Q`, ignoring parents
    pub fn contains<Q: Question>(&self) -> bool {
        self.read_definitions().contains_key(&question_key::<Q>())
    }

    /// Add a definition, returning the shared handle to the stored value
    ///
    /// Fails when this host already holds a definition for `Q`. Parents are
    /// not checked, so a child may define a question its parent defines too.
    pub fn add<Q: Question, E: 'static>(
        &self,
        definition: Definition<Q, E>,
    ) -> Result<DefinitionHandle<Q, E>, EngineError> {
        let mut definitions = self
            .definitions
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        let key = question_key::<Q>();
        if definitions.contains_key(&key) {
            return Err(EngineError::DuplicateDefinition {
                question: question_name::<Q>().to_string(),
            });
        }

        let handle = Arc::new(RwLock::new(definition));
        let stored: Arc<dyn StoredDefinition<Q>> = handle.clone();
        definitions.insert(key, Box::new(stored));

        debug!(
            question = question_name::<Q>(),
            expression_result = question_name::<E>(),
            "Added definition"
        );
        Ok(handle)
    }

    /// Find the stored definition for `Q` in this host only
    ///
    /// Returns the stored definition itself, not a copy. Fails when the
    /// stored definition evaluates expressions to a type other than `E`.
    pub fn find_local<Q: Question, E: 'static>(
        &self,
    ) -> Result<Option<DefinitionHandle<Q, E>>, EngineError> {
        let Some(stored) = self.stored::<Q>() else {
            return Ok(None);
        };

        let found = stored.expression_result_type();
        stored
            .into_any()
            .downcast::<RwLock<Definition<Q, E>>>()
            .map(Some)
            .map_err(|_| EngineError::DefinitionTypeMismatch {
                question: question_name::<Q>().to_string(),
                expected: question_name::<E>().to_string(),
                found: found.to_string(),
            })
    }

    /// Resolve the effective definition for `Q` across the host hierarchy
    ///
    /// Walks from the topmost ancestor down to this host. Every matching
    /// level is cloned and merged into the result of the levels above it, so
    /// ancestor expressions come first and the most specific strategy and
    /// aggregator win. The result shares no state with any stored
    /// definition. Nothing is cached: every call walks the chain again.
    pub fn find_in_hierarchy_and_clone<Q: Question>(
        &self,
    ) -> Result<Option<Box<dyn ResolvedDefinition<Q>>>, EngineError> {
        let mut chain = vec![self];
        let mut current = self.parent.as_deref();
        while let Some(host) = current {
            chain.push(host);
            current = host.parent.as_deref();
        }

        let mut resolved: Option<Box<dyn ResolvedDefinition<Q>>> = None;
        for (depth, host) in chain.iter().enumerate().rev() {
            let Some(stored) = host.stored::<Q>() else {
                continue;
            };

            let snapshot = stored.snapshot();
            resolved = Some(match resolved {
                None => snapshot,
                Some(ancestral) => {
                    debug!(
                        question = question_name::<Q>(),
                        depth, "Merging definition into inherited definition"
                    );
                    ancestral.merge(snapshot.as_ref())?
                }
            });
        }

        Ok(resolved)
    }

    fn stored<Q: Question>(&self) -> Option<Arc<dyn StoredDefinition<Q>>> {
        self.read_definitions()
            .get(&question_key::<Q>())
            .and_then(|entry| entry.downcast_ref::<Arc<dyn StoredDefinition<Q>>>())
            .cloned()
    }

    fn read_definitions(
        &self,
    ) -> std::sync::RwLockReadGuard<'_, HashMap<TypeId, Box<dyn Any + Send + Sync>>> {
        self.definitions.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for DefinitionHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefinitionHost")
            .field("definitions", &self.len())
            .field("has_parent", &self.parent.is_some())
            .finish()
    }
}
