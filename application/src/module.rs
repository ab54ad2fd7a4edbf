//! Reusable bundles of definitions

use crate::engine::Engine;
use evaluation_domain::EngineError;

/// A set of definitions that can be loaded into any engine
///
/// `load` typically calls [`Engine::solve`] for each question it
/// configures. Definitions land in the engine's own store, exactly as if
/// they had been configured directly.
pub trait EngineModule {
    fn load(&self, engine: &Engine) -> Result<(), EngineError>;
}

impl<F> EngineModule for F
where
    F: Fn(&Engine) -> Result<(), EngineError>,
{
    fn load(&self, engine: &Engine) -> Result<(), EngineError> {
        self(engine)
    }
}
