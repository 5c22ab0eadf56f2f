/*!
 * Shared session proxy.
 *
 * A `SessionTemplate` stands in for the engine session everywhere the host
 * would otherwise pass raw sessions around. It derives a short-lived engine
 * session from its factory per operation, so the template itself can be
 * shared freely across threads for the life of the component that owns it.
 */

use std::sync::Arc;

use crate::engine::failure::PersistenceFailure;
use crate::engine::session::SessionFactory;

/// Thread-safe proxy over an engine session factory.
///
/// Callers execute statements through the template and never manage session
/// lifecycle themselves: no commit, no rollback, no close. Configuration may
/// be inspected through `session_factory`, but the template must not be
/// mutated outside a component's designated initialization hook.
pub struct SessionTemplate {
    /// Factory every operation derives its session from
    factory: Arc<dyn SessionFactory>,
}

impl SessionTemplate {
    /// Create a template over the given factory
    pub fn new(factory: Arc<dyn SessionFactory>) -> Self {
        Self { factory }
    }

    /// The factory backing this template
    pub fn session_factory(&self) -> &Arc<dyn SessionFactory> {
        &self.factory
    }

    /// Execute a single statement, returning the number of affected rows.
    ///
    /// Failures surface as engine persistence failures; callers hand those
    /// to an exception translator rather than inspecting them directly.
    pub fn execute(&self, statement: &str) -> Result<u64, PersistenceFailure> {
        let mut session = self.factory.open_session()?;
        session.execute(statement)
    }

    /// Execute a script of statements with no result
    pub fn execute_batch(&self, script: &str) -> Result<(), PersistenceFailure> {
        let mut session = self.factory.open_session()?;
        session.execute_batch(script)
    }
}
