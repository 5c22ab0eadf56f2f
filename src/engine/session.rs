/*!
 * Narrow traits the persistence engine is consumed through.
 *
 * The bridge never reaches into engine internals. Statement execution,
 * pooling and transaction demarcation stay behind these traits; the crate
 * only derives sessions, forwards statements and classifies failures.
 */

use crate::engine::failure::PersistenceFailure;

/// A live engine session capable of executing statements.
///
/// Sessions are derived per operation by `SessionTemplate`; callers never
/// hold one directly and never manage its lifecycle.
pub trait EngineSession {
    /// Execute a single statement, returning the number of affected rows
    fn execute(&mut self, statement: &str) -> Result<u64, PersistenceFailure>;

    /// Execute a script of statements with no result
    fn execute_batch(&mut self, script: &str) -> Result<(), PersistenceFailure>;
}

/// Immutable blueprint the engine opens sessions from.
///
/// Owned by the host's configuration system; the accessor and template treat
/// it as read-only shared state and compare instances by identity.
pub trait SessionFactory: Send + Sync {
    /// Open a raw engine session
    fn open_session(&self) -> Result<Box<dyn EngineSession>, PersistenceFailure>;
}

/// Metadata handle used to pick a vendor error-code table.
///
/// Low-level translators only need to know which engine product they are
/// classifying codes for; everything else about the data source stays opaque.
pub trait DataSource: Send + Sync {
    /// Engine product name, e.g. "SQLite"
    fn product_name(&self) -> &str;
}
