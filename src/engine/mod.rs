/*!
 * Persistence engine boundary.
 *
 * This module provides:
 * - The engine-side failure model and cause classification
 * - The narrow traits the rest of the crate consumes the engine through
 * - A concrete SQLite binding built on rusqlite
 */

pub mod failure;
pub mod session;
pub mod sqlite;

// Re-export main types
pub use failure::{FailureCause, NativeFailure, PersistenceFailure, TransactionFailure};
pub use session::{DataSource, EngineSession, SessionFactory};
pub use sqlite::SqliteSessionFactory;
