/*!
 * SQLite engine binding.
 *
 * This module adapts rusqlite to the engine traits: a `SqliteSessionFactory`
 * guards one shared connection and derives lightweight sessions from it, and
 * rusqlite errors are lowered into the engine's `NativeFailure` shape with
 * their extended result codes intact.
 */

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info};
use parking_lot::Mutex;
use rusqlite::Connection;

use super::failure::{NativeFailure, PersistenceFailure};
use super::session::{DataSource, EngineSession, SessionFactory};

/// Vendor code used when a rusqlite error carries no engine result code
const NON_TRANSPORT_CODE: i32 = -1;

impl From<&rusqlite::Error> for NativeFailure {
    fn from(error: &rusqlite::Error) -> Self {
        match error {
            rusqlite::Error::SqliteFailure(code, message) => NativeFailure::new(
                code.extended_code,
                message
                    .clone()
                    .unwrap_or_else(|| code.to_string()),
            ),
            other => NativeFailure::new(NON_TRANSPORT_CODE, other.to_string()),
        }
    }
}

/// Session factory over a single shared SQLite connection.
///
/// The connection is wrapped in a mutex so sessions derived from the factory
/// can run on any thread; each session locks only for the duration of one
/// statement or script.
pub struct SqliteSessionFactory {
    /// Path to the database file, ":memory:" for in-memory databases
    db_path: PathBuf,
    /// Thread-safe connection shared by every derived session
    connection: Arc<Mutex<Connection>>,
}

impl SqliteSessionFactory {
    /// Open a session factory over the database at the given path
    pub fn open<P: AsRef<Path>>(db_path: P) -> Result<Self, PersistenceFailure> {
        let db_path = db_path.as_ref().to_path_buf();

        info!("Opening SQLite session factory at: {:?}", db_path);

        let conn = Connection::open(&db_path).map_err(|e| {
            PersistenceFailure::native(
                format!("failed to open database at {:?}", db_path),
                NativeFailure::from(&e),
            )
        })?;

        Ok(Self {
            db_path,
            connection: Arc::new(Mutex::new(conn)),
        })
    }

    /// Open a session factory over an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self, PersistenceFailure> {
        debug!("Opening in-memory SQLite session factory");

        let conn = Connection::open_in_memory().map_err(|e| {
            PersistenceFailure::native(
                "failed to open in-memory database",
                NativeFailure::from(&e),
            )
        })?;

        Ok(Self {
            db_path: PathBuf::from(":memory:"),
            connection: Arc::new(Mutex::new(conn)),
        })
    }

    /// The database file path
    pub fn path(&self) -> &Path {
        &self.db_path
    }
}

impl SessionFactory for SqliteSessionFactory {
    fn open_session(&self) -> Result<Box<dyn EngineSession>, PersistenceFailure> {
        Ok(Box::new(SqliteSession {
            connection: Arc::clone(&self.connection),
        }))
    }
}

impl DataSource for SqliteSessionFactory {
    fn product_name(&self) -> &str {
        "SQLite"
    }
}

/// Session handing statements to the shared connection
struct SqliteSession {
    connection: Arc<Mutex<Connection>>,
}

impl EngineSession for SqliteSession {
    fn execute(&mut self, statement: &str) -> Result<u64, PersistenceFailure> {
        let conn = self.connection.lock();
        conn.execute(statement, [])
            .map(|rows| rows as u64)
            .map_err(|e| {
                PersistenceFailure::native(
                    format!("error executing statement: {}", statement),
                    NativeFailure::from(&e),
                )
            })
    }

    fn execute_batch(&mut self, script: &str) -> Result<(), PersistenceFailure> {
        let conn = self.connection.lock();
        conn.execute_batch(script).map_err(|e| {
            PersistenceFailure::native("error executing batch script", NativeFailure::from(&e))
        })
    }
}
