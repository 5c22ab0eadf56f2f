/*!
 * # sqlbridge
 *
 * A Rust library that bridges a persistence engine's session and failure
 * model into a host application's unified data-access contract.
 *
 * ## Features
 *
 * - Translate engine persistence failures into a host error taxonomy
 * - Chain multiple translators so each can pass on failures it does not own
 * - Share a single managed, thread-safe session handle between callers
 * - Validate session wiring before a component is put into service
 * - Classify vendor error codes through pluggable low-level translators
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `errors`: Host-side error taxonomy (`DataAccessError`, `ConfigError`)
 * - `engine`: The persistence engine boundary:
 *   - `engine::failure`: Engine failure model and cause classification
 *   - `engine::session`: Narrow traits the engine is consumed through
 *   - `engine::sqlite`: Concrete SQLite binding built on rusqlite
 * - `session`: Managed session access:
 *   - `session::template`: Shared, thread-safe session proxy
 *   - `session::accessor`: Factory/template wiring and lifecycle validation
 * - `translator`: Failure translation:
 *   - `translator::native`: Low-level vendor-code translation
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod engine;
pub mod errors;
pub mod session;
pub mod translator;

// Re-export main types for easier usage
pub use engine::failure::{FailureCause, NativeFailure, PersistenceFailure, TransactionFailure};
pub use engine::session::{DataSource, EngineSession, SessionFactory};
pub use errors::{ConfigError, DataAccessError};
pub use session::{Lifecycle, SessionAccessor, SessionTemplate};
pub use translator::{ExceptionTranslator, PersistenceExceptionTranslator, TranslatorChain};
