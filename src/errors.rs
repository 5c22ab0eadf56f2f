/*!
 * Error types for the host side of the bridge.
 *
 * This module contains the unified data-access taxonomy that engine failures
 * are translated into, using the thiserror crate for ergonomic error
 * definitions. Engine-side failure types live in `crate::engine::failure`.
 */

use thiserror::Error;

use crate::engine::failure::{NativeFailure, PersistenceFailure};

/// Unified data-access errors recognized by the host application.
///
/// Every variant produced from a native engine failure keeps that failure as
/// its source and carries the task label that was active when the failure
/// surfaced, so diagnostics survive translation.
#[derive(Error, Debug)]
pub enum DataAccessError {
    /// A unique or primary key constraint was violated
    #[error("duplicate key in '{task}': {cause}")]
    DuplicateKey {
        /// Diagnostic label for the failing operation
        task: String,
        /// The engine transport failure that triggered translation
        #[source]
        cause: NativeFailure,
    },

    /// A non-key integrity constraint (foreign key, not-null, check) failed
    #[error("data integrity violation in '{task}': {cause}")]
    IntegrityViolation {
        /// Diagnostic label for the failing operation
        task: String,
        /// The engine transport failure that triggered translation
        #[source]
        cause: NativeFailure,
    },

    /// A lock could not be acquired; typically transient
    #[error("could not acquire lock in '{task}': {cause}")]
    LockAcquisitionFailure {
        /// Diagnostic label for the failing operation
        task: String,
        /// The engine transport failure that triggered translation
        #[source]
        cause: NativeFailure,
    },

    /// The engine refused the operation for authorization reasons
    #[error("permission denied in '{task}': {cause}")]
    PermissionDenied {
        /// Diagnostic label for the failing operation
        task: String,
        /// The engine transport failure that triggered translation
        #[source]
        cause: NativeFailure,
    },

    /// The statement was rejected before execution (syntax, unknown object)
    #[error("bad statement grammar in '{task}': {cause}")]
    BadGrammar {
        /// Diagnostic label for the failing operation
        task: String,
        /// The engine transport failure that triggered translation
        #[source]
        cause: NativeFailure,
    },

    /// The underlying storage resource failed (I/O, corruption, disk full)
    #[error("resource failure in '{task}': {cause}")]
    ResourceFailure {
        /// Diagnostic label for the failing operation
        task: String,
        /// The engine transport failure that triggered translation
        #[source]
        cause: NativeFailure,
    },

    /// A native failure was present but no translator could classify it
    #[error("uncategorized engine failure in '{task}': {cause}")]
    Uncategorized {
        /// Diagnostic label for the failing operation
        task: String,
        /// Statement text, when one was available at translation time
        sql: Option<String>,
        /// The engine transport failure that triggered translation
        #[source]
        cause: NativeFailure,
    },

    /// A persistence failure that mapped to neither a native nor a
    /// transaction cause
    #[error("persistence system failure: {0}")]
    System(#[source] PersistenceFailure),
}

impl DataAccessError {
    /// The diagnostic task label carried by this error, if any
    pub fn task(&self) -> Option<&str> {
        match self {
            Self::DuplicateKey { task, .. }
            | Self::IntegrityViolation { task, .. }
            | Self::LockAcquisitionFailure { task, .. }
            | Self::PermissionDenied { task, .. }
            | Self::BadGrammar { task, .. }
            | Self::ResourceFailure { task, .. }
            | Self::Uncategorized { task, .. } => Some(task),
            Self::System(_) => None,
        }
    }

    /// The native engine failure this error was translated from, if any
    pub fn native_cause(&self) -> Option<&NativeFailure> {
        match self {
            Self::DuplicateKey { cause, .. }
            | Self::IntegrityViolation { cause, .. }
            | Self::LockAcquisitionFailure { cause, .. }
            | Self::PermissionDenied { cause, .. }
            | Self::BadGrammar { cause, .. }
            | Self::ResourceFailure { cause, .. }
            | Self::Uncategorized { cause, .. } => Some(cause),
            Self::System(_) => None,
        }
    }
}

/// Errors raised while validating component wiring, before first use
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Neither a session factory nor a session template was configured
    #[error("property 'session_factory' or 'session_template' is required")]
    MissingSessionSource,
}
