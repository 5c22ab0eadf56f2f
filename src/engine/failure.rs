/*!
 * Engine-side failure model.
 *
 * The engine surfaces every runtime problem as a `PersistenceFailure` whose
 * cause is classified exactly once, at construction, into a `FailureCause`
 * variant. Translation policy then dispatches on that single tagged value
 * instead of probing the error chain with repeated type tests.
 */

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

/// Low-level failure surfaced by the engine's transport layer.
///
/// Carries the vendor error code and, where the transport provides one, a
/// standard diagnostic state string. This is the unit low-level translators
/// classify on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("engine transport failure (code {code}, state {state:?}): {message}")]
pub struct NativeFailure {
    /// Vendor-specific error code, extended form where the engine has one
    pub code: i32,
    /// Diagnostic state string (e.g. SQLSTATE), when available
    pub state: Option<String>,
    /// Message reported by the engine transport
    pub message: String,
}

impl NativeFailure {
    /// Create a native failure from a bare vendor code and message
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            state: None,
            message: message.into(),
        }
    }

    /// Attach a diagnostic state string
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }
}

/// Failure raised by the engine's transaction layer.
///
/// Never translated into a `DataAccessError`; translation re-raises it so
/// transaction-abort semantics are not laundered into an ordinary
/// data-access failure.
#[derive(Error, Debug)]
#[error("transaction failure: {message}")]
pub struct TransactionFailure {
    /// Message reported by the transaction layer
    pub message: String,
}

impl TransactionFailure {
    /// Create a transaction failure with the given message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Classified cause of a `PersistenceFailure`
#[derive(Debug, Clone)]
pub enum FailureCause {
    /// Another persistence failure; the shape batched statements produce
    Persistence(Box<PersistenceFailure>),
    /// An engine transport failure with a vendor code
    Native(NativeFailure),
    /// A transaction-layer failure that must keep its own semantics
    Transaction(Arc<TransactionFailure>),
    /// Anything else the engine wrapped
    Other(Arc<dyn Error + Send + Sync + 'static>),
}

/// Generic runtime failure raised by the persistence engine.
///
/// The engine wraps whatever went wrong in one of these before it crosses the
/// bridge boundary; `FailureCause` records what kind of problem sits beneath.
#[derive(Debug, Clone)]
pub struct PersistenceFailure {
    message: String,
    cause: Option<FailureCause>,
}

impl PersistenceFailure {
    /// Create a persistence failure with no underlying cause
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Create a persistence failure with an already classified cause
    pub fn with_cause(message: impl Into<String>, cause: FailureCause) -> Self {
        Self {
            message: message.into(),
            cause: Some(cause),
        }
    }

    /// Wrap a transport failure
    pub fn native(message: impl Into<String>, failure: NativeFailure) -> Self {
        Self::with_cause(message, FailureCause::Native(failure))
    }

    /// Wrap a transaction-layer failure
    pub fn transactional(message: impl Into<String>, failure: TransactionFailure) -> Self {
        Self::with_cause(message, FailureCause::Transaction(Arc::new(failure)))
    }

    /// Wrap another persistence failure, as batched statement paths do
    pub fn batched(message: impl Into<String>, inner: PersistenceFailure) -> Self {
        Self::with_cause(message, FailureCause::Persistence(Box::new(inner)))
    }

    /// Wrap an arbitrary error the engine does not recognize
    pub fn wrapping(
        message: impl Into<String>,
        cause: impl Error + Send + Sync + 'static,
    ) -> Self {
        Self::with_cause(message, FailureCause::Other(Arc::new(cause)))
    }

    /// Message reported by the engine
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The classified cause, if one was recorded
    pub fn cause(&self) -> Option<&FailureCause> {
        self.cause.as_ref()
    }
}

impl fmt::Display for PersistenceFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for PersistenceFailure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self.cause.as_ref()? {
            FailureCause::Persistence(inner) => Some(inner.as_ref()),
            FailureCause::Native(native) => Some(native),
            FailureCause::Transaction(tx) => Some(tx.as_ref()),
            FailureCause::Other(other) => Some(other.as_ref()),
        }
    }
}

// Utility conversion mirroring the application-wide anyhow bridges
impl From<anyhow::Error> for PersistenceFailure {
    fn from(error: anyhow::Error) -> Self {
        let message = error.to_string();
        let boxed: Box<dyn Error + Send + Sync + 'static> = error.into();
        Self {
            message,
            cause: Some(FailureCause::Other(Arc::from(boxed))),
        }
    }
}
