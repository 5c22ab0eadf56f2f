/*!
 * Failure translation module.
 *
 * This module provides:
 * - The chainable `PersistenceExceptionTranslator` contract
 * - `ExceptionTranslator`, the default policy over engine failures
 * - `TranslatorChain` for hosts that consult several translators in order
 * - Low-level vendor-code translation in `translator::native`
 */

pub mod chain;
pub mod exception;
pub mod native;

use std::error::Error;
use std::sync::Arc;

use crate::engine::failure::TransactionFailure;
use crate::errors::DataAccessError;

// Re-export main types
pub use chain::TranslatorChain;
pub use exception::ExceptionTranslator;
pub use native::{ErrorCodeTranslator, NativeErrorTranslator};

/// Outcome of one translation attempt.
///
/// `Ok(None)` means the failure is not this translator's concern and the next
/// translator in a chain should be tried; it never means "no error occurred".
/// `Err` re-raises a transaction-layer failure that must keep its own
/// semantics instead of becoming a data-access error.
pub type TranslationVerdict = Result<Option<DataAccessError>, Arc<TransactionFailure>>;

/// Translator from generic runtime failures into the host taxonomy.
///
/// Implementations inspect the failure and either claim it (a concrete
/// verdict), re-raise a transaction failure, or pass (`Ok(None)`).
pub trait PersistenceExceptionTranslator: Send + Sync {
    /// Attempt to translate `failure` into the host taxonomy
    fn translate(&self, failure: &(dyn Error + 'static)) -> TranslationVerdict;
}
