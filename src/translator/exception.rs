/*!
 * Default exception translator.
 *
 * Turns engine persistence failures into the host's `DataAccessError`
 * taxonomy by delegating native transport failures to a lazily constructed
 * `NativeErrorTranslator`. Failures that are not the engine's are passed on
 * so a translator chain can keep trying.
 */

use std::error::Error;
use std::sync::Arc;

use log::debug;
use once_cell::sync::OnceCell;

use super::native::{ErrorCodeTranslator, NativeErrorTranslator};
use super::{PersistenceExceptionTranslator, TranslationVerdict};
use crate::engine::failure::{FailureCause, PersistenceFailure};
use crate::engine::session::DataSource;
use crate::errors::DataAccessError;

/// Zero-argument factory for the delegate translator
type NativeTranslatorFactory = Box<dyn Fn() -> Box<dyn NativeErrorTranslator> + Send + Sync>;

/// Default translator from engine persistence failures to `DataAccessError`.
///
/// The delegate low-level translator is constructed at most once per
/// instance. With `lazy_init` the construction is deferred until the first
/// failure that actually carries a native cause; otherwise it happens in the
/// constructor and the guarded path is never exercised.
pub struct ExceptionTranslator {
    /// Factory invoked exactly once to build the delegate
    factory: NativeTranslatorFactory,
    /// Guarded slot; once populated it is never replaced
    delegate: OnceCell<Box<dyn NativeErrorTranslator>>,
}

impl ExceptionTranslator {
    /// Create a translator with a custom delegate factory
    pub fn new<F>(factory: F, lazy_init: bool) -> Self
    where
        F: Fn() -> Box<dyn NativeErrorTranslator> + Send + Sync + 'static,
    {
        let translator = Self {
            factory: Box::new(factory),
            delegate: OnceCell::new(),
        };
        if !lazy_init {
            translator.delegate_translator();
        }
        translator
    }

    /// Create a translator whose delegate is the default code-table
    /// translator bound to the given data source
    pub fn for_data_source(data_source: Arc<dyn DataSource>, lazy_init: bool) -> Self {
        Self::new(
            move || {
                Box::new(ErrorCodeTranslator::for_data_source(data_source.as_ref()))
                    as Box<dyn NativeErrorTranslator>
            },
            lazy_init,
        )
    }

    /// The delegate, constructing it on first need.
    ///
    /// `get_or_init` makes check-construct-store atomic and publishes the
    /// constructed delegate to every thread; later calls take the lock-free
    /// read path.
    fn delegate_translator(&self) -> &dyn NativeErrorTranslator {
        self.delegate
            .get_or_init(|| {
                debug!("Constructing delegate native error translator");
                (self.factory)()
            })
            .as_ref()
    }
}

impl PersistenceExceptionTranslator for ExceptionTranslator {
    fn translate(&self, failure: &(dyn Error + 'static)) -> TranslationVerdict {
        let Some(failure) = failure.downcast_ref::<PersistenceFailure>() else {
            return Ok(None);
        };

        // Batch failures arrive wrapped in a second persistence failure.
        // Unwrap one level only; recursing risks an unbounded loop on
        // pathological nesting.
        let failure = match failure.cause() {
            Some(FailureCause::Persistence(inner)) => inner.as_ref(),
            _ => failure,
        };

        match failure.cause() {
            Some(FailureCause::Native(native)) => {
                let delegate = self.delegate_translator();
                let task = failure.message().to_string();
                let translated = delegate.translate(&task, None, native);
                Ok(Some(translated.unwrap_or_else(|| {
                    DataAccessError::Uncategorized {
                        task,
                        sql: None,
                        cause: native.clone(),
                    }
                })))
            }
            Some(FailureCause::Transaction(tx)) => Err(Arc::clone(tx)),
            _ => Ok(Some(DataAccessError::System(failure.clone()))),
        }
    }
}
