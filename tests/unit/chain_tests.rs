/*!
 * Tests for the ordered translator chain
 */

use std::error::Error;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use sqlbridge::engine::failure::{FailureCause, PersistenceFailure, TransactionFailure};
use sqlbridge::errors::DataAccessError;
use sqlbridge::translator::{
    ExceptionTranslator, PersistenceExceptionTranslator, TranslationVerdict, TranslatorChain,
};

use crate::common;

/// Translator that counts calls and always passes
struct PassingTranslator {
    calls: Arc<AtomicUsize>,
}

impl PersistenceExceptionTranslator for PassingTranslator {
    fn translate(&self, _failure: &(dyn Error + 'static)) -> TranslationVerdict {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(None)
    }
}

fn sqlite_translator() -> ExceptionTranslator {
    let counter = Arc::new(AtomicUsize::new(0));
    ExceptionTranslator::new(common::counting_sqlite_factory(counter), true)
}

#[test]
fn test_emptyChain_shouldBeIndeterminate() {
    let chain = TranslatorChain::new();
    let failure = common::persistence_with_native("insert", 1555, "UNIQUE constraint failed");

    assert!(chain.translate(&failure).unwrap().is_none());
    assert!(chain.is_empty());
}

#[test]
fn test_chain_shouldTryTranslatorsInOrderUntilOneClaims() {
    let calls = Arc::new(AtomicUsize::new(0));
    let chain = TranslatorChain::new()
        .with(PassingTranslator {
            calls: Arc::clone(&calls),
        })
        .with(sqlite_translator());

    let failure = common::persistence_with_native("insert", 1555, "UNIQUE constraint failed");
    let verdict = chain.translate(&failure).unwrap().expect("must classify");

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(matches!(verdict, DataAccessError::DuplicateKey { .. }));
    assert_eq!(chain.len(), 2);
}

#[test]
fn test_chain_translatorAfterClaim_shouldNotRun() {
    let calls = Arc::new(AtomicUsize::new(0));
    let chain = TranslatorChain::new()
        .with(sqlite_translator())
        .with(PassingTranslator {
            calls: Arc::clone(&calls),
        });

    let failure = common::persistence_with_native("insert", 1555, "UNIQUE constraint failed");
    chain.translate(&failure).unwrap().expect("must classify");

    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_chain_reRaisedTransaction_shouldShortCircuit() {
    let calls = Arc::new(AtomicUsize::new(0));
    let chain = TranslatorChain::new()
        .with(sqlite_translator())
        .with(PassingTranslator {
            calls: Arc::clone(&calls),
        });

    let tx = Arc::new(TransactionFailure::new("rolled back"));
    let failure = PersistenceFailure::with_cause(
        "commit failed",
        FailureCause::Transaction(Arc::clone(&tx)),
    );

    let raised = chain.translate(&failure).expect_err("must re-raise");

    assert!(Arc::ptr_eq(&raised, &tx));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_chain_allPass_shouldBeIndeterminate() {
    let chain = TranslatorChain::new().with(sqlite_translator());
    let unrelated = std::io::Error::new(std::io::ErrorKind::Other, "not persistence related");

    assert!(chain.translate(&unrelated).unwrap().is_none());
}
