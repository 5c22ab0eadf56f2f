/*!
 * Concurrent lazy initialization tests.
 *
 * The delegate translator must be constructed exactly once no matter how
 * many threads race through the first translation.
 */

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use sqlbridge::translator::{ExceptionTranslator, PersistenceExceptionTranslator};

use crate::common;

const THREADS: usize = 16;

#[test]
fn test_concurrentTranslate_shouldConstructDelegateExactlyOnce() {
    let counter = Arc::new(AtomicUsize::new(0));
    let translator = Arc::new(ExceptionTranslator::new(
        common::counting_sqlite_factory(Arc::clone(&counter)),
        true,
    ));
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let translator = Arc::clone(&translator);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let failure = common::persistence_with_native(
                    &format!("task {}", i),
                    1555,
                    "UNIQUE constraint failed",
                );
                barrier.wait();
                translator
                    .translate(&failure)
                    .expect("must not re-raise")
                    .expect("must classify")
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker thread panicked");
    }

    assert_eq!(counter.load(Ordering::SeqCst), 1);
}

#[test]
fn test_concurrentTranslate_afterEagerInit_shouldNeverReconstruct() {
    let counter = Arc::new(AtomicUsize::new(0));
    let translator = Arc::new(ExceptionTranslator::new(
        common::counting_sqlite_factory(Arc::clone(&counter)),
        false,
    ));
    assert_eq!(counter.load(Ordering::SeqCst), 1);

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let translator = Arc::clone(&translator);
            thread::spawn(move || {
                let failure =
                    common::persistence_with_native("insert", 2067, "UNIQUE constraint failed");
                translator.translate(&failure).unwrap().unwrap();
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("worker thread panicked");
    }

    assert_eq!(counter.load(Ordering::SeqCst), 1);
}
