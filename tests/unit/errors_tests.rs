/*!
 * Tests for error types and conversions
 */

use std::error::Error;

use sqlbridge::engine::failure::{NativeFailure, PersistenceFailure};
use sqlbridge::errors::{ConfigError, DataAccessError};

fn native(code: i32) -> NativeFailure {
    NativeFailure::new(code, "engine said no")
}

#[test]
fn test_duplicateKey_shouldDisplayTaskAndCause() {
    let error = DataAccessError::DuplicateKey {
        task: "insert user".to_string(),
        cause: native(1555),
    };
    let display = format!("{}", error);
    assert!(display.contains("duplicate key"));
    assert!(display.contains("insert user"));
    assert!(display.contains("1555"));
}

#[test]
fn test_uncategorized_shouldDisplayTask() {
    let error = DataAccessError::Uncategorized {
        task: "run report".to_string(),
        sql: Some("SELECT 1".to_string()),
        cause: native(4242),
    };
    let display = format!("{}", error);
    assert!(display.contains("uncategorized"));
    assert!(display.contains("run report"));
}

#[test]
fn test_system_shouldDisplayWrappedFailure() {
    let error = DataAccessError::System(PersistenceFailure::new("mapper exploded"));
    let display = format!("{}", error);
    assert!(display.contains("persistence system failure"));
    assert!(display.contains("mapper exploded"));
}

#[test]
fn test_translatedError_shouldExposeNativeFailureAsSource() {
    let error = DataAccessError::LockAcquisitionFailure {
        task: "update row".to_string(),
        cause: native(5),
    };
    let source = error.source().expect("source should be present");
    assert!(source.to_string().contains("code 5"));
}

#[test]
fn test_task_shouldBePresentOnTranslatedKinds() {
    let error = DataAccessError::BadGrammar {
        task: "select widgets".to_string(),
        cause: native(1),
    };
    assert_eq!(error.task(), Some("select widgets"));
    assert_eq!(error.native_cause().map(|c| c.code), Some(1));
}

#[test]
fn test_task_shouldBeAbsentOnSystemKind() {
    let error = DataAccessError::System(PersistenceFailure::new("boom"));
    assert_eq!(error.task(), None);
    assert!(error.native_cause().is_none());
}

#[test]
fn test_configError_missingSource_shouldNameBothProperties() {
    let display = format!("{}", ConfigError::MissingSessionSource);
    assert!(display.contains("session_factory"));
    assert!(display.contains("session_template"));
}

#[test]
fn test_nativeFailure_withState_shouldDisplayState() {
    let failure = NativeFailure::new(23505, "duplicate key value").with_state("23505");
    let display = format!("{}", failure);
    assert!(display.contains("23505"));
    assert!(display.contains("duplicate key value"));
}
