/*!
 * Low-level translation of native engine failures.
 *
 * This module defines the delegate contract the exception translator hands
 * native failures to, plus a default implementation that classifies vendor
 * error codes against a per-product table. The delegate is deliberately
 * pluggable: hosts with richer metadata can substitute their own.
 */

use log::debug;

use crate::engine::failure::NativeFailure;
use crate::engine::session::DataSource;
use crate::errors::DataAccessError;

/// Delegate that classifies native engine failures.
///
/// Returns `None` when the failure cannot be classified; the caller decides
/// what an unclassifiable failure becomes.
pub trait NativeErrorTranslator: Send + Sync {
    /// Translate one native failure raised while performing `task`
    fn translate(
        &self,
        task: &str,
        sql: Option<&str>,
        failure: &NativeFailure,
    ) -> Option<DataAccessError>;
}

/// Vendor error codes grouped by the host taxonomy they map to
struct ErrorCodeTable {
    product: &'static str,
    duplicate_key: &'static [i32],
    integrity_violation: &'static [i32],
    lock_failure: &'static [i32],
    permission_denied: &'static [i32],
    resource_failure: &'static [i32],
    bad_grammar: &'static [i32],
}

/// SQLite primary and extended result codes
static SQLITE_CODES: ErrorCodeTable = ErrorCodeTable {
    product: "SQLite",
    duplicate_key: &[1555, 2067, 2579],
    integrity_violation: &[19, 275, 787, 1299],
    lock_failure: &[5, 6, 261, 262],
    permission_denied: &[3, 8, 23],
    resource_failure: &[10, 11, 13, 14],
    bad_grammar: &[1],
};

/// Fallback table for engines without a shipped mapping; classifies nothing
static UNKNOWN_CODES: ErrorCodeTable = ErrorCodeTable {
    product: "unknown",
    duplicate_key: &[],
    integrity_violation: &[],
    lock_failure: &[],
    permission_denied: &[],
    resource_failure: &[],
    bad_grammar: &[],
};

/// Default `NativeErrorTranslator` keyed by vendor error-code tables
pub struct ErrorCodeTranslator {
    codes: &'static ErrorCodeTable,
}

impl ErrorCodeTranslator {
    /// Build a translator for the engine product behind the given data source
    pub fn for_data_source(data_source: &dyn DataSource) -> Self {
        Self::for_product(data_source.product_name())
    }

    /// Build a translator for a product by name
    pub fn for_product(product: &str) -> Self {
        let codes = if product.eq_ignore_ascii_case(SQLITE_CODES.product) {
            &SQLITE_CODES
        } else {
            debug!("No error-code table for product '{}'", product);
            &UNKNOWN_CODES
        };
        Self { codes }
    }

    /// The product name of the table in use
    pub fn product(&self) -> &'static str {
        self.codes.product
    }
}

impl NativeErrorTranslator for ErrorCodeTranslator {
    fn translate(
        &self,
        task: &str,
        _sql: Option<&str>,
        failure: &NativeFailure,
    ) -> Option<DataAccessError> {
        let task = task.to_string();
        let cause = failure.clone();
        let table = self.codes;

        if table.duplicate_key.contains(&failure.code) {
            Some(DataAccessError::DuplicateKey { task, cause })
        } else if table.integrity_violation.contains(&failure.code) {
            Some(DataAccessError::IntegrityViolation { task, cause })
        } else if table.lock_failure.contains(&failure.code) {
            Some(DataAccessError::LockAcquisitionFailure { task, cause })
        } else if table.permission_denied.contains(&failure.code) {
            Some(DataAccessError::PermissionDenied { task, cause })
        } else if table.resource_failure.contains(&failure.code) {
            Some(DataAccessError::ResourceFailure { task, cause })
        } else if table.bad_grammar.contains(&failure.code) {
            Some(DataAccessError::BadGrammar { task, cause })
        } else {
            None
        }
    }
}
