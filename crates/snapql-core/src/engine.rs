//! Boundary to the execution engine
//!
//! Evaluating a query against stored snapshots happens outside this crate.
//! Engines implement this trait and receive built values only.

use crate::errors::ExError;
use crate::queries::{JqlQuery, QueryParams};

/// Evaluates built queries against persisted history
///
/// `limit`/`skip` are pagination bounds. Every other `QueryParams` field and
/// every `JqlQuery` filter is a predicate; all of them are ANDed, with the
/// first filter of a `JqlQuery` as the scope anchor.
pub trait QueryEngine {
    /// Snapshot or change record produced by the engine
    type Record;

    /// Historical states of the objects selected by `query`
    ///
    /// # Errors
    /// Engine-specific; reported through the canonical error facility.
    fn find_snapshots(&self, query: &JqlQuery) -> Result<Vec<Self::Record>, ExError>;

    /// Changes to the objects selected by `query`
    ///
    /// Creation changes are included only when `query.new_object_changes()`.
    ///
    /// # Errors
    /// Engine-specific; reported through the canonical error facility.
    fn find_changes(&self, query: &JqlQuery) -> Result<Vec<Self::Record>, ExError>;

    /// Records selected by key-based parameters
    ///
    /// # Errors
    /// Engine-specific; reported through the canonical error facility.
    fn find_by_params(&self, params: &QueryParams) -> Result<Vec<Self::Record>, ExError>;
}
