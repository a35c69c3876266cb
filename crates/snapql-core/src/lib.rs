//! snapql Core - query construction layer for audit history
//!
//! This crate turns a caller's intent ("history of this object, narrowed by
//! this property, paginated, including creation events") into immutable,
//! validated query values handed to an external execution engine:
//!
//! - Filter descriptors and global identifiers (`model`)
//! - `QueryBuilder` / `JqlQuery` and `QueryParamsBuilder` / `QueryParams` (`queries`)
//! - The engine boundary trait (`engine`)
//! - Error and logging facilities shared with engine implementations
//!
//! No I/O happens here.

pub mod engine;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod queries;
pub mod rules;

// Re-export commonly used types
pub use engine::QueryEngine;
pub use errors::{ExError, ExErrorKind, QueryError, Result};
pub use model::{Filter, FilterKind, GlobalIdDto, InstanceIdDto, ValueObjectIdDto};
pub use queries::{JqlQuery, QueryBuilder, QueryParams, QueryParamsBuilder, DEFAULT_LIMIT};
pub use snapql_core_types::{CommitId, TypeName};
