//! Query construction
//!
//! Two parallel ways to describe a history query, each a mutable builder
//! producing an immutable, validated value:
//!
//! - `QueryBuilder` -> `JqlQuery`: an ordered filter chain (anchor first)
//! - `QueryParamsBuilder` -> `QueryParams`: pagination plus key-based narrowing
//!
//! Built values own all their data and are `Send + Sync`; later builder calls
//! never reach a value built earlier.

pub mod jql_query;
pub mod query_builder;
pub mod query_params;
pub mod query_params_builder;

pub use jql_query::JqlQuery;
pub use query_builder::{QueryBuilder, DEFAULT_LIMIT};
pub use query_params::QueryParams;
pub use query_params_builder::QueryParamsBuilder;
