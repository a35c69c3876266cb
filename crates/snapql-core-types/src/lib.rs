//! Core types shared across snapql facilities
//!
//! This crate provides the opaque identity values consumed by the query
//! construction layer and the constants used by the logging facility:
//!
//! - **Identity types**: CommitId, TypeName
//! - **Schema constants**: Canonical field keys and event names

pub mod identity;
pub mod schema;

pub use identity::{CommitId, ParseCommitIdError, TypeName};
