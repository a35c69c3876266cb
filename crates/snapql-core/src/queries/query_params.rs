//! Validated pagination and narrowing parameters in generic key-based form

use chrono::NaiveDateTime;
use serde::Serialize;
use snapql_core_types::CommitId;
use std::collections::{BTreeMap, BTreeSet};

/// Immutable, validated query parameters
///
/// Only `QueryParamsBuilder::build` creates values of this type, so `limit`
/// is always positive. Collections are owned copies: nothing a builder does
/// after `build()` is visible here. Every narrowing field is an independent
/// predicate; the engine ANDs all of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryParams {
    pub(crate) limit: usize,
    pub(crate) skip: usize,
    pub(crate) from: Option<NaiveDateTime>,
    pub(crate) to: Option<NaiveDateTime>,
    pub(crate) to_commit_id: Option<CommitId>,
    pub(crate) commit_ids: BTreeSet<CommitId>,
    pub(crate) version: Option<u64>,
    pub(crate) author: Option<String>,
    pub(crate) aggregate: bool,
    pub(crate) new_object_changes: bool,
    pub(crate) commit_properties: BTreeMap<String, String>,
    pub(crate) changed_property: Option<String>,
}

impl QueryParams {
    /// Maximum number of records to fetch
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Number of records to skip before the first returned one
    pub fn skip(&self) -> usize {
        self.skip
    }

    /// Lower time bound, independent of `to`
    pub fn from(&self) -> Option<NaiveDateTime> {
        self.from
    }

    /// Upper time bound, independent of `from`
    pub fn to(&self) -> Option<NaiveDateTime> {
        self.to
    }

    pub fn to_commit_id(&self) -> Option<CommitId> {
        self.to_commit_id
    }

    pub fn commit_ids(&self) -> &BTreeSet<CommitId> {
        &self.commit_ids
    }

    pub fn version(&self) -> Option<u64> {
        self.version
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// Whether child value objects of a matched entity are included
    pub fn aggregate(&self) -> bool {
        self.aggregate
    }

    /// Whether object-creation changes are included
    pub fn new_object_changes(&self) -> bool {
        self.new_object_changes
    }

    pub fn commit_properties(&self) -> &BTreeMap<String, String> {
        &self.commit_properties
    }

    pub fn changed_property(&self) -> Option<&str> {
        self.changed_property.as_deref()
    }

    /// True when any narrowing predicate beyond pagination is set
    pub fn has_narrowing(&self) -> bool {
        self.from.is_some()
            || self.to.is_some()
            || self.to_commit_id.is_some()
            || !self.commit_ids.is_empty()
            || self.version.is_some()
            || self.author.is_some()
            || !self.commit_properties.is_empty()
            || self.changed_property.is_some()
    }
}
