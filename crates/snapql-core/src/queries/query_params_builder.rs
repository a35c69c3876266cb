//! Staging object for `QueryParams`

use crate::errors::Result;
use crate::queries::query_params::QueryParams;
use crate::rules::validation::{check_limit, check_skip, require_present};
use crate::{log_op_end, log_op_start};
use chrono::NaiveDateTime;
use snapql_core_types::CommitId;
use std::collections::{BTreeMap, BTreeSet};

const OP_BUILD: &str = "query_params_build";

/// Builds `QueryParams`
///
/// Setters consume and return the builder so calls chain; `build()` borrows,
/// leaving the builder open for further calls and further builds.
///
/// ```
/// use snapql_core::QueryParamsBuilder;
///
/// let params = QueryParamsBuilder::with_limit(100)?
///     .skip(20)?
///     .author("alice")
///     .commit_property("env", "prod")
///     .build();
/// assert_eq!(params.limit(), 100);
/// assert_eq!(params.skip(), 20);
/// # Ok::<(), snapql_core::QueryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct QueryParamsBuilder {
    limit: usize,
    skip: usize,
    from: Option<NaiveDateTime>,
    to: Option<NaiveDateTime>,
    to_commit_id: Option<CommitId>,
    commit_ids: BTreeSet<CommitId>,
    version: Option<u64>,
    author: Option<String>,
    aggregate: bool,
    new_object_changes: bool,
    commit_properties: BTreeMap<String, String>,
    changed_property: Option<String>,
}

impl QueryParamsBuilder {
    fn new(limit: usize) -> Self {
        Self {
            limit,
            skip: 0,
            from: None,
            to: None,
            to_commit_id: None,
            commit_ids: BTreeSet::new(),
            version: None,
            author: None,
            aggregate: false,
            new_object_changes: false,
            commit_properties: BTreeMap::new(),
            changed_property: None,
        }
    }

    /// Start a builder with the number of snapshots to fetch
    ///
    /// # Errors
    /// Returns `Validation` unless `limit > 0`.
    pub fn with_limit(limit: i64) -> Result<Self> {
        Ok(Self::new(check_limit(limit)?))
    }

    /// Start a builder from existing params
    ///
    /// Copies `limit`, `skip`, `from`, `to`, `version` and the commit id set.
    /// Author, commit properties, flags, changed property and `to_commit_id`
    /// start at their defaults.
    ///
    /// # Errors
    /// Returns `NullArgument` when `params` is `None`.
    pub fn initialize_with<'a>(params: impl Into<Option<&'a QueryParams>>) -> Result<Self> {
        let params = require_present("query_params", params.into())?;

        let mut builder = Self::new(params.limit);
        builder.skip = params.skip;
        builder.from = params.from;
        builder.to = params.to;
        builder.version = params.version;
        builder.commit_ids = params.commit_ids.clone();
        Ok(builder)
    }

    /// Include child value objects of matched entities
    pub fn with_child_value_objects(mut self, aggregate: bool) -> Self {
        self.aggregate = aggregate;
        self
    }

    /// Replace the page size
    ///
    /// # Errors
    /// Returns `Validation` unless `limit > 0`.
    pub fn limit(mut self, limit: i64) -> Result<Self> {
        self.limit = check_limit(limit)?;
        Ok(self)
    }

    /// Set the number of records to skip
    ///
    /// # Errors
    /// Returns `Validation` when `skip` is negative.
    pub fn skip(mut self, skip: i64) -> Result<Self> {
        self.skip = check_skip(skip)?;
        Ok(self)
    }

    pub fn from(mut self, from: NaiveDateTime) -> Self {
        self.from = Some(from);
        self
    }

    pub fn to(mut self, to: NaiveDateTime) -> Self {
        self.to = Some(to);
        self
    }

    /// Add one commit id; adding a present id is a no-op
    pub fn commit_id(mut self, commit_id: CommitId) -> Self {
        self.commit_ids.insert(commit_id);
        self
    }

    #[allow(clippy::wrong_self_convention)]
    pub fn to_commit_id(mut self, to_commit_id: CommitId) -> Self {
        self.to_commit_id = Some(to_commit_id);
        self
    }

    /// Add commit ids; duplicates collapse
    pub fn commit_ids(mut self, commit_ids: impl IntoIterator<Item = CommitId>) -> Self {
        self.commit_ids.extend(commit_ids);
        self
    }

    /// Require a commit property; a later value for the same name wins
    pub fn commit_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.commit_properties.insert(name.into(), value.into());
        self
    }

    pub fn version(mut self, version: u64) -> Self {
        self.version = Some(version);
        self
    }

    /// Include object-creation changes
    pub fn new_object_changes(mut self, new_object_changes: bool) -> Self {
        self.new_object_changes = new_object_changes;
        self
    }

    pub fn changed_property(mut self, property_name: impl Into<String>) -> Self {
        self.changed_property = Some(property_name.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Snapshot the current state into `QueryParams`
    pub fn build(&self) -> QueryParams {
        let started = log_op_start!(OP_BUILD, limit = self.limit, skip = self.skip);

        let params = QueryParams {
            limit: self.limit,
            skip: self.skip,
            from: self.from,
            to: self.to,
            to_commit_id: self.to_commit_id,
            commit_ids: self.commit_ids.clone(),
            version: self.version,
            author: self.author.clone(),
            aggregate: self.aggregate,
            new_object_changes: self.new_object_changes,
            commit_properties: self.commit_properties.clone(),
            changed_property: self.changed_property.clone(),
        };

        log_op_end!(OP_BUILD, started, commit_id_count = params.commit_ids.len());
        params
    }
}
