//! Fluent construction of `JqlQuery`

use crate::errors::{QueryError, Result};
use crate::model::{Filter, GlobalIdDto, InstanceIdDto, ValueObjectIdDto};
use crate::queries::jql_query::JqlQuery;
use crate::rules::validation::{check_limit, require_present, require_text, require_type};
use crate::{log_op_result, log_op_start};
use serde_json::Value;
use snapql_core_types::TypeName;

/// Page size used when `limit()` is never called
pub const DEFAULT_LIMIT: usize = 1000;

const OP_BUILD: &str = "jql_query_build";

/// Builds `JqlQuery`
///
/// Every entry point seeds exactly one anchor filter. `and_property` appends
/// property filters behind it; nothing is ever removed. `build()` borrows the
/// builder, so it may be called again after further calls.
///
/// ```
/// use snapql_core::QueryBuilder;
///
/// let query = QueryBuilder::by_instance_id(123, "Person")?
///     .and_property("name")?
///     .limit(50)?
///     .build()?;
/// assert_eq!(query.filters().len(), 2);
/// assert_eq!(query.limit(), 50);
/// # Ok::<(), snapql_core::QueryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    limit: usize,
    new_object_changes: bool,
    filters: Vec<Filter>,
}

impl QueryBuilder {
    fn new(filters: Vec<Filter>) -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            new_object_changes: false,
            filters,
        }
    }

    fn anchored(filter: Filter) -> Self {
        Self::new(vec![filter])
    }

    /// Query objects of a type, including its subtypes
    ///
    /// # Errors
    /// Returns `NullArgument` when `required_type` is blank.
    pub fn by_class(required_type: impl Into<TypeName>) -> Result<Self> {
        let required_type = require_type("required_type", required_type.into())?;
        Ok(Self::anchored(Filter::Class { required_type }))
    }

    /// Query one entity instance
    ///
    /// # Errors
    /// Returns `NullArgument` when `local_id` is null or `entity_type` is blank.
    pub fn by_instance_id(
        local_id: impl Into<Value>,
        entity_type: impl Into<TypeName>,
    ) -> Result<Self> {
        let global_id = InstanceIdDto::new(local_id, entity_type)?.into();
        Ok(Self::anchored(Filter::Id { global_id }))
    }

    /// Query value objects held at `path` by any instance of `owner_type`
    ///
    /// # Errors
    /// Returns `NullArgument` when either argument is blank.
    pub fn by_value_object(owner_type: impl Into<TypeName>, path: &str) -> Result<Self> {
        let owner_type = require_type("owner_type", owner_type.into())?;
        let path = require_text("path", path)?;
        Ok(Self::anchored(Filter::VoOwner { owner_type, path }))
    }

    /// Query the value object held at `path` by one owner instance
    ///
    /// # Errors
    /// Returns `NullArgument` when any argument is absent.
    pub fn by_value_object_id(
        owner_local_id: impl Into<Value>,
        owner_type: impl Into<TypeName>,
        path: &str,
    ) -> Result<Self> {
        let global_id = ValueObjectIdDto::new(owner_local_id, owner_type, path)?.into();
        Ok(Self::anchored(Filter::Id { global_id }))
    }

    /// Query by a prebuilt global id
    ///
    /// # Errors
    /// Returns `NullArgument` when `global_id` is `None`.
    #[deprecated(note = "use by_instance_id or by_value_object_id")]
    pub fn by_global_id_dto(global_id: impl Into<Option<GlobalIdDto>>) -> Result<Self> {
        let global_id = require_present("global_id", global_id.into())?;
        Ok(Self::anchored(Filter::Id { global_id }))
    }

    /// Narrow to records where `property_name` is present or changed
    ///
    /// # Errors
    /// Returns `NullArgument` when `property_name` is blank.
    pub fn and_property(mut self, property_name: &str) -> Result<Self> {
        let property_name = require_text("property_name", property_name)?;
        self.add_filter(Filter::Property { property_name });
        Ok(self)
    }

    /// Also return object creation, modeled as a change with no prior state
    pub fn with_new_object_changes(mut self) -> Self {
        self.new_object_changes = true;
        self
    }

    /// Replace the default page size of 1000
    ///
    /// # Errors
    /// Returns `Validation` unless `limit > 0`.
    pub fn limit(mut self, limit: i64) -> Result<Self> {
        self.limit = check_limit(limit)?;
        Ok(self)
    }

    fn add_filter(&mut self, filter: Filter) {
        self.filters.push(filter);
    }

    /// Snapshot the current state into a `JqlQuery`
    ///
    /// # Errors
    /// Returns `EmptyQuery` when no filter has been added.
    pub fn build(&self) -> Result<JqlQuery> {
        let started = log_op_start!(OP_BUILD, filter_count = self.filters.len());

        let result = if self.filters.is_empty() {
            Err(QueryError::EmptyQuery)
        } else {
            Ok(JqlQuery::new(
                self.filters.clone(),
                self.new_object_changes,
                self.limit,
            ))
        };

        log_op_result!(
            OP_BUILD,
            started,
            &result,
            |query| limit = query.limit(),
            new_object_changes = query.new_object_changes()
        );
        result
    }
}
