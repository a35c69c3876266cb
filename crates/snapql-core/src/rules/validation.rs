use crate::errors::{QueryError, Result};
use snapql_core_types::TypeName;

/// Check a page size: must be strictly positive
///
/// # Errors
/// Returns `Validation` for zero or negative values.
pub fn check_limit(limit: i64) -> Result<usize> {
    if limit <= 0 {
        tracing::debug!(argument = "limit", value = limit, "rejected non-positive limit");
        return Err(QueryError::validation(
            "limit",
            format!("Limit is not a positive number: {}", limit),
        ));
    }
    to_usize("limit", limit)
}

/// Check a skip count: must be zero or positive
///
/// # Errors
/// Returns `Validation` for negative values.
pub fn check_skip(skip: i64) -> Result<usize> {
    if skip < 0 {
        tracing::debug!(argument = "skip", value = skip, "rejected negative skip");
        return Err(QueryError::validation(
            "skip",
            format!("Skip is not a non-negative number: {}", skip),
        ));
    }
    to_usize("skip", skip)
}

fn to_usize(argument: &'static str, value: i64) -> Result<usize> {
    usize::try_from(value)
        .map_err(|_| QueryError::validation(argument, format!("{} exceeds usize", value)))
}

/// Require a non-blank string argument
///
/// Empty and whitespace-only values count as absent.
///
/// # Errors
/// Returns `NullArgument` naming `argument`.
pub fn require_text(argument: &'static str, value: &str) -> Result<String> {
    if value.trim().is_empty() {
        tracing::debug!(argument, "rejected absent text argument");
        return Err(QueryError::null_argument(argument));
    }
    Ok(value.to_string())
}

/// Require a non-blank type name
///
/// # Errors
/// Returns `NullArgument` naming `argument`.
pub fn require_type(argument: &'static str, value: TypeName) -> Result<TypeName> {
    if value.is_blank() {
        tracing::debug!(argument, "rejected absent type argument");
        return Err(QueryError::null_argument(argument));
    }
    Ok(value)
}

/// Require a present local id (`Value::Null` is absent)
///
/// # Errors
/// Returns `NullArgument` naming `argument`.
pub fn require_local_id(
    argument: &'static str,
    value: serde_json::Value,
) -> Result<serde_json::Value> {
    if value.is_null() {
        tracing::debug!(argument, "rejected null local id");
        return Err(QueryError::null_argument(argument));
    }
    Ok(value)
}

/// Require a present object argument
///
/// # Errors
/// Returns `NullArgument` naming `argument`.
pub fn require_present<T>(argument: &'static str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| {
        tracing::debug!(argument, "rejected absent argument");
        QueryError::null_argument(argument)
    })
}
