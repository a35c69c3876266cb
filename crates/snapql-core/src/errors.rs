use thiserror::Error;

/// Result type alias using QueryError
pub type Result<T> = std::result::Result<T, QueryError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every error raised while building a query is a caller error: the right
/// response is to fix the call, never to retry it. Each kind maps to a stable
/// code usable in tests and in responses from whatever surface wraps this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Argument checks
    Validation,
    NullArgument,
    InvalidInput,

    // Query shape
    EmptyQuery,
    /// Reserved for checks relating a property filter to the anchor type
    ConflictingState,

    /// Never produced by the builders; engines report their own failures
    /// through it
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::Validation => "ERR_VALIDATION",
            ExErrorKind::NullArgument => "ERR_NULL_ARGUMENT",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::EmptyQuery => "ERR_EMPTY_QUERY",
            ExErrorKind::ConflictingState => "ERR_CONFLICTING_STATE",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification plus the operation and argument that failed,
/// for programmatic handling and log correlation.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    argument: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            argument: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the name of the offending argument
    pub fn with_argument(mut self, argument: impl Into<String>) -> Self {
        self.argument = Some(argument.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the offending argument, if any
    pub fn argument(&self) -> Option<&str> {
        self.argument.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(argument) = &self.argument {
            write!(f, " (argument: {})", argument)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Errors raised by the query builders
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// An argument is out of its permitted range (non-positive limit, negative skip)
    #[error("Invalid {argument}: {reason}")]
    Validation {
        argument: &'static str,
        reason: String,
    },

    /// A required argument was absent
    #[error("Required argument is absent: {argument}")]
    NullArgument { argument: &'static str },

    /// build() was called on a builder holding no filters
    #[error("Empty JqlQuery: at least one filter is required")]
    EmptyQuery,

    /// A filter cannot hold under the scope established by the anchor filter
    ///
    /// Reserved: no builder currently performs this check.
    #[error("Conflicting query state: {reason}")]
    ConflictingState { reason: String },

    /// A commit id string could not be parsed
    #[error("Invalid commit id: '{value}'")]
    InvalidCommitId { value: String },
}

impl QueryError {
    pub(crate) fn validation(argument: &'static str, reason: impl Into<String>) -> Self {
        QueryError::Validation {
            argument,
            reason: reason.into(),
        }
    }

    pub(crate) fn null_argument(argument: &'static str) -> Self {
        QueryError::NullArgument { argument }
    }
}

impl From<snapql_core_types::ParseCommitIdError> for QueryError {
    fn from(err: snapql_core_types::ParseCommitIdError) -> Self {
        QueryError::InvalidCommitId { value: err.value }
    }
}

/// Conversion from QueryError to ExError
impl From<QueryError> for ExError {
    fn from(err: QueryError) -> Self {
        match err {
            QueryError::Validation { argument, reason } => ExError::new(ExErrorKind::Validation)
                .with_argument(argument)
                .with_message(reason),

            QueryError::NullArgument { argument } => ExError::new(ExErrorKind::NullArgument)
                .with_argument(argument)
                .with_message("Required argument is absent"),

            QueryError::EmptyQuery => ExError::new(ExErrorKind::EmptyQuery)
                .with_op("jql_query_build")
                .with_message("Empty JqlQuery"),

            QueryError::ConflictingState { reason } => {
                ExError::new(ExErrorKind::ConflictingState).with_message(reason)
            }

            QueryError::InvalidCommitId { value } => ExError::new(ExErrorKind::InvalidInput)
                .with_argument("commit_id")
                .with_message(format!("Invalid commit id: '{}'", value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (ExErrorKind::Validation, "ERR_VALIDATION"),
            (ExErrorKind::NullArgument, "ERR_NULL_ARGUMENT"),
            (ExErrorKind::EmptyQuery, "ERR_EMPTY_QUERY"),
            (ExErrorKind::ConflictingState, "ERR_CONFLICTING_STATE"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_ex_error_display_includes_context() {
        let err = ExError::new(ExErrorKind::Validation)
            .with_op("query_params_build")
            .with_argument("limit")
            .with_message("must be positive");
        let text = err.to_string();
        assert!(text.starts_with("[ERR_VALIDATION]"));
        assert!(text.contains("'query_params_build'"));
        assert!(text.contains("must be positive"));
        assert!(text.contains("(argument: limit)"));
    }

    #[test]
    fn test_parse_commit_id_error_converts() {
        let parse_err = "x.y"
            .parse::<snapql_core_types::CommitId>()
            .unwrap_err();
        let err: QueryError = parse_err.into();
        assert_eq!(
            err,
            QueryError::InvalidCommitId {
                value: "x.y".to_string()
            }
        );
    }
}
