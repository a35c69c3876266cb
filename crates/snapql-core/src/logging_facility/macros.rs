//! Boundary macros for `build()` operations
//!
//! `log_op_start!` emits the start event and evaluates to the `Instant` the
//! operation began at. The closing macros take that `Instant` back and derive
//! `duration_ms` themselves, so a boundary reads as:
//!
//! ```
//! # use snapql_core::{log_op_end, log_op_start};
//! let started = log_op_start!("jql_query_build", filter_count = 2);
//! log_op_end!("jql_query_build", started, limit = 1000);
//! ```

/// Emit the start event; evaluates to the start `Instant`
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        $crate::log_op_start!($op,)
    };
    ($op:expr, $($field:tt)*) => {{
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::schema::EVENT_START,
            $($field)*
        );
        ::std::time::Instant::now()
    }};
}

/// Emit the end event for an operation started at `$started`
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, $started:expr) => {
        $crate::log_op_end!($op, $started,)
    };
    ($op:expr, $started:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::schema::EVENT_END,
            duration_ms = $crate::logging_facility::elapsed_ms($started),
            $($field)*
        );
    };
}

/// Emit the error end event for an operation started at `$started`
///
/// `$err` is borrowed and converted into `ExError` for its kind and code.
///
/// ```
/// # use snapql_core::{log_op_error, log_op_start, errors::QueryError};
/// let started = log_op_start!("jql_query_build");
/// log_op_error!("jql_query_build", started, &QueryError::EmptyQuery);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $started:expr, $err:expr) => {
        $crate::log_op_error!($op, $started, $err,)
    };
    ($op:expr, $started:expr, $err:expr, $($field:tt)*) => {{
        let ex_err = $crate::errors::ExError::from(::std::clone::Clone::clone($err));
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::logging_facility::schema::EVENT_END_ERROR,
            duration_ms = $crate::logging_facility::elapsed_ms($started),
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            $($field)*
        );
    }};
}

/// Close an operation from its outcome
///
/// `Ok(v)` emits the end event with the fields listed after `|v|`; `Err`
/// emits the error event. The result is borrowed, not consumed.
///
/// ```
/// # use snapql_core::{log_op_result, log_op_start, errors::QueryError};
/// let started = log_op_start!("jql_query_build");
/// let result: Result<usize, QueryError> = Ok(5);
/// log_op_result!("jql_query_build", started, &result, |n| limit = *n);
/// ```
#[macro_export]
macro_rules! log_op_result {
    ($op:expr, $started:expr, $result:expr, |$ok:ident| $($field:tt)*) => {
        match $result {
            ::std::result::Result::Ok($ok) => {
                $crate::log_op_end!($op, $started, $($field)*);
            }
            ::std::result::Result::Err(err) => {
                $crate::log_op_error!($op, $started, err);
            }
        }
    };
}
