//! Structured logging facility for snapql
//!
//! - Single initialization point via `init(profile)`
//! - Boundary macros (`log_op_start!`, `log_op_end!`, `log_op_error!`,
//!   `log_op_result!`) used by the builders' `build()` operations
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use snapql_core::logging_facility::{init, Profile};
//!
//! init(Profile::from_env());
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile, PROFILE_ENV_VAR};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};

pub use snapql_core_types::schema;

use std::time::Instant;

/// Whole milliseconds since `started`, saturating
pub fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
