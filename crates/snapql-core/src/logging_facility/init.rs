//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility.

use std::str::FromStr;
use std::sync::Once;
use thiserror::Error;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Environment variable selecting the logging profile
pub const PROFILE_ENV_VAR: &str = "SNAPQL_LOG_PROFILE";

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    /// Human-readable output for development
    #[default]
    Development,
    /// JSON structured output for production
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

/// Error returned for an unrecognised profile name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown logging profile: '{0}' (expected development, production or test)")]
pub struct ParseProfileError(pub String);

impl FromStr for Profile {
    type Err = ParseProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Profile::Development),
            "production" | "prod" => Ok(Profile::Production),
            "test" => Ok(Profile::Test),
            _ => Err(ParseProfileError(s.to_string())),
        }
    }
}

impl Profile {
    /// Read the profile from `SNAPQL_LOG_PROFILE`
    ///
    /// Falls back to `Development` when the variable is unset or unparseable.
    pub fn from_env() -> Self {
        std::env::var(PROFILE_ENV_VAR)
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    fn default_directive(&self) -> &'static str {
        match self {
            Profile::Development => "snapql=debug",
            Profile::Production => "snapql=info",
            Profile::Test => "snapql=trace",
        }
    }
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Call once at application startup; later calls are no-ops. `RUST_LOG`
/// overrides the profile's default level filter when set.
///
/// # Profiles
///
/// - **Development**: Human-readable logs with debug level
/// - **Production**: JSON structured logs with info level
/// - **Test**: Bare registry; tests install their own capture layer
///
/// # Example
///
/// ```
/// use snapql_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let filter = || {
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(profile.default_directive()))
        };
        // try_init: a subscriber installed elsewhere (e.g. test capture) wins
        let _ = match profile {
            Profile::Development => tracing_subscriber::fmt()
                .with_env_filter(filter())
                .finish()
                .try_init(),
            Profile::Production => tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter())
                .finish()
                .try_init(),
            Profile::Test => tracing_subscriber::registry().try_init(),
        };
    });
}
