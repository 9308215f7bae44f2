//! Environment configuration helpers.

use std::env;

/// Deployment environment name, read from `ENVIRONMENT`.
///
/// Defaults to `sandbox` so a bare checkout logs in the human-readable
/// format.
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}
