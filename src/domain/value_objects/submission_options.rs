//! Per-invocation submission options

use std::time::Duration;

/// Options controlling create/update submission and waiting
///
/// Built once per command from typed CLI flags and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionOptions {
    /// Block until the resulting deployment converges
    pub wait: bool,
    /// Convert "already exists" into an update
    pub force: bool,
    /// Fail when a `${NAME}` placeholder has no value
    pub error_on_missing_params: bool,
    /// Cancel in-flight deployments before a forced update
    pub stop_existing_deploy: bool,
    /// Render the resolved descriptor instead of submitting it
    pub dry_run: bool,
    /// Upper bound for the wait; `None` falls back to the configured default
    pub timeout: Option<Duration>,
}

impl Default for SubmissionOptions {
    fn default() -> Self {
        Self {
            wait: false,
            force: false,
            error_on_missing_params: true,
            stop_existing_deploy: false,
            dry_run: false,
            timeout: None,
        }
    }
}

impl SubmissionOptions {
    pub fn new() -> Self {
        Self::default()
    }
}
