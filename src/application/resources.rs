//! Numeric resource updates (CPU, memory, instances)
//!
//! Values are validated before any request is built, so malformed input
//! never reaches the orchestrator.

use std::time::Duration;

use super::workflow::{AppWorkflow, Submission};
use crate::domain::entities::ApplicationPatch;
use crate::domain::ports::{Clock, OrchestratorClient};
use crate::domain::value_objects::{AppId, ResourceField};
use crate::error::{DeckhandError, DeckhandResult};

/// Parse a CPU shares / memory MB value
pub fn parse_amount(field: ResourceField, raw: &str) -> DeckhandResult<f64> {
    let invalid = |reason: &str| DeckhandError::InvalidArgument {
        field,
        value: raw.to_string(),
        reason: reason.to_string(),
    };
    let value: f64 = raw.trim().parse().map_err(|_| invalid("not a number"))?;
    if !value.is_finite() {
        return Err(invalid("must be finite"));
    }
    if value < 0.0 {
        return Err(invalid("must not be negative"));
    }
    Ok(value)
}

/// Parse a non-negative instance count
pub fn parse_count(field: ResourceField, raw: &str) -> DeckhandResult<u32> {
    raw.trim()
        .parse()
        .map_err(|_| DeckhandError::InvalidArgument {
            field,
            value: raw.to_string(),
            reason: "expected a non-negative integer".to_string(),
        })
}

impl<C, K> AppWorkflow<C, K>
where
    C: OrchestratorClient,
    K: Clock,
{
    /// Update one numeric field of an existing application
    pub fn update_resource(
        &self,
        id: &AppId,
        field: ResourceField,
        raw_value: &str,
        wait: bool,
        timeout: Option<Duration>,
    ) -> DeckhandResult<Submission> {
        let patch = ApplicationPatch::new(id.clone());
        let patch = match field {
            ResourceField::Cpu => patch.cpus(parse_amount(field, raw_value)?),
            ResourceField::Memory => patch.mem(parse_amount(field, raw_value)?),
            ResourceField::Instances => patch.instances(parse_count(field, raw_value)?),
        };
        self.apply_patch(patch, wait, timeout)
    }
}
