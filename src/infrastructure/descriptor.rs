//! Descriptor codec
//!
//! Decodes a substituted descriptor into the JSON object sent to the
//! orchestrator. Text starting with `{` is JSON, anything else is YAML.

use serde_json::{Map, Value};

use crate::domain::ports::{OrchestratorError, OrchestratorResult};
use crate::domain::value_objects::AppId;

/// A decoded descriptor with its normalized application id
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedDescriptor {
    pub id: AppId,
    pub body: Map<String, Value>,
}

pub fn decode_descriptor(source: &str, text: &str) -> OrchestratorResult<DecodedDescriptor> {
    let invalid = |message: String| OrchestratorError::Descriptor {
        source_name: source.to_string(),
        message,
    };

    let value: Value = if text.trim_start().starts_with('{') {
        serde_json::from_str(text).map_err(|e| invalid(e.to_string()))?
    } else {
        serde_yaml_ng::from_str(text).map_err(|e| invalid(e.to_string()))?
    };

    let Value::Object(mut body) = value else {
        return Err(invalid("descriptor must be an object".to_string()));
    };

    let id = body
        .get("id")
        .and_then(Value::as_str)
        .and_then(AppId::parse)
        .ok_or_else(|| invalid("missing application 'id'".to_string()))?;
    body.insert("id".to_string(), Value::String(id.to_string()));

    Ok(DecodedDescriptor { id, body })
}
