//! Descriptor-based submissions

use super::application::ApplicationPatch;
use crate::domain::services::{substitute, TemplateError};
use crate::domain::value_objects::ParameterSet;

/// Descriptor text handed to the orchestrator client
///
/// The client decodes the text (JSON or YAML) after `submission_text`
/// has applied `${NAME}` substitution with `params`. A request built with
/// `resolved` was already templated and is sent as-is, so parameter
/// values containing `${...}` are never expanded a second time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorRequest {
    /// Where the descriptor came from (used in error messages)
    pub source: String,
    pub text: String,
    pub params: ParameterSet,
    pub error_on_missing_params: bool,
    /// Text is final; no substitution on submission
    pub resolved: bool,
}

impl DescriptorRequest {
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text: text.into(),
            params: ParameterSet::new(),
            error_on_missing_params: true,
            resolved: false,
        }
    }

    /// Already-substituted descriptor text
    pub fn resolved(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            resolved: true,
            error_on_missing_params: false,
            ..Self::new(source, text)
        }
    }

    pub fn with_params(mut self, params: ParameterSet, error_on_missing_params: bool) -> Self {
        self.params = params;
        self.error_on_missing_params = error_on_missing_params;
        self.resolved = false;
        self
    }

    /// Text to decode and submit
    pub fn submission_text(&self) -> Result<String, TemplateError> {
        if self.resolved {
            return Ok(self.text.clone());
        }
        substitute(&self.text, &self.params, self.error_on_missing_params).map(|s| s.text)
    }
}

/// Payload of an update call
#[derive(Debug, Clone, PartialEq)]
pub enum ApplicationUpdate {
    /// Full descriptor (forced create-or-update)
    Descriptor(DescriptorRequest),
    /// Partial update (resources, rollback)
    Patch(ApplicationPatch),
}
