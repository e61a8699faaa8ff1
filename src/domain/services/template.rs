//! Descriptor templating
//!
//! Replaces `${NAME}` placeholders with values from a `ParameterSet`.
//! A `TemplateContext` supplies per-environment default values.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::domain::value_objects::ParameterSet;

/// Templating failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Placeholder without a value under strict mode
    #[error("missing parameter '${{{0}}}'")]
    MissingParameter(String),

    /// Template context file is not a usable JSON object
    #[error("invalid template context {path}: {message}")]
    Context { path: String, message: String },
}

/// Result of a substitution pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub text: String,
    /// Placeholders left verbatim (lenient mode only), in document order
    pub unresolved: Vec<String>,
}

/// Iterate over placeholder names in document order
///
/// An unterminated `${` and an empty `${}` are not placeholders.
pub fn placeholders(template: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find("${") {
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                if end > 0 {
                    names.push(after[..end].to_string());
                }
                rest = &after[end + 1..];
            }
            None => break,
        }
    }
    names
}

/// Substitute every `${NAME}` in `template`
///
/// With `error_on_missing` the first unknown placeholder fails the whole
/// pass; otherwise it is left in place and reported in `unresolved`.
pub fn substitute(
    template: &str,
    params: &ParameterSet,
    error_on_missing: bool,
) -> Result<Substitution, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut unresolved = Vec::new();
    let mut rest = template;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            out.push_str(&rest[start..]);
            rest = "";
            break;
        };

        let name = &after[..end];
        let placeholder = &rest[start..start + 2 + end + 1];
        if name.is_empty() {
            out.push_str(placeholder);
        } else if let Some(value) = params.get(name) {
            out.push_str(value);
        } else if error_on_missing {
            return Err(TemplateError::MissingParameter(name.to_string()));
        } else {
            out.push_str(placeholder);
            unresolved.push(name.to_string());
        }
        rest = &after[end + 1..];
    }
    out.push_str(rest);

    Ok(Substitution {
        text: out,
        unresolved,
    })
}

/// Default values supplied by a template context file
///
/// The file is a JSON object. Top-level scalars are defaults for every
/// environment; `"environments": {"<name>": {...}}` layers named overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateContext {
    values: BTreeMap<String, String>,
}

impl TemplateContext {
    /// Parse context JSON, selecting `environment` when given
    pub fn from_json(path: &str, text: &str, environment: Option<&str>) -> Result<Self, TemplateError> {
        let context_error = |message: String| TemplateError::Context {
            path: path.to_string(),
            message,
        };

        let root: serde_json::Value =
            serde_json::from_str(text).map_err(|e| context_error(e.to_string()))?;
        let serde_json::Value::Object(root) = root else {
            return Err(context_error("expected a JSON object".to_string()));
        };

        let mut values = scalars(&root);
        values.remove("environments");

        if let Some(env) = environment {
            let selected = root
                .get("environments")
                .and_then(|envs| envs.get(env))
                .and_then(|v| v.as_object())
                .ok_or_else(|| context_error(format!("environment '{}' is not defined", env)))?;
            values.extend(scalars(selected));
        }

        Ok(Self { values })
    }

    pub fn values(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn scalars(map: &serde_json::Map<String, serde_json::Value>) -> BTreeMap<String, String> {
    map.iter()
        .filter_map(|(k, v)| {
            let value = match v {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => b.to_string(),
                _ => return None,
            };
            Some((k.clone(), value))
        })
        .collect()
}
