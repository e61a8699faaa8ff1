//! Template Transformer
//!
//! Reads a descriptor template and substitutes resolved parameters. The
//! transformer never submits; the caller decides between preview and
//! submission.

use std::path::Path;

use tracing::{debug, warn};

use crate::domain::ports::FileSystem;
use crate::domain::services::{substitute, TemplateContext};
use crate::domain::value_objects::ParameterSet;
use crate::error::{DeckhandError, DeckhandResult};

/// Descriptor text after substitution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDescriptor {
    pub source: String,
    pub text: String,
    /// Placeholders left in place (lenient mode)
    pub unresolved: Vec<String>,
}

pub struct TemplateTransformer<FS: FileSystem> {
    fs: FS,
}

impl<FS: FileSystem> TemplateTransformer<FS> {
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Load the template context at `path`; `None` when the file is absent
    pub fn load_context(
        &self,
        path: &Path,
        environment: Option<&str>,
    ) -> DeckhandResult<Option<TemplateContext>> {
        if !self.fs.exists(path) {
            debug!(path = %path.display(), "no template context");
            return Ok(None);
        }
        let text = read(&self.fs, path)?;
        let context = TemplateContext::from_json(&path.display().to_string(), &text, environment)?;
        debug!(path = %path.display(), values = context.len(), "loaded template context");
        Ok(Some(context))
    }

    /// Read `descriptor_path` and substitute `params`
    pub fn transform(
        &self,
        descriptor_path: &Path,
        params: &ParameterSet,
        error_on_missing_params: bool,
    ) -> DeckhandResult<ResolvedDescriptor> {
        let text = read(&self.fs, descriptor_path)?;
        self.transform_text(&descriptor_path.display().to_string(), &text, params, error_on_missing_params)
    }

    pub fn transform_text(
        &self,
        source: &str,
        text: &str,
        params: &ParameterSet,
        error_on_missing_params: bool,
    ) -> DeckhandResult<ResolvedDescriptor> {
        let substitution = substitute(text, params, error_on_missing_params)?;
        for name in &substitution.unresolved {
            warn!(placeholder = %name, source = %source, "unresolved parameter left in descriptor");
        }
        Ok(ResolvedDescriptor {
            source: source.to_string(),
            text: substitution.text,
            unresolved: substitution.unresolved,
        })
    }
}

pub(super) fn read<FS: FileSystem>(fs: &FS, path: &Path) -> DeckhandResult<String> {
    fs.read(path).map_err(|e| DeckhandError::FileRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
