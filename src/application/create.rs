//! Create pipeline
//!
//! Parameters are resolved first, then the descriptor is templated when a
//! template context is present, then it is either previewed (dry-run) or
//! handed to the submitter.

use std::path::PathBuf;

use tracing::debug;

use super::parameters::ParameterResolver;
use super::template::{read, ResolvedDescriptor, TemplateTransformer};
use super::workflow::{AppWorkflow, Submission};
use crate::domain::entities::DescriptorRequest;
use crate::domain::ports::{Clock, FileSystem, OrchestratorClient};
use crate::domain::value_objects::{Param, SubmissionOptions};
use crate::error::DeckhandResult;

/// Default template context looked up in the working directory
pub const DEFAULT_TEMPLATE_CONTEXT: &str = "template-context.json";

/// Inputs of `deckhand app create`
#[derive(Debug, Clone)]
pub struct CreateRequest {
    pub descriptor: PathBuf,
    pub param_file: Option<PathBuf>,
    pub params: Vec<Param>,
    pub template_context: PathBuf,
    pub environment: Option<String>,
    pub options: SubmissionOptions,
}

impl CreateRequest {
    pub fn new(descriptor: impl Into<PathBuf>) -> Self {
        Self {
            descriptor: descriptor.into(),
            param_file: None,
            params: Vec::new(),
            template_context: PathBuf::from(DEFAULT_TEMPLATE_CONTEXT),
            environment: None,
            options: SubmissionOptions::default(),
        }
    }
}

/// Descriptor ready for submission or preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedDescriptor {
    pub request: DescriptorRequest,
    /// Whether the template transformer ran
    pub templated: bool,
    pub unresolved: Vec<String>,
}

/// What `create` did
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    /// Dry-run: resolved descriptor for display only
    Preview(ResolvedDescriptor),
    Submitted {
        submission: Submission,
        /// Placeholders submitted unresolved (lenient mode)
        unresolved: Vec<String>,
    },
}

pub struct CreateUseCase<FS: FileSystem + Clone> {
    fs: FS,
    resolver: ParameterResolver<FS>,
    transformer: TemplateTransformer<FS>,
}

impl<FS: FileSystem + Clone> CreateUseCase<FS> {
    pub fn new(fs: FS) -> Self {
        Self {
            resolver: ParameterResolver::new(fs.clone()),
            transformer: TemplateTransformer::new(fs.clone()),
            fs,
        }
    }

    /// Resolve parameters and template the descriptor
    ///
    /// Substitution is checked on every path, so a strict-mode missing
    /// parameter fails here before any orchestrator call.
    pub fn prepare(&self, req: &CreateRequest) -> DeckhandResult<PreparedDescriptor> {
        let strict = req.options.error_on_missing_params;
        let mut params = self.resolver.resolve(req.param_file.as_deref(), &req.params)?;
        let context = self
            .transformer
            .load_context(&req.template_context, req.environment.as_deref())?;
        let source = req.descriptor.display().to_string();

        let (request, templated, unresolved) = match context {
            Some(context) => {
                params = params.with_defaults(context.values());
                let resolved = self.transformer.transform(&req.descriptor, &params, strict)?;
                (
                    DescriptorRequest::resolved(source.clone(), resolved.text),
                    true,
                    resolved.unresolved,
                )
            }
            None => {
                let text = read(&self.fs, &req.descriptor)?;
                let resolved = self.transformer.transform_text(&source, &text, &params, strict)?;
                // A preview shows what the client would submit after substitution.
                let request = if req.options.dry_run {
                    DescriptorRequest::resolved(source.clone(), resolved.text)
                } else {
                    DescriptorRequest::new(source.clone(), text).with_params(params.clone(), strict)
                };
                (request, false, resolved.unresolved)
            }
        };

        debug!(source = %source, params = params.len(), templated, "descriptor prepared");
        Ok(PreparedDescriptor {
            request,
            templated,
            unresolved,
        })
    }

    /// Prepare, then preview or submit
    pub fn execute<C, K>(
        &self,
        workflow: &AppWorkflow<C, K>,
        req: &CreateRequest,
    ) -> DeckhandResult<CreateOutcome>
    where
        C: OrchestratorClient,
        K: Clock,
    {
        let prepared = self.prepare(req)?;

        if req.options.dry_run {
            return Ok(CreateOutcome::Preview(ResolvedDescriptor {
                source: prepared.request.source,
                text: prepared.request.text,
                unresolved: prepared.unresolved,
            }));
        }

        let submission = workflow.submit(&prepared.request, &req.options)?;
        Ok(CreateOutcome::Submitted {
            submission,
            unresolved: prepared.unresolved,
        })
    }
}
