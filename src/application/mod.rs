//! Application Layer
//!
//! Use cases that orchestrate the deployment workflow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CreateUseCase` - Resolve parameters, template, then preview or submit
//! - `AppWorkflow` - Submit, update resources, scale, restart, destroy, roll back, inspect
//! - `DeploymentWaiter` - Bounded polling until deployments finish
//!
//! ## Services
//!
//! - `ParameterResolver` - Layer parameter file and explicit parameters
//! - `TemplateTransformer` - Substitute parameters into descriptor text

pub mod create;
mod inspect;
mod lifecycle;
pub mod parameters;
mod resources;
mod rollback;
mod submit;
pub mod template;
pub mod wait;
pub mod workflow;

#[cfg(test)]
pub(crate) mod testing;

pub use create::{CreateOutcome, CreateRequest, CreateUseCase, PreparedDescriptor, DEFAULT_TEMPLATE_CONTEXT};
pub use parameters::ParameterResolver;
pub use resources::{parse_amount, parse_count};
pub use template::{ResolvedDescriptor, TemplateTransformer};
pub use wait::{
    DeploymentWaiter, WaitOutcome, WaitReport, WaitSettings, DEFAULT_POLL_INTERVAL,
    DEFAULT_WAIT_TIMEOUT,
};
pub use workflow::{AppWorkflow, DeploymentResult, Submission, SubmitKind};
