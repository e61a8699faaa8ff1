//! Deckhand - deployment workflow client for Marathon-style orchestrators
//!
//! Deckhand turns templated application descriptors into submissions,
//! applies create-or-update policy, adjusts resources, and optionally waits
//! for the resulting deployments to converge.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{AppWorkflow, CreateRequest, CreateUseCase, Submission, WaitReport};
pub use config::Config;
pub use domain::entities::{Application, DeploymentHandle, VersionHistory};
pub use domain::value_objects::{AppId, SubmissionOptions};
pub use error::{DeckhandError, DeckhandResult};
