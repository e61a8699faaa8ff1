//! Domain Entities
//!
//! Objects exchanged with the orchestrator: applications, update requests,
//! deployments and version history.

mod application;
mod deployment;
mod descriptor;

pub use application::{Application, ApplicationPatch};
pub use deployment::{DeploymentHandle, DeploymentSummary, VersionHistory};
pub use descriptor::{ApplicationUpdate, DescriptorRequest};
