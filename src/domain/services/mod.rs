//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod params;
mod rollback;
mod submit_policy;
mod template;

pub use params::parse_param_lines;
pub use rollback::{select_rollback_target, RollbackSelection};
pub use submit_policy::{PolicyStep, SubmitPolicy};
pub use template::{placeholders, substitute, Substitution, TemplateContext, TemplateError};
