//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod app_id;
mod parameter_set;
mod resource_field;
mod submission_options;

pub use app_id::AppId;
pub use parameter_set::{Param, ParamParseError, ParameterSet};
pub use resource_field::ResourceField;
pub use submission_options::SubmissionOptions;
