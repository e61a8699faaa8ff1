//! Create-or-update decision table
//!
//! | create result | force | stop | steps                      |
//! |---------------|-------|------|----------------------------|
//! | created       | -     | -    | (none)                     |
//! | exists        | no    | -    | Reject                     |
//! | exists        | yes   | no   | Update                     |
//! | exists        | yes   | yes  | StopDeployments, Update    |

use crate::domain::value_objects::SubmissionOptions;

/// Step to execute after a create collided with an existing application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyStep {
    /// Fail with an already-exists error
    Reject,
    /// Cancel in-flight deployments for the application
    StopDeployments,
    /// Update using the same descriptor
    Update,
}

/// Force and stop-deploy flags evaluated in a fixed order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubmitPolicy {
    pub force: bool,
    pub stop_existing_deploy: bool,
}

impl SubmitPolicy {
    pub fn from_options(options: &SubmissionOptions) -> Self {
        Self {
            force: options.force,
            stop_existing_deploy: options.stop_existing_deploy,
        }
    }

    /// Steps to run when the application already exists
    pub fn on_existing(&self) -> Vec<PolicyStep> {
        if !self.force {
            return vec![PolicyStep::Reject];
        }
        let mut steps = Vec::with_capacity(2);
        if self.stop_existing_deploy {
            steps.push(PolicyStep::StopDeployments);
        }
        steps.push(PolicyStep::Update);
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy(force: bool, stop: bool) -> SubmitPolicy {
        SubmitPolicy {
            force,
            stop_existing_deploy: stop,
        }
    }

    #[test]
    fn without_force_rejects() {
        assert_eq!(policy(false, false).on_existing(), vec![PolicyStep::Reject]);
    }

    #[test]
    fn stop_without_force_still_rejects() {
        assert_eq!(policy(false, true).on_existing(), vec![PolicyStep::Reject]);
    }

    #[test]
    fn force_updates() {
        assert_eq!(policy(true, false).on_existing(), vec![PolicyStep::Update]);
    }

    #[test]
    fn force_with_stop_cancels_first() {
        assert_eq!(
            policy(true, true).on_existing(),
            vec![PolicyStep::StopDeployments, PolicyStep::Update]
        );
    }

    #[test]
    fn built_from_options() {
        let options = SubmissionOptions {
            force: true,
            stop_existing_deploy: true,
            ..SubmissionOptions::default()
        };
        assert_eq!(SubmitPolicy::from_options(&options), policy(true, true));
    }
}
