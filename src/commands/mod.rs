//! Command handlers
//!
//! Each `cmd_*` function maps one `deckhand app` subcommand onto the
//! workflow and renders its result.

pub mod create;
pub mod inspect;
pub mod lifecycle;
pub mod rollback;
pub mod update;

use anyhow::Result;

use deckhand::application::{WaitOutcome, WaitReport};
use deckhand::config::Config;
use deckhand::domain::ports::CancelToken;
use deckhand::presentation::factory::{self, ConcreteWorkflow};
use deckhand::presentation::output::{create_renderer, ResultRenderer};

use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::context::UiContext;

/// Everything a command needs besides its own arguments
pub struct Session {
    pub ui: UiContext,
    pub config: Config,
    pub host: Option<String>,
    pub cancel: CancelToken,
}

impl Session {
    pub fn workflow(&self, command: &'static str) -> Result<ConcreteWorkflow> {
        let events = factory::create_event_sink(self.ui.json, command, self.ui.verbose);
        Ok(factory::create_workflow(
            &self.config,
            self.host.as_deref(),
            self.cancel.clone(),
            events,
        )?)
    }

    pub fn renderer(&self) -> Box<dyn ResultRenderer> {
        create_renderer(self.ui.format(), self.ui.color, self.ui.unicode)
    }

    pub fn print(&self, rendered: &str) -> Result<()> {
        crate::ui::json::print_rendered(rendered)?;
        Ok(())
    }

    /// Surface an unfinished wait as a CI warning; the command still succeeds
    pub fn annotate_wait(&self, command: &str, report: Option<&WaitReport>) {
        let Some(report) = report else { return };
        if report.outcome == WaitOutcome::Completed || self.ui.json || !self.ui.caps.is_github_actions {
            return;
        }
        let handles: Vec<String> = report.handles.iter().map(|h| h.to_string()).collect();
        println!(
            "{}",
            github_actions_annotation(
                AnnotationLevel::Warning,
                &format!(
                    "wait {} for deployment(s) {}",
                    report.outcome.label(),
                    handles.join(", ")
                ),
                Some(&format!("deckhand: {}", command)),
            )
        );
    }
}
