//! Create command handler
//!
//! Resolves parameters, templates the descriptor and submits it, or prints
//! the resolved descriptor with `--dry-run`.

use anyhow::Result;

use deckhand::application::{CreateOutcome, CreateRequest};
use deckhand::domain::value_objects::SubmissionOptions;
use deckhand::presentation::factory;
use deckhand::presentation::CreateArgs;

use super::Session;
use crate::ui::output::print_config_warnings;

pub fn create_request(args: CreateArgs) -> CreateRequest {
    CreateRequest {
        descriptor: args.file,
        param_file: args.env_file,
        params: args.params,
        template_context: args.tempctx,
        environment: args.environment,
        options: SubmissionOptions {
            wait: args.wait.wait,
            force: args.force,
            error_on_missing_params: !args.ignore_missing,
            stop_existing_deploy: args.stop_deploys,
            dry_run: args.dry_run,
            timeout: args.wait.timeout,
        },
    }
}

pub fn cmd_create(session: &Session, args: CreateArgs) -> Result<()> {
    let request = create_request(args);
    let use_case = factory::create_create_use_case();
    let workflow = session.workflow("create")?;
    let renderer = session.renderer();

    match use_case.execute(&workflow, &request)? {
        CreateOutcome::Preview(resolved) => {
            warn_unresolved(session, &resolved.unresolved);
            session.print(&renderer.preview(&resolved))
        }
        CreateOutcome::Submitted {
            submission,
            unresolved,
        } => {
            warn_unresolved(session, &unresolved);
            session.print(&renderer.submission("create", &submission))?;
            session.annotate_wait("create", submission.wait.as_ref());
            Ok(())
        }
    }
}

fn warn_unresolved(session: &Session, unresolved: &[String]) {
    let warnings: Vec<String> = unresolved
        .iter()
        .map(|name| format!("No value for '${{{}}}', left in place", name))
        .collect();
    print_config_warnings(&session.ui, &warnings);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use deckhand::presentation::{AppCommand, Cli, Commands};

    fn args(argv: &[&str]) -> CreateArgs {
        let cli = Cli::try_parse_from(argv.iter().copied()).unwrap();
        match cli.command {
            Commands::App(AppCommand::Create(args)) => args,
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn create_request_maps_flags_to_options() {
        let request = create_request(args(&[
            "deckhand",
            "app",
            "create",
            "app.json",
            "-f",
            "--stop-deploys",
            "-i",
            "-w",
            "-t",
            "30s",
            "-p",
            "CPU=0.5",
        ]));

        assert!(request.options.force);
        assert!(request.options.stop_existing_deploy);
        assert!(!request.options.error_on_missing_params);
        assert!(request.options.wait);
        assert_eq!(request.options.timeout, Some(std::time::Duration::from_secs(30)));
        assert_eq!(request.params.len(), 1);
    }

    #[test]
    fn create_request_is_strict_by_default() {
        let request = create_request(args(&["deckhand", "app", "create", "app.json"]));
        assert!(request.options.error_on_missing_params);
        assert!(!request.options.dry_run);
        assert_eq!(
            request.template_context,
            std::path::PathBuf::from("template-context.json")
        );
    }
}
