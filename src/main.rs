//! Deckhand CLI - deployment workflow client for Marathon
//!
//! Usage: deckhand app <COMMAND>
//!
//! Commands:
//!   create    Create (or with --force update) an application from a descriptor
//!   update    Update cpu, mem or instances in place
//!   scale     Set the instance count
//!   restart   Restart all tasks
//!   destroy   Delete an application
//!   rollback  Redeploy a previous version
//!   list      List applications
//!   get       Show one application
//!   versions  Show version history

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use deckhand::domain::ports::CancelToken;
use deckhand::presentation::{AppCommand, Cli, Commands, UpdateCommand};

use crate::commands::Session;
use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.json);

    let json = cli.json;
    if let Err(err) = run(cli) {
        ui::error::print_error(&err, json);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over `-v`
fn init_tracing(verbose: u8, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = match (json, verbose) {
            (true, _) => "off",
            (false, 0) => "warn",
            (false, 1) => "info",
            (false, 2) => "debug",
            (false, _) => "trace",
        };
        EnvFilter::new(format!("deckhand={}", level))
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn waits(command: &AppCommand) -> bool {
    match command {
        AppCommand::Create(args) => args.wait.wait && !args.dry_run,
        AppCommand::Update(
            UpdateCommand::Cpu { wait, .. }
            | UpdateCommand::Mem { wait, .. }
            | UpdateCommand::Instances { wait, .. },
        ) => wait.wait,
        AppCommand::Scale { wait, .. }
        | AppCommand::Restart { wait, .. }
        | AppCommand::Destroy { wait, .. }
        | AppCommand::Rollback { wait, .. } => wait.wait,
        AppCommand::List { .. } | AppCommand::Get { .. } | AppCommand::Versions { .. } => false,
    }
}

/// First Ctrl-C stops the wait loop; a second one exits immediately
fn install_interrupt_handler(cancel: &CancelToken) {
    let token = cancel.clone();
    let result = ctrlc::set_handler(move || {
        if token.is_cancelled() {
            std::process::exit(130);
        }
        token.cancel();
    });
    if let Err(err) = result {
        debug!(error = %err, "could not install interrupt handler");
    }
}

fn run(cli: Cli) -> Result<()> {
    let loaded = deckhand::config::load(cli.config.as_deref(), |key| std::env::var(key).ok())?;
    let ui = UiContext::new(cli.json, cli.verbose, cli.color, &loaded.config);
    print_config_warnings(&ui, &loaded.warnings);
    if let Some(source) = &loaded.source {
        debug!(path = %source.display(), "loaded config");
    }

    let Commands::App(command) = cli.command;

    let cancel = CancelToken::new();
    if waits(&command) {
        install_interrupt_handler(&cancel);
    }

    let session = Session {
        ui,
        config: loaded.config,
        host: cli.host,
        cancel,
    };

    match command {
        AppCommand::Create(args) => commands::create::cmd_create(&session, args),
        AppCommand::Update(update) => commands::update::cmd_update(&session, update),
        AppCommand::Scale { id, count, wait } => {
            commands::lifecycle::cmd_scale(&session, &id, &count, &wait)
        }
        AppCommand::Restart { id, force, wait } => {
            commands::lifecycle::cmd_restart(&session, &id, force, &wait)
        }
        AppCommand::Destroy { id, wait } => commands::lifecycle::cmd_destroy(&session, &id, &wait),
        AppCommand::Rollback { id, version, wait } => {
            commands::rollback::cmd_rollback(&session, &id, version.as_deref(), &wait)
        }
        AppCommand::List { filter } => commands::inspect::cmd_list(&session, filter.as_deref()),
        AppCommand::Get { id } => commands::inspect::cmd_get(&session, &id),
        AppCommand::Versions { id } => commands::inspect::cmd_versions(&session, &id),
    }
}
