//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--host, --json, --color, --verbose, --config) are inherited by all subcommands
//! - Typed value parsers reject malformed durations, parameters and ids at parse time
//! - Numeric resource values stay strings here; the workflow validates them

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::application::DEFAULT_TEMPLATE_CONTEXT;
use crate::domain::value_objects::{AppId, Param};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Deckhand - deployment workflow client for Marathon
#[derive(Parser, Debug)]
#[command(name = "deckhand")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Marathon URL (overrides DECKHAND_MARATHON_URL and the config file)
    #[arg(long, global = true, value_name = "URL")]
    pub host: Option<String>,

    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ~/.config/deckhand/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage applications
    #[command(subcommand)]
    App(AppCommand),
}

#[derive(Subcommand, Debug)]
pub enum AppCommand {
    /// Create an application from a descriptor (update it with --force)
    Create(CreateArgs),

    /// Update CPU, memory or instances of an application
    #[command(subcommand)]
    Update(UpdateCommand),

    /// Scale an application to COUNT instances
    Scale {
        #[arg(value_parser = parse_app_id)]
        id: AppId,

        #[arg(allow_negative_numbers = true)]
        count: String,

        #[command(flatten)]
        wait: WaitArgs,
    },

    /// Restart all tasks of an application
    Restart {
        #[arg(value_parser = parse_app_id)]
        id: AppId,

        /// Force the restart even if a deployment is in progress
        #[arg(short, long)]
        force: bool,

        #[command(flatten)]
        wait: WaitArgs,
    },

    /// Remove an application and all of its tasks
    Destroy {
        #[arg(value_parser = parse_app_id)]
        id: AppId,

        #[command(flatten)]
        wait: WaitArgs,
    },

    /// Roll back to VERSION, or to the version before the current one
    Rollback {
        #[arg(value_parser = parse_app_id)]
        id: AppId,

        version: Option<String>,

        #[command(flatten)]
        wait: WaitArgs,
    },

    /// List applications (optional filter: label=tier==web | id=/services | cmd=java)
    List { filter: Option<String> },

    /// Show a single application
    Get {
        #[arg(value_parser = parse_app_id)]
        id: AppId,
    },

    /// List the recorded versions of an application
    Versions {
        #[arg(value_parser = parse_app_id)]
        id: AppId,
    },
}

#[derive(Subcommand, Debug)]
pub enum UpdateCommand {
    /// Set CPU shares
    Cpu {
        #[arg(value_parser = parse_app_id)]
        id: AppId,

        #[arg(allow_negative_numbers = true)]
        value: String,

        #[command(flatten)]
        wait: WaitArgs,
    },

    /// Set memory in MB
    Mem {
        #[arg(value_parser = parse_app_id)]
        id: AppId,

        #[arg(allow_negative_numbers = true)]
        value: String,

        #[command(flatten)]
        wait: WaitArgs,
    },

    /// Set the instance count
    Instances {
        #[arg(value_parser = parse_app_id)]
        id: AppId,

        #[arg(allow_negative_numbers = true)]
        count: String,

        #[command(flatten)]
        wait: WaitArgs,
    },
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct WaitArgs {
    /// Wait for the deployment to finish
    #[arg(short, long)]
    pub wait: bool,

    /// Wait bound, e.g. 90s or 2m (0 uses the default)
    #[arg(short, long, value_name = "DURATION", value_parser = parse_duration)]
    pub timeout: Option<Duration>,
}

#[derive(Args, Debug, Clone)]
pub struct CreateArgs {
    /// Application descriptor (JSON or YAML)
    pub file: PathBuf,

    /// Update the application if it already exists
    #[arg(short, long)]
    pub force: bool,

    /// With --force, cancel in-flight deployments of the application first
    #[arg(long)]
    pub stop_deploys: bool,

    /// Leave unresolved ${NAME} placeholders instead of failing
    #[arg(short = 'i', long)]
    pub ignore_missing: bool,

    /// File of KEY=VALUE lines used as parameters
    #[arg(short = 'c', long, value_name = "FILE")]
    pub env_file: Option<PathBuf>,

    /// Parameter KEY=VALUE (repeatable, comma-delimited)
    #[arg(short = 'p', long = "param", value_name = "KEY=VALUE", value_delimiter = ',')]
    pub params: Vec<Param>,

    /// Template context file; templating is enabled when it exists
    #[arg(long, value_name = "FILE", default_value = DEFAULT_TEMPLATE_CONTEXT)]
    pub tempctx: PathBuf,

    /// Environment section of the template context to apply
    #[arg(long = "env", value_name = "NAME")]
    pub environment: Option<String>,

    /// Print the resolved descriptor without submitting
    #[arg(long)]
    pub dry_run: bool,

    #[command(flatten)]
    pub wait: WaitArgs,
}

fn parse_app_id(raw: &str) -> Result<AppId, String> {
    raw.parse()
}

/// Parse `500ms`, `90s`, `2m`, `1h`, or a bare number of seconds
pub fn parse_duration(raw: &str) -> Result<Duration, String> {
    let raw = raw.trim();
    let split = raw
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len());
    let (digits, unit) = raw.split_at(split);
    let invalid = || format!("invalid duration '{}' (expected e.g. 500ms, 90s, 2m, 1h)", raw);

    let value: u64 = digits.parse().map_err(|_| invalid())?;
    match unit {
        "" | "s" => Ok(Duration::from_secs(value)),
        "ms" => Ok(Duration::from_millis(value)),
        "m" => value
            .checked_mul(60)
            .map(Duration::from_secs)
            .ok_or_else(invalid),
        "h" => value
            .checked_mul(3600)
            .map(Duration::from_secs)
            .ok_or_else(invalid),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("deckhand").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_parse_create_flags() {
        let cli = parse(&[
            "app", "create", "app.json", "-f", "--stop-deploys", "-i", "-c", "prod.env", "-p",
            "A=1,B=2", "-p", "C=x=y", "--env", "prod", "-w", "-t", "2m",
        ]);
        let Commands::App(AppCommand::Create(args)) = cli.command else {
            panic!("Expected Create command");
        };

        assert_eq!(args.file, PathBuf::from("app.json"));
        assert!(args.force && args.stop_deploys && args.ignore_missing);
        assert_eq!(args.env_file, Some(PathBuf::from("prod.env")));
        assert_eq!(args.params.len(), 3);
        assert_eq!(args.params[2].value, "x=y");
        assert_eq!(args.environment.as_deref(), Some("prod"));
        assert_eq!(args.tempctx, PathBuf::from("template-context.json"));
        assert_eq!(
            args.wait,
            WaitArgs {
                wait: true,
                timeout: Some(Duration::from_secs(120)),
            }
        );
    }

    #[test]
    fn test_cli_param_without_equals_is_usage_error() {
        let result = Cli::try_parse_from(["deckhand", "app", "create", "app.json", "-p", "NOEQ"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_bad_timeout_is_usage_error() {
        let result = Cli::try_parse_from(["deckhand", "app", "scale", "web", "2", "-t", "soon"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_empty_id_is_usage_error() {
        let result = Cli::try_parse_from(["deckhand", "app", "get", ""]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_id_is_normalized() {
        let cli = parse(&["app", "get", "web"]);
        let Commands::App(AppCommand::Get { id }) = cli.command else {
            panic!("Expected Get command");
        };
        assert_eq!(id.as_str(), "/web");
    }

    #[test]
    fn test_cli_negative_values_reach_the_workflow() {
        let cli = parse(&["app", "update", "mem", "/web", "-64"]);
        let Commands::App(AppCommand::Update(UpdateCommand::Mem { value, .. })) = cli.command
        else {
            panic!("Expected update mem command");
        };
        assert_eq!(value, "-64");
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = parse(&["app", "list", "--json", "--host", "http://m:8080", "-vv"]);
        assert!(cli.json);
        assert_eq!(cli.host.as_deref(), Some("http://m:8080"));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_rollback_version_optional() {
        let cli = parse(&["app", "rollback", "/web"]);
        assert!(matches!(
            cli.command,
            Commands::App(AppCommand::Rollback { version: None, .. })
        ));
    }

    #[test]
    fn test_cli_color_flag() {
        let cli = parse(&["--color", "never", "app", "list"]);
        assert!(matches!(cli.color, Some(ColorWhen::Never)));
    }

    #[test]
    fn test_parse_duration_units() {
        assert_eq!(parse_duration("500ms").unwrap(), Duration::from_millis(500));
        assert_eq!(parse_duration("90s").unwrap(), Duration::from_secs(90));
        assert_eq!(parse_duration("2m").unwrap(), Duration::from_secs(120));
        assert_eq!(parse_duration("1h").unwrap(), Duration::from_secs(3600));
        assert_eq!(parse_duration("45").unwrap(), Duration::from_secs(45));
        assert_eq!(parse_duration("0").unwrap(), Duration::ZERO);
    }

    #[test]
    fn test_parse_duration_rejects_garbage() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("s").is_err());
        assert!(parse_duration("1.5s").is_err());
        assert!(parse_duration("10d").is_err());
        assert!(parse_duration("-5").is_err());
    }

    #[test]
    fn test_cli_verify() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
