//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Wiring workflows to their infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Argument definitions shared by the binary and its tests
//! - `factory` - Creates workflows with proper dependencies (dependency injection)
//! - `output` - Result rendering abstractions
//!
//! ## Usage
//!
//! ```ignore
//! use deckhand::presentation::factory;
//!
//! let events = factory::create_event_sink(false, "scale", 0);
//! let workflow = factory::create_workflow(&config, None, CancelToken::new(), events)?;
//! let result = workflow.scale(&id, "3", true, None)?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{AppCommand, Cli, ColorWhen, Commands, CreateArgs, UpdateCommand, WaitArgs};
pub use factory::{create_create_use_case, create_event_sink, create_workflow};
pub use output::{create_renderer, OutputFormat, ResultRenderer};
