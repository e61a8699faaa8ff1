//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system reads
//! - `marathon/` - Marathon REST client
//! - `events/` - Console and NDJSON workflow event sinks
//! - `descriptor` - JSON/YAML descriptor decoding
//! - `clock` - Wall clock for the deployment waiter

pub mod clock;
pub mod descriptor;
pub mod events;
pub mod fs;
pub mod marathon;

// Re-export for convenience
pub use clock::SystemClock;
pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::LocalFs;
pub use marathon::{MarathonClient, MarathonSettings, DEFAULT_MARATHON_URL};
