//! Domain Layer
//!
//! This is the core of Deckhand - pure business logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Applications, patches, deployments, version history
//! - `value_objects/` - Immutable value types (AppId, ParameterSet, SubmissionOptions)
//! - `services/` - Templating, param parsing, submit policy, rollback selection
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
