//! Common test utilities for Deckhand CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated working and config directories plus CLI helpers
//! - `FakeMarathon`: wiremock-backed Marathon that records requests

#![allow(dead_code)]

pub mod env;
pub mod fake_marathon;

pub use env::*;
pub use fake_marathon::*;
