//! Marathon REST adapter

mod client;
mod wire;

pub use client::{MarathonClient, MarathonSettings, DEFAULT_MARATHON_URL};
