//! Weekly on-site/remote-work schedule service.
//!
//! Alternates between two fixed roster tables depending on the parity
//! of the current week number, and serves the resolved week over HTTP.

pub mod config;
pub mod schedule;
pub mod server;
pub mod types;
