//! CLI tool for inspecting consistent hash rings.
//!
//! Provides commands for:
//! - Routing keys to members
//! - Listing membership
//! - Measuring key distribution
//! - Measuring how many keys move when a member joins

pub mod commands;
pub mod config;

pub use commands::{Command, CommandResult};
pub use config::CliConfig;
