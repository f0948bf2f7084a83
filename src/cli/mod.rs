//! CLI module
//!
//! Command-line interface for the OneLogin API.
//!
//! # Commands
//!
//! - `user list|modify-email|create` - Search, update and create users
//! - `app list|list-users` - List apps and their users
//! - `event list|types` - Search events and list event types
//! - `version` - Print the version

mod commands;
mod runner;

pub use commands::{
    AppCommands, Cli, Commands, EventCommands, EventFilterArgs, OutputArgs, UserCommands,
    UserFilterArgs,
};
pub use runner::Runner;
