//! CLI module
//!
//! Command-line interface for fetching events.
//!
//! # Commands
//!
//! - `eventbrite` - Fetch today's New York music events from Eventbrite
//! - `ticketmaster` - Fetch today's New York music events from Ticketmaster

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
