//! CLI commands and argument parsing

use crate::config::SourceKind;
use clap::{Parser, Subcommand};

/// Fetch today's music events in New York and print them as JSON
#[derive(Parser, Debug)]
#[command(name = "event-pager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands, one per event source
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Fetch from the Eventbrite event search API (needs EVENTBRITE_OAUTH_TOKEN)
    Eventbrite,

    /// Fetch from the Ticketmaster discovery API (needs TICKETMASTER_API_KEY)
    Ticketmaster,
}

impl Commands {
    /// The source this command reads from
    pub fn source_kind(self) -> SourceKind {
        match self {
            Self::Eventbrite => SourceKind::Eventbrite,
            Self::Ticketmaster => SourceKind::Ticketmaster,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_subcommands() {
        let cli = Cli::try_parse_from(["event-pager", "eventbrite"]).unwrap();
        assert_eq!(cli.command, Commands::Eventbrite);
        assert_eq!(cli.command.source_kind(), SourceKind::Eventbrite);

        let cli = Cli::try_parse_from(["event-pager", "ticketmaster"]).unwrap();
        assert_eq!(cli.command.source_kind(), SourceKind::Ticketmaster);
    }

    #[test]
    fn test_rejects_flags() {
        assert!(Cli::try_parse_from(["event-pager", "ticketmaster", "--date", "2024-01-01"]).is_err());
        assert!(Cli::try_parse_from(["event-pager"]).is_err());
    }
}
