use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::ranking::PlayerId;

#[derive(Parser, Debug)]
#[command(author, version, about = "Swiss-system tournament standings and pairings")]
pub struct Cli {
    /// Path to the SQLite database (overrides DATABASE_PATH)
    #[arg(short, long, global = true)]
    pub database: Option<String>,

    /// Print results as JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Create the tournament tables if they are missing
    Init {
        /// Drop all existing data first
        #[arg(long)]
        reset: bool,
    },
    /// Register a new player
    Register {
        /// Player's full name (need not be unique)
        name: String,
    },
    /// Print the number of registered players
    Count,
    /// Record the outcome of a single match
    Report {
        /// Id of the player who won
        winner: PlayerId,
        /// Id of the player who lost
        loser: PlayerId,
    },
    /// Show players ranked by wins
    Standings,
    /// Show the pairings for the next round
    Pairings,
    /// List every reported match
    Matches,
    /// Clear all matches and reset every player's record
    DeleteMatches,
    /// Remove all players and matches
    DeletePlayers,
    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_report() {
        let cli = Cli::try_parse_from(["swiss_tournament", "report", "3", "7"]).unwrap();
        assert_eq!(cli.command, Command::Report { winner: 3, loser: 7 });
        assert!(cli.database.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "swiss_tournament",
            "standings",
            "--database",
            "league.db",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.command, Command::Standings);
        assert_eq!(cli.database.as_deref(), Some("league.db"));
        assert!(cli.json);
    }

    #[test]
    fn test_kebab_case_subcommands() {
        let cli = Cli::try_parse_from(["swiss_tournament", "delete-matches"]).unwrap();
        assert_eq!(cli.command, Command::DeleteMatches);
    }

    #[test]
    fn test_report_requires_numeric_ids() {
        assert!(Cli::try_parse_from(["swiss_tournament", "report", "alice", "bob"]).is_err());
    }

    #[test]
    fn test_init_reset_flag() {
        let cli = Cli::try_parse_from(["swiss_tournament", "init", "--reset"]).unwrap();
        assert_eq!(cli.command, Command::Init { reset: true });
    }
}
