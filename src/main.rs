use anyhow::Result;

use swiss_tournament::cli::{Cli, Command};
use swiss_tournament::config::AppConfig;
use swiss_tournament::{
    handle_completions, handle_count, handle_delete_matches, handle_delete_players, handle_init,
    handle_matches, handle_pairings, handle_register, handle_report, handle_standings, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    execute_command(cli)
}

fn execute_command(cli: Cli) -> Result<()> {
    let config = AppConfig::new().with_database_path(cli.database);
    let json = cli.json;

    match cli.command {
        Command::Init { reset } => handle_init(&config, reset),
        Command::Register { name } => handle_register(&config, &name, json),
        Command::Count => handle_count(&config, json),
        Command::Report { winner, loser } => handle_report(&config, winner, loser, json),
        Command::Standings => handle_standings(&config, json),
        Command::Pairings => handle_pairings(&config, json),
        Command::Matches => handle_matches(&config, json),
        Command::DeleteMatches => handle_delete_matches(&config),
        Command::DeletePlayers => handle_delete_players(&config),
        Command::Completions { shell } => {
            handle_completions(shell);
            Ok(())
        }
    }
}
