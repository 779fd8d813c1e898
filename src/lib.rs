pub mod cli;
pub mod config;
pub mod database;
pub mod errors;
pub mod output;
pub mod ranking;
pub mod services;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::config::settings::AppConfig;
use crate::ranking::PlayerId;
use crate::services::{PairingService, StandingsService};

pub fn interpret() -> Cli {
    Cli::parse()
}

fn open_standings(config: &AppConfig) -> Result<StandingsService> {
    Ok(StandingsService::from_settings(&config.database)?)
}

pub fn handle_init(config: &AppConfig, reset: bool) -> Result<()> {
    if reset {
        let pool = database::create_pool(&config.database)?;
        let conn = database::get_connection(&pool)?;
        database::setup::reset_database(&conn)?;
    }

    open_standings(config)?;
    println!("Tournament database ready at {}", config.database.path);
    Ok(())
}

pub fn handle_register(config: &AppConfig, name: &str, json: bool) -> Result<()> {
    let id = open_standings(config)?.register_player(name)?;

    if json {
        println!("{}", output::to_json(&serde_json::json!({ "id": id, "name": name }))?);
    } else {
        println!("Registered {} with id {}", name, id);
    }
    Ok(())
}

pub fn handle_count(config: &AppConfig, json: bool) -> Result<()> {
    let count = open_standings(config)?.count_players()?;

    if json {
        println!("{}", output::to_json(&serde_json::json!({ "players": count }))?);
    } else {
        println!("{}", count);
    }
    Ok(())
}

pub fn handle_report(
    config: &AppConfig,
    winner: PlayerId,
    loser: PlayerId,
    json: bool,
) -> Result<()> {
    let record = open_standings(config)?.report_match(winner, loser)?;

    if json {
        println!("{}", output::to_json(&record)?);
    } else {
        println!("Recorded match {}: {} beat {}", record.id, winner, loser);
    }
    Ok(())
}

pub fn handle_standings(config: &AppConfig, json: bool) -> Result<()> {
    let standings = open_standings(config)?.player_standings()?;

    if json {
        println!("{}", output::to_json(&standings)?);
    } else {
        print!("{}", output::render_standings(&standings));
    }
    Ok(())
}

pub fn handle_pairings(config: &AppConfig, json: bool) -> Result<()> {
    let service = PairingService::new(open_standings(config)?);
    let pairings = service.swiss_pairings()?;

    if json {
        println!("{}", output::to_json(&pairings)?);
    } else {
        print!("{}", output::render_pairings(&pairings));
    }
    Ok(())
}

pub fn handle_matches(config: &AppConfig, json: bool) -> Result<()> {
    let history = open_standings(config)?.match_history()?;

    if json {
        println!("{}", output::to_json(&history)?);
    } else {
        print!("{}", output::render_matches(&history));
    }
    Ok(())
}

pub fn handle_delete_matches(config: &AppConfig) -> Result<()> {
    let removed = open_standings(config)?.delete_matches()?;
    println!("Deleted {} matches; all records reset", removed);
    Ok(())
}

pub fn handle_delete_players(config: &AppConfig) -> Result<()> {
    let removed = open_standings(config)?.delete_players()?;
    println!("Deleted {} players", removed);
    Ok(())
}

pub fn handle_completions(shell: Shell) {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
}
