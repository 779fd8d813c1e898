use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use crate::database::MatchRecord;
use crate::ranking::{Pairing, Standing};

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}

pub fn render_standings(standings: &[Standing]) -> String {
    let mut out = format!(
        "{}\n",
        format!("{:>4}  {:>6}  {:<24} {:>4}  {:>7}", "Rank", "Id", "Name", "Wins", "Matches").bold()
    );

    for (idx, standing) in standings.iter().enumerate() {
        out.push_str(&format!(
            "{:>4}  {:>6}  {:<24} {:>4}  {:>7}\n",
            idx + 1,
            standing.id,
            standing.name,
            standing.wins,
            standing.matches_played
        ));
    }

    out
}

pub fn render_pairings(pairings: &[Pairing]) -> String {
    let mut out = format!(
        "{}\n",
        format!("{:>5}  {:<30} {:<30}", "Table", "Player 1", "Player 2").bold()
    );

    for (idx, pairing) in pairings.iter().enumerate() {
        out.push_str(&format!(
            "{:>5}  {:<30} {:<30}\n",
            idx + 1,
            format!("{} (#{})", pairing.name1, pairing.id1),
            format!("{} (#{})", pairing.name2, pairing.id2)
        ));
    }

    out
}

pub fn render_matches(matches: &[MatchRecord]) -> String {
    let mut out = format!(
        "{}\n",
        format!("{:>6}  {:>8}  {:>8}  {}", "Match", "Winner", "Loser", "Reported").bold()
    );

    for record in matches {
        let reported = record
            .created_at
            .map(|at| at.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default();
        out.push_str(&format!(
            "{:>6}  {:>8}  {:>8}  {}\n",
            record.id, record.winner_id, record.loser_id, reported
        ));
    }

    out
}
