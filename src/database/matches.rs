use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use super::models::MatchRecord;
use crate::ranking::PlayerId;

pub fn insert_match(
    conn: &Connection,
    winner_id: PlayerId,
    loser_id: PlayerId,
) -> Result<MatchRecord> {
    let sql = "INSERT INTO matches (winner_id, loser_id) VALUES (?1, ?2) RETURNING id, winner_id, loser_id, created_at";

    conn.query_row(sql, params![winner_id, loser_id], parse_match_row)
        .context("Failed to insert match")
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<MatchRecord> {
    Ok(MatchRecord {
        id: row.get(0)?,
        winner_id: row.get(1)?,
        loser_id: row.get(2)?,
        created_at: row.get(3)?,
    })
}

/// The match log in the order matches were reported.
pub fn list_all(conn: &Connection) -> Result<Vec<MatchRecord>> {
    let sql = "SELECT id, winner_id, loser_id, created_at FROM matches ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn delete_all(conn: &Connection) -> Result<usize> {
    conn.execute("DELETE FROM matches", [])
        .context("Failed to delete matches")
}
