use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use super::models::Player;
use crate::ranking::PlayerId;

pub fn insert_player(conn: &Connection, name: &str) -> Result<Player> {
    let sql = "INSERT INTO players (name) VALUES (?1) RETURNING id, name, wins, matches_played, created_at";

    conn.query_row(sql, params![name], parse_player_row)
        .context("Failed to insert new player")
}

fn parse_player_row(row: &rusqlite::Row) -> rusqlite::Result<Player> {
    Ok(Player {
        id: row.get(0)?,
        name: row.get(1)?,
        wins: row.get(2)?,
        matches_played: row.get(3)?,
        created_at: row.get(4)?,
    })
}

pub fn find_by_id(conn: &Connection, id: PlayerId) -> Result<Option<Player>> {
    let sql = "SELECT id, name, wins, matches_played, created_at FROM players WHERE id = ?1";

    conn.query_row(sql, params![id], parse_player_row)
        .optional()
        .context("Failed to query player by id")
}

/// All players in registration order.
pub fn list_all(conn: &Connection) -> Result<Vec<Player>> {
    let sql = "SELECT id, name, wins, matches_played, created_at FROM players ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_player_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn count_all(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM players", [], |row| row.get(0))
        .context("Failed to count players")
}

pub fn record_win(conn: &Connection, id: PlayerId) -> Result<usize> {
    let sql = "UPDATE players SET wins = wins + 1, matches_played = matches_played + 1 WHERE id = ?1";

    conn.execute(sql, params![id])
        .context("Failed to record win")
}

pub fn record_loss(conn: &Connection, id: PlayerId) -> Result<usize> {
    let sql = "UPDATE players SET matches_played = matches_played + 1 WHERE id = ?1";

    conn.execute(sql, params![id])
        .context("Failed to record loss")
}

pub fn reset_records(conn: &Connection) -> Result<usize> {
    conn.execute("UPDATE players SET wins = 0, matches_played = 0", [])
        .context("Failed to reset player records")
}

pub fn delete_all(conn: &Connection) -> Result<usize> {
    conn.execute("DELETE FROM players", [])
        .context("Failed to delete players")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::setup::ensure_schema;

    fn setup() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        conn
    }

    #[test]
    fn test_insert_assigns_increasing_ids() {
        let conn = setup();

        let first = insert_player(&conn, "Ada").unwrap();
        let second = insert_player(&conn, "Ada").unwrap();

        assert!(second.id > first.id);
        assert_eq!(first.wins, 0);
        assert_eq!(first.matches_played, 0);
        assert!(first.created_at.is_some());
    }

    #[test]
    fn test_record_win_and_loss() {
        let conn = setup();
        let winner = insert_player(&conn, "Ada").unwrap();
        let loser = insert_player(&conn, "Grace").unwrap();

        assert_eq!(record_win(&conn, winner.id).unwrap(), 1);
        assert_eq!(record_loss(&conn, loser.id).unwrap(), 1);

        let winner = find_by_id(&conn, winner.id).unwrap().unwrap();
        let loser = find_by_id(&conn, loser.id).unwrap().unwrap();
        assert_eq!((winner.wins, winner.matches_played), (1, 1));
        assert_eq!((loser.wins, loser.matches_played), (0, 1));
    }

    #[test]
    fn test_update_of_unknown_player_touches_nothing() {
        let conn = setup();
        assert_eq!(record_win(&conn, 42).unwrap(), 0);
        assert!(find_by_id(&conn, 42).unwrap().is_none());
    }

    #[test]
    fn test_wins_cannot_exceed_matches_played() {
        let conn = setup();
        let player = insert_player(&conn, "Ada").unwrap();

        let result = conn.execute("UPDATE players SET wins = 1 WHERE id = ?1", params![player.id]);
        assert!(result.is_err());
    }
}
