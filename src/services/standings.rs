use anyhow::Context;
use log::{debug, info};

use crate::config::DatabaseSettings;
use crate::database::{self, matches, players, setup, DbPool, MatchRecord};
use crate::errors::{TournamentError, TournamentResult};
use crate::ranking::{self, PlayerId, Standing};

/// Player registration, match reporting and the standings table.
///
/// Every call checks a connection out of the pool for its own duration only.
/// Writes spanning several statements run in one transaction, which rolls
/// back when dropped uncommitted.
#[derive(Clone)]
pub struct StandingsService {
    pool: DbPool,
}

impl StandingsService {
    pub fn new(pool: DbPool) -> TournamentResult<Self> {
        let conn = database::get_connection(&pool)?;
        setup::ensure_schema(&conn)?;
        drop(conn);

        Ok(Self { pool })
    }

    pub fn from_settings(settings: &DatabaseSettings) -> TournamentResult<Self> {
        info!("Opening tournament database at {}", settings.path);
        let pool = database::create_pool(settings)?;
        Self::new(pool)
    }

    pub fn register_player(&self, name: &str) -> TournamentResult<PlayerId> {
        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn.transaction().context("Failed to begin transaction")?;

        let player = players::insert_player(&tx, name)?;

        tx.commit().context("Failed to commit player registration")?;
        info!("Registered player {} ({})", player.id, player.name);
        Ok(player.id)
    }

    pub fn count_players(&self) -> TournamentResult<i64> {
        let conn = database::get_connection(&self.pool)?;
        Ok(players::count_all(&conn)?)
    }

    pub fn report_match(
        &self,
        winner_id: PlayerId,
        loser_id: PlayerId,
    ) -> TournamentResult<MatchRecord> {
        if winner_id == loser_id {
            return Err(TournamentError::InvalidArgument(format!(
                "player {} cannot play against themselves",
                winner_id
            )));
        }

        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn.transaction().context("Failed to begin transaction")?;

        for id in [winner_id, loser_id] {
            if players::find_by_id(&tx, id)?.is_none() {
                return Err(TournamentError::unknown_player(id));
            }
        }

        let record = matches::insert_match(&tx, winner_id, loser_id)?;
        players::record_win(&tx, winner_id)?;
        players::record_loss(&tx, loser_id)?;

        tx.commit().context("Failed to commit match report")?;
        info!("Recorded match {}: {} beat {}", record.id, winner_id, loser_id);
        Ok(record)
    }

    /// All players ranked by wins, ties in registration order.
    pub fn player_standings(&self) -> TournamentResult<Vec<Standing>> {
        let conn = database::get_connection(&self.pool)?;
        let registered = players::list_all(&conn)?;
        drop(conn);

        let standings = ranking::rank_players(registered);
        debug!("Computed standings for {} players", standings.len());
        Ok(standings)
    }

    pub fn match_history(&self) -> TournamentResult<Vec<MatchRecord>> {
        let conn = database::get_connection(&self.pool)?;
        Ok(matches::list_all(&conn)?)
    }

    /// Clears the match log and zeroes every record. Players stay registered.
    ///
    /// Returns the number of match records removed.
    pub fn delete_matches(&self) -> TournamentResult<usize> {
        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn.transaction().context("Failed to begin transaction")?;

        let removed = matches::delete_all(&tx)?;
        players::reset_records(&tx)?;

        tx.commit().context("Failed to commit match reset")?;
        info!("Deleted {} matches and reset all records", removed);
        Ok(removed)
    }

    /// Removes every player together with the whole match log.
    ///
    /// Returns the number of players removed.
    pub fn delete_players(&self) -> TournamentResult<usize> {
        let mut conn = database::get_connection(&self.pool)?;
        let tx = conn.transaction().context("Failed to begin transaction")?;

        matches::delete_all(&tx)?;
        let removed = players::delete_all(&tx)?;

        tx.commit().context("Failed to commit player reset")?;
        info!("Deleted {} players", removed);
        Ok(removed)
    }
}
