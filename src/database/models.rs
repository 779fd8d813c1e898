use chrono::NaiveDateTime;
use serde::Serialize;

use crate::ranking::PlayerId;

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub wins: i64,
    pub matches_played: i64,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRecord {
    pub id: i64,
    pub winner_id: PlayerId,
    pub loser_id: PlayerId,
    pub created_at: Option<NaiveDateTime>,
}
