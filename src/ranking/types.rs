use serde::Serialize;

use crate::database::models::Player;

pub type PlayerId = i64;

/// One row of the standings table: a player and their win record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub id: PlayerId,
    pub name: String,
    pub wins: i64,
    pub matches_played: i64,
}

impl From<Player> for Standing {
    fn from(player: Player) -> Self {
        Self {
            id: player.id,
            name: player.name,
            wins: player.wins,
            matches_played: player.matches_played,
        }
    }
}

/// Two players meeting in the next round, higher ranked first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pairing {
    pub id1: PlayerId,
    pub name1: String,
    pub id2: PlayerId,
    pub name2: String,
}

impl Pairing {
    pub fn between(first: &Standing, second: &Standing) -> Self {
        Self {
            id1: first.id,
            name1: first.name.clone(),
            id2: second.id,
            name2: second.name.clone(),
        }
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.id1 == id || self.id2 == id
    }
}
