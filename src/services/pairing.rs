use log::info;

use crate::errors::TournamentResult;
use crate::ranking::{self, Pairing};

use super::standings::StandingsService;

/// Builds the next round from the current standings.
pub struct PairingService {
    standings: StandingsService,
}

impl PairingService {
    pub fn new(standings: StandingsService) -> Self {
        Self { standings }
    }

    pub fn swiss_pairings(&self) -> TournamentResult<Vec<Pairing>> {
        let ranking = self.standings.player_standings()?;
        let pairings = ranking::swiss_pairings(&ranking)?;

        info!("Paired {} players into {} matches", ranking.len(), pairings.len());
        Ok(pairings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database;
    use crate::errors::TournamentError;
    use crate::ranking::PlayerId;

    fn services() -> (StandingsService, PairingService) {
        let standings = StandingsService::new(database::create_memory_pool().unwrap()).unwrap();
        let pairing = PairingService::new(standings.clone());
        (standings, pairing)
    }

    #[test]
    fn test_no_players_no_pairings() {
        let (_, pairing) = services();
        assert!(pairing.swiss_pairings().unwrap().is_empty());
    }

    #[test]
    fn test_odd_player_count_is_rejected() {
        let (standings, pairing) = services();
        for name in ["Ada", "Grace", "Linus"] {
            standings.register_player(name).unwrap();
        }

        let result = pairing.swiss_pairings();

        assert!(matches!(result, Err(TournamentError::InvalidState(_))));
    }

    #[test]
    fn test_first_round_pairs_in_registration_order() {
        let (standings, pairing) = services();
        let ids: Vec<PlayerId> = ["Ada", "Grace", "Linus", "Ken"]
            .iter()
            .map(|name| standings.register_player(name).unwrap())
            .collect();

        let pairings = pairing.swiss_pairings().unwrap();

        let pairs: Vec<(PlayerId, PlayerId)> = pairings.iter().map(|p| (p.id1, p.id2)).collect();
        assert_eq!(pairs, vec![(ids[0], ids[1]), (ids[2], ids[3])]);
        assert_eq!(pairings[0].name1, "Ada");
        assert_eq!(pairings[0].name2, "Grace");
    }

    #[test]
    fn test_winners_meet_winners_after_a_round() {
        let (standings, pairing) = services();
        let ids: Vec<PlayerId> = (1..=8)
            .map(|n| standings.register_player(&format!("Player {}", n)).unwrap())
            .collect();

        for pair in pairing.swiss_pairings().unwrap() {
            standings.report_match(pair.id2, pair.id1).unwrap();
        }

        let pairings = pairing.swiss_pairings().unwrap();
        assert_eq!(pairings.len(), 4);

        let pairs: Vec<(PlayerId, PlayerId)> = pairings.iter().map(|p| (p.id1, p.id2)).collect();
        assert_eq!(
            pairs,
            vec![(ids[1], ids[3]), (ids[5], ids[7]), (ids[0], ids[2]), (ids[4], ids[6])]
        );
    }

    #[test]
    fn test_distinct_records_pair_adjacent_ranks() {
        let (standings, pairing) = services();
        let ids: Vec<PlayerId> = (1..=8)
            .map(|n| standings.register_player(&format!("Player {}", n)).unwrap())
            .collect();

        // Each player beats everyone registered before them, so wins run 0..=7.
        for (later, &winner) in ids.iter().enumerate() {
            for &loser in &ids[..later] {
                standings.report_match(winner, loser).unwrap();
            }
        }

        let ranking = standings.player_standings().unwrap();
        let wins: Vec<i64> = ranking.iter().map(|s| s.wins).collect();
        assert_eq!(wins, vec![7, 6, 5, 4, 3, 2, 1, 0]);

        let pairings = pairing.swiss_pairings().unwrap();

        let pairs: Vec<(PlayerId, PlayerId)> = pairings.iter().map(|p| (p.id1, p.id2)).collect();
        assert_eq!(
            pairs,
            vec![(ids[7], ids[6]), (ids[5], ids[4]), (ids[3], ids[2]), (ids[1], ids[0])]
        );
        for id in &ids {
            assert_eq!(pairings.iter().filter(|p| p.contains(*id)).count(), 1);
        }
    }
}
