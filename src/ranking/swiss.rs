use crate::errors::{TournamentError, TournamentResult};

use super::types::{Pairing, Standing};

/// Pairs adjacent players of a ranking: rank 1 with rank 2, rank 3 with rank 4, and so on.
///
/// The ranking must hold an even number of players; byes are not supported.
/// Previous meetings are not considered, so two players may be paired again.
pub fn swiss_pairings(ranking: &[Standing]) -> TournamentResult<Vec<Pairing>> {
    if ranking.len() % 2 != 0 {
        return Err(TournamentError::InvalidState(format!(
            "cannot pair an odd number of players ({})",
            ranking.len()
        )));
    }

    let pairings = ranking
        .chunks_exact(2)
        .map(|pair| Pairing::between(&pair[0], &pair[1]))
        .collect();

    Ok(pairings)
}
