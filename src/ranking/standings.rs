use super::types::Standing;

/// Orders players by wins, most first.
///
/// Expects `players` in registration order. The sort is stable, so players
/// with equal wins keep that order.
pub fn rank_players<I, P>(players: I) -> Vec<Standing>
where
    I: IntoIterator<Item = P>,
    P: Into<Standing>,
{
    let mut ranking: Vec<Standing> = players.into_iter().map(Into::into).collect();
    ranking.sort_by(|a, b| b.wins.cmp(&a.wins));
    ranking
}
