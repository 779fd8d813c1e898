use thiserror::Error;

/// Failures surfaced by the standings and pairing services.
#[derive(Debug, Error)]
pub enum TournamentError {
    /// The store could not be reached or rejected a statement. The wrapped
    /// error is the source, so its context chain is not repeated here.
    #[error("storage failure")]
    Storage(#[from] anyhow::Error),

    /// Unknown player id, or a player reported as their own opponent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The tournament is not in a state the operation can handle.
    #[error("invalid state: {0}")]
    InvalidState(String),
}

pub type TournamentResult<T> = Result<T, TournamentError>;

impl TournamentError {
    pub fn unknown_player(id: i64) -> Self {
        TournamentError::InvalidArgument(format!("no player with id {}", id))
    }
}
