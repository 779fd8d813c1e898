pub mod standings;
pub mod swiss;
pub mod types;

pub use standings::rank_players;
pub use swiss::swiss_pairings;
pub use types::{Pairing, PlayerId, Standing};
