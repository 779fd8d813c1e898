pub mod pairing;
pub mod standings;

pub use pairing::PairingService;
pub use standings::StandingsService;
