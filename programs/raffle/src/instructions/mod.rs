/// Creates the singleton raffle account with its fee, interval, and oracle
/// configuration.
pub mod initialize;

/// Pays the entrance fee and joins the current round.
pub mod enter_raffle;

/// Keeper-facing readiness check; read-only.
pub mod check_upkeep;

/// Keeper-facing advance: closes entries and requests randomness.
pub mod perform_upkeep;

/// Oracle-facing callback: consumes randomness, pays out, reopens the raffle.
pub mod fulfill_randomness;

pub use check_upkeep::*;
pub use enter_raffle::*;
pub use fulfill_randomness::*;
pub use initialize::*;
pub use perform_upkeep::*;
