/// Seed for deriving the singleton `Raffle` PDA.
pub const RAFFLE_SEED: &[u8] = b"raffle";

/// Upper bound on players per round, fixed by the allocated account size.
pub const MAX_PLAYERS: usize = 200;
