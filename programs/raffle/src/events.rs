use anchor_lang::prelude::*;

/// Emitted once per accepted entry.
#[event]
pub struct RaffleEntered {
    pub player: Pubkey,
    pub amount: u64,
    pub total_players: u64,
}

/// Emitted once per performed upkeep, when a randomness request is issued.
#[event]
pub struct WinnerRequested {
    pub request_id: u64,
}

/// Emitted once per settlement, after the pot has been paid out.
#[event]
pub struct WinnerPicked {
    pub request_id: u64,
    pub winner: Pubkey,
    pub payout: u64,
}
