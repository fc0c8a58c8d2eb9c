use anchor_lang::prelude::*;

#[error_code]
pub enum RaffleError {
    // Entry errors
    #[msg("Entry amount is below the entrance fee")]
    NotEnoughFunds,
    #[msg("Raffle is not open")]
    RaffleNotOpen,
    #[msg("Raffle has reached the maximum number of players")]
    RaffleFull,

    // Upkeep errors
    #[msg("Upkeep not needed — raffle is not ready for a draw")]
    UpkeepNotNeeded,

    // Fulfillment errors
    #[msg("Request id does not match the outstanding randomness request")]
    UnknownRequest,
    #[msg("Signer is not the configured randomness authority")]
    Unauthorized,
    #[msg("Winner account does not match the drawn player")]
    WinnerMismatch,
    #[msg("Prize payout could not be completed")]
    PayoutFailed,

    // Config
    #[msg("Entrance fee and interval must be positive")]
    InvalidConfig,

    // Math
    #[msg("Math overflow")]
    MathOverflow,
}
