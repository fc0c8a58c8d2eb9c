use anchor_lang::prelude::*;

use crate::constants::RAFFLE_SEED;
use crate::state::Raffle;

/// Accounts required to query the upkeep readiness predicate.
/// Read-only; any caller may poll this at any cadence.
#[derive(Accounts)]
pub struct CheckUpkeep<'info> {
    /// The raffle state account being inspected.
    #[account(
        seeds = [RAFFLE_SEED.as_ref()],
        bump = raffle.bump
    )]
    pub raffle: Account<'info, Raffle>,
}

/// Returns whether the raffle is ready for `perform_upkeep`: open, interval
/// elapsed, at least one player, non-zero pot. No state is mutated.
pub fn process_check_upkeep(ctx: Context<CheckUpkeep>) -> Result<bool> {
    let clock = Clock::get()?;
    let raffle = &ctx.accounts.raffle;
    let needed = raffle.upkeep_needed(clock.unix_timestamp);
    msg!(
        "Upkeep needed: {} (players: {}, pot: {})",
        needed,
        raffle.players.len(),
        raffle.pot_amount
    );
    Ok(needed)
}
