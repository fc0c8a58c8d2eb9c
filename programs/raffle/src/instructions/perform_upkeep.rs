use anchor_lang::prelude::*;

use crate::constants::RAFFLE_SEED;
use crate::error::RaffleError;
use crate::events::WinnerRequested;
use crate::state::Raffle;

/// Accounts required to perform upkeep once the readiness predicate holds.
///
/// Permissionless: any keeper may crank this; the readiness predicate is the
/// only gate, and it fails closed while a request is already outstanding.
#[derive(Accounts)]
pub struct PerformUpkeep<'info> {
    /// The account paying transaction fees for the crank.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The raffle state account to advance.
    #[account(
        mut,
        seeds = [RAFFLE_SEED.as_ref()],
        bump = raffle.bump
    )]
    pub raffle: Account<'info, Raffle>,
}

/// Closes entries and issues a randomness request.
///
/// Steps performed:
/// 1. Re-check the readiness predicate; fail with `UpkeepNotNeeded` otherwise.
/// 2. Transition the raffle to `Calculating`.
/// 3. Allocate and store the request id for the oracle to fulfill.
pub fn process_perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<()> {
    let clock = Clock::get()?;
    let raffle = &mut ctx.accounts.raffle;

    if !raffle.upkeep_needed(clock.unix_timestamp) {
        msg!(
            "Upkeep not needed: pot={} players={} state={:?}",
            raffle.pot_amount,
            raffle.players.len(),
            raffle.state
        );
        return Err(RaffleError::UpkeepNotNeeded.into());
    }

    let request_id = raffle.begin_calculating(clock.unix_timestamp)?;
    msg!("Randomness requested: id={}", request_id);

    emit!(WinnerRequested { request_id });

    Ok(())
}
