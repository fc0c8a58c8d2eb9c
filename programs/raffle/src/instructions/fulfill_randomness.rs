use anchor_lang::prelude::*;

use crate::constants::RAFFLE_SEED;
use crate::error::RaffleError;
use crate::events::WinnerPicked;
use crate::state::Raffle;

/// Accounts required to deliver randomness for the outstanding request.
///
/// Ensures:
/// 1. Only the configured oracle authority can fulfill.
/// 2. The winner account passed in matches the drawn player.
#[derive(Accounts)]
pub struct FulfillRandomness<'info> {
    /// The oracle delivering the random value; must match the configured key.
    pub vrf_authority: Signer<'info>,

    /// The raffle state account holding the outstanding request and the pot.
    #[account(
        mut,
        seeds = [RAFFLE_SEED.as_ref()],
        bump = raffle.bump,
        constraint = vrf_authority.key() == raffle.vrf_authority @ RaffleError::Unauthorized,
    )]
    pub raffle: Account<'info, Raffle>,

    /// The drawn player's wallet, receiving the full pot.
    /// CHECK: validated against the drawn player in the handler.
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,
}

/// Consumes the delivered random value: draws the winner, pays out the whole
/// pot, and reopens the raffle.
///
/// The payout happens before any state is touched. If the raffle account
/// cannot cover the pot on top of its rent-exempt minimum, the instruction
/// fails with `PayoutFailed` and the raffle stays `Calculating` with the
/// request still pending, so the fulfillment can be retried.
///
/// # Arguments
/// * `ctx` - Context containing FulfillRandomness accounts
/// * `request_id` - Must equal the outstanding request id
/// * `randomness` - The delivered random value; winner index is
///   `randomness % players.len()`
pub fn process_fulfill_randomness(
    ctx: Context<FulfillRandomness>,
    request_id: u64,
    randomness: u64,
) -> Result<()> {
    let clock = Clock::get()?;

    let (winner, payout) = ctx.accounts.raffle.draw_winner(request_id, randomness)?;
    require_keys_eq!(
        ctx.accounts.winner.key(),
        winner,
        RaffleError::WinnerMismatch
    );

    msg!("Randomness result: {}", randomness);
    msg!("Winner: {} payout: {}", winner, payout);

    // Transfer SOL from the raffle PDA to the winner. The account must stay
    // rent-exempt after the payout.
    let raffle_info = ctx.accounts.raffle.to_account_info();
    let winner_info = ctx.accounts.winner.to_account_info();

    let rent_minimum = Rent::get()?.minimum_balance(raffle_info.data_len());
    let remaining = raffle_info
        .lamports()
        .checked_sub(payout)
        .ok_or(RaffleError::PayoutFailed)?;
    require!(remaining >= rent_minimum, RaffleError::PayoutFailed);

    **raffle_info.try_borrow_mut_lamports()? = remaining;
    **winner_info.try_borrow_mut_lamports()? = winner_info
        .lamports()
        .checked_add(payout)
        .ok_or(RaffleError::MathOverflow)?;

    let raffle = &mut ctx.accounts.raffle;
    raffle.settle(winner, clock.unix_timestamp);

    emit!(WinnerPicked {
        request_id,
        winner,
        payout,
    });

    Ok(())
}
