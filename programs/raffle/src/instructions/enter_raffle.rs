use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::RAFFLE_SEED;
use crate::events::RaffleEntered;
use crate::state::Raffle;

/// Accounts required to enter the raffle.
/// Handles payment transfer into the pot and recording of the player.
#[derive(Accounts)]
pub struct EnterRaffle<'info> {
    /// The account paying the entrance fee; recorded as the player.
    #[account(mut)]
    pub player: Signer<'info>,

    /// Raffle state account tracking the current round; also holds the pot.
    #[account(
        mut,
        seeds = [RAFFLE_SEED.as_ref()],
        bump = raffle.bump
    )]
    pub raffle: Account<'info, Raffle>,

    /// System program for lamports transfers.
    pub system_program: Program<'info, System>,
}

/// Enters the caller into the current round.
///
/// Steps performed:
/// 1. Check the raffle is open and `amount` covers the entrance fee.
/// 2. Transfer `amount` lamports from the player into the raffle account.
/// 3. Record the player and add `amount` to the pot.
///
/// # Arguments
/// * `ctx` - Context containing EnterRaffle accounts
/// * `amount` - Lamports paid; must be at least the entrance fee
pub fn process_enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
    ctx.accounts.raffle.assert_can_enter(amount)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.player.to_account_info(),
                to: ctx.accounts.raffle.to_account_info(),
            },
        ),
        amount,
    )?;

    let raffle = &mut ctx.accounts.raffle;
    raffle.record_entry(ctx.accounts.player.key(), amount)?;

    emit!(RaffleEntered {
        player: ctx.accounts.player.key(),
        amount,
        total_players: raffle.players.len() as u64,
    });

    Ok(())
}
