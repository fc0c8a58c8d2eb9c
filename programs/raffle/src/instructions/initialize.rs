use anchor_lang::prelude::*;

use crate::constants::RAFFLE_SEED;
use crate::error::RaffleError;
use crate::state::{Raffle, RaffleState};

/// Accounts required to initialize the raffle configuration.
/// This sets up the singleton raffle account on-chain with initial parameters.
#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    /// The account paying for account creation and fees.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The Raffle state account that stores round information.
    #[account(
        init,
        payer = payer,
        space = 8 + Raffle::INIT_SPACE,
        seeds = [RAFFLE_SEED.as_ref()],
        bump
    )]
    pub raffle: Box<Account<'info, Raffle>>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Initializes the raffle in the `Open` state with an empty player list.
///
/// # Arguments
/// * `ctx` - Context holding the InitializeConfig accounts
/// * `entrance_fee` - Entry price in lamports
/// * `interval` - Minimum seconds between settlements
/// * `subscription_id` - Base from which randomness request ids are allocated;
///   the first issued id is `subscription_id + 1`
/// * `vrf_authority` - The oracle key allowed to call `fulfill_randomness`
pub fn process_initialize_config(
    ctx: Context<InitializeConfig>,
    entrance_fee: u64,
    interval: i64,
    subscription_id: u64,
    vrf_authority: Pubkey,
) -> Result<()> {
    require!(entrance_fee > 0 && interval > 0, RaffleError::InvalidConfig);

    let clock = Clock::get()?;
    let raffle = &mut ctx.accounts.raffle;
    raffle.bump = ctx.bumps.raffle;
    raffle.state = RaffleState::Open;
    raffle.authority = ctx.accounts.payer.key();
    raffle.vrf_authority = vrf_authority;
    raffle.entrance_fee = entrance_fee;
    raffle.interval = interval;
    raffle.last_settled_at = clock.unix_timestamp;
    raffle.players = Vec::new();
    raffle.pot_amount = 0;
    raffle.pending_request_id = 0;
    raffle.request_nonce = subscription_id;
    raffle.recent_winner = Pubkey::default();
    Ok(())
}
