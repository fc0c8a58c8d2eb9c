use anchor_lang::prelude::*;
use instructions::*;

mod constants;
mod error;
mod events;
mod instructions;
mod state;

declare_id!("2RTh2Y4e2N421EbSnUYTKdGqDHJH7etxZb3VrWDMpNMY");

#[program]
pub mod raffle {
    use super::*;

    pub fn initialize_config(
        ctx: Context<InitializeConfig>,
        entrance_fee: u64,
        interval: i64,
        subscription_id: u64,
        vrf_authority: Pubkey,
    ) -> Result<()> {
        process_initialize_config(ctx, entrance_fee, interval, subscription_id, vrf_authority)
    }

    pub fn enter_raffle(ctx: Context<EnterRaffle>, amount: u64) -> Result<()> {
        process_enter_raffle(ctx, amount)
    }

    pub fn check_upkeep(ctx: Context<CheckUpkeep>) -> Result<bool> {
        process_check_upkeep(ctx)
    }

    pub fn perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<()> {
        process_perform_upkeep(ctx)
    }

    pub fn fulfill_randomness(
        ctx: Context<FulfillRandomness>,
        request_id: u64,
        randomness: u64,
    ) -> Result<()> {
        process_fulfill_randomness(ctx, request_id, randomness)
    }
}
