use anchor_lang::prelude::*;

use crate::constants::MAX_PLAYERS;
use crate::error::RaffleError;

/// Lifecycle phase of the raffle.
///
/// `Open` accepts entries; `Calculating` is entered once upkeep has been
/// performed and a randomness request is outstanding. While `Calculating`,
/// both entries and further upkeep are rejected, so at most one randomness
/// request can ever be in flight.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, PartialEq, Eq, Debug)]
pub enum RaffleState {
    Open,
    Calculating,
}

#[account]
#[derive(InitSpace)]
pub struct Raffle {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// Current phase of the raffle state machine.
    pub state: RaffleState,

    /// The authority or admin responsible for managing this raffle.
    pub authority: Pubkey,

    /// The oracle key allowed to deliver randomness via `fulfill_randomness`.
    pub vrf_authority: Pubkey,

    /// The price (in lamports) required to enter the raffle once.
    pub entrance_fee: u64,

    /// Minimum seconds that must elapse since `last_settled_at` before the
    /// raffle becomes eligible for upkeep.
    pub interval: i64,

    /// UNIX timestamp of the last settlement, or of initialization.
    pub last_settled_at: i64,

    /// Players entered since the last settlement, in entry order.
    /// Cleared on every settlement.
    #[max_len(MAX_PLAYERS)]
    pub players: Vec<Pubkey>,

    /// The total amount of SOL (in lamports) accumulated in the pot since
    /// the last settlement. The lamports themselves are held by this account.
    pub pot_amount: u64,

    /// Identifier of the outstanding randomness request, or `0` when none.
    pub pending_request_id: u64,

    /// Counter from which request identifiers are allocated. Seeded with the
    /// subscription id at initialization; the first issued id is one above it.
    pub request_nonce: u64,

    /// The most recently settled winner, or `Pubkey::default()` before any
    /// settlement.
    pub recent_winner: Pubkey,
}

impl Raffle {
    /// Checks whether an entry paying `amount` would currently be accepted.
    ///
    /// Performs no mutation; handlers call this before moving any lamports.
    pub fn assert_can_enter(&self, amount: u64) -> Result<()> {
        require!(self.state == RaffleState::Open, RaffleError::RaffleNotOpen);
        require!(amount >= self.entrance_fee, RaffleError::NotEnoughFunds);
        require!(self.players.len() < MAX_PLAYERS, RaffleError::RaffleFull);
        Ok(())
    }

    /// Records an accepted entry: appends the player and adds `amount` to the
    /// pot. Callers must have passed [`Raffle::assert_can_enter`] first.
    pub fn record_entry(&mut self, player: Pubkey, amount: u64) -> Result<()> {
        self.players.push(player);
        self.pot_amount = self
            .pot_amount
            .checked_add(amount)
            .ok_or(RaffleError::MathOverflow)?;
        Ok(())
    }

    /// The readiness predicate polled by the keeper.
    ///
    /// True iff the raffle is open, the configured interval has elapsed since
    /// the last settlement, and there is at least one player and a non-zero
    /// pot. Pure and side-effect-free, so it can be polled arbitrarily often.
    pub fn upkeep_needed(&self, now: i64) -> bool {
        self.state == RaffleState::Open
            && now - self.last_settled_at >= self.interval
            && !self.players.is_empty()
            && self.pot_amount > 0
    }

    /// Transitions `Open` -> `Calculating` and allocates a fresh request id.
    ///
    /// Fails with `UpkeepNotNeeded` if the readiness predicate is false —
    /// which is always the case while `Calculating`, so a second upkeep can
    /// never issue a second request before the first is fulfilled.
    pub fn begin_calculating(&mut self, now: i64) -> Result<u64> {
        require!(self.upkeep_needed(now), RaffleError::UpkeepNotNeeded);

        let request_id = self
            .request_nonce
            .checked_add(1)
            .ok_or(RaffleError::MathOverflow)?;
        self.request_nonce = request_id;
        self.pending_request_id = request_id;
        self.state = RaffleState::Calculating;
        Ok(request_id)
    }

    /// Resolves a delivered random value against the outstanding request.
    ///
    /// Returns the drawn winner and the full pot owed to them without
    /// mutating anything, so the handler can attempt the payout first and
    /// leave the raffle `Calculating` if the transfer cannot complete.
    ///
    /// Rejects any identifier that does not match the outstanding request,
    /// including replayed ids from earlier rounds and the never-issued `0`.
    pub fn draw_winner(&self, request_id: u64, randomness: u64) -> Result<(Pubkey, u64)> {
        require!(
            self.pending_request_id != 0 && request_id == self.pending_request_id,
            RaffleError::UnknownRequest
        );

        // A request is only ever issued with players present (upkeep gate),
        // so the modulus is non-zero.
        let count = self.players.len() as u64;
        require!(count > 0, RaffleError::UnknownRequest);

        let winner_index = (randomness % count) as usize;
        Ok((self.players[winner_index], self.pot_amount))
    }

    /// Commits a settlement after the payout has succeeded: records the
    /// winner, clears the players and the pot, clears the outstanding
    /// request, stamps the settlement time, and reopens the raffle.
    pub fn settle(&mut self, winner: Pubkey, now: i64) {
        self.recent_winner = winner;
        self.players.clear();
        self.pot_amount = 0;
        self.pending_request_id = 0;
        self.last_settled_at = now;
        self.state = RaffleState::Open;
    }
}
