use anchor_lang::prelude::*;

use crate::errors::LiveAssetError;
use crate::state::Delegation;

/// Canonical event record. `owner` starts as the creator and changes exactly
/// once, at a successful finalization, to the highest contributor.
#[account]
#[derive(InitSpace)]
pub struct LiveEvent {
    pub event_id: u64,
    pub creator: Pubkey,
    pub owner: Pubkey,
    pub start_time: i64,
    pub end_time: i64,
    pub reserve_price: u64,
    #[max_len(200)]
    pub metadata_uri: String,
    pub finalized: bool,
    // Ticket-sale snapshot, informational only
    pub ticket_supply: u32,
    pub tickets_sold: u32,
    pub ticket_price: u64,
    pub created_at: i64,
    pub bump: u8,
}

impl LiveEvent {
    /// Owner-or-delegate check consumed by every mutating instruction.
    pub fn is_authorized(&self, caller: &Pubkey, delegation: Option<&Delegation>) -> bool {
        if *caller == self.owner {
            return true;
        }
        match delegation {
            Some(d) => d.event_id == self.event_id && d.delegatee == *caller,
            None => false,
        }
    }

    /// Reserve price and metadata are mutable only before the window opens.
    pub fn assert_mutable(&self, now: i64) -> Result<()> {
        require!(!self.finalized, LiveAssetError::AlreadyFinalized);
        require!(now < self.start_time, LiveAssetError::EventStarted);
        Ok(())
    }

    pub fn assert_ended(&self, now: i64) -> Result<()> {
        require!(now > self.end_time, LiveAssetError::WindowNotClosed);
        Ok(())
    }

    /// One-shot ownership transfer at finalization.
    pub fn finalize(&mut self, new_owner: Pubkey) -> Result<()> {
        require!(!self.finalized, LiveAssetError::AlreadyFinalized);
        self.owner = new_owner;
        self.finalized = true;
        Ok(())
    }

    /// Ticket-sales query surface: (sold, supply, price).
    pub fn ticket_sale_info(&self) -> (u32, u32, u64) {
        (self.tickets_sold, self.ticket_supply, self.ticket_price)
    }
}
