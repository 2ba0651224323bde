use anchor_lang::prelude::*;

use crate::errors::LiveAssetError;
use crate::state::CurationScope;
use crate::utils::safe_add;

/// Optional per-event curation resource. Funds accrue into `pending_balance`
/// via distribution credits and leave only through an explicit withdrawal.
#[account]
#[derive(InitSpace, Default)]
pub struct CurationRecord {
    pub event_id: u64,
    pub curator: Pubkey,
    pub fee_bps: u16,
    pub scope: CurationScope,
    #[max_len(200)]
    pub description: String,
    pub valid_from: i64,
    pub valid_until: i64,
    pub active: bool,
    pub lifetime_earned: u64,
    pub withdrawn_total: u64,
    pub pending_balance: u64,
    pub bump: u8,
}

impl CurationRecord {
    /// Terms may change only strictly before the validity window opens.
    pub fn assert_updatable(&self, now: i64) -> Result<()> {
        require!(self.active, LiveAssetError::CurationInactive);
        require!(now < self.valid_from, LiveAssetError::CurationWindowStarted);
        Ok(())
    }

    pub fn assert_receivable(&self, now: i64) -> Result<()> {
        require!(self.active, LiveAssetError::CurationInactive);
        require!(now >= self.valid_from, LiveAssetError::WindowNotOpen);
        require!(now <= self.valid_until, LiveAssetError::CurationExpired);
        Ok(())
    }

    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.pending_balance = safe_add(self.pending_balance, amount)?;
        self.lifetime_earned = safe_add(self.lifetime_earned, amount)?;
        Ok(())
    }

    /// Zeroes the pending balance and returns the amount to transfer.
    /// State change happens before the lamport movement; an aborted
    /// transaction rolls both back together.
    pub fn take_pending(&mut self) -> Result<u64> {
        require!(self.pending_balance > 0, LiveAssetError::NothingToWithdraw);
        let amount = self.pending_balance;
        self.pending_balance = 0;
        self.withdrawn_total = safe_add(self.withdrawn_total, amount)?;
        Ok(amount)
    }
}
