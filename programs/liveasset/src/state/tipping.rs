use anchor_lang::prelude::*;

use crate::errors::LiveAssetError;
use crate::utils::safe_add;

/// Per-event tipping aggregate. The account also serves as the escrow vault
/// holding tipped lamports.
#[account]
#[derive(InitSpace, Default)]
pub struct TipLedger {
    pub event_id: u64,
    pub creator: Pubkey,
    pub start_time: i64,
    pub end_time: i64,
    pub reserve_price: u64,
    pub total_tipped: u64,
    /// Sequence source for TipRecord PDAs.
    pub tip_count: u64,
    pub top_contributor: Option<Pubkey>,
    pub top_cumulative: u64,
    pub finalized: bool,
    pub bump: u8,
}

/// Leadership change produced by an accepted tip.
#[derive(Debug, PartialEq, Eq)]
pub struct LeaderChange {
    pub previous: Option<Pubkey>,
    pub new_leader: Pubkey,
    pub cumulative: u64,
}

impl TipLedger {
    pub fn assert_open(&self, now: i64) -> Result<()> {
        require!(!self.finalized, LiveAssetError::AlreadyFinalized);
        require!(now >= self.start_time, LiveAssetError::WindowNotOpen);
        require!(now <= self.end_time, LiveAssetError::WindowClosed);
        Ok(())
    }

    /// Applies an accepted contribution. `cumulative` is the contributor's
    /// cumulative total after this tip. Leadership moves only on a strictly
    /// greater cumulative total; ties keep the incumbent.
    pub fn record(
        &mut self,
        contributor: Pubkey,
        amount: u64,
        cumulative: u64,
    ) -> Result<Option<LeaderChange>> {
        require!(amount > 0, LiveAssetError::ZeroAmount);

        self.total_tipped = safe_add(self.total_tipped, amount)?;
        self.tip_count = safe_add(self.tip_count, 1)?;

        if cumulative > self.top_cumulative {
            let previous = self.top_contributor;
            self.top_contributor = Some(contributor);
            self.top_cumulative = cumulative;
            if previous != Some(contributor) {
                return Ok(Some(LeaderChange {
                    previous,
                    new_leader: contributor,
                    cumulative,
                }));
            }
        }
        Ok(None)
    }

    /// Finalization outcome: the new owner, or why there is none.
    pub fn outcome(&self) -> Result<Pubkey> {
        require!(!self.finalized, LiveAssetError::AlreadyFinalized);
        require!(
            self.total_tipped >= self.reserve_price,
            LiveAssetError::ReserveNotMet
        );
        self.top_contributor
            .ok_or_else(|| error!(LiveAssetError::NoContributors))
    }
}

/// One accepted contribution, keyed by (event, seq). Append-only.
#[account]
#[derive(InitSpace)]
pub struct TipRecord {
    pub event_id: u64,
    pub seq: u64,
    pub contributor: Pubkey,
    pub amount: u64,
    #[max_len(256)]
    pub message: String,
    pub tipped_at: i64,
    pub bump: u8,
}

/// Running cumulative total for one contributor on one event.
#[account]
#[derive(InitSpace, Default)]
pub struct ContributorPosition {
    pub event_id: u64,
    pub contributor: Pubkey,
    pub cumulative: u64,
    pub tip_count: u64,
    pub bump: u8,
}

impl ContributorPosition {
    pub fn apply(&mut self, amount: u64) -> Result<u64> {
        self.cumulative = safe_add(self.cumulative, amount)?;
        self.tip_count = safe_add(self.tip_count, 1)?;
        Ok(self.cumulative)
    }
}
