use anchor_lang::prelude::*;

use crate::constants::BPS_DENOMINATOR;
use crate::errors::LiveAssetError;

#[account]
#[derive(InitSpace, Default)]
pub struct Platform {
    pub authority: Pubkey,
    pub treasury: Pubkey,
    /// Trusted composer allowed to create delegations on behalf of owners.
    pub composer: Pubkey,
    /// Default split seeded into every new event's distribution config.
    pub creator_share_bps: u16,
    pub treasury_share_bps: u16,
    pub paused: bool,
    pub total_events: u64,
    pub total_tips: u64,
    pub total_tip_volume: u64,
    pub total_distributed: u64,
    pub bump: u8,
}

impl Platform {
    pub fn validate_split(creator_share_bps: u16, treasury_share_bps: u16) -> Result<()> {
        require!(
            creator_share_bps as u64 + treasury_share_bps as u64 == BPS_DENOMINATOR,
            LiveAssetError::InvalidShareSplit
        );
        Ok(())
    }

    pub fn assert_not_paused(&self) -> Result<()> {
        require!(!self.paused, LiveAssetError::PlatformPaused);
        Ok(())
    }
}
