use anchor_lang::prelude::*;

use crate::errors::LiveAssetError;
use crate::state::CurationScope;

/// Global allow-list entry: the highest scope this curator may be engaged at.
#[account]
#[derive(InitSpace)]
pub struct CuratorProfile {
    pub curator: Pubkey,
    pub max_scope: CurationScope,
    pub vetted_by: Pubkey,
    pub listed_at: i64,
    pub bump: u8,
}

impl CuratorProfile {
    pub fn assert_scope(&self, requested: CurationScope) -> Result<()> {
        require!(
            self.max_scope.rank() >= requested.rank(),
            LiveAssetError::CuratorNotAllowed
        );
        Ok(())
    }
}

/// Per-creator counter. The full creator-to-events reverse index is served
/// off-chain from the emitted audit log.
#[account]
#[derive(InitSpace, Default)]
pub struct CreatorProfile {
    pub creator: Pubkey,
    pub events_created: u64,
    pub bump: u8,
}
