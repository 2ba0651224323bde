use anchor_lang::prelude::*;

use crate::errors::LiveAssetError;

/// Exclusive-execution flag for a value-moving resource. Locked at entry of
/// any instruction that performs outbound transfers, unlocked at exit.
#[account]
#[derive(InitSpace, Default)]
pub struct ReentrancyGuard {
    pub is_locked: bool,
    pub bump: u8,
}

impl ReentrancyGuard {
    pub fn lock(&mut self) -> Result<()> {
        require!(!self.is_locked, LiveAssetError::ReentrancyLocked);
        self.is_locked = true;
        Ok(())
    }

    pub fn unlock(&mut self) -> Result<()> {
        self.is_locked = false;
        Ok(())
    }
}
