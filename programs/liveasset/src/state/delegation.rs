use anchor_lang::prelude::*;

/// Write-once delegation slot for an event. The PDA is created with `init`,
/// so a second creation attempt fails at the account level before any
/// handler logic runs.
#[account]
#[derive(InitSpace)]
pub struct Delegation {
    pub event_id: u64,
    pub delegatee: Pubkey,
    /// Owner at the time the delegation was created.
    pub created_by: Pubkey,
    /// True when the trusted composer created the record on the owner's behalf.
    pub via_composer: bool,
    pub created_at: i64,
    pub bump: u8,
}
