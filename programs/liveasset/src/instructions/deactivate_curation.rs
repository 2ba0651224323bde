use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::LiveAssetError;
use crate::state::{CurationRecord, LiveEvent};

#[derive(Accounts)]
pub struct DeactivateCuration<'info> {
    pub owner: Signer<'info>,

    #[account(
        seeds = [EVENT_SEED, event.event_id.to_le_bytes().as_ref()],
        bump = event.bump,
        constraint = event.owner == owner.key() @ LiveAssetError::NotOwner,
    )]
    pub event: Account<'info, LiveEvent>,

    // Deactivated, never deleted: pending funds stay withdrawable and the
    // audit trail survives.
    #[account(
        mut,
        seeds = [CURATION_SEED, event.event_id.to_le_bytes().as_ref()],
        bump = curation_record.bump,
        constraint = curation_record.active @ LiveAssetError::CurationInactive,
    )]
    pub curation_record: Account<'info, CurationRecord>,
}

pub fn deactivate_curation(ctx: Context<DeactivateCuration>) -> Result<()> {
    let record = &mut ctx.accounts.curation_record;
    record.active = false;

    emit!(CurationDeactivated {
        event_id: record.event_id,
        actor: ctx.accounts.owner.key(),
        curator: record.curator,
        pending_balance: record.pending_balance,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Curation deactivated for event {}", record.event_id);

    Ok(())
}

#[event]
pub struct CurationDeactivated {
    pub event_id: u64,
    pub actor: Pubkey,
    pub curator: Pubkey,
    pub pending_balance: u64,
    pub timestamp: i64,
}
