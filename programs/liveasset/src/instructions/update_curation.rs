use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::LiveAssetError;
use crate::state::{CurationRecord, CurationScope, LiveEvent};
use crate::utils::validation::*;

#[derive(Accounts)]
pub struct UpdateCuration<'info> {
    pub owner: Signer<'info>,

    #[account(
        seeds = [EVENT_SEED, event.event_id.to_le_bytes().as_ref()],
        bump = event.bump,
        constraint = event.owner == owner.key() @ LiveAssetError::NotOwner,
    )]
    pub event: Account<'info, LiveEvent>,

    #[account(
        mut,
        seeds = [CURATION_SEED, event.event_id.to_le_bytes().as_ref()],
        bump = curation_record.bump,
    )]
    pub curation_record: Account<'info, CurationRecord>,
}

pub fn update_curation(
    ctx: Context<UpdateCuration>,
    fee_bps: u16,
    scope: CurationScope,
    description: String,
) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp;
    let record = &mut ctx.accounts.curation_record;

    record.assert_updatable(current_time)?;
    require!(
        fee_bps >= MIN_CURATION_FEE_BPS && fee_bps <= MAX_CURATION_FEE_BPS,
        LiveAssetError::InvalidCurationFee
    );
    require!(
        scope != CurationScope::None,
        LiveAssetError::InvalidCurationScope
    );
    validate_curation_description(&description)?;

    record.fee_bps = fee_bps;
    record.scope = scope;
    record.description = description;

    emit!(CurationUpdated {
        event_id: record.event_id,
        actor: ctx.accounts.owner.key(),
        fee_bps,
        scope,
        timestamp: current_time,
    });

    Ok(())
}

pub fn update_curation_dates(
    ctx: Context<UpdateCuration>,
    valid_from: i64,
    valid_until: i64,
) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp;
    let record = &mut ctx.accounts.curation_record;

    record.assert_updatable(current_time)?;
    validate_curation_window(valid_from, valid_until)?;
    require!(valid_from > current_time, LiveAssetError::InvalidWindow);

    record.valid_from = valid_from;
    record.valid_until = valid_until;

    emit!(CurationDatesUpdated {
        event_id: record.event_id,
        actor: ctx.accounts.owner.key(),
        valid_from,
        valid_until,
        timestamp: current_time,
    });

    Ok(())
}

#[event]
pub struct CurationUpdated {
    pub event_id: u64,
    pub actor: Pubkey,
    pub fee_bps: u16,
    pub scope: CurationScope,
    pub timestamp: i64,
}

#[event]
pub struct CurationDatesUpdated {
    pub event_id: u64,
    pub actor: Pubkey,
    pub valid_from: i64,
    pub valid_until: i64,
    pub timestamp: i64,
}
