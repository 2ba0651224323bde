use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::LiveAssetError;
use crate::instructions::enable_curation::CurationEnabled;
use crate::state::{CurationRecord, DistributionConfig, LiveEvent};

/// Narrow trust path: the event's own linked curation record drives
/// enablement. The enforced fee is re-derived from the record's scope so a
/// compromised record cannot self-assign an out-of-band fee.
#[derive(Accounts)]
pub struct SyncCurationFromRecord<'info> {
    pub curator: Signer<'info>,

    #[account(
        seeds = [EVENT_SEED, event.event_id.to_le_bytes().as_ref()],
        bump = event.bump,
    )]
    pub event: Account<'info, LiveEvent>,

    #[account(
        seeds = [CURATION_SEED, event.event_id.to_le_bytes().as_ref()],
        bump = curation_record.bump,
        constraint = curation_record.curator == curator.key() @ LiveAssetError::NotCurator,
        constraint = curation_record.active @ LiveAssetError::CurationInactive,
    )]
    pub curation_record: Account<'info, CurationRecord>,

    #[account(
        mut,
        seeds = [DISTRIBUTION_SEED, event.event_id.to_le_bytes().as_ref()],
        bump = distribution_config.bump,
    )]
    pub distribution_config: Account<'info, DistributionConfig>,
}

pub fn sync_curation_from_record(ctx: Context<SyncCurationFromRecord>) -> Result<()> {
    let record = &ctx.accounts.curation_record;

    // The record's stored fee is deliberately ignored.
    let enforced_fee = record.scope.canonical_fee();
    require!(enforced_fee > 0, LiveAssetError::InvalidCurationScope);

    let config = &mut ctx.accounts.distribution_config;
    config.enable_curation(record.curator, enforced_fee, record.scope)?;

    emit!(CurationEnabled {
        event_id: ctx.accounts.event.event_id,
        actor: ctx.accounts.curator.key(),
        curator: record.curator,
        fee_bps: enforced_fee,
        scope: record.scope,
        from_record: true,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!(
        "Curation synced from record for event {} at {} bps",
        ctx.accounts.event.event_id,
        enforced_fee
    );

    Ok(())
}
