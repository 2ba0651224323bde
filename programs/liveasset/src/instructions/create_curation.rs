use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::LiveAssetError;
use crate::state::{CurationRecord, CurationScope, CuratorProfile, LiveEvent, Platform};
use crate::utils::reentrancy::ReentrancyGuard;
use crate::utils::validation::*;

#[derive(Accounts)]
#[instruction(curator: Pubkey)]
pub struct CreateCuration<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        seeds = [PLATFORM_SEED],
        bump = platform.bump,
    )]
    pub platform: Account<'info, Platform>,

    #[account(
        seeds = [EVENT_SEED, event.event_id.to_le_bytes().as_ref()],
        bump = event.bump,
        constraint = event.owner == owner.key() @ LiveAssetError::NotOwner,
    )]
    pub event: Account<'info, LiveEvent>,

    #[account(
        seeds = [CURATOR_SEED, curator.as_ref()],
        bump = curator_profile.bump,
        constraint = curator_profile.curator == curator @ LiveAssetError::CuratorNotAllowed,
    )]
    pub curator_profile: Account<'info, CuratorProfile>,

    #[account(
        init,
        payer = owner,
        space = 8 + CurationRecord::INIT_SPACE,
        seeds = [CURATION_SEED, event.event_id.to_le_bytes().as_ref()],
        bump
    )]
    pub curation_record: Account<'info, CurationRecord>,

    #[account(
        init,
        payer = owner,
        space = 8 + ReentrancyGuard::INIT_SPACE,
        seeds = [REENTRANCY_SEED, curation_record.key().as_ref()],
        bump
    )]
    pub curation_guard: Account<'info, ReentrancyGuard>,

    pub system_program: Program<'info, System>,
}

#[allow(clippy::too_many_arguments)]
pub fn create_curation(
    ctx: Context<CreateCuration>,
    curator: Pubkey,
    fee_bps: u16,
    scope: CurationScope,
    description: String,
    valid_from: Option<i64>,
    valid_until: Option<i64>,
) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp;
    ctx.accounts.platform.assert_not_paused()?;

    require!(
        fee_bps >= MIN_CURATION_FEE_BPS && fee_bps <= MAX_CURATION_FEE_BPS,
        LiveAssetError::InvalidCurationFee
    );
    require!(
        scope != CurationScope::None,
        LiveAssetError::InvalidCurationScope
    );
    ctx.accounts.curator_profile.assert_scope(scope)?;
    validate_curation_description(&description)?;

    let valid_from = valid_from.unwrap_or(current_time);
    let valid_until =
        valid_until.unwrap_or(current_time + DEFAULT_CURATION_VALIDITY_SECONDS);
    validate_curation_window(valid_from, valid_until)?;

    let record = &mut ctx.accounts.curation_record;
    record.event_id = ctx.accounts.event.event_id;
    record.curator = curator;
    record.fee_bps = fee_bps;
    record.scope = scope;
    record.description = description;
    record.valid_from = valid_from;
    record.valid_until = valid_until;
    record.active = true;
    record.lifetime_earned = 0;
    record.withdrawn_total = 0;
    record.pending_balance = 0;
    record.bump = ctx.bumps.curation_record;

    let guard = &mut ctx.accounts.curation_guard;
    guard.is_locked = false;
    guard.bump = ctx.bumps.curation_guard;

    emit!(CurationCreated {
        event_id: record.event_id,
        owner: ctx.accounts.owner.key(),
        curator,
        fee_bps,
        scope,
        valid_from,
        valid_until,
        timestamp: current_time,
    });

    msg!("Curation record created for event {}", record.event_id);

    Ok(())
}

#[event]
pub struct CurationCreated {
    pub event_id: u64,
    pub owner: Pubkey,
    pub curator: Pubkey,
    pub fee_bps: u16,
    pub scope: CurationScope,
    pub valid_from: i64,
    pub valid_until: i64,
    pub timestamp: i64,
}
