use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::LiveAssetError;
use crate::state::{
    CreatorProfile, CurationScope, DistributionConfig, LiveEvent, Platform, TipLedger,
};
use crate::utils::reentrancy::ReentrancyGuard;
use crate::utils::validation::*;
use crate::utils::safe_add;

#[derive(Accounts)]
#[instruction(event_id: u64)]
pub struct CreateEvent<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [PLATFORM_SEED],
        bump = platform.bump,
    )]
    pub platform: Account<'info, Platform>,

    #[account(
        init,
        payer = creator,
        space = 8 + LiveEvent::INIT_SPACE,
        seeds = [EVENT_SEED, event_id.to_le_bytes().as_ref()],
        bump
    )]
    pub event: Account<'info, LiveEvent>,

    #[account(
        init,
        payer = creator,
        space = 8 + TipLedger::INIT_SPACE,
        seeds = [TIP_LEDGER_SEED, event_id.to_le_bytes().as_ref()],
        bump
    )]
    pub tip_ledger: Account<'info, TipLedger>,

    #[account(
        init,
        payer = creator,
        space = 8 + DistributionConfig::INIT_SPACE,
        seeds = [DISTRIBUTION_SEED, event_id.to_le_bytes().as_ref()],
        bump
    )]
    pub distribution_config: Account<'info, DistributionConfig>,

    #[account(
        init,
        payer = creator,
        space = 8 + ReentrancyGuard::INIT_SPACE,
        seeds = [REENTRANCY_SEED, distribution_config.key().as_ref()],
        bump
    )]
    pub distribution_guard: Account<'info, ReentrancyGuard>,

    #[account(
        init_if_needed,
        payer = creator,
        space = 8 + CreatorProfile::INIT_SPACE,
        seeds = [CREATOR_SEED, creator.key().as_ref()],
        bump
    )]
    pub creator_profile: Account<'info, CreatorProfile>,

    pub system_program: Program<'info, System>,
}

#[allow(clippy::too_many_arguments)]
pub fn create_event(
    ctx: Context<CreateEvent>,
    event_id: u64,
    start_time: i64,
    duration_minutes: u64,
    reserve_price: u64,
    metadata_uri: String,
    ticket_supply: u32,
    ticket_price: u64,
) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp;
    let platform = &mut ctx.accounts.platform;

    platform.assert_not_paused()?;
    require!(
        event_id == platform.total_events,
        LiveAssetError::InvalidEventId
    );

    let end_time = validate_event_window(start_time, duration_minutes, current_time)?;
    validate_reserve_price(reserve_price)?;
    validate_metadata_uri(&metadata_uri)?;
    require!(
        ticket_price <= MAX_TICKET_PRICE,
        LiveAssetError::TicketPriceTooHigh
    );

    let creator_key = ctx.accounts.creator.key();

    // Registry, ledger and distribution policy are seeded in one instruction
    // so all three agree on identity and timing from the first slot.
    let event = &mut ctx.accounts.event;
    event.event_id = event_id;
    event.creator = creator_key;
    event.owner = creator_key;
    event.start_time = start_time;
    event.end_time = end_time;
    event.reserve_price = reserve_price;
    event.metadata_uri = metadata_uri.clone();
    event.finalized = false;
    event.ticket_supply = ticket_supply;
    event.tickets_sold = 0;
    event.ticket_price = ticket_price;
    event.created_at = current_time;
    event.bump = ctx.bumps.event;

    let ledger = &mut ctx.accounts.tip_ledger;
    ledger.event_id = event_id;
    ledger.creator = creator_key;
    ledger.start_time = start_time;
    ledger.end_time = end_time;
    ledger.reserve_price = reserve_price;
    ledger.total_tipped = 0;
    ledger.tip_count = 0;
    ledger.top_contributor = None;
    ledger.top_cumulative = 0;
    ledger.finalized = false;
    ledger.bump = ctx.bumps.tip_ledger;

    let config = &mut ctx.accounts.distribution_config;
    config.event_id = event_id;
    config.creator = creator_key;
    config.creator_share_bps = platform.creator_share_bps;
    config.treasury_share_bps = platform.treasury_share_bps;
    config.curation_fee_bps = 0;
    config.curation_scope = CurationScope::None;
    config.curator = Pubkey::default();
    config.curation_enabled = false;
    config.payout_count = 0;
    config.total_distributed = 0;
    config.bump = ctx.bumps.distribution_config;

    let guard = &mut ctx.accounts.distribution_guard;
    guard.is_locked = false;
    guard.bump = ctx.bumps.distribution_guard;

    let profile = &mut ctx.accounts.creator_profile;
    profile.creator = creator_key;
    profile.events_created = safe_add(profile.events_created, 1)?;
    profile.bump = ctx.bumps.creator_profile;

    platform.total_events = safe_add(platform.total_events, 1)?;

    emit!(EventCreated {
        event: event.key(),
        event_id,
        creator: creator_key,
        start_time,
        end_time,
        reserve_price,
        metadata_uri,
        ticket_supply,
        ticket_price,
        timestamp: current_time,
    });

    msg!("Event {} created, window {}..{}", event_id, start_time, end_time);

    Ok(())
}

#[event]
pub struct EventCreated {
    pub event: Pubkey,
    pub event_id: u64,
    pub creator: Pubkey,
    pub start_time: i64,
    pub end_time: i64,
    pub reserve_price: u64,
    pub metadata_uri: String,
    pub ticket_supply: u32,
    pub ticket_price: u64,
    pub timestamp: i64,
}
