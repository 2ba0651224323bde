use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::LiveAssetError;
use crate::state::{CurationScope, CuratorProfile, Delegation, DistributionConfig, LiveEvent};

#[derive(Accounts)]
#[instruction(curator: Pubkey)]
pub struct EnableCuration<'info> {
    pub caller: Signer<'info>,

    #[account(
        seeds = [EVENT_SEED, event.event_id.to_le_bytes().as_ref()],
        bump = event.bump,
    )]
    pub event: Account<'info, LiveEvent>,

    #[account(
        seeds = [DELEGATION_SEED, event.event_id.to_le_bytes().as_ref()],
        bump = delegation.bump,
    )]
    pub delegation: Option<Account<'info, Delegation>>,

    #[account(
        mut,
        seeds = [DISTRIBUTION_SEED, event.event_id.to_le_bytes().as_ref()],
        bump = distribution_config.bump,
    )]
    pub distribution_config: Account<'info, DistributionConfig>,

    // Allow-list membership is proven by the profile PDA existing.
    #[account(
        seeds = [CURATOR_SEED, curator.as_ref()],
        bump = curator_profile.bump,
        constraint = curator_profile.curator == curator @ LiveAssetError::CuratorNotAllowed,
    )]
    pub curator_profile: Account<'info, CuratorProfile>,
}

pub fn enable_curation(
    ctx: Context<EnableCuration>,
    curator: Pubkey,
    fee_bps: u16,
    scope: CurationScope,
) -> Result<()> {
    let event = &ctx.accounts.event;
    require!(
        event.is_authorized(ctx.accounts.caller.key, ctx.accounts.delegation.as_deref()),
        LiveAssetError::NotAuthorized
    );
    ctx.accounts.curator_profile.assert_scope(scope)?;

    let config = &mut ctx.accounts.distribution_config;
    config.enable_curation(curator, fee_bps, scope)?;

    emit!(CurationEnabled {
        event_id: event.event_id,
        actor: ctx.accounts.caller.key(),
        curator,
        fee_bps,
        scope,
        from_record: false,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!(
        "Curation enabled for event {} at {} bps",
        event.event_id,
        fee_bps
    );

    Ok(())
}

#[event]
pub struct CurationEnabled {
    pub event_id: u64,
    pub actor: Pubkey,
    pub curator: Pubkey,
    pub fee_bps: u16,
    pub scope: CurationScope,
    pub from_record: bool,
    pub timestamp: i64,
}
