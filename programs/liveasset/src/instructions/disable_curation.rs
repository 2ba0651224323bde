use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::LiveAssetError;
use crate::state::{DistributionConfig, LiveEvent};

#[derive(Accounts)]
pub struct DisableCuration<'info> {
    pub owner: Signer<'info>,

    #[account(
        seeds = [EVENT_SEED, event.event_id.to_le_bytes().as_ref()],
        bump = event.bump,
        constraint = event.owner == owner.key() @ LiveAssetError::NotOwner,
    )]
    pub event: Account<'info, LiveEvent>,

    #[account(
        mut,
        seeds = [DISTRIBUTION_SEED, event.event_id.to_le_bytes().as_ref()],
        bump = distribution_config.bump,
        constraint = distribution_config.curation_enabled @ LiveAssetError::CurationNotEnabled,
    )]
    pub distribution_config: Account<'info, DistributionConfig>,
}

pub fn disable_curation(ctx: Context<DisableCuration>) -> Result<()> {
    let config = &mut ctx.accounts.distribution_config;
    let curator = config.curator;
    config.disable_curation();

    emit!(CurationDisabled {
        event_id: ctx.accounts.event.event_id,
        actor: ctx.accounts.owner.key(),
        curator,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Curation disabled for event {}", ctx.accounts.event.event_id);

    Ok(())
}

#[event]
pub struct CurationDisabled {
    pub event_id: u64,
    pub actor: Pubkey,
    pub curator: Pubkey,
    pub timestamp: i64,
}
