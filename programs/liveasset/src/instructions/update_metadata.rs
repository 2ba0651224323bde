use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::LiveAssetError;
use crate::state::{Delegation, LiveEvent};
use crate::utils::validation::validate_metadata_uri;

#[derive(Accounts)]
pub struct UpdateMetadata<'info> {
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [EVENT_SEED, event.event_id.to_le_bytes().as_ref()],
        bump = event.bump,
    )]
    pub event: Account<'info, LiveEvent>,

    #[account(
        seeds = [DELEGATION_SEED, event.event_id.to_le_bytes().as_ref()],
        bump = delegation.bump,
    )]
    pub delegation: Option<Account<'info, Delegation>>,
}

pub fn update_metadata(ctx: Context<UpdateMetadata>, metadata_uri: String) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp;
    let event = &mut ctx.accounts.event;

    require!(
        event.is_authorized(ctx.accounts.caller.key, ctx.accounts.delegation.as_deref()),
        LiveAssetError::NotAuthorized
    );
    event.assert_mutable(current_time)?;
    validate_metadata_uri(&metadata_uri)?;

    event.metadata_uri = metadata_uri.clone();

    emit!(MetadataUpdated {
        event_id: event.event_id,
        actor: ctx.accounts.caller.key(),
        metadata_uri,
        timestamp: current_time,
    });

    Ok(())
}

#[event]
pub struct MetadataUpdated {
    pub event_id: u64,
    pub actor: Pubkey,
    pub metadata_uri: String,
    pub timestamp: i64,
}
