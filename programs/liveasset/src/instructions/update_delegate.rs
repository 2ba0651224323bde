use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::LiveAssetError;
use crate::state::{Delegation, LiveEvent};

#[derive(Accounts)]
pub struct UpdateDelegate<'info> {
    pub owner: Signer<'info>,

    // Owner only: a delegate may never rotate itself out or in.
    #[account(
        seeds = [EVENT_SEED, event.event_id.to_le_bytes().as_ref()],
        bump = event.bump,
        constraint = event.owner == owner.key() @ LiveAssetError::NotOwner,
    )]
    pub event: Account<'info, LiveEvent>,

    #[account(
        mut,
        seeds = [DELEGATION_SEED, event.event_id.to_le_bytes().as_ref()],
        bump = delegation.bump,
    )]
    pub delegation: Account<'info, Delegation>,
}

pub fn update_delegate(ctx: Context<UpdateDelegate>, new_delegatee: Pubkey) -> Result<()> {
    require!(
        new_delegatee != Pubkey::default() && new_delegatee != ctx.accounts.owner.key(),
        LiveAssetError::InvalidDelegatee
    );

    let delegation = &mut ctx.accounts.delegation;
    let previous = delegation.delegatee;
    delegation.delegatee = new_delegatee;

    emit!(DelegateUpdated {
        event_id: delegation.event_id,
        owner: ctx.accounts.owner.key(),
        previous,
        delegatee: new_delegatee,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[event]
pub struct DelegateUpdated {
    pub event_id: u64,
    pub owner: Pubkey,
    pub previous: Pubkey,
    pub delegatee: Pubkey,
    pub timestamp: i64,
}
