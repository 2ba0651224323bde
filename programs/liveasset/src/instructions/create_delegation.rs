use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::LiveAssetError;
use crate::state::{Delegation, LiveEvent};

#[derive(Accounts)]
pub struct CreateDelegation<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        seeds = [EVENT_SEED, event.event_id.to_le_bytes().as_ref()],
        bump = event.bump,
        constraint = event.owner == owner.key() @ LiveAssetError::NotOwner,
    )]
    pub event: Account<'info, LiveEvent>,

    // Write-once: `init` fails if the slot for this event is already filled,
    // which is the AlreadyDelegated case.
    #[account(
        init,
        payer = owner,
        space = 8 + Delegation::INIT_SPACE,
        seeds = [DELEGATION_SEED, event.event_id.to_le_bytes().as_ref()],
        bump
    )]
    pub delegation: Account<'info, Delegation>,

    pub system_program: Program<'info, System>,
}

pub fn create_delegation(ctx: Context<CreateDelegation>, delegatee: Pubkey) -> Result<()> {
    require!(
        delegatee != Pubkey::default() && delegatee != ctx.accounts.owner.key(),
        LiveAssetError::InvalidDelegatee
    );

    let current_time = Clock::get()?.unix_timestamp;
    let delegation = &mut ctx.accounts.delegation;
    delegation.event_id = ctx.accounts.event.event_id;
    delegation.delegatee = delegatee;
    delegation.created_by = ctx.accounts.owner.key();
    delegation.via_composer = false;
    delegation.created_at = current_time;
    delegation.bump = ctx.bumps.delegation;

    emit!(DelegationCreated {
        event_id: delegation.event_id,
        owner: delegation.created_by,
        delegatee,
        via_composer: false,
        timestamp: current_time,
    });

    msg!("Delegation created for event {}", delegation.event_id);

    Ok(())
}

#[event]
pub struct DelegationCreated {
    pub event_id: u64,
    pub owner: Pubkey,
    pub delegatee: Pubkey,
    pub via_composer: bool,
    pub timestamp: i64,
}
