use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::LiveAssetError;
use crate::instructions::create_delegation::DelegationCreated;
use crate::state::{Delegation, LiveEvent, Platform};

#[derive(Accounts)]
pub struct CreateDelegationViaComposer<'info> {
    #[account(mut)]
    pub composer: Signer<'info>,

    #[account(
        seeds = [PLATFORM_SEED],
        bump = platform.bump,
        constraint = platform.composer == composer.key() @ LiveAssetError::NotComposer,
    )]
    pub platform: Account<'info, Platform>,

    /// CHECK: claimed owner; the handler re-verifies it against the event's
    /// actual owner rather than trusting the composer's claim.
    pub claimed_owner: UncheckedAccount<'info>,

    #[account(
        seeds = [EVENT_SEED, event.event_id.to_le_bytes().as_ref()],
        bump = event.bump,
    )]
    pub event: Account<'info, LiveEvent>,

    #[account(
        init,
        payer = composer,
        space = 8 + Delegation::INIT_SPACE,
        seeds = [DELEGATION_SEED, event.event_id.to_le_bytes().as_ref()],
        bump
    )]
    pub delegation: Account<'info, Delegation>,

    pub system_program: Program<'info, System>,
}

pub fn create_delegation_via_composer(
    ctx: Context<CreateDelegationViaComposer>,
    delegatee: Pubkey,
) -> Result<()> {
    let event = &ctx.accounts.event;

    // Independent ownership proof. The composer names an owner; the record
    // is only created if that account really owns the event right now.
    require_keys_eq!(
        ctx.accounts.claimed_owner.key(),
        event.owner,
        LiveAssetError::NotOwner
    );
    require!(
        delegatee != Pubkey::default() && delegatee != event.owner,
        LiveAssetError::InvalidDelegatee
    );

    let current_time = Clock::get()?.unix_timestamp;
    let delegation = &mut ctx.accounts.delegation;
    delegation.event_id = event.event_id;
    delegation.delegatee = delegatee;
    delegation.created_by = event.owner;
    delegation.via_composer = true;
    delegation.created_at = current_time;
    delegation.bump = ctx.bumps.delegation;

    emit!(DelegationCreated {
        event_id: event.event_id,
        owner: event.owner,
        delegatee,
        via_composer: true,
        timestamp: current_time,
    });

    msg!(
        "Delegation created via composer for event {}",
        event.event_id
    );

    Ok(())
}
