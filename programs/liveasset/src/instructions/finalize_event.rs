use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::LiveAssetError;
use crate::state::{Delegation, LiveEvent, TipLedger};

#[derive(Accounts)]
pub struct FinalizeEvent<'info> {
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [EVENT_SEED, event.event_id.to_le_bytes().as_ref()],
        bump = event.bump,
    )]
    pub event: Account<'info, LiveEvent>,

    #[account(
        mut,
        seeds = [TIP_LEDGER_SEED, event.event_id.to_le_bytes().as_ref()],
        bump = tip_ledger.bump,
    )]
    pub tip_ledger: Account<'info, TipLedger>,

    #[account(
        seeds = [DELEGATION_SEED, event.event_id.to_le_bytes().as_ref()],
        bump = delegation.bump,
    )]
    pub delegation: Option<Account<'info, Delegation>>,
}

pub fn finalize_event(ctx: Context<FinalizeEvent>) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp;
    let event = &mut ctx.accounts.event;
    let ledger = &mut ctx.accounts.tip_ledger;

    require!(
        event.is_authorized(ctx.accounts.caller.key, ctx.accounts.delegation.as_deref()),
        LiveAssetError::NotAuthorized
    );
    require!(!event.finalized, LiveAssetError::AlreadyFinalized);
    event.assert_ended(current_time)?;

    // ReserveNotMet and NoContributors abort here, leaving the event
    // unfinalized and the call retryable.
    let new_owner = ledger.outcome()?;
    let previous_owner = event.owner;

    event.finalize(new_owner)?;
    ledger.finalized = true;

    emit!(EventFinalized {
        event_id: event.event_id,
        actor: ctx.accounts.caller.key(),
        previous_owner,
        new_owner,
        total_tipped: ledger.total_tipped,
        reserve_price: ledger.reserve_price,
        timestamp: current_time,
    });

    msg!(
        "Event {} finalized, ownership moved to {}",
        event.event_id,
        new_owner
    );

    Ok(())
}

#[event]
pub struct EventFinalized {
    pub event_id: u64,
    pub actor: Pubkey,
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
    pub total_tipped: u64,
    pub reserve_price: u64,
    pub timestamp: i64,
}
