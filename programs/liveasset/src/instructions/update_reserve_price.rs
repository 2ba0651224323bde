use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::LiveAssetError;
use crate::state::{Delegation, LiveEvent, TipLedger};
use crate::utils::validation::validate_reserve_price;

#[derive(Accounts)]
pub struct UpdateReservePrice<'info> {
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [EVENT_SEED, event.event_id.to_le_bytes().as_ref()],
        bump = event.bump,
    )]
    pub event: Account<'info, LiveEvent>,

    // The ledger carries a reserve snapshot consulted at finalization, so it
    // must move together with the registry value.
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

pub fn update_reserve_price(ctx: Context<UpdateReservePrice>, reserve_price: u64) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp;
    let event = &mut ctx.accounts.event;

    require!(
        event.is_authorized(ctx.accounts.caller.key, ctx.accounts.delegation.as_deref()),
        LiveAssetError::NotAuthorized
    );
    event.assert_mutable(current_time)?;
    validate_reserve_price(reserve_price)?;

    let previous = event.reserve_price;
    event.reserve_price = reserve_price;
    ctx.accounts.tip_ledger.reserve_price = reserve_price;

    emit!(ReservePriceUpdated {
        event_id: event.event_id,
        actor: ctx.accounts.caller.key(),
        previous,
        reserve_price,
        timestamp: current_time,
    });

    Ok(())
}

#[event]
pub struct ReservePriceUpdated {
    pub event_id: u64,
    pub actor: Pubkey,
    pub previous: u64,
    pub reserve_price: u64,
    pub timestamp: i64,
}
