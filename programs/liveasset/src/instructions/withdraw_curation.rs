use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::LiveAssetError;
use crate::state::CurationRecord;
use crate::utils::reentrancy::ReentrancyGuard;

#[derive(Accounts)]
pub struct WithdrawCuration<'info> {
    #[account(mut)]
    pub curator: Signer<'info>,

    #[account(
        mut,
        seeds = [CURATION_SEED, curation_record.event_id.to_le_bytes().as_ref()],
        bump = curation_record.bump,
        constraint = curation_record.curator == curator.key() @ LiveAssetError::NotCurator,
    )]
    pub curation_record: Account<'info, CurationRecord>,

    #[account(
        mut,
        seeds = [REENTRANCY_SEED, curation_record.key().as_ref()],
        bump = reentrancy_guard.bump,
    )]
    pub reentrancy_guard: Account<'info, ReentrancyGuard>,
}

pub fn withdraw_curation(ctx: Context<WithdrawCuration>) -> Result<()> {
    ctx.accounts.reentrancy_guard.lock()?;

    let current_time = Clock::get()?.unix_timestamp;
    let record = &mut ctx.accounts.curation_record;

    // Zero the pending balance before any lamports move.
    let amount = record.take_pending()?;
    let event_id = record.event_id;
    let withdrawn_total = record.withdrawn_total;

    record.to_account_info().sub_lamports(amount)?;
    ctx.accounts.curator.to_account_info().add_lamports(amount)?;

    emit!(CurationWithdrawn {
        event_id,
        curator: ctx.accounts.curator.key(),
        amount,
        withdrawn_total,
        timestamp: current_time,
    });

    msg!("Curator withdrew {} lamports", amount);

    ctx.accounts.reentrancy_guard.unlock()?;

    Ok(())
}

#[event]
pub struct CurationWithdrawn {
    pub event_id: u64,
    pub curator: Pubkey,
    pub amount: u64,
    pub withdrawn_total: u64,
    pub timestamp: i64,
}
