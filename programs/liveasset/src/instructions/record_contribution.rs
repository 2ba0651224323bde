use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::{ContributorPosition, Platform, TipLedger, TipRecord};
use crate::utils::safe_add;
use crate::utils::validation::validate_tip_message;

#[derive(Accounts)]
pub struct RecordContribution<'info> {
    #[account(mut)]
    pub contributor: Signer<'info>,

    #[account(
        mut,
        seeds = [PLATFORM_SEED],
        bump = platform.bump,
    )]
    pub platform: Account<'info, Platform>,

    // Aggregate and escrow vault for the event's tips.
    #[account(
        mut,
        seeds = [TIP_LEDGER_SEED, tip_ledger.event_id.to_le_bytes().as_ref()],
        bump = tip_ledger.bump,
    )]
    pub tip_ledger: Account<'info, TipLedger>,

    #[account(
        init,
        payer = contributor,
        space = 8 + TipRecord::INIT_SPACE,
        seeds = [
            TIP_RECORD_SEED,
            tip_ledger.event_id.to_le_bytes().as_ref(),
            tip_ledger.tip_count.to_le_bytes().as_ref(),
        ],
        bump
    )]
    pub tip_record: Account<'info, TipRecord>,

    #[account(
        init_if_needed,
        payer = contributor,
        space = 8 + ContributorPosition::INIT_SPACE,
        seeds = [
            POSITION_SEED,
            tip_ledger.event_id.to_le_bytes().as_ref(),
            contributor.key().as_ref(),
        ],
        bump
    )]
    pub position: Account<'info, ContributorPosition>,

    pub system_program: Program<'info, System>,
}

pub fn record_contribution(
    ctx: Context<RecordContribution>,
    amount: u64,
    message: String,
) -> Result<()> {
    let current_time = Clock::get()?.unix_timestamp;
    let contributor_key = ctx.accounts.contributor.key();

    validate_tip_message(&message)?;
    ctx.accounts.tip_ledger.assert_open(current_time)?;

    let event_id = ctx.accounts.tip_ledger.event_id;
    let seq = ctx.accounts.tip_ledger.tip_count;

    let position = &mut ctx.accounts.position;
    position.event_id = event_id;
    position.contributor = contributor_key;
    position.bump = ctx.bumps.position;
    let cumulative = position.apply(amount)?;

    let leader_change = ctx
        .accounts
        .tip_ledger
        .record(contributor_key, amount, cumulative)?;

    // Tip value lands in the ledger vault.
    anchor_lang::system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            anchor_lang::system_program::Transfer {
                from: ctx.accounts.contributor.to_account_info(),
                to: ctx.accounts.tip_ledger.to_account_info(),
            },
        ),
        amount,
    )?;

    let record = &mut ctx.accounts.tip_record;
    record.event_id = event_id;
    record.seq = seq;
    record.contributor = contributor_key;
    record.amount = amount;
    record.message = message.clone();
    record.tipped_at = current_time;
    record.bump = ctx.bumps.tip_record;

    let platform = &mut ctx.accounts.platform;
    platform.total_tips = safe_add(platform.total_tips, 1)?;
    platform.total_tip_volume = safe_add(platform.total_tip_volume, amount)?;

    emit!(TipRecorded {
        event_id,
        seq,
        contributor: contributor_key,
        amount,
        cumulative,
        message,
        timestamp: current_time,
    });

    if let Some(change) = leader_change {
        emit!(NewTopContributor {
            event_id,
            previous: change.previous,
            new_leader: change.new_leader,
            cumulative: change.cumulative,
            timestamp: current_time,
        });
        msg!("New top contributor for event {}", event_id);
    }

    Ok(())
}

#[event]
pub struct TipRecorded {
    pub event_id: u64,
    pub seq: u64,
    pub contributor: Pubkey,
    pub amount: u64,
    pub cumulative: u64,
    pub message: String,
    pub timestamp: i64,
}

#[event]
pub struct NewTopContributor {
    pub event_id: u64,
    pub previous: Option<Pubkey>,
    pub new_leader: Pubkey,
    pub cumulative: u64,
    pub timestamp: i64,
}
