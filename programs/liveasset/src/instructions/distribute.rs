use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::LiveAssetError;
use crate::state::{
    CurationRecord, DistributionConfig, DistributionReceipt, PayoutCategory, Platform,
};
use crate::utils::reentrancy::ReentrancyGuard;
use crate::utils::safe_add;

#[derive(Accounts)]
pub struct Distribute<'info> {
    /// Any party may settle funds; the caller supplies the amount being split.
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [PLATFORM_SEED],
        bump = platform.bump,
    )]
    pub platform: Account<'info, Platform>,

    #[account(
        mut,
        seeds = [DISTRIBUTION_SEED, distribution_config.event_id.to_le_bytes().as_ref()],
        bump = distribution_config.bump,
    )]
    pub distribution_config: Account<'info, DistributionConfig>,

    #[account(
        init,
        payer = payer,
        space = 8 + DistributionReceipt::INIT_SPACE,
        seeds = [
            RECEIPT_SEED,
            distribution_config.event_id.to_le_bytes().as_ref(),
            distribution_config.payout_count.to_le_bytes().as_ref(),
        ],
        bump
    )]
    pub receipt: Account<'info, DistributionReceipt>,

    /// CHECK: creator wallet, pinned to the registered policy
    #[account(
        mut,
        constraint = creator_wallet.key() == distribution_config.creator @ LiveAssetError::NotOwner,
    )]
    pub creator_wallet: UncheckedAccount<'info>,

    /// CHECK: platform treasury, pinned to the platform record
    #[account(
        mut,
        constraint = treasury.key() == platform.treasury @ LiveAssetError::InvalidTreasury,
    )]
    pub treasury: UncheckedAccount<'info>,

    // Required whenever curation is enabled for the event.
    #[account(
        mut,
        seeds = [CURATION_SEED, distribution_config.event_id.to_le_bytes().as_ref()],
        bump = curation_record.bump,
    )]
    pub curation_record: Option<Account<'info, CurationRecord>>,

    #[account(
        mut,
        seeds = [REENTRANCY_SEED, distribution_config.key().as_ref()],
        bump = reentrancy_guard.bump,
    )]
    pub reentrancy_guard: Account<'info, ReentrancyGuard>,

    pub system_program: Program<'info, System>,
}

pub fn distribute(ctx: Context<Distribute>, amount: u64) -> Result<()> {
    ctx.accounts.reentrancy_guard.lock()?;

    let current_time = Clock::get()?.unix_timestamp;
    let config = &mut ctx.accounts.distribution_config;
    let split = config.split(amount)?;
    let event_id = config.event_id;

    // Bookkeeping before any transfer leaves the instruction; a failing leg
    // aborts the transaction and rolls all of it back together.
    let seq = config.record_payout(amount)?;

    let curator_key = if split.curation_amount > 0 {
        let record = ctx
            .accounts
            .curation_record
            .as_mut()
            .ok_or(LiveAssetError::CurationNotEnabled)?;
        require_keys_eq!(record.curator, config.curator, LiveAssetError::NotCurator);
        record.assert_receivable(current_time)?;
        record.credit(split.curation_amount)?;
        record.curator
    } else {
        Pubkey::default()
    };

    if split.creator_amount > 0 {
        anchor_lang::system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                anchor_lang::system_program::Transfer {
                    from: ctx.accounts.payer.to_account_info(),
                    to: ctx.accounts.creator_wallet.to_account_info(),
                },
            ),
            split.creator_amount,
        )?;
        emit!(FundsDistributed {
            event_id,
            seq,
            recipient: ctx.accounts.creator_wallet.key(),
            amount: split.creator_amount,
            category: PayoutCategory::Creator,
            timestamp: current_time,
        });
    }

    if split.treasury_amount > 0 {
        anchor_lang::system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                anchor_lang::system_program::Transfer {
                    from: ctx.accounts.payer.to_account_info(),
                    to: ctx.accounts.treasury.to_account_info(),
                },
            ),
            split.treasury_amount,
        )?;
        emit!(FundsDistributed {
            event_id,
            seq,
            recipient: ctx.accounts.treasury.key(),
            amount: split.treasury_amount,
            category: PayoutCategory::Treasury,
            timestamp: current_time,
        });
    }

    if split.curation_amount > 0 {
        let record = ctx
            .accounts
            .curation_record
            .as_ref()
            .ok_or(LiveAssetError::CurationNotEnabled)?;
        anchor_lang::system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                anchor_lang::system_program::Transfer {
                    from: ctx.accounts.payer.to_account_info(),
                    to: record.to_account_info(),
                },
            ),
            split.curation_amount,
        )?;
        emit!(FundsDistributed {
            event_id,
            seq,
            recipient: record.key(),
            amount: split.curation_amount,
            category: PayoutCategory::Curation,
            timestamp: current_time,
        });
        emit!(CurationFundsReceived {
            event_id,
            curator: curator_key,
            amount: split.curation_amount,
            timestamp: current_time,
        });
    }

    let config = &ctx.accounts.distribution_config;
    let receipt = &mut ctx.accounts.receipt;
    receipt.event_id = event_id;
    receipt.seq = seq;
    receipt.amount = amount;
    receipt.creator = config.creator;
    receipt.creator_amount = split.creator_amount;
    receipt.treasury = ctx.accounts.platform.treasury;
    receipt.treasury_amount = split.treasury_amount;
    receipt.curator = curator_key;
    receipt.curation_amount = split.curation_amount;
    receipt.leg_count = split.leg_count();
    receipt.paid_by = ctx.accounts.payer.key();
    receipt.paid_at = current_time;
    receipt.bump = ctx.bumps.receipt;

    let platform = &mut ctx.accounts.platform;
    platform.total_distributed = safe_add(platform.total_distributed, amount)?;

    msg!("Distributed {} across {} legs", amount, receipt.leg_count);

    ctx.accounts.reentrancy_guard.unlock()?;

    Ok(())
}

#[event]
pub struct FundsDistributed {
    pub event_id: u64,
    pub seq: u64,
    pub recipient: Pubkey,
    pub amount: u64,
    pub category: PayoutCategory,
    pub timestamp: i64,
}

#[event]
pub struct CurationFundsReceived {
    pub event_id: u64,
    pub curator: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}
