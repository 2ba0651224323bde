use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::LiveAssetError;
use crate::state::Platform;

#[derive(Accounts)]
pub struct InitializePlatform<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = 8 + Platform::INIT_SPACE,
        seeds = [PLATFORM_SEED],
        bump
    )]
    pub platform: Account<'info, Platform>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_platform(
    ctx: Context<InitializePlatform>,
    creator_share_bps: u16,
    treasury_share_bps: u16,
    treasury: Pubkey,
    composer: Pubkey,
) -> Result<()> {
    Platform::validate_split(creator_share_bps, treasury_share_bps)?;
    require!(
        treasury != Pubkey::default(),
        LiveAssetError::InvalidTreasury
    );

    let platform = &mut ctx.accounts.platform;
    platform.authority = ctx.accounts.authority.key();
    platform.treasury = treasury;
    platform.composer = composer;
    platform.creator_share_bps = creator_share_bps;
    platform.treasury_share_bps = treasury_share_bps;
    platform.paused = false;
    platform.total_events = 0;
    platform.total_tips = 0;
    platform.total_tip_volume = 0;
    platform.total_distributed = 0;
    platform.bump = ctx.bumps.platform;

    emit!(PlatformInitialized {
        authority: platform.authority,
        treasury,
        composer,
        creator_share_bps,
        treasury_share_bps,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!(
        "Platform initialized with {}/{} split",
        creator_share_bps,
        treasury_share_bps
    );

    Ok(())
}

#[event]
pub struct PlatformInitialized {
    pub authority: Pubkey,
    pub treasury: Pubkey,
    pub composer: Pubkey,
    pub creator_share_bps: u16,
    pub treasury_share_bps: u16,
    pub timestamp: i64,
}
