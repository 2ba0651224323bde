use anchor_lang::prelude::*;

use crate::constants::PLATFORM_SEED;
use crate::errors::LiveAssetError;
use crate::state::Platform;

#[derive(Accounts)]
pub struct SetPaused<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [PLATFORM_SEED],
        bump = platform.bump,
        constraint = platform.authority == authority.key() @ LiveAssetError::NotPlatformAuthority,
    )]
    pub platform: Account<'info, Platform>,
}

pub fn set_paused(ctx: Context<SetPaused>, paused: bool) -> Result<()> {
    let platform = &mut ctx.accounts.platform;
    platform.paused = paused;

    emit!(PlatformPauseSet {
        authority: platform.authority,
        paused,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[event]
pub struct PlatformPauseSet {
    pub authority: Pubkey,
    pub paused: bool,
    pub timestamp: i64,
}
