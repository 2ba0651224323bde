use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::LiveAssetError;
use crate::state::{CuratorProfile, Platform};

#[derive(Accounts)]
pub struct RevokeCurator<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [PLATFORM_SEED],
        bump = platform.bump,
        constraint = platform.authority == authority.key() @ LiveAssetError::NotPlatformAuthority,
    )]
    pub platform: Account<'info, Platform>,

    #[account(
        mut,
        close = authority,
        seeds = [CURATOR_SEED, curator_profile.curator.as_ref()],
        bump = curator_profile.bump,
    )]
    pub curator_profile: Account<'info, CuratorProfile>,
}

pub fn revoke_curator(ctx: Context<RevokeCurator>) -> Result<()> {
    let profile = &ctx.accounts.curator_profile;

    emit!(CuratorRevoked {
        curator: profile.curator,
        revoked_by: ctx.accounts.authority.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Curator {} removed from allow-list", profile.curator);

    Ok(())
}

#[event]
pub struct CuratorRevoked {
    pub curator: Pubkey,
    pub revoked_by: Pubkey,
    pub timestamp: i64,
}
