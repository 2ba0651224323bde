use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::LiveAssetError;
use crate::state::{CurationScope, CuratorProfile, Platform};

#[derive(Accounts)]
#[instruction(curator: Pubkey)]
pub struct AllowCurator<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [PLATFORM_SEED],
        bump = platform.bump,
        constraint = platform.authority == authority.key() @ LiveAssetError::NotPlatformAuthority,
    )]
    pub platform: Account<'info, Platform>,

    // init_if_needed so the authority can raise or lower an existing
    // curator's maximum scope with the same call.
    #[account(
        init_if_needed,
        payer = authority,
        space = 8 + CuratorProfile::INIT_SPACE,
        seeds = [CURATOR_SEED, curator.as_ref()],
        bump
    )]
    pub curator_profile: Account<'info, CuratorProfile>,

    pub system_program: Program<'info, System>,
}

pub fn allow_curator(
    ctx: Context<AllowCurator>,
    curator: Pubkey,
    max_scope: CurationScope,
) -> Result<()> {
    require!(
        max_scope != CurationScope::None,
        LiveAssetError::InvalidCurationScope
    );

    let current_time = Clock::get()?.unix_timestamp;
    let profile = &mut ctx.accounts.curator_profile;
    profile.curator = curator;
    profile.max_scope = max_scope;
    profile.vetted_by = ctx.accounts.authority.key();
    profile.listed_at = current_time;
    profile.bump = ctx.bumps.curator_profile;

    emit!(CuratorAllowed {
        curator,
        max_scope,
        vetted_by: profile.vetted_by,
        timestamp: current_time,
    });

    msg!("Curator {} allow-listed", curator);

    Ok(())
}

#[event]
pub struct CuratorAllowed {
    pub curator: Pubkey,
    pub max_scope: CurationScope,
    pub vetted_by: Pubkey,
    pub timestamp: i64,
}
