use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::CurationScope;

declare_id!("Gn2HKLryH3hcy2HuGY9mChhAKDEPdNLaNkiuozrwYTQx");

#[program]
pub mod liveasset {
    use super::*;

    pub fn initialize_platform(
        ctx: Context<InitializePlatform>,
        creator_share_bps: u16,
        treasury_share_bps: u16,
        treasury: Pubkey,
        composer: Pubkey,
    ) -> Result<()> {
        instructions::initialize_platform::initialize_platform(
            ctx,
            creator_share_bps,
            treasury_share_bps,
            treasury,
            composer,
        )
    }

    pub fn set_paused(ctx: Context<SetPaused>, paused: bool) -> Result<()> {
        instructions::set_paused::set_paused(ctx, paused)
    }

    pub fn allow_curator(
        ctx: Context<AllowCurator>,
        curator: Pubkey,
        max_scope: CurationScope,
    ) -> Result<()> {
        instructions::allow_curator::allow_curator(ctx, curator, max_scope)
    }

    pub fn revoke_curator(ctx: Context<RevokeCurator>) -> Result<()> {
        instructions::revoke_curator::revoke_curator(ctx)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn create_event(
        ctx: Context<CreateEvent>,
        event_id: u64,
        start_time: i64,
        duration_minutes: u64,
        reserve_price: u64,
        metadata_uri: String,
        ticket_supply: u32,
        ticket_price: u64,
    ) -> Result<()> {
        instructions::create_event::create_event(
            ctx,
            event_id,
            start_time,
            duration_minutes,
            reserve_price,
            metadata_uri,
            ticket_supply,
            ticket_price,
        )
    }

    pub fn update_metadata(ctx: Context<UpdateMetadata>, metadata_uri: String) -> Result<()> {
        instructions::update_metadata::update_metadata(ctx, metadata_uri)
    }

    pub fn update_reserve_price(
        ctx: Context<UpdateReservePrice>,
        reserve_price: u64,
    ) -> Result<()> {
        instructions::update_reserve_price::update_reserve_price(ctx, reserve_price)
    }

    pub fn create_delegation(ctx: Context<CreateDelegation>, delegatee: Pubkey) -> Result<()> {
        instructions::create_delegation::create_delegation(ctx, delegatee)
    }

    pub fn create_delegation_via_composer(
        ctx: Context<CreateDelegationViaComposer>,
        delegatee: Pubkey,
    ) -> Result<()> {
        instructions::create_delegation_via_composer::create_delegation_via_composer(
            ctx, delegatee,
        )
    }

    pub fn update_delegate(ctx: Context<UpdateDelegate>, new_delegatee: Pubkey) -> Result<()> {
        instructions::update_delegate::update_delegate(ctx, new_delegatee)
    }

    pub fn record_contribution(
        ctx: Context<RecordContribution>,
        amount: u64,
        message: String,
    ) -> Result<()> {
        instructions::record_contribution::record_contribution(ctx, amount, message)
    }

    pub fn finalize_event(ctx: Context<FinalizeEvent>) -> Result<()> {
        instructions::finalize_event::finalize_event(ctx)
    }

    pub fn distribute(ctx: Context<Distribute>, amount: u64) -> Result<()> {
        instructions::distribute::distribute(ctx, amount)
    }

    pub fn enable_curation(
        ctx: Context<EnableCuration>,
        curator: Pubkey,
        fee_bps: u16,
        scope: CurationScope,
    ) -> Result<()> {
        instructions::enable_curation::enable_curation(ctx, curator, fee_bps, scope)
    }

    pub fn sync_curation_from_record(ctx: Context<SyncCurationFromRecord>) -> Result<()> {
        instructions::sync_curation_from_record::sync_curation_from_record(ctx)
    }

    pub fn disable_curation(ctx: Context<DisableCuration>) -> Result<()> {
        instructions::disable_curation::disable_curation(ctx)
    }

    pub fn create_curation(
        ctx: Context<CreateCuration>,
        curator: Pubkey,
        fee_bps: u16,
        scope: CurationScope,
        description: String,
        valid_from: Option<i64>,
        valid_until: Option<i64>,
    ) -> Result<()> {
        instructions::create_curation::create_curation(
            ctx,
            curator,
            fee_bps,
            scope,
            description,
            valid_from,
            valid_until,
        )
    }

    pub fn update_curation(
        ctx: Context<UpdateCuration>,
        fee_bps: u16,
        scope: CurationScope,
        description: String,
    ) -> Result<()> {
        instructions::update_curation::update_curation(ctx, fee_bps, scope, description)
    }

    pub fn update_curation_dates(
        ctx: Context<UpdateCuration>,
        valid_from: i64,
        valid_until: i64,
    ) -> Result<()> {
        instructions::update_curation::update_curation_dates(ctx, valid_from, valid_until)
    }

    pub fn deactivate_curation(ctx: Context<DeactivateCuration>) -> Result<()> {
        instructions::deactivate_curation::deactivate_curation(ctx)
    }

    pub fn withdraw_curation(ctx: Context<WithdrawCuration>) -> Result<()> {
        instructions::withdraw_curation::withdraw_curation(ctx)
    }
}

#[cfg(test)]
mod test {
    #[test]
    fn test_id() {
        assert_eq!(
            super::ID.to_string(),
            "Gn2HKLryH3hcy2HuGY9mChhAKDEPdNLaNkiuozrwYTQx"
        );
    }
}

#[cfg(test)]
mod tests;
