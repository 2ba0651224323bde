use anchor_lang::prelude::*;

use crate::errors::LiveAssetError;
use crate::state::*;

const START: i64 = 1_000_000;
const END: i64 = 1_003_600;

fn ledger(reserve_price: u64) -> TipLedger {
    TipLedger {
        event_id: 0,
        creator: Pubkey::new_unique(),
        start_time: START,
        end_time: END,
        reserve_price,
        ..Default::default()
    }
}

fn tip(ledger: &mut TipLedger, position: &mut ContributorPosition, amount: u64) {
    let cumulative = position.apply(amount).unwrap();
    ledger
        .record(position.contributor, amount, cumulative)
        .unwrap();
}

fn position(contributor: Pubkey) -> ContributorPosition {
    ContributorPosition {
        contributor,
        ..Default::default()
    }
}

fn event(owner: Pubkey) -> LiveEvent {
    LiveEvent {
        event_id: 0,
        creator: owner,
        owner,
        start_time: START,
        end_time: END,
        reserve_price: 100,
        metadata_uri: "ipfs://event".to_string(),
        finalized: false,
        ticket_supply: 100,
        tickets_sold: 0,
        ticket_price: 1_000_000,
        created_at: START - 7200,
        bump: 255,
    }
}

fn default_config() -> DistributionConfig {
    DistributionConfig {
        creator: Pubkey::new_unique(),
        creator_share_bps: 8_000,
        treasury_share_bps: 2_000,
        ..Default::default()
    }
}

#[test]
fn test_total_tracks_sum_of_contributions() {
    let mut ledger = ledger(0);
    let mut a = position(Pubkey::new_unique());
    let mut b = position(Pubkey::new_unique());

    tip(&mut ledger, &mut a, 40);
    tip(&mut ledger, &mut b, 70);
    tip(&mut ledger, &mut a, 50);

    assert_eq!(ledger.total_tipped, 160);
    assert_eq!(ledger.tip_count, 3);
    assert_eq!(a.cumulative, 90);
    assert_eq!(b.cumulative, 70);
}

#[test]
fn test_zero_amount_rejected() {
    let mut ledger = ledger(0);
    let contributor = Pubkey::new_unique();
    assert_eq!(
        ledger.record(contributor, 0, 0),
        Err(LiveAssetError::ZeroAmount.into())
    );
    assert_eq!(ledger.total_tipped, 0);
    assert_eq!(ledger.tip_count, 0);
}

#[test]
fn test_leader_follows_cumulative_not_single_tip() {
    // A tips 40, B tips 70, A tips 50 more. A's cumulative 90 beats B's 70
    // even though B holds the largest single tip.
    let mut ledger = ledger(100);
    let mut a = position(Pubkey::new_unique());
    let mut b = position(Pubkey::new_unique());

    tip(&mut ledger, &mut a, 40);
    assert_eq!(ledger.top_contributor, Some(a.contributor));

    tip(&mut ledger, &mut b, 70);
    assert_eq!(ledger.top_contributor, Some(b.contributor));
    assert_eq!(ledger.top_cumulative, 70);

    tip(&mut ledger, &mut a, 50);
    assert_eq!(ledger.top_contributor, Some(a.contributor));
    assert_eq!(ledger.top_cumulative, 90);

    assert_eq!(ledger.outcome().unwrap(), a.contributor);
}

#[test]
fn test_equal_cumulative_keeps_incumbent() {
    let mut ledger = ledger(0);
    let mut a = position(Pubkey::new_unique());
    let mut b = position(Pubkey::new_unique());

    tip(&mut ledger, &mut a, 100);
    tip(&mut ledger, &mut b, 100);

    // First to reach the amount wins; a tie does not displace.
    assert_eq!(ledger.top_contributor, Some(a.contributor));
    assert_eq!(ledger.top_cumulative, 100);

    tip(&mut ledger, &mut b, 1);
    assert_eq!(ledger.top_contributor, Some(b.contributor));
    assert_eq!(ledger.top_cumulative, 101);
}

#[test]
fn test_leader_change_reports_previous_leader() {
    let mut ledger = ledger(0);
    let a = Pubkey::new_unique();
    let b = Pubkey::new_unique();

    let first = ledger.record(a, 50, 50).unwrap().unwrap();
    assert_eq!(first.previous, None);
    assert_eq!(first.new_leader, a);

    // Leader extending its own lead is not a leadership change.
    assert!(ledger.record(a, 10, 60).unwrap().is_none());

    let change = ledger.record(b, 100, 100).unwrap().unwrap();
    assert_eq!(change.previous, Some(a));
    assert_eq!(change.new_leader, b);
    assert_eq!(change.cumulative, 100);
}

#[test]
fn test_window_gates() {
    let ledger = ledger(0);
    assert_eq!(
        ledger.assert_open(START - 1),
        Err(LiveAssetError::WindowNotOpen.into())
    );
    assert!(ledger.assert_open(START).is_ok());
    assert!(ledger.assert_open(END).is_ok());
    assert_eq!(
        ledger.assert_open(END + 1),
        Err(LiveAssetError::WindowClosed.into())
    );
}

#[test]
fn test_finalized_ledger_rejects_tips() {
    let mut ledger = ledger(0);
    ledger.finalized = true;
    assert_eq!(
        ledger.assert_open(START + 10),
        Err(LiveAssetError::AlreadyFinalized.into())
    );
}

#[test]
fn test_outcome_reserve_not_met() {
    let mut ledger = ledger(100);
    let mut a = position(Pubkey::new_unique());
    tip(&mut ledger, &mut a, 80);

    assert_eq!(
        ledger.outcome(),
        Err(LiveAssetError::ReserveNotMet.into())
    );
    // Retryable: nothing changed.
    assert!(!ledger.finalized);
    assert_eq!(ledger.total_tipped, 80);
}

#[test]
fn test_outcome_no_contributors() {
    let ledger = ledger(0);
    assert_eq!(
        ledger.outcome(),
        Err(LiveAssetError::NoContributors.into())
    );
}

#[test]
fn test_event_finalize_is_one_shot() {
    let creator = Pubkey::new_unique();
    let winner = Pubkey::new_unique();
    let mut event = event(creator);

    event.finalize(winner).unwrap();
    assert!(event.finalized);
    assert_eq!(event.owner, winner);
    assert_eq!(event.creator, creator);

    assert_eq!(
        event.finalize(Pubkey::new_unique()),
        Err(LiveAssetError::AlreadyFinalized.into())
    );
    assert_eq!(event.owner, winner);
}

#[test]
fn test_event_mutation_gates() {
    let creator = Pubkey::new_unique();
    let mut event = event(creator);

    assert!(event.assert_mutable(START - 1).is_ok());
    assert_eq!(
        event.assert_mutable(START),
        Err(LiveAssetError::EventStarted.into())
    );

    event.finalized = true;
    assert_eq!(
        event.assert_mutable(START - 1),
        Err(LiveAssetError::AlreadyFinalized.into())
    );
}

#[test]
fn test_event_end_gate() {
    let event = event(Pubkey::new_unique());
    assert_eq!(
        event.assert_ended(END),
        Err(LiveAssetError::WindowNotClosed.into())
    );
    assert!(event.assert_ended(END + 1).is_ok());
}

#[test]
fn test_authorization_owner_and_delegate() {
    let owner = Pubkey::new_unique();
    let delegatee = Pubkey::new_unique();
    let stranger = Pubkey::new_unique();
    let event = event(owner);
    let delegation = Delegation {
        event_id: 0,
        delegatee,
        created_by: owner,
        via_composer: false,
        created_at: START,
        bump: 255,
    };

    assert!(event.is_authorized(&owner, None));
    assert!(event.is_authorized(&delegatee, Some(&delegation)));
    assert!(!event.is_authorized(&stranger, Some(&delegation)));
    assert!(!event.is_authorized(&delegatee, None));

    // A delegation for another event grants nothing here.
    let foreign = Delegation {
        event_id: 7,
        ..delegation
    };
    assert!(!event.is_authorized(&delegatee, Some(&foreign)));
}

#[test]
fn test_default_split_no_curation() {
    let config = default_config();
    let split = config.split(1_000).unwrap();
    assert_eq!(split.creator_amount, 800);
    assert_eq!(split.treasury_amount, 200);
    assert_eq!(split.curation_amount, 0);
    assert_eq!(split.leg_count(), 2);
}

#[test]
fn test_split_with_curation_carved_from_treasury() {
    let mut config = default_config();
    config
        .enable_curation(Pubkey::new_unique(), 500, CurationScope::Scope2)
        .unwrap();

    let split = config.split(1_000).unwrap();
    assert_eq!(split.creator_amount, 800);
    assert_eq!(split.curation_amount, 50);
    assert_eq!(split.treasury_amount, 150);
    assert_eq!(split.leg_count(), 3);

    // Legs always reconstruct the input exactly.
    assert_eq!(
        split.creator_amount + split.treasury_amount + split.curation_amount,
        1_000
    );
}

#[test]
fn test_split_rejects_zero() {
    let config = default_config();
    assert_eq!(config.split(0), Err(LiveAssetError::ZeroAmount.into()));
}

#[test]
fn test_split_rounding_remainder_goes_to_treasury() {
    let config = default_config();
    let split = config.split(999).unwrap();
    assert_eq!(split.creator_amount, 799);
    assert_eq!(split.treasury_amount, 200);
}

#[test]
fn test_enable_curation_scope_bands() {
    let curator = Pubkey::new_unique();

    // Scope 2 band is 301-600: 250 is out of band, 500 is in.
    let mut config = default_config();
    assert_eq!(
        config.enable_curation(curator, 250, CurationScope::Scope2),
        Err(LiveAssetError::InvalidCurationFee.into())
    );
    assert!(!config.curation_enabled);

    config
        .enable_curation(curator, 500, CurationScope::Scope2)
        .unwrap();
    assert!(config.curation_enabled);
    assert_eq!(config.curation_fee_bps, 500);
    assert_eq!(config.curator, curator);
}

#[test]
fn test_enable_curation_rejects_scope_none() {
    let mut config = default_config();
    assert_eq!(
        config.enable_curation(Pubkey::new_unique(), 100, CurationScope::None),
        Err(LiveAssetError::InvalidCurationScope.into())
    );
}

#[test]
fn test_share_sum_invariant_across_enable_disable() {
    let mut config = default_config();
    assert_eq!(config.share_sum_bps(), 10_000);

    config
        .enable_curation(Pubkey::new_unique(), 300, CurationScope::Scope1)
        .unwrap();
    assert_eq!(config.share_sum_bps(), 10_000);
    assert_eq!(config.treasury_share_bps, 1_700);

    // Re-enabling with a different fee returns the old carve first.
    config
        .enable_curation(Pubkey::new_unique(), 1_000, CurationScope::Scope3)
        .unwrap();
    assert_eq!(config.share_sum_bps(), 10_000);
    assert_eq!(config.treasury_share_bps, 1_000);

    config.disable_curation();
    assert_eq!(config.share_sum_bps(), 10_000);
    assert_eq!(config.treasury_share_bps, 2_000);
    assert_eq!(config.curation_fee_bps, 0);
    assert_eq!(config.curator, Pubkey::default());
    assert!(!config.curation_enabled);
}

#[test]
fn test_enable_curation_fee_exceeding_treasury_pool() {
    // A 95/5 policy leaves only 500 bps of treasury to carve from.
    let mut config = DistributionConfig {
        creator_share_bps: 9_500,
        treasury_share_bps: 500,
        ..Default::default()
    };
    assert_eq!(
        config.enable_curation(Pubkey::new_unique(), 1_000, CurationScope::Scope3),
        Err(LiveAssetError::ShareOverflow.into())
    );
    assert_eq!(config.treasury_share_bps, 500);
}

#[test]
fn test_canonical_fees_sit_inside_their_bands() {
    for scope in [
        CurationScope::Scope1,
        CurationScope::Scope2,
        CurationScope::Scope3,
    ] {
        let fee = scope.canonical_fee();
        assert!(scope.validate_fee(fee).is_ok());
    }
    assert_eq!(CurationScope::Scope1.canonical_fee(), 300);
    assert_eq!(CurationScope::Scope2.canonical_fee(), 500);
    assert_eq!(CurationScope::Scope3.canonical_fee(), 1_000);
    assert_eq!(CurationScope::None.canonical_fee(), 0);
}

#[test]
fn test_scope_ranks() {
    assert!(CurationScope::Scope3.rank() > CurationScope::Scope2.rank());
    assert!(CurationScope::Scope2.rank() > CurationScope::Scope1.rank());
    assert!(CurationScope::Scope1.rank() > CurationScope::None.rank());
}

#[test]
fn test_curator_profile_scope_ceiling() {
    let profile = CuratorProfile {
        curator: Pubkey::new_unique(),
        max_scope: CurationScope::Scope2,
        vetted_by: Pubkey::new_unique(),
        listed_at: 0,
        bump: 255,
    };
    assert!(profile.assert_scope(CurationScope::Scope1).is_ok());
    assert!(profile.assert_scope(CurationScope::Scope2).is_ok());
    assert_eq!(
        profile.assert_scope(CurationScope::Scope3),
        Err(LiveAssetError::CuratorNotAllowed.into())
    );
}

#[test]
fn test_curation_record_update_only_before_window() {
    let record = CurationRecord {
        valid_from: START,
        valid_until: END,
        active: true,
        ..Default::default()
    };
    assert!(record.assert_updatable(START - 1).is_ok());
    assert_eq!(
        record.assert_updatable(START),
        Err(LiveAssetError::CurationWindowStarted.into())
    );
}

#[test]
fn test_curation_record_receivable_window() {
    let mut record = CurationRecord {
        valid_from: START,
        valid_until: END,
        active: true,
        ..Default::default()
    };
    assert_eq!(
        record.assert_receivable(START - 1),
        Err(LiveAssetError::WindowNotOpen.into())
    );
    assert!(record.assert_receivable(START).is_ok());
    assert_eq!(
        record.assert_receivable(END + 1),
        Err(LiveAssetError::CurationExpired.into())
    );

    record.active = false;
    assert_eq!(
        record.assert_receivable(START),
        Err(LiveAssetError::CurationInactive.into())
    );
}

#[test]
fn test_curation_credit_and_withdraw_accounting() {
    let mut record = CurationRecord {
        active: true,
        ..Default::default()
    };

    record.credit(300).unwrap();
    record.credit(200).unwrap();
    assert_eq!(record.pending_balance, 500);
    assert_eq!(record.lifetime_earned, 500);

    let amount = record.take_pending().unwrap();
    assert_eq!(amount, 500);
    assert_eq!(record.pending_balance, 0);
    assert_eq!(record.withdrawn_total, 500);
    assert_eq!(record.lifetime_earned, 500);

    assert_eq!(
        record.take_pending(),
        Err(LiveAssetError::NothingToWithdraw.into())
    );
}

#[test]
fn test_platform_split_validation() {
    assert!(Platform::validate_split(8_000, 2_000).is_ok());
    assert!(Platform::validate_split(8_500, 1_500).is_ok());
    assert_eq!(
        Platform::validate_split(8_000, 1_500),
        Err(LiveAssetError::InvalidShareSplit.into())
    );
    assert_eq!(
        Platform::validate_split(9_000, 2_000),
        Err(LiveAssetError::InvalidShareSplit.into())
    );
}

#[test]
fn test_platform_pause_gate() {
    let mut platform = Platform::default();
    assert!(platform.assert_not_paused().is_ok());
    platform.paused = true;
    assert_eq!(
        platform.assert_not_paused(),
        Err(LiveAssetError::PlatformPaused.into())
    );
}

#[test]
fn test_ticket_sale_info_snapshot() {
    let event = event(Pubkey::new_unique());
    assert_eq!(event.ticket_sale_info(), (0, 100, 1_000_000));
}
