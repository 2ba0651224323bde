use anchor_lang::prelude::*;

use crate::errors::LiveAssetError;
use crate::state::{ContributorPosition, CurationRecord, CurationScope, DistributionConfig, TipLedger};
use crate::utils::reentrancy::ReentrancyGuard;
use crate::utils::validation::*;
use crate::utils::{calculate_fee, safe_add, safe_div, safe_mul, safe_sub};

#[test]
fn test_reentrancy_lock_unlock() {
    let mut guard = ReentrancyGuard {
        is_locked: false,
        bump: 255,
    };

    assert!(guard.lock().is_ok());
    assert!(guard.is_locked);

    // Re-entry while locked must fail.
    assert_eq!(guard.lock(), Err(LiveAssetError::ReentrancyLocked.into()));

    assert!(guard.unlock().is_ok());
    assert!(!guard.is_locked);
    assert!(guard.lock().is_ok());
}

#[test]
fn test_overflow_protection() {
    assert!(safe_add(u64::MAX, 1).is_err());
    assert_eq!(safe_add(100, 200).unwrap(), 300);

    assert!(safe_sub(1, 2).is_err());
    assert_eq!(safe_sub(200, 100).unwrap(), 100);

    assert!(safe_mul(u64::MAX, 2).is_err());
    assert_eq!(safe_mul(100, 200).unwrap(), 20_000);

    assert!(safe_div(100, 0).is_err());
    assert_eq!(safe_div(100, 5).unwrap(), 20);
}

#[test]
fn test_fee_calculation() {
    assert_eq!(calculate_fee(10_000, 250).unwrap(), 250);
    assert_eq!(calculate_fee(1_000_000, 1_000).unwrap(), 100_000);
    assert_eq!(calculate_fee(1_000, 8_000).unwrap(), 800);

    // Large-but-valid amounts survive, true overflow does not.
    assert!(calculate_fee(u64::MAX / 10_000 - 1, 250).is_ok());
    assert!(calculate_fee(u64::MAX / 100, 250).is_err());
}

#[test]
fn test_withdrawal_zeroes_balance_before_transfer() {
    // The withdrawal handler moves lamports only after take_pending() has
    // already zeroed the claim, so a re-entrant call has nothing to take.
    let mut record = CurationRecord {
        active: true,
        ..Default::default()
    };
    record.credit(1_000).unwrap();

    let amount = record.take_pending().unwrap();
    assert_eq!(amount, 1_000);
    assert_eq!(record.pending_balance, 0);

    // Simulated re-entry: the second take fails, balance still zero.
    assert_eq!(
        record.take_pending(),
        Err(LiveAssetError::NothingToWithdraw.into())
    );
    assert_eq!(record.pending_balance, 0);
    assert_eq!(record.withdrawn_total, 1_000);
}

#[test]
fn test_equal_totals_never_displace_leader() {
    let mut ledger = TipLedger::default();
    ledger.end_time = i64::MAX;
    let a = Pubkey::new_unique();
    let b = Pubkey::new_unique();
    let c = Pubkey::new_unique();

    ledger.record(a, 500, 500).unwrap();
    ledger.record(b, 500, 500).unwrap();
    ledger.record(c, 250, 250).unwrap();
    ledger.record(c, 250, 500).unwrap();

    assert_eq!(ledger.top_contributor, Some(a));
    assert_eq!(ledger.top_cumulative, 500);
    assert_eq!(ledger.total_tipped, 1_500);
}

#[test]
fn test_cumulative_position_overflow_guard() {
    let mut position = ContributorPosition {
        cumulative: u64::MAX - 1,
        ..Default::default()
    };
    assert!(position.apply(2).is_err());
}

#[test]
fn test_share_sum_bounded_across_policy_churn() {
    let mut config = DistributionConfig {
        creator_share_bps: 8_000,
        treasury_share_bps: 2_000,
        ..Default::default()
    };
    let curator = Pubkey::new_unique();

    for (fee, scope) in [
        (100, CurationScope::Scope1),
        (600, CurationScope::Scope2),
        (1_000, CurationScope::Scope3),
        (301, CurationScope::Scope2),
    ] {
        config.enable_curation(curator, fee, scope).unwrap();
        assert!(config.share_sum_bps() <= 10_000);
        assert_eq!(config.share_sum_bps(), 10_000);
        config.disable_curation();
        assert_eq!(config.share_sum_bps(), 10_000);
    }
}

#[test]
fn test_distribution_legs_are_exhaustive() {
    // Whatever the policy, the three legs must account for every unit of the
    // amount being distributed.
    let mut config = DistributionConfig {
        creator_share_bps: 8_500,
        treasury_share_bps: 1_500,
        ..Default::default()
    };
    config
        .enable_curation(Pubkey::new_unique(), 333, CurationScope::Scope2)
        .unwrap();

    for amount in [1u64, 3, 999, 10_000, 123_456_789] {
        let split = config.split(amount).unwrap();
        assert_eq!(
            split.creator_amount + split.treasury_amount + split.curation_amount,
            amount
        );
    }
}

#[test]
fn test_event_window_validation() {
    let now = 1_000_000;

    let end = validate_event_window(now + 3_600, 60, now).unwrap();
    assert_eq!(end, now + 3_600 + 3_600);

    // Start in the past.
    assert!(validate_event_window(now - 1, 60, now).is_err());
    // Zero duration.
    assert!(validate_event_window(now + 3_600, 0, now).is_err());
    // Over a year.
    assert_eq!(
        validate_event_window(now + 3_600, 366 * 24 * 60, now),
        Err(LiveAssetError::DurationTooLong.into())
    );
}

#[test]
fn test_metadata_and_message_limits() {
    assert!(validate_metadata_uri("ipfs://QmEvent").is_ok());
    assert!(validate_metadata_uri(&"a".repeat(201)).is_err());
    assert!(validate_metadata_uri("bad\u{1F389}uri").is_err());

    assert!(validate_tip_message("great show!").is_ok());
    assert!(validate_tip_message(&"m".repeat(257)).is_err());
}

#[test]
fn test_curation_window_validation() {
    assert!(validate_curation_window(100, 200).is_ok());
    assert!(validate_curation_window(200, 200).is_err());
    assert!(validate_curation_window(200, 100).is_err());
}

#[test]
fn test_reserve_price_bounds() {
    assert!(validate_reserve_price(0).is_ok());
    assert!(validate_reserve_price(1_000_000_000_000).is_ok());
    assert_eq!(
        validate_reserve_price(1_000_000_000_001),
        Err(LiveAssetError::ReservePriceTooHigh.into())
    );
}
