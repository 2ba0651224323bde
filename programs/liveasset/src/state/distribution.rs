use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::LiveAssetError;
use crate::utils::{calculate_fee, safe_add};

#[derive(
    AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, PartialEq, Eq, Debug, Default,
)]
pub enum CurationScope {
    #[default]
    None,
    Scope1,
    Scope2,
    Scope3,
}

impl CurationScope {
    /// Inclusive fee band for the scope, in bps.
    pub fn fee_band(&self) -> Option<(u16, u16)> {
        match self {
            CurationScope::None => None,
            CurationScope::Scope1 => Some((SCOPE1_FEE_MIN_BPS, SCOPE1_FEE_MAX_BPS)),
            CurationScope::Scope2 => Some((SCOPE2_FEE_MIN_BPS, SCOPE2_FEE_MAX_BPS)),
            CurationScope::Scope3 => Some((SCOPE3_FEE_MIN_BPS, SCOPE3_FEE_MAX_BPS)),
        }
    }

    /// Fee enforced when enablement is driven by the event's own curation
    /// record. Derived purely from the scope, never from caller input.
    pub fn canonical_fee(&self) -> u16 {
        match self {
            CurationScope::None => 0,
            CurationScope::Scope1 => SCOPE1_CANONICAL_FEE_BPS,
            CurationScope::Scope2 => SCOPE2_CANONICAL_FEE_BPS,
            CurationScope::Scope3 => SCOPE3_CANONICAL_FEE_BPS,
        }
    }

    pub fn rank(&self) -> u8 {
        match self {
            CurationScope::None => 0,
            CurationScope::Scope1 => 1,
            CurationScope::Scope2 => 2,
            CurationScope::Scope3 => 3,
        }
    }

    pub fn validate_fee(&self, fee_bps: u16) -> Result<()> {
        let (min, max) = self
            .fee_band()
            .ok_or_else(|| error!(LiveAssetError::InvalidCurationScope))?;
        require!(
            fee_bps >= min && fee_bps <= max,
            LiveAssetError::InvalidCurationFee
        );
        Ok(())
    }
}

/// Per-event split policy. Invariant: creator + treasury + curation fee
/// always sums to exactly 10000 bps; enabling curation carves the fee out of
/// the treasury share, disabling returns it.
#[account]
#[derive(InitSpace, Default)]
pub struct DistributionConfig {
    pub event_id: u64,
    pub creator: Pubkey,
    pub creator_share_bps: u16,
    pub treasury_share_bps: u16,
    pub curation_fee_bps: u16,
    pub curation_scope: CurationScope,
    pub curator: Pubkey,
    pub curation_enabled: bool,
    /// Sequence source for DistributionReceipt PDAs.
    pub payout_count: u64,
    pub total_distributed: u64,
    pub bump: u8,
}

/// Amounts for one distribution call. Treasury takes the remainder so the
/// three legs always reconstruct the input exactly.
#[derive(Debug, PartialEq, Eq)]
pub struct PayoutSplit {
    pub creator_amount: u64,
    pub treasury_amount: u64,
    pub curation_amount: u64,
}

impl PayoutSplit {
    pub fn leg_count(&self) -> u8 {
        [self.creator_amount, self.treasury_amount, self.curation_amount]
            .iter()
            .filter(|a| **a > 0)
            .count() as u8
    }
}

impl DistributionConfig {
    pub fn share_sum_bps(&self) -> u64 {
        self.creator_share_bps as u64
            + self.treasury_share_bps as u64
            + self.curation_fee_bps as u64
    }

    pub fn enable_curation(
        &mut self,
        curator: Pubkey,
        fee_bps: u16,
        scope: CurationScope,
    ) -> Result<()> {
        scope.validate_fee(fee_bps)?;

        // Return any previously carved fee before carving the new one.
        let treasury_pool = self.treasury_share_bps as u64 + self.curation_fee_bps as u64;
        require!(fee_bps as u64 <= treasury_pool, LiveAssetError::ShareOverflow);

        self.treasury_share_bps = (treasury_pool - fee_bps as u64) as u16;
        self.curation_fee_bps = fee_bps;
        self.curation_scope = scope;
        self.curator = curator;
        self.curation_enabled = true;

        debug_assert_eq!(self.share_sum_bps(), BPS_DENOMINATOR);
        Ok(())
    }

    pub fn disable_curation(&mut self) {
        self.treasury_share_bps += self.curation_fee_bps;
        self.curation_fee_bps = 0;
        self.curation_scope = CurationScope::None;
        self.curator = Pubkey::default();
        self.curation_enabled = false;
    }

    /// Splits `amount` into the three legs. Curation first (carved from the
    /// treasury side), creator by share, treasury takes the remainder.
    pub fn split(&self, amount: u64) -> Result<PayoutSplit> {
        require!(amount > 0, LiveAssetError::ZeroAmount);

        let creator_amount = calculate_fee(amount, self.creator_share_bps)?;
        let curation_amount = if self.curation_enabled && self.curation_fee_bps > 0 {
            calculate_fee(amount, self.curation_fee_bps)?
        } else {
            0
        };
        let treasury_amount = amount
            .checked_sub(creator_amount)
            .and_then(|v| v.checked_sub(curation_amount))
            .ok_or(LiveAssetError::MathOverflow)?;

        Ok(PayoutSplit {
            creator_amount,
            treasury_amount,
            curation_amount,
        })
    }

    pub fn record_payout(&mut self, amount: u64) -> Result<u64> {
        let seq = self.payout_count;
        self.payout_count = safe_add(self.payout_count, 1)?;
        self.total_distributed = safe_add(self.total_distributed, amount)?;
        Ok(seq)
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, PartialEq, Eq, Debug)]
pub enum PayoutCategory {
    Creator,
    Treasury,
    Curation,
}

/// Append-only audit entry for one distribution call: one leg per recipient
/// that received a non-zero amount.
#[account]
#[derive(InitSpace)]
pub struct DistributionReceipt {
    pub event_id: u64,
    pub seq: u64,
    pub amount: u64,
    pub creator: Pubkey,
    pub creator_amount: u64,
    pub treasury: Pubkey,
    pub treasury_amount: u64,
    pub curator: Pubkey,
    pub curation_amount: u64,
    pub leg_count: u8,
    pub paid_by: Pubkey,
    pub paid_at: i64,
    pub bump: u8,
}
