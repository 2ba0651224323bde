pub mod reentrancy;
pub mod validation;

use anchor_lang::prelude::*;

use crate::errors::LiveAssetError;

pub use reentrancy::ReentrancyGuard;

pub fn safe_add(a: u64, b: u64) -> Result<u64> {
    a.checked_add(b).ok_or(LiveAssetError::MathOverflow.into())
}

pub fn safe_sub(a: u64, b: u64) -> Result<u64> {
    a.checked_sub(b).ok_or(LiveAssetError::MathOverflow.into())
}

pub fn safe_mul(a: u64, b: u64) -> Result<u64> {
    a.checked_mul(b).ok_or(LiveAssetError::MathOverflow.into())
}

pub fn safe_div(a: u64, b: u64) -> Result<u64> {
    if b == 0 {
        return Err(LiveAssetError::MathOverflow.into());
    }
    a.checked_div(b).ok_or(LiveAssetError::MathOverflow.into())
}

/// bps share of an amount, rounded down.
pub fn calculate_fee(amount: u64, fee_bps: u16) -> Result<u64> {
    let fee = safe_mul(amount, fee_bps as u64)?;
    safe_div(fee, crate::constants::BPS_DENOMINATOR)
}

pub fn validate_string(input: &str) -> Result<()> {
    require!(
        input.chars().all(|c| c.is_ascii_graphic() || c == ' '),
        LiveAssetError::InvalidCharacters
    );
    Ok(())
}
