use anchor_lang::prelude::*;

use crate::constants::*;
use crate::errors::LiveAssetError;

/// Window checks shared by event creation: start in the future, positive
/// bounded duration. Returns the computed end time.
pub fn validate_event_window(
    start_time: i64,
    duration_minutes: u64,
    current_time: i64,
) -> Result<i64> {
    require!(start_time > current_time, LiveAssetError::InvalidWindow);
    require!(duration_minutes > 0, LiveAssetError::InvalidWindow);
    require!(
        duration_minutes <= MAX_EVENT_DURATION_MINUTES,
        LiveAssetError::DurationTooLong
    );

    let duration_seconds = (duration_minutes as i64)
        .checked_mul(60)
        .ok_or(LiveAssetError::MathOverflow)?;
    start_time
        .checked_add(duration_seconds)
        .ok_or(LiveAssetError::MathOverflow.into())
}

pub fn validate_reserve_price(reserve_price: u64) -> Result<()> {
    require!(
        reserve_price <= MAX_RESERVE_PRICE,
        LiveAssetError::ReservePriceTooHigh
    );
    Ok(())
}

pub fn validate_metadata_uri(uri: &str) -> Result<()> {
    require!(uri.len() <= MAX_METADATA_URI_LEN, LiveAssetError::UriTooLong);
    crate::utils::validate_string(uri)
}

pub fn validate_tip_message(message: &str) -> Result<()> {
    require!(
        message.len() <= MAX_TIP_MESSAGE_LEN,
        LiveAssetError::MessageTooLong
    );
    Ok(())
}

pub fn validate_curation_window(valid_from: i64, valid_until: i64) -> Result<()> {
    require!(valid_until > valid_from, LiveAssetError::InvalidWindow);
    Ok(())
}

pub fn validate_curation_description(description: &str) -> Result<()> {
    require!(
        description.len() <= MAX_CURATION_DESCRIPTION_LEN,
        LiveAssetError::DescriptionTooLong
    );
    crate::utils::validate_string(description)
}
