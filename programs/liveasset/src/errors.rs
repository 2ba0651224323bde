use anchor_lang::prelude::*;

#[error_code]
pub enum LiveAssetError {
    // Authorization
    #[msg("Caller is not the event owner")]
    NotOwner,

    #[msg("Caller is neither the event owner nor its delegate")]
    NotAuthorized,

    #[msg("Caller is not the platform authority")]
    NotPlatformAuthority,

    #[msg("Caller is not the trusted composer")]
    NotComposer,

    #[msg("Caller is not the curator of this record")]
    NotCurator,

    #[msg("A delegation already exists for this event")]
    AlreadyDelegated,

    #[msg("Owner cannot delegate to itself or the default address")]
    InvalidDelegatee,

    // Lifecycle state
    #[msg("Platform is paused")]
    PlatformPaused,

    #[msg("Tipping window has not opened yet")]
    WindowNotOpen,

    #[msg("Tipping window has already closed")]
    WindowClosed,

    #[msg("Tipping window has not closed yet")]
    WindowNotClosed,

    #[msg("Event is already finalized")]
    AlreadyFinalized,

    #[msg("Total tips did not reach the reserve price")]
    ReserveNotMet,

    #[msg("No contributors recorded for this event")]
    NoContributors,

    #[msg("Event has already started")]
    EventStarted,

    #[msg("Curation is not enabled for this event")]
    CurationNotEnabled,

    #[msg("Curation record is not active")]
    CurationInactive,

    #[msg("Curation validity window has already started")]
    CurationWindowStarted,

    #[msg("Curation validity window has expired")]
    CurationExpired,

    // Validation
    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Invalid time window")]
    InvalidWindow,

    #[msg("Event duration exceeds maximum allowed")]
    DurationTooLong,

    #[msg("Creator and treasury shares must sum to 10000 basis points")]
    InvalidShareSplit,

    #[msg("Curation fee does not fit within the remaining treasury share")]
    ShareOverflow,

    #[msg("Curation fee is outside the band for the requested scope")]
    InvalidCurationFee,

    #[msg("Invalid curation scope")]
    InvalidCurationScope,

    #[msg("Curator is not allow-listed for the requested scope")]
    CuratorNotAllowed,

    #[msg("Metadata URI exceeds maximum length")]
    UriTooLong,

    #[msg("Tip message exceeds maximum length")]
    MessageTooLong,

    #[msg("Description exceeds maximum length")]
    DescriptionTooLong,

    #[msg("Invalid treasury address")]
    InvalidTreasury,

    #[msg("Event id must match the platform counter")]
    InvalidEventId,

    #[msg("Reserve price exceeds maximum allowed")]
    ReservePriceTooHigh,

    #[msg("Ticket price exceeds maximum allowed")]
    TicketPriceTooHigh,

    #[msg("String contains invalid characters")]
    InvalidCharacters,

    // Transfers / engine
    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Operation locked due to reentrancy")]
    ReentrancyLocked,

    #[msg("No pending balance to withdraw")]
    NothingToWithdraw,
}
