// PDA seeds
pub const PLATFORM_SEED: &[u8] = b"platform";
pub const EVENT_SEED: &[u8] = b"event";
pub const DELEGATION_SEED: &[u8] = b"delegation";
pub const TIP_LEDGER_SEED: &[u8] = b"tips";
pub const TIP_RECORD_SEED: &[u8] = b"tip";
pub const POSITION_SEED: &[u8] = b"position";
pub const DISTRIBUTION_SEED: &[u8] = b"distribution";
pub const RECEIPT_SEED: &[u8] = b"receipt";
pub const CURATION_SEED: &[u8] = b"curation";
pub const CURATOR_SEED: &[u8] = b"curator";
pub const CREATOR_SEED: &[u8] = b"creator";
pub const REENTRANCY_SEED: &[u8] = b"reentrancy";

// Basis points
pub const BPS_DENOMINATOR: u64 = 10_000;

// v1 split policy. Deployments pick the concrete default at
// initialize_platform; these are the values wiring scripts pass today.
pub const DEFAULT_CREATOR_SHARE_BPS: u16 = 8_000;
pub const DEFAULT_TREASURY_SHARE_BPS: u16 = 2_000;

// Curation fee bounds (1% - 10%)
pub const MIN_CURATION_FEE_BPS: u16 = 100;
pub const MAX_CURATION_FEE_BPS: u16 = 1_000;

// Per-scope fee bands in bps, inclusive
pub const SCOPE1_FEE_MIN_BPS: u16 = 100;
pub const SCOPE1_FEE_MAX_BPS: u16 = 300;
pub const SCOPE2_FEE_MIN_BPS: u16 = 301;
pub const SCOPE2_FEE_MAX_BPS: u16 = 600;
pub const SCOPE3_FEE_MIN_BPS: u16 = 601;
pub const SCOPE3_FEE_MAX_BPS: u16 = 1_000;

// Fee enforced when enablement is driven by the curation record itself
pub const SCOPE1_CANONICAL_FEE_BPS: u16 = 300;
pub const SCOPE2_CANONICAL_FEE_BPS: u16 = 500;
pub const SCOPE3_CANONICAL_FEE_BPS: u16 = 1_000;

// Time limits
pub const MAX_EVENT_DURATION_MINUTES: u64 = 365 * 24 * 60;
pub const DEFAULT_CURATION_VALIDITY_SECONDS: i64 = 365 * 24 * 3600;

// String limits
pub const MAX_METADATA_URI_LEN: usize = 200;
pub const MAX_TIP_MESSAGE_LEN: usize = 256;
pub const MAX_CURATION_DESCRIPTION_LEN: usize = 200;

// Financial limits
pub const MAX_RESERVE_PRICE: u64 = 1_000_000_000_000; // 1000 SOL
pub const MAX_TICKET_PRICE: u64 = 1_000_000_000_000;
