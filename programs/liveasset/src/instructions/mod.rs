pub mod allow_curator;
pub mod create_curation;
pub mod create_delegation;
pub mod create_delegation_via_composer;
pub mod create_event;
pub mod deactivate_curation;
pub mod disable_curation;
pub mod distribute;
pub mod enable_curation;
pub mod finalize_event;
pub mod initialize_platform;
pub mod record_contribution;
pub mod revoke_curator;
pub mod set_paused;
pub mod sync_curation_from_record;
pub mod update_curation;
pub mod update_delegate;
pub mod update_metadata;
pub mod update_reserve_price;
pub mod withdraw_curation;

pub use allow_curator::*;
pub use create_curation::*;
pub use create_delegation::*;
pub use create_delegation_via_composer::*;
pub use create_event::*;
pub use deactivate_curation::*;
pub use disable_curation::*;
pub use distribute::*;
pub use enable_curation::*;
pub use finalize_event::*;
pub use initialize_platform::*;
pub use record_contribution::*;
pub use revoke_curator::*;
pub use set_paused::*;
pub use sync_curation_from_record::*;
pub use update_curation::*;
pub use update_delegate::*;
pub use update_metadata::*;
pub use update_reserve_price::*;
pub use withdraw_curation::*;
