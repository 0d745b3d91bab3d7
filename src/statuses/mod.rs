//! The status catalogue. Each family is its own closed enum implementing
//! `StatusBehavior`; see `spec.md` §4.5 for the family list and `status.rs`
//! for the shared contract and container.

pub mod character_status;
pub mod combat_status;
pub mod equipment;
pub mod hidden;
pub mod mixins;
pub mod summon;
pub mod support;

pub use character_status::CharacterStatus;
pub use combat_status::CombatStatus;
pub use equipment::EquipmentStatus;
pub use hidden::{CharacterHiddenStatus, PlayerHiddenStatus};
pub use summon::SummonStatus;
pub use support::SupportStatus;
