//! A location-style support that heals the owner's active character
//! each round (exercises `SupportStatus::HealingCompanion`,
//! representative of cards like Liben).

use crate::card::{CardDescriptor, CardKind, CardPlayArgs, CardTargetRequirement};
use crate::dice::DiceCost;
use crate::effect::Effect;
use crate::game_state::GameState;
use crate::ids::CardKindId;
use crate::statuses::SupportStatus;
use crate::statuses::mixins::UsageState;

pub fn descriptor() -> CardDescriptor {
    CardDescriptor {
        kind_id: CardKindId(21),
        name: "Alchemist's Bench",
        kind: CardKind::Support,
        dice_cost: DiceCost::new().any(2),
        target_requirement: CardTargetRequirement::None,
        talent_for_character: None,
        is_arcane_legend: false,
        resonance_element_chars_required: None,
        play_effects,
    }
}

fn play_effects(_state: &GameState, args: CardPlayArgs) -> Vec<Effect> {
    vec![Effect::AddSupportStatus {
        pid: args.pid,
        status: SupportStatus::HealingCompanion(UsageState::new(3, 3)),
    }]
}
