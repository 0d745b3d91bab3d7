//! A location-style event that heals the caster's active character every
//! round for the rest of the match (exercises `CombatStatus::RoundStartHeal`
//! granted from a card, representative of cards like Vanarana).

use crate::card::{CardDescriptor, CardKind, CardPlayArgs, CardTargetRequirement};
use crate::dice::DiceCost;
use crate::effect::Effect;
use crate::game_state::GameState;
use crate::ids::CardKindId;
use crate::statuses::CombatStatus;
use crate::statuses::mixins::UsageState;

pub fn descriptor() -> CardDescriptor {
    CardDescriptor {
        kind_id: CardKindId(23),
        name: "Tides of Renewal",
        kind: CardKind::Event,
        dice_cost: DiceCost::new().any(3),
        target_requirement: CardTargetRequirement::None,
        talent_for_character: None,
        is_arcane_legend: false,
        resonance_element_chars_required: None,
        play_effects,
    }
}

fn play_effects(_state: &GameState, args: CardPlayArgs) -> Vec<Effect> {
    vec![Effect::AddCombatStatus {
        pid: args.pid,
        status: CombatStatus::RoundStartHeal(UsageState::new(4, 4)),
    }]
}
