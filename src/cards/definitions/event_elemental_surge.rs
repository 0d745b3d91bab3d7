//! An event card version of an elemental resonance: buffs the caster's
//! side's next Hydro hits (exercises `CombatStatus::ElementalResonanceBoost`
//! from a card rather than a character skill).

use crate::card::{CardDescriptor, CardKind, CardPlayArgs, CardTargetRequirement};
use crate::dice::DiceCost;
use crate::element::Element;
use crate::effect::Effect;
use crate::game_state::GameState;
use crate::ids::CardKindId;
use crate::statuses::CombatStatus;
use crate::statuses::mixins::UsageState;

pub fn descriptor() -> CardDescriptor {
    CardDescriptor {
        kind_id: CardKindId(16),
        name: "Elemental Surge",
        kind: CardKind::Event,
        dice_cost: DiceCost::new().any(2),
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
        status: CombatStatus::ElementalResonanceBoost {
            element: Element::Hydro,
            bonus: 1,
            usage: UsageState::new(2, 2),
        },
    }]
}
