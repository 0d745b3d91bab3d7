//! A totem-style Hydro summon: deals damage and shields the team in the
//! same breath (exercises `SummonStatus::GenericWithShield`).

use crate::card::{CardDescriptor, CardKind, CardPlayArgs, CardTargetRequirement};
use crate::dice::DiceCost;
use crate::element::Element;
use crate::effect::Effect;
use crate::game_state::GameState;
use crate::ids::CardKindId;
use crate::statuses::SummonStatus;
use crate::statuses::mixins::UsageState;

pub fn descriptor() -> CardDescriptor {
    CardDescriptor {
        kind_id: CardKindId(20),
        name: "Tidal Guardian",
        kind: CardKind::Event,
        dice_cost: DiceCost::new().elem(Element::Hydro, 3),
        target_requirement: CardTargetRequirement::None,
        talent_for_character: None,
        is_arcane_legend: false,
        resonance_element_chars_required: None,
        play_effects,
    }
}

fn play_effects(_state: &GameState, args: CardPlayArgs) -> Vec<Effect> {
    vec![Effect::AddSummonStatus {
        pid: args.pid,
        status: SummonStatus::GenericWithShield {
            element: Element::Hydro,
            damage: 1,
            usage: UsageState::new(2, 2),
        },
    }]
}
