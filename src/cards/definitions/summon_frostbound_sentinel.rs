use crate::card::{CardDescriptor, CardKind, CardPlayArgs, CardTargetRequirement};
use crate::dice::DiceCost;
use crate::effect::Effect;
use crate::element::Element;
use crate::game_state::GameState;
use crate::ids::CardKindId;
use crate::statuses::SummonStatus;
use crate::statuses::mixins::UsageState;

pub fn descriptor() -> CardDescriptor {
    CardDescriptor {
        kind_id: CardKindId(9),
        name: "Frostbound Sentinel",
        kind: CardKind::Event,
        dice_cost: DiceCost::new().elem(Element::Cryo, 3),
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
        status: SummonStatus::Generic {
            element: Element::Cryo,
            damage: 1,
            usage: UsageState::new(2, 2),
        },
    }]
}
