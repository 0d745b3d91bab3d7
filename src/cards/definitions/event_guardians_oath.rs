use crate::card::{CardDescriptor, CardKind, CardPlayArgs, CardTargetRequirement};
use crate::dice::DiceCost;
use crate::effect::Effect;
use crate::game_state::GameState;
use crate::ids::{CardKindId, StaticTarget};

pub fn descriptor() -> CardDescriptor {
    CardDescriptor {
        kind_id: CardKindId(4),
        name: "Guardian's Oath",
        kind: CardKind::Event,
        dice_cost: DiceCost::new().any(2),
        target_requirement: CardTargetRequirement::OwnCharacter,
        talent_for_character: None,
        is_arcane_legend: false,
        resonance_element_chars_required: None,
        play_effects,
    }
}

fn play_effects(_state: &GameState, args: CardPlayArgs) -> Vec<Effect> {
    let Some(target) = args.target else {
        return Vec::new();
    };
    vec![Effect::RecoverHp {
        target: StaticTarget::character(args.pid, target),
        amount: 2,
    }]
}
