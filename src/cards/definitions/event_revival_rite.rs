use crate::card::{CardDescriptor, CardKind, CardPlayArgs, CardTargetRequirement};
use crate::dice::DiceCost;
use crate::effect::Effect;
use crate::game_state::GameState;
use crate::ids::{CardKindId, StaticTarget};
use crate::statuses::CharacterStatus;

pub fn descriptor() -> CardDescriptor {
    CardDescriptor {
        kind_id: CardKindId(7),
        name: "Rite of Return",
        kind: CardKind::Event,
        dice_cost: DiceCost::new().any(3),
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
    vec![Effect::AddCharacterStatus {
        target: StaticTarget::character(args.pid, target),
        status: CharacterStatus::Revival {
            heal_to: 6,
            uses_left: 1,
        },
    }]
}
