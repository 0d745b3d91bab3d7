//! An emergency event card that wards a character against all damage
//! for a short duration (exercises `CharacterStatus::Immune` placed by a
//! card rather than a character burst).

use crate::card::{CardDescriptor, CardKind, CardPlayArgs, CardTargetRequirement};
use crate::dice::DiceCost;
use crate::effect::Effect;
use crate::game_state::GameState;
use crate::ids::{CardKindId, StaticTarget};
use crate::statuses::CharacterStatus;
use crate::statuses::mixins::DurationState;

pub fn descriptor() -> CardDescriptor {
    CardDescriptor {
        kind_id: CardKindId(19),
        name: "Aegis Ward",
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
        status: CharacterStatus::Immune(DurationState::new(1)),
    }]
}
