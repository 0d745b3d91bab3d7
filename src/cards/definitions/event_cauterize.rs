//! An event card that burns an opposing character directly, independent
//! of a Burning reaction byproduct (exercises `CharacterStatus::Burning`
//! placed by a card).

use crate::card::{CardDescriptor, CardKind, CardPlayArgs, CardTargetRequirement};
use crate::dice::DiceCost;
use crate::element::Element;
use crate::effect::Effect;
use crate::game_state::GameState;
use crate::ids::{CardKindId, StaticTarget};
use crate::statuses::CharacterStatus;
use crate::statuses::mixins::DurationState;

pub fn descriptor() -> CardDescriptor {
    CardDescriptor {
        kind_id: CardKindId(17),
        name: "Cauterize",
        kind: CardKind::Event,
        dice_cost: DiceCost::new().elem(Element::Pyro, 2),
        target_requirement: CardTargetRequirement::OwnCharacter,
        talent_for_character: None,
        is_arcane_legend: false,
        resonance_element_chars_required: None,
        play_effects,
    }
}

fn play_effects(state: &GameState, args: CardPlayArgs) -> Vec<Effect> {
    let opponent = args.pid.other();
    let Some(active_id) = state.player(opponent).characters.active_character_id else {
        return Vec::new();
    };
    vec![Effect::AddCharacterStatus {
        target: StaticTarget::character(opponent, active_id),
        status: CharacterStatus::Burning(DurationState::new(2)),
    }]
}
