//! A talent card for "Stormblade" (`characters::electro_duelist`),
//! representative of the `EngulfingLightning` equipment behaviour
//! (`spec.md` §8 scenario 5).

use crate::card::{CardDescriptor, CardKind, CardPlayArgs, CardTargetRequirement};
use crate::dice::DiceCost;
use crate::effect::Effect;
use crate::element::Element;
use crate::game_state::GameState;
use crate::ids::{CardKindId, CharacterKindId, StaticTarget};
use crate::statuses::EquipmentStatus;

pub fn descriptor() -> CardDescriptor {
    CardDescriptor {
        kind_id: CardKindId(3),
        name: "Stormcall Oath",
        kind: CardKind::Talent,
        dice_cost: DiceCost::new().elem(Element::Electro, 3),
        target_requirement: CardTargetRequirement::OwnCharacter,
        talent_for_character: Some(CharacterKindId(1)),
        is_arcane_legend: false,
        resonance_element_chars_required: None,
        play_effects,
    }
}

fn play_effects(state: &GameState, args: CardPlayArgs) -> Vec<Effect> {
    let Some(target) = args.target else {
        return Vec::new();
    };
    let Some(ch) = state.player(args.pid).characters.get(target) else {
        return Vec::new();
    };
    if ch.kind_id != CharacterKindId(1) {
        return Vec::new();
    }
    vec![Effect::AddEquipmentStatus {
        target: StaticTarget::character(args.pid, target),
        status: EquipmentStatus::EngulfingLightning,
    }]
}
