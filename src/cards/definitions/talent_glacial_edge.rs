//! A talent card for "Permafrost Warden" (`characters::cryo_berserker`):
//! boosts its elemental burst specifically, narrower than a generic
//! weapon (exercises `EquipmentStatus::TalentDamageBoost`).

use crate::card::{CardDescriptor, CardKind, CardPlayArgs, CardTargetRequirement};
use crate::dice::DiceCost;
use crate::element::Element;
use crate::effect::Effect;
use crate::game_state::GameState;
use crate::ids::{CardKindId, CharacterKindId, StaticTarget};
use crate::signal::DamageType;
use crate::statuses::EquipmentStatus;

pub fn descriptor() -> CardDescriptor {
    CardDescriptor {
        kind_id: CardKindId(15),
        name: "Glacial Edge",
        kind: CardKind::Talent,
        dice_cost: DiceCost::new().elem(Element::Cryo, 3),
        target_requirement: CardTargetRequirement::OwnCharacter,
        talent_for_character: Some(CharacterKindId(9)),
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
    if ch.kind_id != CharacterKindId(9) {
        return Vec::new();
    }
    vec![Effect::AddEquipmentStatus {
        target: StaticTarget::character(args.pid, target),
        status: EquipmentStatus::TalentDamageBoost {
            applies_to: DamageType::ElementalBurst,
            bonus: 2,
        },
    }]
}
