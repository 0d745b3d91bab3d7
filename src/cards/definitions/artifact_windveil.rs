//! An artifact that heals its wearer a little every round, independent
//! of the once-per-round cost discount `artifact_cloak` provides
//! (exercises `EquipmentStatus::ArtifactRoundStartHeal`).

use crate::card::{CardDescriptor, CardKind, CardPlayArgs, CardTargetRequirement};
use crate::dice::DiceCost;
use crate::effect::Effect;
use crate::game_state::GameState;
use crate::ids::{CardKindId, StaticTarget};
use crate::statuses::EquipmentStatus;

pub fn descriptor() -> CardDescriptor {
    CardDescriptor {
        kind_id: CardKindId(14),
        name: "Windveil Circlet",
        kind: CardKind::Artifact,
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
    vec![Effect::AddEquipmentStatus {
        target: StaticTarget::character(args.pid, target),
        status: EquipmentStatus::ArtifactRoundStartHeal { amount: 1 },
    }]
}
