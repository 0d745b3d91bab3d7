//! An event card that works a character into a frenzy before its next
//! hits land (exercises `CharacterStatus::AttackUp` placed by a card
//! rather than a skill).

use crate::card::{CardDescriptor, CardKind, CardPlayArgs, CardTargetRequirement};
use crate::dice::DiceCost;
use crate::effect::Effect;
use crate::game_state::GameState;
use crate::ids::{CardKindId, StaticTarget};
use crate::statuses::CharacterStatus;
use crate::statuses::mixins::UsageState;

pub fn descriptor() -> CardDescriptor {
    CardDescriptor {
        kind_id: CardKindId(18),
        name: "Battle Trance",
        kind: CardKind::Event,
        dice_cost: DiceCost::new().any(1),
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
        status: CharacterStatus::AttackUp {
            bonus: 1,
            usage: UsageState::new(1, 1),
        },
    }]
}
