//! The deck's once-per-game arcane legend card (`spec.md` §6 "arcane
//! legend cap"): free to play, recharges every alive character's energy
//! by 1.

use crate::card::{CardDescriptor, CardKind, CardPlayArgs, CardTargetRequirement};
use crate::dice::DiceCost;
use crate::effect::Effect;
use crate::game_state::GameState;
use crate::ids::{CardKindId, StaticTarget};

pub fn descriptor() -> CardDescriptor {
    CardDescriptor {
        kind_id: CardKindId(8),
        name: "Convergence of Fates",
        kind: CardKind::ArcaneLegend,
        dice_cost: DiceCost::new(),
        target_requirement: CardTargetRequirement::None,
        talent_for_character: None,
        is_arcane_legend: true,
        resonance_element_chars_required: None,
        play_effects,
    }
}

fn play_effects(state: &GameState, args: CardPlayArgs) -> Vec<Effect> {
    state
        .player(args.pid)
        .characters
        .iter()
        .filter(|ch| ch.alive)
        .map(|ch| Effect::EnergyRecharge {
            target: StaticTarget::character(args.pid, ch.id),
            amount: 1,
        })
        .collect()
}
