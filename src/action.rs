//! The `PlayerAction` vocabulary (`spec.md` §4.2 "Within `Action` a player
//! turn consists of exactly one of..."). Dedicated phase transitions for
//! `CardSelect`/`StartingHandSelect`/`RollDice` (redraw, starting
//! character pick, dice reroll) are separate `game_loop` entry points
//! rather than `PlayerAction` variants, since those phases offer a choice
//! shape the §4.6 action categories don't describe (a hand subset, a
//! single character pick, a reroll set) -- see DESIGN.md.

use crate::dice::DicePool;
use crate::element::Element;
use crate::ids::{CardKindId, CharId};

use crate::character::SkillId;

/// The base dice cost of a `Swap` action before cost preprocessing
/// (`spec.md` §4.2 "change active character (combat-action unless a
/// fast-swap status applies)").
pub fn base_swap_cost() -> crate::dice::DiceCost {
    crate::dice::DiceCost::new().any(1)
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlayerAction {
    PlayCard {
        card: CardKindId,
        target: Option<CharId>,
        payment: DicePool,
    },
    CastSkill {
        caster: CharId,
        skill: SkillId,
        payment: DicePool,
    },
    Swap {
        to: CharId,
        payment: DicePool,
    },
    EndRound,
    ElementalTuning {
        card: CardKindId,
        die: Element,
    },
    DeathSwap {
        to: CharId,
    },
}
