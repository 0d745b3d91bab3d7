//! Card data model (`spec.md` §3 GLOSSARY "Card catalogue", §6 "Deck
//! format"). Mirrors `character.rs`'s descriptor/instance split: a static
//! `CardDescriptor` looked up by `CardKindId`, and the play-time arguments
//! a card's effect function closes over.

use crate::dice::DiceCost;
use crate::effect::Effect;
use crate::game_state::GameState;
use crate::ids::{CardKindId, CharId, CharacterKindId, Pid};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    /// A one-shot effect card (e.g. Elemental Resonance, event cards).
    Event,
    /// An equipment card that is also a talent for a specific character.
    Talent,
    Weapon,
    Artifact,
    Support,
    /// A once-per-deck card subject to the mode's arcane-legend cap.
    ArcaneLegend,
}

/// The target(s) a card's play-time arguments must supply, resolved by
/// the action generator before the card's effect function runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTargetRequirement {
    None,
    OwnCharacter,
    OwnActiveCharacter,
}

/// The concrete arguments a played card's effect function receives, once
/// the action generator has resolved `CardTargetRequirement`.
#[derive(Debug, Clone, Copy)]
pub struct CardPlayArgs {
    pub pid: Pid,
    pub target: Option<CharId>,
}

/// Static, catalogue-defined facts about a card kind. Never mutated;
/// looked up by `CardKindId` through the card registry.
pub struct CardDescriptor {
    pub kind_id: CardKindId,
    pub name: &'static str,
    pub kind: CardKind,
    pub dice_cost: DiceCost,
    pub target_requirement: CardTargetRequirement,
    pub talent_for_character: Option<CharacterKindId>,
    pub is_arcane_legend: bool,
    /// Resonance-style legality: requires at least this many characters
    /// of a given element on the team (checked by `deck.rs` against the
    /// character registry, not here).
    pub resonance_element_chars_required: Option<u8>,
    /// Builds the effects this card produces when played. Takes the state
    /// *before* paying its cost (cost is handled by the executor/action
    /// step separately) so the function can read current board state
    /// (e.g. "heal the character with the least HP").
    pub play_effects: fn(&GameState, CardPlayArgs) -> Vec<Effect>,
}

impl std::fmt::Debug for CardDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardDescriptor")
            .field("kind_id", &self.kind_id)
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}
