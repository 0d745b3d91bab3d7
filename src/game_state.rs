//! The immutable game-state value (`spec.md` §3). Every transition
//! produces a new `GameState`; nothing here is ever mutated behind a
//! shared reference from engine-external code.

use std::collections::HashMap;

use crate::character::Characters;
use crate::deck::{Deck, ModeDescriptor};
use crate::dice::DicePool;
use crate::effect_stack::EffectStack;
use crate::ids::{CardKindId, Pid, SupportSlot};
use crate::phase::{ActTag, Phase};
use crate::rng::RandomSource;
use crate::status::Statuses;
use crate::statuses::{CombatStatus, PlayerHiddenStatus, SummonStatus, SupportStatus};

/// The supports container: slotted, capped, insertion order doubles as
/// slot order (`spec.md` §3 "supports: OrderedSequence<Support>").
#[derive(Debug, Clone, Default)]
pub struct Supports {
    slots: Vec<(SupportSlot, SupportStatus)>,
    cap: u8,
}

impl Supports {
    pub fn new(cap: u8) -> Self {
        Self {
            slots: Vec::new(),
            cap,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() >= self.cap as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = (SupportSlot, &SupportStatus)> {
        self.slots.iter().map(|(slot, s)| (*slot, s))
    }

    pub fn get(&self, slot: SupportSlot) -> Option<&SupportStatus> {
        self.slots.iter().find(|(s, _)| *s == slot).map(|(_, st)| st)
    }

    pub fn get_mut(&mut self, slot: SupportSlot) -> Option<&mut SupportStatus> {
        self.slots
            .iter_mut()
            .find(|(s, _)| *s == slot)
            .map(|(_, st)| st)
    }

    fn free_slot_id(&self) -> SupportSlot {
        let mut id = 0u8;
        while self.slots.iter().any(|(s, _)| s.0 == id) {
            id += 1;
        }
        SupportSlot(id)
    }

    /// Inserts `status` into a free slot. Returns `None` (no-op) if the
    /// container is already at its cap; callers check legality before
    /// ever reaching this point.
    pub fn insert(&mut self, status: SupportStatus) -> Option<SupportSlot> {
        if self.is_full() {
            return None;
        }
        let slot = self.free_slot_id();
        self.slots.push((slot, status));
        Some(slot)
    }

    pub fn remove(&mut self, slot: SupportSlot) -> Option<SupportStatus> {
        let idx = self.slots.iter().position(|(s, _)| *s == slot)?;
        Some(self.slots.remove(idx).1)
    }

    pub fn set_cap(&mut self, cap: u8) {
        self.cap = cap;
    }
}

/// A player's side of the board (`spec.md` §3 `PlayerState`).
#[derive(Debug, Clone)]
pub struct PlayerState {
    pub phase_act: ActTag,
    pub characters: Characters,
    /// Multiset of cards in hand, order-irrelevant.
    pub hand_cards: HashMap<CardKindId, u32>,
    /// Bottom-to-top ordered deck; the last element is the next card
    /// drawn.
    pub deck_cards: Vec<CardKindId>,
    pub initial_deck: Deck,
    pub dice: DicePool,
    pub combat_statuses: Statuses<CombatStatus>,
    pub summons: Statuses<SummonStatus>,
    pub supports: Supports,
    pub hidden_statuses: Statuses<PlayerHiddenStatus>,
    pub card_redraw_chances: u8,
    pub dice_reroll_chances: u8,
    pub declared_end: bool,
    /// Set once this player has completed whatever the current phase asks
    /// of them (redraw done, starting character chosen, reroll done).
    /// Cleared on every phase transition.
    pub phase_ready: bool,
}

impl PlayerState {
    pub fn new(initial_deck: Deck, characters: Characters, mode: &ModeDescriptor) -> Self {
        Self {
            phase_act: ActTag::PassiveWait,
            characters,
            hand_cards: HashMap::new(),
            deck_cards: Vec::new(),
            initial_deck,
            dice: DicePool::new(),
            combat_statuses: Statuses::new(),
            summons: Statuses::new(),
            supports: Supports::new(mode.supports_cap),
            hidden_statuses: Statuses::new(),
            card_redraw_chances: mode.redraw_chances,
            dice_reroll_chances: mode.reroll_chances,
            declared_end: false,
            phase_ready: false,
        }
    }

    pub fn draw_cards(&mut self, kinds: impl IntoIterator<Item = CardKindId>) {
        for kind in kinds {
            *self.hand_cards.entry(kind).or_insert(0) += 1;
        }
    }

    pub fn hand_count(&self) -> u32 {
        self.hand_cards.values().sum()
    }
}

/// The full, immutable game state (`spec.md` §3 `GameState`).
#[derive(Debug, Clone)]
pub struct GameState {
    pub round: u32,
    pub active_player: Pid,
    pub mode: ModeDescriptor,
    pub phase: Phase,
    pub player1: PlayerState,
    pub player2: PlayerState,
    pub effect_stack: EffectStack,
    pub rng: RandomSource,
}

impl GameState {
    pub fn player(&self, pid: Pid) -> &PlayerState {
        match pid {
            Pid::P1 => &self.player1,
            Pid::P2 => &self.player2,
        }
    }

    pub fn player_mut(&mut self, pid: Pid) -> &mut PlayerState {
        match pid {
            Pid::P1 => &mut self.player1,
            Pid::P2 => &mut self.player2,
        }
    }

    pub fn both_pids() -> [Pid; 2] {
        [Pid::P1, Pid::P2]
    }

    /// `spec.md` §3 invariant 5: `active_character_id` is `Some` whenever
    /// at least one character is alive.
    pub fn invariant_active_char_holds(&self, pid: Pid) -> bool {
        let p = self.player(pid);
        if p.characters.any_alive() {
            p.characters
                .active()
                .map(|c| c.alive)
                .unwrap_or(false)
        } else {
            true
        }
    }

    /// `spec.md` §10 "Defeated-player early termination": a player with no
    /// alive characters and no surviving revival status has lost.
    pub fn defeated(&self, pid: Pid) -> bool {
        let p = self.player(pid);
        !p.characters.any_alive()
            && p.characters
                .iter()
                .all(|c| !c.character_statuses.as_slice().iter().any(|s| s.revivable()))
    }

    pub fn both_phase_ready(&self) -> bool {
        self.player1.phase_ready && self.player2.phase_ready
    }

    pub fn reset_phase_ready(&mut self) {
        self.player1.phase_ready = false;
        self.player2.phase_ready = false;
    }

    pub fn winner(&self) -> Option<Pid> {
        let p1_lost = self.defeated(Pid::P1);
        let p2_lost = self.defeated(Pid::P2);
        match (p1_lost, p2_lost) {
            (true, false) => Some(Pid::P2),
            (false, true) => Some(Pid::P1),
            _ => None,
        }
    }
}
