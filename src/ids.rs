//! Identifiers used throughout the engine.
//!
//! Every addressable entity is named by a small `Copy` id rather than a
//! pointer or index into a mutable arena: characters, summons and supports
//! are looked up through the current `GameState` by id, never referenced
//! directly, so a `GameState` snapshot never contains a cycle (see DESIGN
//! NOTES, "Cyclic references").

use std::fmt;

/// Player identifier. Exactly two players play any given game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pid {
    P1,
    P2,
}

impl Pid {
    pub fn other(self) -> Pid {
        match self {
            Pid::P1 => Pid::P2,
            Pid::P2 => Pid::P1,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Pid::P1 => 0,
            Pid::P2 => 1,
        }
    }
}

impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pid::P1 => write!(f, "P1"),
            Pid::P2 => write!(f, "P2"),
        }
    }
}

/// Character identifier, 1-indexed within a player's `Characters` list and
/// stable for the lifetime of a game (characters are never destroyed, only
/// marked not-alive; see `spec.md` §3 Lifecycles).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CharId(pub u8);

impl CharId {
    pub fn new(n: u8) -> Self {
        Self(n)
    }
}

impl fmt::Display for CharId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}", self.0)
    }
}

/// Slot identifier for a support in a player's `supports` container.
/// Slots are stable once assigned; a destroyed support frees its slot for
/// reuse by the next support the player plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SupportSlot(pub u8);

/// Identifies any addressable entity in `spec.md` §3: a (player, zone, id)
/// triple. `id` is `0` for zones that are not indexed (e.g. `Hidden`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StaticTarget {
    pub pid: Pid,
    pub zone: Zone,
    pub id: u32,
}

impl StaticTarget {
    pub fn character(pid: Pid, char_id: CharId) -> Self {
        Self {
            pid,
            zone: Zone::Character,
            id: char_id.0 as u32,
        }
    }

    pub fn combat(pid: Pid) -> Self {
        Self {
            pid,
            zone: Zone::Combat,
            id: 0,
        }
    }

    pub fn summon(pid: Pid, kind_code: u32) -> Self {
        Self {
            pid,
            zone: Zone::Summon,
            id: kind_code,
        }
    }

    pub fn support(pid: Pid, slot: SupportSlot) -> Self {
        Self {
            pid,
            zone: Zone::Support,
            id: slot.0 as u32,
        }
    }

    pub fn hidden(pid: Pid) -> Self {
        Self {
            pid,
            zone: Zone::Hidden,
            id: 0,
        }
    }

    pub fn char_id(self) -> Option<CharId> {
        match self.zone {
            Zone::Character => Some(CharId(self.id as u8)),
            _ => None,
        }
    }
}

/// The zone a `StaticTarget` points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    Character,
    Combat,
    Summon,
    Support,
    Hidden,
}

/// A stable numeric identifier for a card kind, resolved through the
/// `CardRegistry` to its static `CardDescriptor`. Deliberately not a
/// per-printing `CardId`: a "kind" *is* the card since the catalogue is a
/// closed, finite table rather than a registry of unique printings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardKindId(pub u16);

/// A stable numeric identifier for a character kind (Keqing, Klee, ...),
/// resolved through the `CharacterRegistry`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CharacterKindId(pub u16);
