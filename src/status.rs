//! The status contract (`spec.md` §4.5) and its generic container.
//!
//! Every concrete status, summon, and support in the catalogue implements
//! `StatusBehavior` for its family enum (`statuses::character_status::CharacterStatus`,
//! `statuses::combat_status::CombatStatus`, ...). Dispatch is a hand-written
//! `match` inside each family's `impl StatusBehavior`, not macro-generated
//! or trait-object based, fitting a closed, finite taxonomy of abilities.

use std::fmt;

use crate::effect::Effect;
use crate::game_state::GameState;
use crate::ids::StaticTarget;
use crate::signal::{Informable, PreprocessStage, Preprocessable, Signal};

/// The four-method contract every status family implements. Default
/// bodies are all "no-op, keep self unchanged" so a concrete variant only
/// overrides the hooks it actually cares about. `state` is the state
/// *before* this hook's effects are applied — statuses read it to decide
/// how to react but never mutate it directly (`spec.md` §4.5 table).
pub trait StatusBehavior: Sized + Clone + fmt::Debug {
    fn preprocess(
        &self,
        _state: &GameState,
        _pos: StaticTarget,
        _stage: PreprocessStage,
        _event: &mut Preprocessable,
    ) -> Option<Self> {
        Some(self.clone())
    }

    fn inform(&self, _state: &GameState, _pos: StaticTarget, _info: &Informable) -> Option<Self> {
        Some(self.clone())
    }

    fn react_to_signal(
        &self,
        _state: &GameState,
        _pos: StaticTarget,
        _signal: Signal,
    ) -> (Vec<Effect>, Option<Self>) {
        (Vec::new(), Some(self.clone()))
    }

    /// Merge rule when the same concrete type is re-added. The default
    /// mirrors `_UsageStatus`: callers that don't carry a usage count
    /// simply keep the newer instance.
    fn update(&self, other: &Self) -> Option<Self> {
        let _ = self;
        Some(other.clone())
    }
}

/// An ordered container holding at most one instance of each concrete
/// status type (`spec.md` §3 invariant 6), identified structurally via
/// `std::mem::discriminant` rather than a separate identity enum — two
/// values of the same enum variant (regardless of payload) are "the same
/// concrete type". Insertion order is preserved, which doubles as summon
/// insertion order / support slot order (`spec.md` §3, §4.4).
#[derive(Debug, Clone)]
pub struct Statuses<T> {
    items: Vec<T>,
}

impl<T> Default for Statuses<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: StatusBehavior> Statuses<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.items.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn position_of_kind(&self, template: &T) -> Option<usize> {
        self.items
            .iter()
            .position(|x| std::mem::discriminant(x) == std::mem::discriminant(template))
    }

    pub fn find_kind(&self, template: &T) -> Option<&T> {
        self.position_of_kind(template).map(|i| &self.items[i])
    }

    pub fn has_kind(&self, template: &T) -> bool {
        self.position_of_kind(template).is_some()
    }

    /// Adds `status`, merging via `StatusBehavior::update` if a status of
    /// the same concrete type already exists (`AddXStatus` effects in
    /// `spec.md` §4.3). If `update` returns `None` the existing status is
    /// removed. Returns `true` if an existing entry was touched.
    pub fn add(&mut self, status: T) -> bool {
        if let Some(idx) = self.position_of_kind(&status) {
            match self.items[idx].update(&status) {
                Some(merged) => self.items[idx] = merged,
                None => {
                    self.items.remove(idx);
                }
            }
            true
        } else {
            self.items.push(status);
            false
        }
    }

    /// Replaces any status of the same concrete type unconditionally
    /// (`OverrideXStatus` effects), or inserts `status` if none exists.
    pub fn overwrite(&mut self, status: T) {
        if let Some(idx) = self.position_of_kind(&status) {
            self.items[idx] = status;
        } else {
            self.items.push(status);
        }
    }

    /// Removes the status matching `template`'s concrete type, if any.
    /// Returns whether something was removed.
    pub fn remove_kind(&mut self, template: &T) -> bool {
        match self.position_of_kind(template) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn retain(&mut self, mut f: impl FnMut(&T) -> bool) {
        self.items.retain(|x| f(x));
    }

    pub fn push_raw(&mut self, status: T) {
        self.items.push(status);
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Replaces the whole container's contents, preserving the given
    /// order. Used by the preprocessor/signal-broadcast passes, which
    /// compute each item's successor from a read-only snapshot and then
    /// write the batch back in one step.
    pub fn replace_all(&mut self, items: Vec<T>) {
        self.items = items;
    }
}
