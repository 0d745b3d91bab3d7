//! Elemental types and the elemental aura a character can carry.
//!
//! A closed set of symbols with a small fixed-slot container, plus the
//! reaction product table from `spec.md` §4.4.

use std::fmt;

/// The seven aurable elements, the two damage-only types (`Physical`,
/// `Piercing`), and the two requirement/wildcard-only tags (`Any`, `Omni`).
/// `spec.md` invariant 3/4 forbids the last four from ever appearing as a
/// real aura or a real die; the type is intentionally not split into
/// separate enums because a single preprocessed `DmgPEvent.element` field
/// needs to range over all of them at different pipeline stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    Pyro,
    Hydro,
    Electro,
    Cryo,
    Anemo,
    Geo,
    Dendro,
    Physical,
    Piercing,
    Any,
    Omni,
}

impl Element {
    pub const AURABLE: [Element; 7] = [
        Element::Pyro,
        Element::Hydro,
        Element::Electro,
        Element::Cryo,
        Element::Anemo,
        Element::Geo,
        Element::Dendro,
    ];

    pub fn is_aurable(self) -> bool {
        Self::AURABLE.contains(&self)
    }

    /// `ActualDice` elements: the colours that may appear as real dice in a
    /// `DicePool`, i.e. the seven aurable elements plus `Omni`.
    pub fn is_actual_die(self) -> bool {
        self.is_aurable() || self == Element::Omni
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Element::Pyro => "Pyro",
            Element::Hydro => "Hydro",
            Element::Electro => "Electro",
            Element::Cryo => "Cryo",
            Element::Anemo => "Anemo",
            Element::Geo => "Geo",
            Element::Dendro => "Dendro",
            Element::Physical => "Physical",
            Element::Piercing => "Piercing",
            Element::Any => "Any",
            Element::Omni => "Omni",
        };
        write!(f, "{}", s)
    }
}

/// A character's elemental aura: at most two aurable elements, ordered by
/// application (the first applied is consumed first when a reaction could
/// apply to either, matching `spec.md` §4.4's reaction-table note that
/// elements are pair-commutative but the "first" element can pick a
/// follow-up). Never contains `Physical`, `Piercing`, `Any`, or `Omni`
/// (invariant 3).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuraSet {
    elements: Vec<Element>,
}

impl AuraSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn contains(&self, e: Element) -> bool {
        self.elements.contains(&e)
    }

    /// Adds `e` to the aura. Caller must have already resolved any reaction
    /// this application would cause; this only records the resulting aura.
    pub fn apply(&mut self, e: Element) {
        debug_assert!(e.is_aurable());
        if !self.elements.contains(&e) {
            self.elements.push(e);
        }
        // Invariant 3 (spec.md §3): an aura never holds more than two
        // elements. Callers must resolve the reaction that an incoming
        // element would trigger (clearing or replacing the existing aura)
        // before calling `apply`, so this never accumulates past two.
        debug_assert!(self.elements.len() <= 2);
    }

    pub fn clear(&mut self) {
        self.elements.clear();
    }

    pub fn remove(&mut self, e: Element) {
        self.elements.retain(|&x| x != e);
    }
}

/// A reaction product: the elemental reaction table in `spec.md` §4.4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    Vaporize,
    Melt,
    Overloaded,
    ElectroCharged,
    Frozen,
    Superconduct,
    Burning,
    Bloom,
    Quicken,
    Crystallize,
    Swirl,
}

impl Reaction {
    /// Flat bonus damage dealt by the triggering hit itself (secondary
    /// effects like piercing splash or summon creation are modeled as
    /// effects pushed by the damage resolution step, not folded in here).
    pub fn bonus_damage(self) -> u8 {
        match self {
            Reaction::Vaporize | Reaction::Melt | Reaction::Overloaded => 2,
            Reaction::ElectroCharged
            | Reaction::Frozen
            | Reaction::Superconduct
            | Reaction::Burning
            | Reaction::Bloom
            | Reaction::Quicken
            | Reaction::Crystallize => 1,
            Reaction::Swirl => 0,
        }
    }
}

/// Looks up the reaction (if any) between an incoming damage `element` and
/// a single aura element already present on the target. Pair-commutative:
/// `lookup_reaction(a, b) == lookup_reaction(b, a)` up to which operand is
/// treated as "incoming" (callers needing the "first element" for a
/// follow-up pass `incoming` explicitly; see `spec.md` §4.4 and the Open
/// Question in DESIGN NOTES §9 about off-field targeting order, which is
/// unaffected by this symmetry).
pub fn lookup_reaction(incoming: Element, aura: Element) -> Option<Reaction> {
    use Element::*;
    let pair = (incoming, aura);
    Some(match pair {
        (Pyro, Hydro) | (Hydro, Pyro) => Reaction::Vaporize,
        (Pyro, Cryo) | (Cryo, Pyro) => Reaction::Melt,
        (Pyro, Electro) | (Electro, Pyro) => Reaction::Overloaded,
        (Hydro, Electro) | (Electro, Hydro) => Reaction::ElectroCharged,
        (Hydro, Cryo) | (Cryo, Hydro) => Reaction::Frozen,
        (Electro, Cryo) | (Cryo, Electro) => Reaction::Superconduct,
        (Dendro, Pyro) | (Pyro, Dendro) => Reaction::Burning,
        (Dendro, Hydro) | (Hydro, Dendro) => Reaction::Bloom,
        (Dendro, Electro) | (Electro, Dendro) => Reaction::Quicken,
        (Geo, a) | (a, Geo) if a.is_aurable() => Reaction::Crystallize,
        (Anemo, a) | (a, Anemo)
            if matches!(a, Pyro | Hydro | Electro | Cryo) =>
        {
            Reaction::Swirl
        }
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reaction_is_commutative() {
        assert_eq!(
            lookup_reaction(Element::Pyro, Element::Hydro),
            lookup_reaction(Element::Hydro, Element::Pyro)
        );
        assert_eq!(
            lookup_reaction(Element::Pyro, Element::Hydro),
            Some(Reaction::Vaporize)
        );
    }

    #[test]
    fn no_reaction_between_two_non_reactive_elements() {
        assert_eq!(lookup_reaction(Element::Pyro, Element::Pyro), None);
    }

    #[test]
    fn aura_never_holds_more_than_two_and_rejects_duplicates() {
        let mut aura = AuraSet::new();
        aura.apply(Element::Hydro);
        aura.apply(Element::Hydro);
        assert_eq!(aura.elements().len(), 1);
    }
}
