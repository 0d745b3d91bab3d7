//! Dice pool and payment solver (`spec.md` §4.1).
//!
//! A `DicePool` is a non-negative multiset of `Element`, restricted to the
//! eight "actual" dice colours (the seven aurable elements plus `Omni`).
//! A `DiceCost` is shaped the same but may additionally use the
//! requirement-only keys `Any` (no colour constraint) and `OmniReq` (all
//! paid dice must share one real colour, which may itself be `Omni`).

use std::collections::HashMap;

use crate::element::Element;

/// Non-negative multiset of real dice. Only `Element::is_actual_die()`
/// colours (the seven aurable elements plus `Omni`) may appear as keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DicePool {
    counts: HashMap<Element, u32>,
}

impl DicePool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_counts(counts: impl IntoIterator<Item = (Element, u32)>) -> Self {
        let mut pool = Self::new();
        for (e, n) in counts {
            pool.add(e, n);
        }
        pool
    }

    pub fn get(&self, e: Element) -> u32 {
        self.counts.get(&e).copied().unwrap_or(0)
    }

    pub fn add(&mut self, e: Element, n: u32) {
        debug_assert!(e.is_actual_die());
        if n == 0 {
            return;
        }
        *self.counts.entry(e).or_insert(0) += n;
    }

    /// Removes `n` dice of element `e`. Returns `false` (no-op) if the pool
    /// does not hold that many.
    pub fn remove(&mut self, e: Element, n: u32) -> bool {
        let have = self.get(e);
        if have < n {
            return false;
        }
        if have == n {
            self.counts.remove(&e);
        } else {
            self.counts.insert(e, have - n);
        }
        true
    }

    pub fn num(&self) -> u32 {
        self.counts.values().sum()
    }

    pub fn is_even(&self) -> bool {
        self.num() % 2 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (Element, u32)> + '_ {
        self.counts.iter().map(|(&e, &n)| (e, n))
    }

    pub fn is_empty(&self) -> bool {
        self.counts.values().all(|&n| n == 0)
    }

    pub fn checked_add(&self, other: &DicePool) -> DicePool {
        let mut result = self.clone();
        for (e, n) in other.iter() {
            result.add(e, n);
        }
        result
    }

    /// Subtracts `other` from `self`. Returns `None` if `other` is not a
    /// subset (any element count in `other` exceeds `self`).
    pub fn checked_sub(&self, other: &DicePool) -> Option<DicePool> {
        let mut result = self.clone();
        for (e, n) in other.iter() {
            if !result.remove(e, n) {
                return None;
            }
        }
        Some(result)
    }

    /// Reduces the cost of `n` dice of `elem` (or of any element, if
    /// `elem` is `None`) by collapsing them to zero, used by discount
    /// preprocessors. Operates on a `DiceCost`, not a pool; see
    /// `DiceCost::cost_less_elem`.
    pub fn dominant_elements(&self) -> Vec<Element> {
        let mut elems: Vec<Element> = self.counts.keys().copied().collect();
        elems.sort_by(|a, b| self.get(*b).cmp(&self.get(*a)).then(a.cmp(b)));
        elems
    }
}

/// A dice cost/requirement descriptor. May use `Any` (no colour
/// constraint) and `OmniReq` (monochrome-or-omni requirement) in addition
/// to real elements; these never appear in a `DicePool`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiceCost {
    /// Required counts of specific real elements (not `Any`/`Omni`).
    elemental: HashMap<Element, u32>,
    /// "Same colour, any colour" requirement count (the `OMNI` requirement
    /// key in `spec.md` §4.1 — named `omni_req` here to avoid confusion
    /// with the real `Omni` wildcard die).
    omni_req: u32,
    /// "Any colour at all" requirement count.
    any_req: u32,
}

impl DiceCost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elem(mut self, e: Element, n: u32) -> Self {
        debug_assert!(e.is_aurable());
        if n > 0 {
            *self.elemental.entry(e).or_insert(0) += n;
        }
        self
    }

    pub fn same_color(mut self, n: u32) -> Self {
        self.omni_req += n;
        self
    }

    pub fn any(mut self, n: u32) -> Self {
        self.any_req += n;
        self
    }

    pub fn total(&self) -> u32 {
        self.elemental.values().sum::<u32>() + self.omni_req + self.any_req
    }

    pub fn elemental(&self) -> &HashMap<Element, u32> {
        &self.elemental
    }

    pub fn omni_req(&self) -> u32 {
        self.omni_req
    }

    pub fn any_req(&self) -> u32 {
        self.any_req
    }

    /// Reduces the first `n` units of cost that are of `elem` (or any
    /// elemental/omni-req unit if `elem` is `None`) to zero. Used by
    /// `DMG`-adjacent cost-discount preprocessors (artifacts, talents).
    pub fn cost_less_elem(&self, mut n: u32, elem: Option<Element>) -> DiceCost {
        let mut out = self.clone();
        if let Some(e) = elem {
            if let Some(count) = out.elemental.get_mut(&e) {
                let reduce = (*count).min(n);
                *count -= reduce;
                n -= reduce;
                if *count == 0 {
                    out.elemental.remove(&e);
                }
            }
        } else {
            // Reduce from elemental requirements first (dominant colour
            // first, deterministic iteration), then omni_req, then any_req.
            let mut elems: Vec<Element> = out.elemental.keys().copied().collect();
            elems.sort();
            for e in elems {
                if n == 0 {
                    break;
                }
                let count = out.elemental.get_mut(&e).unwrap();
                let reduce = (*count).min(n);
                *count -= reduce;
                n -= reduce;
                if *count == 0 {
                    out.elemental.remove(&e);
                }
            }
        }
        let reduce = out.omni_req.min(n);
        out.omni_req -= reduce;
        n -= reduce;
        let reduce = out.any_req.min(n);
        out.any_req -= reduce;
        out
    }

    pub fn cost_less_any(&self, n: u32) -> DiceCost {
        self.cost_less_elem(n, None)
    }
}

/// A concrete payment drawn from a pool: the dice actually spent.
pub type Payment = DicePool;

/// Checks that `payment` is an *exact* cover of `req`: elemental needs met
/// one-for-one, the omni requirement satisfied by some single colour
/// (possibly real `Omni` dice), the remaining dice equal to the any
/// requirement, and no leftover dice (`spec.md` §4.1 `just_satisfy`).
pub fn just_satisfy(req: &DiceCost, payment: &DicePool) -> bool {
    if payment.num() != req.total() {
        return false;
    }
    let mut remaining = payment.clone();
    for (&e, &n) in &req.elemental {
        if !remaining.remove(e, n) {
            return false;
        }
    }
    if req.omni_req > 0 && !consume_monochrome(&mut remaining, req.omni_req) {
        return false;
    }
    remaining.num() == req.any_req
}

/// Removes `n` dice from `pool` that all share one real colour (any single
/// aurable element, using `Omni` reals to fill the shortfall for that
/// colour, or `n` pure `Omni` reals alone). Tries every candidate colour
/// and keeps the first that works, preferring to spend non-`Omni` dice.
fn consume_monochrome(pool: &mut DicePool, n: u32) -> bool {
    let mut candidates = Element::AURABLE.to_vec();
    candidates.sort_by_key(|&e| std::cmp::Reverse(pool.get(e)));
    for e in candidates {
        let have_colour = pool.get(e);
        let have_omni = pool.get(Element::Omni);
        if have_colour + have_omni >= n {
            let use_colour = have_colour.min(n);
            let use_omni = n - use_colour;
            pool.remove(e, use_colour);
            pool.remove(Element::Omni, use_omni);
            return true;
        }
    }
    pool.get(Element::Omni) >= n && pool.remove(Element::Omni, n)
}

/// Finds the cheapest payment for `req` out of `pool`, spending real
/// `Omni` dice last wherever a choice exists (`spec.md` §4.1
/// `basically_satisfy`). Returns `None` if `pool` cannot cover `req`.
pub fn basically_satisfy(req: &DiceCost, pool: &DicePool) -> Option<Payment> {
    let mut remaining = pool.clone();
    let mut payment = DicePool::new();

    // 1. Exact-colour elemental requirements, non-Omni first.
    for (&e, &n) in &req.elemental {
        let have = remaining.get(e);
        let use_colour = have.min(n);
        remaining.remove(e, use_colour);
        payment.add(e, use_colour);
        let shortfall = n - use_colour;
        if shortfall > 0 {
            if !remaining.remove(Element::Omni, shortfall) {
                return None;
            }
            payment.add(Element::Omni, shortfall);
        }
    }

    // 2. OMNI requirement: find the richest remaining colour, pad with
    //    real Omni only if that colour falls short.
    if req.omni_req > 0 {
        let mut candidates = Element::AURABLE.to_vec();
        candidates.sort_by_key(|&e| std::cmp::Reverse(remaining.get(e)));
        let mut satisfied = false;
        for e in candidates {
            let have = remaining.get(e);
            if have >= req.omni_req {
                remaining.remove(e, req.omni_req);
                payment.add(e, req.omni_req);
                satisfied = true;
                break;
            }
        }
        if !satisfied {
            // fall back to pure real Omni dice.
            if remaining.get(Element::Omni) >= req.omni_req {
                remaining.remove(Element::Omni, req.omni_req);
                payment.add(Element::Omni, req.omni_req);
            } else {
                return None;
            }
        }
    }

    // 3. ANY requirement: spend whatever is left, non-Omni first.
    if req.any_req > 0 {
        let mut need = req.any_req;
        let mut elems = remaining.dominant_elements();
        elems.retain(|&e| e != Element::Omni);
        for e in elems {
            if need == 0 {
                break;
            }
            let take = remaining.get(e).min(need);
            remaining.remove(e, take);
            payment.add(e, take);
            need -= take;
        }
        if need > 0 {
            if !remaining.remove(Element::Omni, need) {
                return None;
            }
            payment.add(Element::Omni, need);
        }
    }

    Some(payment)
}

/// Auto-selects a payment for a pure `ANY`-style requirement (e.g. "pay 3
/// dice of any kind", the shape `ElementalTuningAction` and most card costs
/// use) honouring the precedence tiers in `spec.md` §4.1: dice whose
/// element the player has no character of spend first, then other
/// non-`Omni` dice, then `Omni` dice last. Within a tier, richer colours
/// spend first, ties broken by `Element`'s `Ord`.
///
/// For requirements that also carry elemental/OMNI-req components, callers
/// should use `basically_satisfy`, which already applies the same
/// Omni-last precedence to the elemental and monochrome portions.
pub fn smart_selection(n: u32, pool: &DicePool, character_elements: &[Element]) -> Option<Payment> {
    if pool.num() < n {
        return None;
    }
    let mut tier1: Vec<Element> = Element::AURABLE
        .iter()
        .copied()
        .filter(|e| !character_elements.contains(e))
        .collect();
    tier1.sort_by_key(|&e| std::cmp::Reverse(pool.get(e)));
    let mut tier2: Vec<Element> = character_elements
        .iter()
        .copied()
        .filter(|e| e.is_aurable())
        .collect();
    tier2.sort_by_key(|&e| std::cmp::Reverse(pool.get(e)));

    let mut remaining = n;
    let mut payment = DicePool::new();
    for e in tier1.into_iter().chain(tier2.into_iter()) {
        if remaining == 0 {
            break;
        }
        let take = pool.get(e).min(remaining);
        payment.add(e, take);
        remaining -= take;
    }
    if remaining > 0 {
        let take = pool.get(Element::Omni).min(remaining);
        payment.add(Element::Omni, take);
        remaining -= take;
    }
    if remaining > 0 {
        return None;
    }
    Some(payment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Element::*;

    #[test]
    fn just_satisfy_requires_exact_total() {
        let req = DiceCost::new().elem(Pyro, 1).any(2);
        let payment = DicePool::from_counts([(Pyro, 1), (Hydro, 1), (Cryo, 1)]);
        assert!(just_satisfy(&req, &payment));
        let short = DicePool::from_counts([(Pyro, 1), (Hydro, 1)]);
        assert!(!just_satisfy(&req, &short));
    }

    #[test]
    fn basically_satisfy_spends_omni_last() {
        let req = DiceCost::new().elem(Pyro, 1);
        let pool = DicePool::from_counts([(Pyro, 1), (Omni, 5)]);
        let payment = basically_satisfy(&req, &pool).unwrap();
        assert_eq!(payment.get(Pyro), 1);
        assert_eq!(payment.get(Omni), 0);
    }

    #[test]
    fn basically_satisfy_falls_back_to_omni_when_short() {
        let req = DiceCost::new().elem(Pyro, 2);
        let pool = DicePool::from_counts([(Pyro, 1), (Omni, 3)]);
        let payment = basically_satisfy(&req, &pool).unwrap();
        assert_eq!(payment.get(Pyro), 1);
        assert_eq!(payment.get(Omni), 1);
    }

    #[test]
    fn omni_requirement_prefers_monochrome_colour_over_real_omni() {
        let req = DiceCost::new().same_color(2);
        let pool = DicePool::from_counts([(Hydro, 2), (Omni, 2)]);
        let payment = basically_satisfy(&req, &pool).unwrap();
        assert_eq!(payment.get(Hydro), 2);
        assert_eq!(payment.get(Omni), 0);
    }

    #[test]
    fn payment_idempotence_law() {
        let pool = DicePool::from_counts([(Pyro, 3), (Hydro, 2), (Omni, 1)]);
        let req = DiceCost::new().elem(Pyro, 1).any(1);
        let payment = basically_satisfy(&req, &pool).unwrap();
        let remaining = pool.checked_sub(&payment).unwrap();
        let restored = remaining.checked_add(&payment);
        assert_eq!(restored, pool);
    }

    #[test]
    fn cost_less_elem_reduces_matching_colour_first() {
        let req = DiceCost::new().elem(Pyro, 2).any(1);
        let reduced = req.cost_less_elem(1, Some(Element::Pyro));
        assert_eq!(reduced.elemental().get(&Element::Pyro), Some(&1));
        assert_eq!(reduced.total(), 2);
    }
}
