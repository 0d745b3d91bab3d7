//! Team-wide combat statuses (`spec.md` §4.5 `CombatStatus`): reaction
//! byproducts (DendroCore, CatalyzingField), team shields (Crystallize,
//! a generic "Rain Sword"-style ward).

use crate::effect::Effect;
use crate::element::Element;
use crate::game_state::GameState;
use crate::ids::StaticTarget;
use crate::signal::{PreprocessStage, Preprocessable, Signal};
use crate::status::StatusBehavior;
use crate::statuses::mixins::{FixedShieldState, StackedShieldState, UsageState};

#[derive(Debug, Clone, PartialEq)]
pub enum CombatStatus {
    /// Bloom byproduct: the owner's next Pyro or Electro hit is boosted by
    /// +2, single use (`spec.md` §8 scenario 2).
    DendroCore(UsageState),
    /// Quicken byproduct: the owner's next Electro or Dendro hit is
    /// boosted by +1, up to 2 uses.
    CatalyzingField(UsageState),
    /// Crystallize byproduct: a stacked shield protecting the owner's
    /// active character (`spec.md` §8 scenario 3).
    Crystallize(StackedShieldState),
    /// A generic team-wide fixed shield protecting the active character,
    /// representative of cards like "Rain Sword".
    TeamWard(FixedShieldState),
    /// Elemental Resonance-style team buff, generalized to an arbitrary
    /// element rather than the two fixed reaction byproducts above: boosts
    /// the owning side's next `usage` hits of `element` by `bonus`.
    ElementalResonanceBoost { element: Element, bonus: i32, usage: UsageState },
    /// Heals the owning side's active character by 1 HP at `ROUND_START`,
    /// representative of location cards like Vanarana.
    RoundStartHeal(UsageState),
}

impl CombatStatus {
    fn boosted_elements(&self) -> Option<(&'static [Element], i32)> {
        match self {
            CombatStatus::DendroCore(_) => Some((&[Element::Pyro, Element::Electro], 2)),
            CombatStatus::CatalyzingField(_) => Some((&[Element::Electro, Element::Dendro], 1)),
            _ => None,
        }
    }
}

impl StatusBehavior for CombatStatus {
    fn preprocess(
        &self,
        _state: &GameState,
        pos: StaticTarget,
        stage: PreprocessStage,
        event: &mut Preprocessable,
    ) -> Option<Self> {
        match self {
            CombatStatus::DendroCore(usage) | CombatStatus::CatalyzingField(usage) => {
                if stage != PreprocessStage::DmgAmountPlus {
                    return Some(self.clone());
                }
                let (elements, bonus) = self.boosted_elements().unwrap();
                if let Some(dmg) = event.as_damage() {
                    if dmg.source.pid == pos.pid && elements.contains(&dmg.element) {
                        dmg.damage += bonus;
                        return usage.consume_one().map(|u| match self {
                            CombatStatus::DendroCore(_) => CombatStatus::DendroCore(u),
                            _ => CombatStatus::CatalyzingField(u),
                        });
                    }
                }
                Some(self.clone())
            }
            CombatStatus::Crystallize(shield) => {
                if stage == PreprocessStage::DmgAmountMinus {
                    if let Some(dmg) = event.as_damage() {
                        if dmg.target_pid == pos.pid {
                            let (remaining, next) = shield.absorb(dmg.damage);
                            dmg.damage = remaining;
                            return next.map(CombatStatus::Crystallize);
                        }
                    }
                }
                Some(self.clone())
            }
            CombatStatus::TeamWard(shield) => {
                if stage == PreprocessStage::DmgAmountMinus {
                    if let Some(dmg) = event.as_damage() {
                        if dmg.target_pid == pos.pid {
                            let (remaining, next) = shield.absorb(dmg.damage);
                            dmg.damage = remaining;
                            return next.map(CombatStatus::TeamWard);
                        }
                    }
                }
                Some(self.clone())
            }
            CombatStatus::ElementalResonanceBoost { element, bonus, usage } => {
                if stage == PreprocessStage::DmgAmountPlus {
                    if let Some(dmg) = event.as_damage() {
                        if dmg.source.pid == pos.pid && dmg.element == *element && *bonus != 0 {
                            dmg.damage += bonus;
                            return usage.consume_one().map(|u| CombatStatus::ElementalResonanceBoost {
                                element: *element,
                                bonus: *bonus,
                                usage: u,
                            });
                        }
                    }
                }
                Some(self.clone())
            }
            CombatStatus::RoundStartHeal(_) => Some(self.clone()),
        }
    }

    fn react_to_signal(
        &self,
        state: &GameState,
        pos: StaticTarget,
        signal: Signal,
    ) -> (Vec<Effect>, Option<Self>) {
        match self {
            CombatStatus::RoundStartHeal(usage) if signal == Signal::RoundStart => {
                match state.player(pos.pid).characters.active_character_id {
                    Some(active_id) => {
                        let effect = Effect::RecoverHp {
                            target: StaticTarget::character(pos.pid, active_id),
                            amount: 1,
                        };
                        (vec![effect], usage.consume_one().map(CombatStatus::RoundStartHeal))
                    }
                    None => (Vec::new(), Some(self.clone())),
                }
            }
            _ => (Vec::new(), Some(self.clone())),
        }
    }

    fn update(&self, other: &Self) -> Option<Self> {
        match (self, other) {
            (CombatStatus::DendroCore(a), CombatStatus::DendroCore(b)) => {
                Some(CombatStatus::DendroCore(a.merged_with(b)))
            }
            (CombatStatus::CatalyzingField(a), CombatStatus::CatalyzingField(b)) => {
                Some(CombatStatus::CatalyzingField(a.merged_with(b)))
            }
            (CombatStatus::Crystallize(a), CombatStatus::Crystallize(b)) => {
                Some(CombatStatus::Crystallize(a.merged_with(b)))
            }
            (CombatStatus::TeamWard(a), CombatStatus::TeamWard(b)) => {
                Some(CombatStatus::TeamWard(a.merged_with(b)))
            }
            (
                CombatStatus::ElementalResonanceBoost { usage: a, element, bonus },
                CombatStatus::ElementalResonanceBoost { usage: b, .. },
            ) => Some(CombatStatus::ElementalResonanceBoost {
                element: *element,
                bonus: *bonus,
                usage: a.merged_with(b),
            }),
            (CombatStatus::RoundStartHeal(a), CombatStatus::RoundStartHeal(b)) => {
                Some(CombatStatus::RoundStartHeal(a.merged_with(b)))
            }
            _ => Some(other.clone()),
        }
    }
}
