//! Visible, character-scoped buffs and debuffs (`spec.md` §4.5
//! `CharacterStatus`): infusions, Frozen, prepare-skill wind-ups, revival
//! wards, personal shields, and short buffs.

use crate::character::SkillId;
use crate::effect::Effect;
use crate::element::Element;
use crate::game_state::GameState;
use crate::ids::StaticTarget;
use crate::signal::{DamageType, PreprocessStage, Preprocessable, Signal};
use crate::status::StatusBehavior;
use crate::statuses::mixins::{DurationState, FixedShieldState, UsageState};

#[derive(Debug, Clone, PartialEq)]
pub enum CharacterStatus {
    /// Applied by the Frozen reaction. While active the character cannot
    /// act (enforced by the legal-action generator, not here); removed
    /// early and adds +2 flat damage if hit by Physical or Pyro before its
    /// duration naturally expires (`spec.md` §4.4 reaction table).
    Frozen(DurationState),
    /// `_InfusionStatus`: rewrites `Physical` to `element` on the owner's
    /// normal attacks, optionally boosting matched-element damage.
    Infusion { element: Element, bonus_on_match: i32 },
    /// A personal fixed shield (`spec.md` §4.5 `FixedShieldStatus`).
    PersonalShield(FixedShieldState),
    /// `PrepareSkillStatus`: a wind-up that automatically casts `skill` on
    /// this character's next `ACT_PRE_SKILL` signal, then removes itself;
    /// also removed immediately if the character swaps out
    /// (`spec.md` §8 scenario 4).
    PrepareSkill { skill: SkillId },
    /// `RevivalStatus`: consulted by `DeathCheckChecker`; revives the
    /// owner at `heal_to` HP, consuming one use.
    Revival { heal_to: u8, uses_left: u8 },
    /// A short heal-over-time / well-fed buff, duration-counted.
    Satiated(DurationState),
    /// A slow-burn debuff placed on an opponent character by an event card
    /// (not a reaction byproduct -- `Reaction::Burning` instead spawns a
    /// `SummonStatus` on the attacker's side, `spec.md` §4.4 reaction
    /// table): deals 1 damage to its owner at `ROUND_END`, ticking down.
    Burning(DurationState),
    /// A capped self-buff boosting the owner's own next `usage` hits by
    /// `bonus`, consumed one hit at a time.
    AttackUp { bonus: i32, usage: UsageState },
    /// A full damage ward: while active, any hit against the owner is
    /// reduced to zero (duration-counted, not usage-counted, so it blocks
    /// every hit for its remaining rounds rather than a fixed hit count).
    Immune(DurationState),
}

impl StatusBehavior for CharacterStatus {
    fn preprocess(
        &self,
        _state: &GameState,
        pos: StaticTarget,
        stage: PreprocessStage,
        event: &mut Preprocessable,
    ) -> Option<Self> {
        match self {
            CharacterStatus::Frozen(_) => {
                if stage == PreprocessStage::DmgAmountPlus {
                    if let Some(dmg) = event.as_damage() {
                        if dmg.target_pid == pos.pid
                            && Some(dmg.target) == pos.char_id()
                            && matches!(dmg.element, Element::Physical | Element::Pyro)
                        {
                            dmg.damage += 2;
                            return None;
                        }
                    }
                }
                Some(self.clone())
            }
            CharacterStatus::Infusion {
                element,
                bonus_on_match,
            } => {
                if stage == PreprocessStage::DmgElement {
                    if let Some(dmg) = event.as_damage() {
                        if dmg.source == pos
                            && dmg.damage_type == DamageType::NormalAttack
                            && dmg.element == Element::Physical
                        {
                            dmg.element = *element;
                        }
                    }
                } else if stage == PreprocessStage::DmgAmountPlus {
                    if let Some(dmg) = event.as_damage() {
                        if dmg.source == pos && dmg.element == *element && *bonus_on_match != 0 {
                            dmg.damage += bonus_on_match;
                        }
                    }
                }
                Some(self.clone())
            }
            CharacterStatus::PersonalShield(shield) => {
                if stage == PreprocessStage::DmgAmountMinus {
                    if let Some(dmg) = event.as_damage() {
                        if dmg.target_pid == pos.pid && Some(dmg.target) == pos.char_id() {
                            let (remaining, next) = shield.absorb(dmg.damage);
                            dmg.damage = remaining;
                            return next.map(CharacterStatus::PersonalShield);
                        }
                    }
                }
                Some(self.clone())
            }
            CharacterStatus::AttackUp { bonus, usage } => {
                if stage == PreprocessStage::DmgAmountPlus {
                    if let Some(dmg) = event.as_damage() {
                        if dmg.source == pos && *bonus != 0 {
                            dmg.damage += bonus;
                            return usage
                                .consume_one()
                                .map(|u| CharacterStatus::AttackUp { bonus: *bonus, usage: u });
                        }
                    }
                }
                Some(self.clone())
            }
            CharacterStatus::Immune(_) => {
                if stage == PreprocessStage::DmgAmountMinus {
                    if let Some(dmg) = event.as_damage() {
                        if dmg.target_pid == pos.pid && Some(dmg.target) == pos.char_id() {
                            dmg.damage = 0;
                        }
                    }
                }
                Some(self.clone())
            }
            _ => Some(self.clone()),
        }
    }

    fn react_to_signal(
        &self,
        _state: &GameState,
        pos: StaticTarget,
        signal: Signal,
    ) -> (Vec<Effect>, Option<Self>) {
        match self {
            CharacterStatus::Frozen(d) if signal == Signal::RoundEnd => {
                (Vec::new(), d.tick().map(CharacterStatus::Frozen))
            }
            CharacterStatus::Satiated(d) if signal == Signal::RoundEnd => {
                (Vec::new(), d.tick().map(CharacterStatus::Satiated))
            }
            CharacterStatus::Burning(d) if signal == Signal::RoundEnd => {
                let effect = Effect::SpecificDamage {
                    source: pos,
                    target: pos.char_id().expect("CharacterStatus lives on a character"),
                    target_pid: pos.pid,
                    element: Element::Piercing,
                    amount: 1,
                    damage_type: DamageType::Reaction,
                };
                (vec![effect], d.tick().map(CharacterStatus::Burning))
            }
            CharacterStatus::Immune(d) if signal == Signal::RoundEnd => {
                (Vec::new(), d.tick().map(CharacterStatus::Immune))
            }
            CharacterStatus::PrepareSkill { skill } if signal == Signal::ActPreSkill => {
                (vec![Effect::CastSkill { caster: pos, skill: *skill }], None)
            }
            CharacterStatus::PrepareSkill { .. } if signal == Signal::SelfSwap => {
                (Vec::new(), None)
            }
            _ => (Vec::new(), Some(self.clone())),
        }
    }

    fn update(&self, other: &Self) -> Option<Self> {
        match (self, other) {
            (CharacterStatus::Frozen(a), CharacterStatus::Frozen(b)) => {
                Some(CharacterStatus::Frozen(DurationState::new(
                    a.rounds_left.max(b.rounds_left),
                )))
            }
            (CharacterStatus::PersonalShield(a), CharacterStatus::PersonalShield(b)) => {
                Some(CharacterStatus::PersonalShield(a.merged_with(b)))
            }
            (CharacterStatus::Revival { uses_left: a, heal_to }, CharacterStatus::Revival { uses_left: b, .. }) => {
                Some(CharacterStatus::Revival { heal_to: *heal_to, uses_left: a + b })
            }
            (CharacterStatus::Burning(a), CharacterStatus::Burning(b)) => {
                Some(CharacterStatus::Burning(DurationState::new(a.rounds_left.max(b.rounds_left))))
            }
            (CharacterStatus::AttackUp { bonus, usage: a }, CharacterStatus::AttackUp { usage: b, .. }) => {
                Some(CharacterStatus::AttackUp { bonus: *bonus, usage: a.merged_with(b) })
            }
            (CharacterStatus::Immune(a), CharacterStatus::Immune(b)) => {
                Some(CharacterStatus::Immune(DurationState::new(a.rounds_left.max(b.rounds_left))))
            }
            _ => Some(other.clone()),
        }
    }
}

impl CharacterStatus {
    pub fn revivable(&self) -> bool {
        matches!(self, CharacterStatus::Revival { uses_left, .. } if *uses_left > 0)
    }
}
