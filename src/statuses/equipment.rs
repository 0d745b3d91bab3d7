//! Equipment statuses: weapons, artifacts, and talents (`spec.md` §4.5).
//! All three live on a character in the same `equipment` container and
//! are visited before ordinary `CharacterStatus`es in the preprocessor
//! pipeline (`spec.md` §4.4 visitation order, item 1).

use crate::effect::Effect;
use crate::game_state::GameState;
use crate::ids::StaticTarget;
use crate::signal::{DamageType, PreprocessStage, Preprocessable, Signal};
use crate::status::StatusBehavior;

#[derive(Debug, Clone, PartialEq)]
pub enum EquipmentStatus {
    /// A generic weapon: boosts the wearer's own normal-attack /
    /// elemental-skill / elemental-burst damage by a flat amount
    /// (`spec.md` §4.5 "WeaponEquipment (+ base damage boost +1 on direct
    /// character damage)").
    Weapon { boost: i32 },
    /// A generic artifact: once per round, discounts the wearer's next
    /// elemental-skill cost by one die of any kind.
    Artifact { used_this_round: bool },
    /// Engulfing Lightning: on `ROUND_START`, if the wearer has 0 energy,
    /// recharges it by 1 (`spec.md` §8 scenario 5).
    EngulfingLightning,
    /// A talent's damage-boosting clause, narrower than `Weapon`: only
    /// boosts the wearer's hits of one specific `DamageType` (typically
    /// its elemental burst), by `bonus`.
    TalentDamageBoost { applies_to: DamageType, bonus: i32 },
    /// An artifact that heals its wearer by `amount` at `ROUND_START`.
    ArtifactRoundStartHeal { amount: u8 },
}

impl StatusBehavior for EquipmentStatus {
    fn preprocess(
        &self,
        _state: &GameState,
        pos: StaticTarget,
        stage: PreprocessStage,
        event: &mut Preprocessable,
    ) -> Option<Self> {
        match self {
            EquipmentStatus::Weapon { boost } => {
                if stage == PreprocessStage::DmgAmountPlus {
                    if let Some(dmg) = event.as_damage() {
                        let is_owner_hit = dmg.source == pos
                            && matches!(
                                dmg.damage_type,
                                DamageType::NormalAttack
                                    | DamageType::ElementalSkill
                                    | DamageType::ElementalBurst
                            );
                        if is_owner_hit {
                            dmg.damage += boost;
                        }
                    }
                }
                Some(self.clone())
            }
            EquipmentStatus::Artifact { used_this_round } => {
                if *used_this_round {
                    return Some(self.clone());
                }
                if stage == PreprocessStage::SkillCostAny {
                    if let Some(cost) = event.as_cost() {
                        if cost.cost.any_req() > 0 {
                            cost.cost = cost.cost.cost_less_any(1);
                            return Some(EquipmentStatus::Artifact { used_this_round: true });
                        }
                    }
                }
                Some(self.clone())
            }
            EquipmentStatus::EngulfingLightning => Some(self.clone()),
            EquipmentStatus::TalentDamageBoost { applies_to, bonus } => {
                if stage == PreprocessStage::DmgAmountPlus {
                    if let Some(dmg) = event.as_damage() {
                        if dmg.source == pos && dmg.damage_type == *applies_to {
                            dmg.damage += bonus;
                        }
                    }
                }
                Some(self.clone())
            }
            EquipmentStatus::ArtifactRoundStartHeal { .. } => Some(self.clone()),
        }
    }

    fn react_to_signal(
        &self,
        state: &GameState,
        pos: StaticTarget,
        signal: Signal,
    ) -> (Vec<Effect>, Option<Self>) {
        match self {
            EquipmentStatus::Artifact { .. } if signal == Signal::RoundEnd => {
                (Vec::new(), Some(EquipmentStatus::Artifact { used_this_round: false }))
            }
            EquipmentStatus::EngulfingLightning if signal == Signal::RoundStart => {
                let owner_empty = pos
                    .char_id()
                    .and_then(|cid| state.player(pos.pid).characters.get(cid))
                    .map(|c| c.energy == 0)
                    .unwrap_or(false);
                if owner_empty {
                    (
                        vec![Effect::EnergyRecharge { target: pos, amount: 1 }],
                        Some(self.clone()),
                    )
                } else {
                    (Vec::new(), Some(self.clone()))
                }
            }
            EquipmentStatus::ArtifactRoundStartHeal { amount } if signal == Signal::RoundStart => (
                vec![Effect::RecoverHp { target: pos, amount: *amount as i32 }],
                Some(self.clone()),
            ),
            _ => (Vec::new(), Some(self.clone())),
        }
    }

    fn update(&self, other: &Self) -> Option<Self> {
        Some(other.clone())
    }
}
