//! Supports (`spec.md` §4.5 `Support`): slotted, stateful entities
//! typically providing a resource (dice, cards, healing) once per round.

use crate::effect::Effect;
use crate::game_state::GameState;
use crate::ids::StaticTarget;
use crate::signal::{PreprocessStage, Preprocessable, Signal};
use crate::status::StatusBehavior;
use crate::statuses::mixins::UsageState;

#[derive(Debug, Clone, PartialEq)]
pub enum SupportStatus {
    /// A generic "draw a card at round start, N uses" support,
    /// representative of location cards (Vanarana, Tenshukaku, ...).
    CardDrawEachRound(UsageState),
    /// A generic "once per round, the owner's first card of the round
    /// costs 1 less" companion support.
    CostDiscountCompanion { used_this_round: bool },
    /// Heals the owning side's active character by 1 HP at `ROUND_START`,
    /// N uses, representative of support cards like Liben.
    HealingCompanion(UsageState),
    /// Recharges the owning side's active character's energy by 1 at
    /// `ROUND_START`, N uses, representative of NRE-style supports.
    EnergyCompanion(UsageState),
}

impl StatusBehavior for SupportStatus {
    fn preprocess(
        &self,
        _state: &GameState,
        _pos: StaticTarget,
        stage: PreprocessStage,
        event: &mut Preprocessable,
    ) -> Option<Self> {
        match self {
            SupportStatus::CostDiscountCompanion { used_this_round: false }
                if stage == PreprocessStage::Card1CostAny =>
            {
                if let Some(cost) = event.as_cost() {
                    if cost.cost.any_req() > 0 {
                        cost.cost = cost.cost.cost_less_any(1);
                        return Some(SupportStatus::CostDiscountCompanion { used_this_round: true });
                    }
                }
                Some(self.clone())
            }
            _ => Some(self.clone()),
        }
    }

    fn react_to_signal(
        &self,
        state: &GameState,
        pos: StaticTarget,
        signal: Signal,
    ) -> (Vec<Effect>, Option<Self>) {
        match self {
            SupportStatus::CardDrawEachRound(usage) if signal == Signal::RoundStart => (
                vec![Effect::DrawCards { pid: pos.pid, count: 1 }],
                usage.consume_one().map(SupportStatus::CardDrawEachRound),
            ),
            SupportStatus::CostDiscountCompanion { .. } if signal == Signal::RoundEnd => (
                Vec::new(),
                Some(SupportStatus::CostDiscountCompanion { used_this_round: false }),
            ),
            SupportStatus::HealingCompanion(usage) if signal == Signal::RoundStart => {
                match state.player(pos.pid).characters.active_character_id {
                    Some(active_id) => (
                        vec![Effect::RecoverHp {
                            target: StaticTarget::character(pos.pid, active_id),
                            amount: 1,
                        }],
                        usage.consume_one().map(SupportStatus::HealingCompanion),
                    ),
                    None => (Vec::new(), Some(self.clone())),
                }
            }
            SupportStatus::EnergyCompanion(usage) if signal == Signal::RoundStart => {
                match state.player(pos.pid).characters.active_character_id {
                    Some(active_id) => (
                        vec![Effect::EnergyRecharge {
                            target: StaticTarget::character(pos.pid, active_id),
                            amount: 1,
                        }],
                        usage.consume_one().map(SupportStatus::EnergyCompanion),
                    ),
                    None => (Vec::new(), Some(self.clone())),
                }
            }
            _ => (Vec::new(), Some(self.clone())),
        }
    }

    fn update(&self, other: &Self) -> Option<Self> {
        match (self, other) {
            (SupportStatus::CardDrawEachRound(a), SupportStatus::CardDrawEachRound(b)) => {
                Some(SupportStatus::CardDrawEachRound(a.merged_with(b)))
            }
            (SupportStatus::HealingCompanion(a), SupportStatus::HealingCompanion(b)) => {
                Some(SupportStatus::HealingCompanion(a.merged_with(b)))
            }
            (SupportStatus::EnergyCompanion(a), SupportStatus::EnergyCompanion(b)) => {
                Some(SupportStatus::EnergyCompanion(a.merged_with(b)))
            }
            _ => Some(other.clone()),
        }
    }
}
