//! Summons (`spec.md` §4.5 `Summon`): stateful field entities that usually
//! deal damage on `END_ROUND_CHECK_OUT` and tick down a usage count.

use crate::effect::Effect;
use crate::element::Element;
use crate::game_state::GameState;
use crate::ids::StaticTarget;
use crate::signal::Signal;
use crate::status::StatusBehavior;
use crate::statuses::mixins::UsageState;

#[derive(Debug, Clone, PartialEq)]
pub enum SummonStatus {
    /// Burning Flame: a Burning-reaction byproduct that deals 1 Pyro
    /// damage to the opponent's active character at round end, for up to
    /// 2 rounds.
    BurningFlame(UsageState),
    /// A generic elemental summon dealing `damage` of `element` at round
    /// end, representative of the broader catalogue (Oz, Pyronado, ...).
    Generic {
        element: Element,
        damage: i32,
        usage: UsageState,
    },
    /// A hybrid offense/defense summon, representative of totem-style
    /// entities (Ushi, Baron Bunny): deals `damage` of `element` at round
    /// end and simultaneously grants its owner a team fixed shield
    /// absorbing the same amount.
    GenericWithShield {
        element: Element,
        damage: i32,
        usage: UsageState,
    },
}

impl StatusBehavior for SummonStatus {
    fn react_to_signal(
        &self,
        _state: &GameState,
        pos: StaticTarget,
        signal: Signal,
    ) -> (Vec<Effect>, Option<Self>) {
        if signal != Signal::EndRoundCheckOut {
            return (Vec::new(), Some(self.clone()));
        }
        match self {
            SummonStatus::BurningFlame(usage) => {
                let effect = Effect::ReferredDamage {
                    source: pos,
                    target: crate::effect::DynamicTarget::OpponentActive,
                    element: Element::Pyro,
                    amount: 1,
                };
                (vec![effect], usage.consume_one().map(SummonStatus::BurningFlame))
            }
            SummonStatus::Generic {
                element,
                damage,
                usage,
            } => {
                let effect = Effect::ReferredDamage {
                    source: pos,
                    target: crate::effect::DynamicTarget::OpponentActive,
                    element: *element,
                    amount: *damage,
                };
                (
                    vec![effect],
                    usage.consume_one().map(|u| SummonStatus::Generic {
                        element: *element,
                        damage: *damage,
                        usage: u,
                    }),
                )
            }
            SummonStatus::GenericWithShield {
                element,
                damage,
                usage,
            } => {
                let effects = vec![
                    Effect::ReferredDamage {
                        source: pos,
                        target: crate::effect::DynamicTarget::OpponentActive,
                        element: *element,
                        amount: *damage,
                    },
                    Effect::AddCombatStatus {
                        pid: pos.pid,
                        status: crate::statuses::CombatStatus::TeamWard(
                            crate::statuses::mixins::FixedShieldState::new(1, 1, *damage),
                        ),
                    },
                ];
                (
                    effects,
                    usage.consume_one().map(|u| SummonStatus::GenericWithShield {
                        element: *element,
                        damage: *damage,
                        usage: u,
                    }),
                )
            }
        }
    }

    fn update(&self, other: &Self) -> Option<Self> {
        match (self, other) {
            (SummonStatus::BurningFlame(a), SummonStatus::BurningFlame(b)) => {
                Some(SummonStatus::BurningFlame(a.merged_with(b)))
            }
            (
                SummonStatus::Generic { usage: a, element, damage },
                SummonStatus::Generic { usage: b, .. },
            ) => Some(SummonStatus::Generic {
                element: *element,
                damage: *damage,
                usage: a.merged_with(b),
            }),
            (
                SummonStatus::GenericWithShield { usage: a, element, damage },
                SummonStatus::GenericWithShield { usage: b, .. },
            ) => Some(SummonStatus::GenericWithShield {
                element: *element,
                damage: *damage,
                usage: a.merged_with(b),
            }),
            _ => Some(other.clone()),
        }
    }
}
