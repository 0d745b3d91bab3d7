//! `legal_actions(state, pid)`: an eager enumeration of every legal
//! `PlayerAction`, chosen over a lazy decision tree because every category's
//! branching factor is small and bounded (§4.6; see DESIGN.md Open
//! Question). Dice-payment enumeration delegates to
//! `dice::basically_satisfy`.

use crate::action::{base_swap_cost, PlayerAction};
use crate::character::SkillKind;
use crate::dice::basically_satisfy;
use crate::element::Element;
use crate::game_state::GameState;
use crate::ids::Pid;
use crate::phase::Phase;
use crate::preprocess::preprocess_cost;
use crate::signal::CostKind;
use crate::statuses::PlayerHiddenStatus;

/// Returns every legal action for `pid` given the current state. Empty if
/// it is not `pid`'s turn to act right now.
pub fn legal_actions(state: &GameState, pid: Pid) -> Vec<PlayerAction> {
    if !state.effect_stack.is_empty() {
        return Vec::new();
    }

    let player = state.player(pid);
    let death_swap_pending = player
        .hidden_statuses
        .as_slice()
        .iter()
        .any(|s| matches!(s, PlayerHiddenStatus::DeathSwapPending));
    if death_swap_pending {
        return player
            .characters
            .iter()
            .filter(|c| c.alive)
            .map(|c| PlayerAction::DeathSwap { to: c.id })
            .collect();
    }

    if state.phase != Phase::Action {
        return Vec::new();
    }
    if state.active_player != pid || player.declared_end {
        return Vec::new();
    }

    let mut actions = vec![PlayerAction::EndRound];

    let Some(active_id) = player.characters.active_character_id else {
        return actions;
    };
    let Some(active_ch) = player.characters.get(active_id) else {
        return actions;
    };
    let active_element = crate::characters::descriptor(active_ch.kind_id).element;

    // SwapAction: any other alive character, paid from the player's pool
    // once cost-reduction statuses (`spec.md` §4.6 "Payment enumeration
    // consults the cost preprocessor chain") have been honoured.
    for ch in player.characters.iter() {
        if ch.id == active_id || !ch.alive {
            continue;
        }
        let cost = effective_cost(state, pid, CostKind::Swap, base_swap_cost());
        if let Some(payment) = basically_satisfy(&cost, &player.dice) {
            actions.push(PlayerAction::Swap {
                to: ch.id,
                payment,
            });
        }
    }

    // SkillAction: every non-passive skill of the active character whose
    // energy requirement (for bursts) and preprocessed dice cost can both
    // be paid.
    let descriptor = crate::characters::descriptor(active_ch.kind_id);
    for skill in &descriptor.skills {
        if skill.kind == SkillKind::Passive {
            continue;
        }
        if skill.kind == SkillKind::ElementalBurst && active_ch.energy < skill.energy_cost {
            continue;
        }
        let cost = effective_cost(state, pid, CostKind::Skill, skill.dice_cost.clone());
        if let Some(payment) = basically_satisfy(&cost, &player.dice) {
            actions.push(PlayerAction::CastSkill {
                caster: active_id,
                skill: skill.id,
                payment,
            });
        }
    }

    // CardAction: every hand card whose target requirement can be filled
    // and whose preprocessed cost can be paid.
    for (&kind, &count) in player.hand_cards.iter() {
        if count == 0 {
            continue;
        }
        let card = crate::cards::descriptor(kind);
        let cost = effective_cost(state, pid, CostKind::Card1, card.dice_cost.clone());
        let Some(payment) = basically_satisfy(&cost, &player.dice) else {
            continue;
        };
        match card.target_requirement {
            crate::card::CardTargetRequirement::None => {
                actions.push(PlayerAction::PlayCard {
                    card: kind,
                    target: None,
                    payment,
                });
            }
            crate::card::CardTargetRequirement::OwnActiveCharacter => {
                actions.push(PlayerAction::PlayCard {
                    card: kind,
                    target: Some(active_id),
                    payment,
                });
            }
            crate::card::CardTargetRequirement::OwnCharacter => {
                for ch in player.characters.iter().filter(|c| c.alive) {
                    actions.push(PlayerAction::PlayCard {
                        card: kind,
                        target: Some(ch.id),
                        payment: payment.clone(),
                    });
                }
            }
        }
    }

    // ElementalTuningAction: discard a hand card whose own dice cost is not
    // dominated by the active character's element, to convert one
    // non-matching, non-Omni die of the pool into that element.
    for (&kind, &count) in player.hand_cards.iter() {
        if count == 0 {
            continue;
        }
        let card = crate::cards::descriptor(kind);
        if card_matches_element(card, active_element) {
            continue;
        }
        for element in Element::AURABLE {
            if element == active_element {
                continue;
            }
            if player.dice.get(element) > 0 {
                actions.push(PlayerAction::ElementalTuning {
                    card: kind,
                    die: element,
                });
            }
        }
    }

    actions
}

/// A card "matches" `element` if its dice cost carries an elemental
/// requirement wholly of that element and no other aurable element
/// (`spec.md` §10 Elemental Tuning supplement).
fn card_matches_element(card: &crate::card::CardDescriptor, element: Element) -> bool {
    let elemental = card.dice_cost.elemental();
    !elemental.is_empty() && elemental.keys().all(|&e| e == element)
}

/// Previews the cost-preprocessor chain's effect on `base` without
/// committing any of it: a scratch clone absorbs whatever a discount
/// status's `preprocess` hook would otherwise consume (e.g. an artifact's
/// once-per-round flag), so that evaluating one candidate action never
/// taints the pool of other candidates evaluated alongside it in this
/// same enumeration. `action_step` is what actually commits the
/// discount, by calling `preprocess_cost` against the real state.
fn effective_cost(state: &GameState, pid: Pid, kind: CostKind, base: crate::dice::DiceCost) -> crate::dice::DiceCost {
    let mut scratch = state.clone();
    preprocess_cost(&mut scratch, pid, kind, base)
}
