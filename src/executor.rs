//! `execute_effect`: the pure `Effect -> GameState -> (GameState,
//! Vec<Effect>)` step function (`spec.md` §4.3, §9 DESIGN NOTES "Effect
//! stack"), plus the damage-resolution algorithm (`spec.md` §4.4).

use crate::effect::{DynamicTarget, Effect, SignalScope};
use crate::element::{lookup_reaction, Element, Reaction};
use crate::game_state::GameState;
use crate::ids::{CharId, Pid, StaticTarget};
use crate::preprocess::{broadcast_inform, broadcast_signal, run_preprocess};
use crate::signal::{DamageType, DmgPEvent, Informable, PreprocessStage, Preprocessable, Signal};

/// Executes one effect against `state`, mutating it in place and
/// returning any further effects it produced (to be pushed onto the
/// effect stack by the caller in the order given, i.e. via
/// `push_many_fl`).
pub fn execute_effect(state: &mut GameState, effect: Effect) -> Vec<Effect> {
    match effect {
        Effect::ReferredDamage {
            source,
            target,
            element,
            amount,
        } => resolve_dynamic_damage(state, source, target, element, amount),

        Effect::SpecificDamage {
            source,
            target,
            target_pid,
            element,
            amount,
            damage_type,
        } => resolve_specific_damage(state, source, target, target_pid, element, amount, damage_type),

        Effect::RecoverHp { target, amount } => {
            if let Some(cid) = target.char_id() {
                if let Some(ch) = state.player_mut(target.pid).characters.get_mut(cid) {
                    if ch.alive {
                        let applied = ch.apply_hp_delta(amount);
                        if applied != 0 {
                            broadcast_inform(
                                state,
                                SignalScope::Everyone,
                                &Informable::Healing {
                                    target: cid,
                                    target_pid: target.pid,
                                    amount: applied.unsigned_abs() as u8,
                                },
                            );
                        }
                    }
                }
            }
            Vec::new()
        }

        Effect::ReviveRecoverHp { target, amount } => {
            if let Some(cid) = target.char_id() {
                if let Some(ch) = state.player_mut(target.pid).characters.get_mut(cid) {
                    if !ch.alive {
                        ch.apply_hp_delta(amount);
                    }
                }
            }
            Vec::new()
        }

        Effect::EnergyRecharge { target, amount } => {
            if let Some(cid) = target.char_id() {
                if let Some(ch) = state.player_mut(target.pid).characters.get_mut(cid) {
                    ch.gain_energy(amount);
                }
            }
            Vec::new()
        }

        Effect::EnergyDrain { target, amount } => {
            if let Some(cid) = target.char_id() {
                if let Some(ch) = state.player_mut(target.pid).characters.get_mut(cid) {
                    ch.set_energy(ch.energy.saturating_sub(amount));
                }
            }
            Vec::new()
        }

        Effect::AddCharacterStatus { target, status } => {
            with_character(state, target, |ch| {
                ch.character_statuses.add(status);
            });
            Vec::new()
        }
        Effect::OverrideCharacterStatus { target, status } => {
            with_character(state, target, |ch| ch.character_statuses.overwrite(status));
            Vec::new()
        }
        Effect::RemoveCharacterStatus { target, template } => {
            with_character(state, target, |ch| {
                ch.character_statuses.remove_kind(&template);
            });
            Vec::new()
        }

        Effect::AddEquipmentStatus { target, status } => {
            with_character(state, target, |ch| {
                ch.equipment.add(status);
            });
            Vec::new()
        }
        Effect::OverrideEquipmentStatus { target, status } => {
            with_character(state, target, |ch| ch.equipment.overwrite(status));
            Vec::new()
        }
        Effect::RemoveEquipmentStatus { target, template } => {
            with_character(state, target, |ch| {
                ch.equipment.remove_kind(&template);
            });
            Vec::new()
        }

        Effect::AddCharacterHiddenStatus { target, status } => {
            with_character(state, target, |ch| {
                ch.hidden_statuses.add(status);
            });
            Vec::new()
        }
        Effect::OverrideCharacterHiddenStatus { target, status } => {
            with_character(state, target, |ch| ch.hidden_statuses.overwrite(status));
            Vec::new()
        }
        Effect::RemoveCharacterHiddenStatus { target, template } => {
            with_character(state, target, |ch| {
                ch.hidden_statuses.remove_kind(&template);
            });
            Vec::new()
        }

        Effect::AddCombatStatus { pid, status } => {
            state.player_mut(pid).combat_statuses.add(status);
            Vec::new()
        }
        Effect::OverrideCombatStatus { pid, status } => {
            state.player_mut(pid).combat_statuses.overwrite(status);
            Vec::new()
        }
        Effect::RemoveCombatStatus { pid, template } => {
            state.player_mut(pid).combat_statuses.remove_kind(&template);
            Vec::new()
        }

        Effect::AddSummonStatus { pid, status } => {
            state.player_mut(pid).summons.add(status);
            Vec::new()
        }
        Effect::OverrideSummonStatus { pid, status } => {
            state.player_mut(pid).summons.overwrite(status);
            Vec::new()
        }
        Effect::RemoveSummonStatus { pid, template } => {
            state.player_mut(pid).summons.remove_kind(&template);
            Vec::new()
        }

        Effect::AddSupportStatus { pid, status } => {
            state.player_mut(pid).supports.insert(status);
            Vec::new()
        }
        Effect::OverrideSupportStatus { pid, status } => {
            let slot = state
                .player(pid)
                .supports
                .iter()
                .find(|(_, s)| std::mem::discriminant(*s) == std::mem::discriminant(&status))
                .map(|(slot, _)| slot);
            match slot {
                Some(slot) => {
                    if let Some(slot_ref) = state.player_mut(pid).supports.get_mut(slot) {
                        *slot_ref = status;
                    }
                }
                None => {
                    state.player_mut(pid).supports.insert(status);
                }
            }
            Vec::new()
        }
        Effect::RemoveSupportStatus { pid, template } => {
            let slot = state
                .player(pid)
                .supports
                .iter()
                .find(|(_, s)| std::mem::discriminant(*s) == std::mem::discriminant(&template))
                .map(|(slot, _)| slot);
            if let Some(slot) = slot {
                state.player_mut(pid).supports.remove(slot);
            }
            Vec::new()
        }

        Effect::AddPlayerHiddenStatus { pid, status } => {
            state.player_mut(pid).hidden_statuses.add(status);
            Vec::new()
        }
        Effect::OverridePlayerHiddenStatus { pid, status } => {
            state.player_mut(pid).hidden_statuses.overwrite(status);
            Vec::new()
        }
        Effect::RemovePlayerHiddenStatus { pid, template } => {
            state.player_mut(pid).hidden_statuses.remove_kind(&template);
            Vec::new()
        }

        Effect::AliveMarkChecker { .. } | Effect::DefeatedMarkChecker { .. } => Vec::new(),

        Effect::DeathCheckChecker => {
            for pid in GameState::both_pids() {
                check_deaths_for(state, pid);
            }
            Vec::new()
        }

        Effect::SwapCharacter { pid, to } => {
            perform_swap(state, pid, to);
            Vec::new()
        }
        Effect::ForwardSwap { pid } => {
            if let Some(active) = state.player(pid).characters.active_character_id {
                if let Some(next) = state.player(pid).characters.next_alive_after(active) {
                    perform_swap(state, pid, next);
                }
            }
            Vec::new()
        }
        Effect::BackwardSwap { pid } => {
            if let Some(active) = state.player(pid).characters.active_character_id {
                if let Some(prev) = state.player(pid).characters.next_alive_before(active) {
                    perform_swap(state, pid, prev);
                }
            }
            Vec::new()
        }

        Effect::EffectsGroupStart | Effect::EffectsGroupEnd => Vec::new(),

        Effect::BroadcastSignal { scope, signal } => broadcast_signal(state, scope, signal),

        Effect::ConsecutiveAction(_) | Effect::TurnEnd(_) => Vec::new(),

        Effect::CastSkill { caster, skill } => {
            if let Some(cid) = caster.char_id() {
                crate::character::cast_skill_effects(state, caster.pid, cid, skill)
            } else {
                Vec::new()
            }
        }

        Effect::ApplyElementalAura { target, element } => {
            apply_aura_with_reaction(state, target, element)
        }

        Effect::DrawCards { pid, count } => {
            let kinds: Vec<_> = (0..count)
                .filter_map(|_| {
                    let p = state.player_mut(pid);
                    p.deck_cards.pop()
                })
                .collect();
            state.player_mut(pid).draw_cards(kinds);
            Vec::new()
        }
    }
}

fn with_character(state: &mut GameState, target: StaticTarget, f: impl FnOnce(&mut crate::character::Character)) {
    if let Some(cid) = target.char_id() {
        if let Some(ch) = state.player_mut(target.pid).characters.get_mut(cid) {
            f(ch);
        }
    }
}

fn perform_swap(state: &mut GameState, pid: Pid, to: CharId) {
    let from = state.player(pid).characters.active_character_id;
    if from == Some(to) {
        return;
    }
    state.player_mut(pid).characters.active_character_id = Some(to);
    if let Some(from_id) = from {
        broadcast_inform(
            state,
            SignalScope::Character(StaticTarget::character(pid, from_id)),
            &Informable::EquipmentDiscarding {
                character: from_id,
                pid,
            },
        );
    }
    broadcast_signal(
        state,
        SignalScope::Character(StaticTarget::character(pid, to)),
        Signal::SelfSwap,
    );
}

fn resolve_dynamic_damage(
    state: &mut GameState,
    source: StaticTarget,
    target: DynamicTarget,
    element: Element,
    amount: i32,
) -> Vec<Effect> {
    let make = |target_pid: Pid, cid: CharId| Effect::SpecificDamage {
        source,
        target: cid,
        target_pid,
        element,
        amount,
        damage_type: DamageType::Summon,
    };
    let effects: Vec<Effect> = match target {
        DynamicTarget::OwnActive => state
            .player(source.pid)
            .characters
            .active_character_id
            .map(|cid| make(source.pid, cid))
            .into_iter()
            .collect(),
        DynamicTarget::OpponentActive => state
            .player(source.pid.other())
            .characters
            .active_character_id
            .map(|cid| make(source.pid.other(), cid))
            .into_iter()
            .collect(),
        DynamicTarget::Specific(pid, cid) => vec![make(pid, cid)],
        DynamicTarget::AllOpponentCharacters => state
            .player(source.pid.other())
            .characters
            .ids_in_order()
            .into_iter()
            .map(|cid| make(source.pid.other(), cid))
            .collect(),
        DynamicTarget::OffFieldOpponentCharacters => {
            let opp = source.pid.other();
            let active = state.player(opp).characters.active_character_id;
            state
                .player(opp)
                .characters
                .ids_in_order()
                .into_iter()
                .filter(|&cid| Some(cid) != active)
                .map(|cid| make(opp, cid))
                .collect()
        }
        DynamicTarget::AllOwnCharacters => state
            .player(source.pid)
            .characters
            .ids_in_order()
            .into_iter()
            .map(|cid| make(source.pid, cid))
            .collect(),
    };
    effects
}

/// The damage-resolution algorithm (`spec.md` §4.4, steps 1-9).
fn resolve_specific_damage(
    state: &mut GameState,
    source: StaticTarget,
    target: CharId,
    target_pid: Pid,
    element: Element,
    amount: i32,
    damage_type: DamageType,
) -> Vec<Effect> {
    if !state
        .player(target_pid)
        .characters
        .get(target)
        .map(|c| c.alive)
        .unwrap_or(false)
    {
        return Vec::new();
    }

    let mut event = Preprocessable::Damage(DmgPEvent {
        source,
        target,
        target_pid,
        element,
        damage: amount,
        reaction: None,
        damage_type,
    });
    run_preprocess(state, source.pid, PreprocessStage::DmgElement, &mut event);

    let mut secondary = Vec::new();
    {
        let dmg = event.as_damage().expect("damage event");
        if let Some(ch) = state.player_mut(target_pid).characters.get_mut(target) {
            if dmg.element.is_aurable() {
                let existing = ch.elemental_aura.elements().first().copied();
                if let Some(aura_elem) = existing {
                    if let Some(reaction) = lookup_reaction(dmg.element, aura_elem) {
                        dmg.reaction = Some(reaction);
                        dmg.damage += reaction.bonus_damage() as i32;
                        ch.elemental_aura.remove(aura_elem);
                        secondary = reaction_secondary_effects(source, target_pid, target, reaction);
                    } else {
                        ch.elemental_aura.apply(dmg.element);
                    }
                } else {
                    ch.elemental_aura.apply(dmg.element);
                }
            }
        }
    }
    run_preprocess(state, source.pid, PreprocessStage::DmgReaction, &mut event);
    run_preprocess(state, source.pid, PreprocessStage::DmgAmountPlus, &mut event);
    run_preprocess(state, source.pid, PreprocessStage::DmgAmountMinus, &mut event);
    run_preprocess(state, source.pid, PreprocessStage::DmgAmountMul, &mut event);

    let dmg = event.as_damage().expect("damage event").clone();
    let final_amount = dmg.damage.max(0);
    let (lethal, actual) = if let Some(ch) = state.player_mut(target_pid).characters.get_mut(target) {
        let before_alive = ch.alive;
        ch.apply_hp_delta(-final_amount);
        (before_alive && !ch.alive, final_amount)
    } else {
        (false, 0)
    };

    broadcast_inform(
        state,
        SignalScope::Everyone,
        &Informable::DmgDealt {
            source,
            target,
            target_pid,
            element: dmg.element,
            amount: actual as u8,
        },
    );
    if let Some(reaction) = dmg.reaction {
        broadcast_inform(
            state,
            SignalScope::Everyone,
            &Informable::ReactionTriggered {
                target,
                target_pid,
                reaction,
            },
        );
    }
    if lethal {
        broadcast_inform(
            state,
            SignalScope::Everyone,
            &Informable::CharacterDeath {
                character: target,
                pid: target_pid,
            },
        );
    }

    check_deaths_for(state, target_pid);
    secondary
}

/// Secondary effects the reaction table attaches to the triggering hit
/// (`spec.md` §4.4 reaction table): swirl/superconduct/electro-charged
/// piercing splash, overloaded forward-swap, burning/bloom/quicken/
/// crystallize byproduct statuses, frozen debuff.
fn reaction_secondary_effects(
    source: StaticTarget,
    target_pid: Pid,
    target: CharId,
    reaction: Reaction,
) -> Vec<Effect> {
    use crate::statuses::{CharacterStatus, CombatStatus, SummonStatus};
    use crate::statuses::mixins::{DurationState, StackedShieldState, UsageState};

    match reaction {
        Reaction::Overloaded => vec![Effect::ForwardSwap { pid: target_pid }],
        Reaction::ElectroCharged | Reaction::Superconduct => vec![Effect::ReferredDamage {
            source,
            target: DynamicTarget::OffFieldOpponentCharacters,
            element: Element::Piercing,
            amount: 1,
        }],
        Reaction::Swirl => vec![Effect::ReferredDamage {
            source,
            target: DynamicTarget::OffFieldOpponentCharacters,
            element: Element::Piercing,
            amount: 1,
        }],
        Reaction::Burning => vec![Effect::AddSummonStatus {
            pid: source.pid,
            status: SummonStatus::BurningFlame(UsageState::new(2, 2)),
        }],
        Reaction::Bloom => vec![Effect::AddCombatStatus {
            pid: source.pid,
            status: CombatStatus::DendroCore(UsageState::new(1, 1)),
        }],
        Reaction::Quicken => vec![Effect::AddCombatStatus {
            pid: source.pid,
            status: CombatStatus::CatalyzingField(UsageState::new(2, 2)),
        }],
        Reaction::Crystallize => vec![Effect::AddCombatStatus {
            pid: source.pid,
            status: CombatStatus::Crystallize(StackedShieldState::new(1, 2, 1)),
        }],
        Reaction::Frozen => vec![Effect::AddCharacterStatus {
            target: StaticTarget::character(target_pid, target),
            status: CharacterStatus::Frozen(DurationState::new(1)),
        }],
        Reaction::Vaporize | Reaction::Melt => Vec::new(),
    }
}

/// Applies `element` to `target`'s aura directly, resolving whatever
/// reaction follows without an accompanying damage instance (used by
/// cards/skills that apply an aura without dealing damage).
fn apply_aura_with_reaction(state: &mut GameState, target: StaticTarget, element: Element) -> Vec<Effect> {
    let cid = match target.char_id() {
        Some(cid) => cid,
        None => return Vec::new(),
    };
    let mut secondary = Vec::new();
    if let Some(ch) = state.player_mut(target.pid).characters.get_mut(cid) {
        if ch.alive && element.is_aurable() {
            let existing = ch.elemental_aura.elements().first().copied();
            match existing.and_then(|aura| lookup_reaction(element, aura).map(|r| (aura, r))) {
                Some((aura, reaction)) => {
                    ch.elemental_aura.remove(aura);
                    secondary = reaction_secondary_effects(target, target.pid, cid, reaction);
                }
                None => ch.elemental_aura.apply(element),
            }
        }
    }
    secondary
}

fn check_deaths_for(state: &mut GameState, pid: Pid) {
    let already_pending = state
        .player(pid)
        .hidden_statuses
        .as_slice()
        .iter()
        .any(|s| matches!(s, crate::statuses::PlayerHiddenStatus::DeathSwapPending));
    if already_pending {
        return;
    }
    let dead_ids: Vec<CharId> = state
        .player(pid)
        .characters
        .iter()
        .filter(|c| !c.alive)
        .map(|c| c.id)
        .collect();
    for cid in dead_ids {
        let revival = state
            .player(pid)
            .characters
            .get(cid)
            .and_then(|c| {
                c.character_statuses
                    .as_slice()
                    .iter()
                    .find(|s| s.revivable())
                    .cloned()
            });
        if let Some(crate::statuses::CharacterStatus::Revival { heal_to, .. }) = revival {
            if let Some(ch) = state.player_mut(pid).characters.get_mut(cid) {
                ch.character_statuses.retain(|s| {
                    !matches!(s, crate::statuses::CharacterStatus::Revival { .. })
                });
                ch.apply_hp_delta(heal_to as i32);
            }
            continue;
        }
        if state.player(pid).characters.active_character_id == Some(cid) {
            state.player_mut(pid).hidden_statuses.add(crate::statuses::PlayerHiddenStatus::DeathSwapPending);
        }
    }
}
