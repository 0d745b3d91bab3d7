//! The fixed-order preprocessor and signal-broadcast visitation
//! (`spec.md` §4.4 "Order of visitation"). Every pass reads a snapshot of
//! `GameState` taken before the pass started (so statuses within one pass
//! never observe another status's update from the same pass, matching
//! `spec.md` §5 "Statuses updated during signal propagation see the
//! post-signal state only on the next signal") and writes results back to
//! the live state container by container.

use crate::dice::DiceCost;
use crate::effect::{Effect, SignalScope};
use crate::element::Element;
use crate::game_state::GameState;
use crate::ids::{Pid, StaticTarget};
use crate::signal::{
    CostKind, CostPEvent, Informable, PreprocessStage, Preprocessable, RollChancePEvent,
    RollInitPEvent, Signal,
};
use crate::status::{Statuses, StatusBehavior};

fn visit_preprocess_container<T: StatusBehavior>(
    snapshot: &GameState,
    container: &mut Statuses<T>,
    pos: StaticTarget,
    stage: PreprocessStage,
    event: &mut Preprocessable,
) {
    let items: Vec<T> = container.as_slice().to_vec();
    let mut kept = Vec::with_capacity(items.len());
    for item in items {
        if let Some(next) = item.preprocess(snapshot, pos, stage, event) {
            kept.push(next);
        }
    }
    container.replace_all(kept);
}

fn visit_signal_container<T: StatusBehavior>(
    snapshot: &GameState,
    container: &mut Statuses<T>,
    pos: StaticTarget,
    signal: Signal,
    effects: &mut Vec<Effect>,
) {
    let items: Vec<T> = container.as_slice().to_vec();
    let mut kept = Vec::with_capacity(items.len());
    for item in items {
        let (mut fx, next) = item.react_to_signal(snapshot, pos, signal);
        effects.append(&mut fx);
        if let Some(next) = next {
            kept.push(next);
        }
    }
    container.replace_all(kept);
}

fn visit_inform_container<T: StatusBehavior>(
    snapshot: &GameState,
    container: &mut Statuses<T>,
    pos: StaticTarget,
    info: &Informable,
) {
    let items: Vec<T> = container.as_slice().to_vec();
    let mut kept = Vec::with_capacity(items.len());
    for item in items {
        if let Some(next) = item.inform(snapshot, pos, info) {
            kept.push(next);
        }
    }
    container.replace_all(kept);
}

/// One player's ordered visitation groups: active character's equipment,
/// then character statuses, combat statuses, summons, supports, hidden
/// statuses (`spec.md` §4.4 items 1-5).
fn run_preprocess_for_player(
    snapshot: &GameState,
    state: &mut GameState,
    pid: Pid,
    stage: PreprocessStage,
    event: &mut Preprocessable,
) {
    if let Some(cid) = snapshot.player(pid).characters.active_character_id {
        let pos = StaticTarget::character(pid, cid);
        if let Some(ch) = state.player_mut(pid).characters.get_mut(cid) {
            visit_preprocess_container(snapshot, &mut ch.equipment, pos, stage, event);
            visit_preprocess_container(snapshot, &mut ch.character_statuses, pos, stage, event);
        }
    }
    visit_preprocess_container(
        snapshot,
        &mut state.player_mut(pid).combat_statuses,
        StaticTarget::combat(pid),
        stage,
        event,
    );
    {
        let items = state.player(pid).summons.as_slice().to_vec();
        let mut kept = Vec::with_capacity(items.len());
        for (i, item) in items.into_iter().enumerate() {
            let pos = StaticTarget::summon(pid, i as u32);
            if let Some(next) = item.preprocess(snapshot, pos, stage, event) {
                kept.push(next);
            }
        }
        state.player_mut(pid).summons.replace_all(kept);
    }
    {
        let slots: Vec<_> = state
            .player(pid)
            .supports
            .iter()
            .map(|(slot, s)| (slot, s.clone()))
            .collect();
        for (slot, item) in slots {
            let pos = StaticTarget::support(pid, slot);
            match item.preprocess(snapshot, pos, stage, event) {
                Some(next) => {
                    if let Some(slot_ref) = state.player_mut(pid).supports.get_mut(slot) {
                        *slot_ref = next;
                    }
                }
                None => {
                    state.player_mut(pid).supports.remove(slot);
                }
            }
        }
    }
    visit_preprocess_container(
        snapshot,
        &mut state.player_mut(pid).hidden_statuses,
        StaticTarget::hidden(pid),
        stage,
        event,
    );
}

/// Runs one preprocessor stage over both players, `source_pid` first
/// (`spec.md` §4.4 items 1-6), then visits any off-field character the
/// event explicitly targets (item 7).
pub fn run_preprocess(
    state: &mut GameState,
    source_pid: Pid,
    stage: PreprocessStage,
    event: &mut Preprocessable,
) {
    let snapshot = state.clone();
    run_preprocess_for_player(&snapshot, state, source_pid, stage, event);
    run_preprocess_for_player(&snapshot, state, source_pid.other(), stage, event);

    if let Preprocessable::Damage(dmg) = event {
        let target_pid = dmg.target_pid;
        let target = dmg.target;
        let is_off_field = snapshot.player(target_pid).characters.active_character_id != Some(target);
        if is_off_field {
            let pos = StaticTarget::character(target_pid, target);
            if let Some(ch) = state.player_mut(target_pid).characters.get_mut(target) {
                visit_preprocess_container(&snapshot, &mut ch.equipment, pos, stage, event);
                visit_preprocess_container(&snapshot, &mut ch.character_statuses, pos, stage, event);
            }
        }
    }
}

/// Broadcasts `signal` to every status in `scope`, collecting the effects
/// spontaneously produced (`spec.md` §4.3 "Signal broadcasts"). Visitation
/// order matches `run_preprocess`'s group ordering.
pub fn broadcast_signal(state: &mut GameState, scope: SignalScope, signal: Signal) -> Vec<Effect> {
    let snapshot = state.clone();
    let mut effects = Vec::new();

    let pids: Vec<Pid> = match scope {
        SignalScope::Everyone => vec![Pid::P1, Pid::P2],
        SignalScope::Player(pid) => vec![pid],
        SignalScope::Character(target) => vec![target.pid],
    };

    if let SignalScope::Character(target) = scope {
        if let Some(cid) = target.char_id() {
            if let Some(ch) = state.player_mut(target.pid).characters.get_mut(cid) {
                visit_signal_container(&snapshot, &mut ch.equipment, target, signal, &mut effects);
                visit_signal_container(&snapshot, &mut ch.character_statuses, target, signal, &mut effects);
                visit_signal_container(&snapshot, &mut ch.hidden_statuses, target, signal, &mut effects);
            }
        }
        return effects;
    }

    for pid in pids {
        if let Some(cid) = snapshot.player(pid).characters.active_character_id {
            let pos = StaticTarget::character(pid, cid);
            if let Some(ch) = state.player_mut(pid).characters.get_mut(cid) {
                visit_signal_container(&snapshot, &mut ch.equipment, pos, signal, &mut effects);
                visit_signal_container(&snapshot, &mut ch.character_statuses, pos, signal, &mut effects);
            }
        }
        visit_signal_container(
            &snapshot,
            &mut state.player_mut(pid).combat_statuses,
            StaticTarget::combat(pid),
            signal,
            &mut effects,
        );
        {
            let items = state.player(pid).summons.as_slice().to_vec();
            let mut kept = Vec::with_capacity(items.len());
            for (i, item) in items.into_iter().enumerate() {
                let pos = StaticTarget::summon(pid, i as u32);
                let (mut fx, next) = item.react_to_signal(&snapshot, pos, signal);
                effects.append(&mut fx);
                if let Some(next) = next {
                    kept.push(next);
                }
            }
            state.player_mut(pid).summons.replace_all(kept);
        }
        {
            let slots: Vec<_> = state
                .player(pid)
                .supports
                .iter()
                .map(|(slot, s)| (slot, s.clone()))
                .collect();
            for (slot, item) in slots {
                let pos = StaticTarget::support(pid, slot);
                let (mut fx, next) = item.react_to_signal(&snapshot, pos, signal);
                effects.append(&mut fx);
                match next {
                    Some(next) => {
                        if let Some(slot_ref) = state.player_mut(pid).supports.get_mut(slot) {
                            *slot_ref = next;
                        }
                    }
                    None => {
                        state.player_mut(pid).supports.remove(slot);
                    }
                }
            }
        }
        visit_signal_container(
            &snapshot,
            &mut state.player_mut(pid).hidden_statuses,
            StaticTarget::hidden(pid),
            signal,
            &mut effects,
        );
        for cid in snapshot.player(pid).characters.ids_in_order() {
            if let Some(ch) = state.player_mut(pid).characters.get_mut(cid) {
                visit_signal_container(&snapshot, &mut ch.hidden_statuses, StaticTarget::character(pid, cid), signal, &mut effects);
            }
        }
    }
    effects
}

/// Broadcasts an `Informable` to every status in `scope` for observation
/// only (`spec.md` §4.5 `inform`).
pub fn broadcast_inform(state: &mut GameState, scope: SignalScope, info: &Informable) {
    let snapshot = state.clone();
    let pids: Vec<Pid> = match scope {
        SignalScope::Everyone => vec![Pid::P1, Pid::P2],
        SignalScope::Player(pid) => vec![pid],
        SignalScope::Character(target) => vec![target.pid],
    };
    for pid in pids {
        if let Some(cid) = snapshot.player(pid).characters.active_character_id {
            let pos = StaticTarget::character(pid, cid);
            if let Some(ch) = state.player_mut(pid).characters.get_mut(cid) {
                visit_inform_container(&snapshot, &mut ch.equipment, pos, info);
                visit_inform_container(&snapshot, &mut ch.character_statuses, pos, info);
            }
        }
        visit_inform_container(
            &snapshot,
            &mut state.player_mut(pid).combat_statuses,
            StaticTarget::combat(pid),
            info,
        );
        visit_inform_container(
            &snapshot,
            &mut state.player_mut(pid).hidden_statuses,
            StaticTarget::hidden(pid),
            info,
        );
    }
}

/// Runs `base` through the cost-preprocessor chain for `kind`
/// (`spec.md` §4.4 "Swap: SWAP_COST_ANY -> SWAP_COST_ELEM ->
/// SWAP_COST_OMNI", same shape for `Skill`/`Card1`/`Card2`), mutating
/// `state` for any status that consumes a per-round/per-use discount
/// along the way (e.g. an artifact's "once per round" flag). Callers
/// deciding legality only (`legal_actions`) should run this against a
/// scratch clone and discard it; callers committing an action
/// (`action_step`) run it against the real state so the discount is
/// actually spent.
pub fn preprocess_cost(state: &mut GameState, pid: Pid, kind: CostKind, base: DiceCost) -> DiceCost {
    let stages: [PreprocessStage; 3] = match kind {
        CostKind::Swap => [
            PreprocessStage::SwapCostAny,
            PreprocessStage::SwapCostElem,
            PreprocessStage::SwapCostOmni,
        ],
        CostKind::Skill => [
            PreprocessStage::SkillCostAny,
            PreprocessStage::SkillCostElem,
            PreprocessStage::SkillCostOmni,
        ],
        CostKind::Card1 => [
            PreprocessStage::Card1CostAny,
            PreprocessStage::Card1CostElem,
            PreprocessStage::Card1CostOmni,
        ],
        CostKind::Card2 => [
            PreprocessStage::Card2CostAny,
            PreprocessStage::Card2CostElem,
            PreprocessStage::Card2CostOmni,
        ],
    };
    let mut event = Preprocessable::Cost(CostPEvent { kind, cost: base });
    for stage in stages {
        run_preprocess(state, pid, stage, &mut event);
    }
    match event {
        Preprocessable::Cost(c) => c.cost,
        _ => unreachable!("preprocess_cost only ever wraps a Cost event"),
    }
}

/// Runs a freshly rolled die set through `ROLL_DICE_INIT`
/// (`spec.md` §4.2 "apply `ROLL_DICE_INIT` preprocessor to let
/// supports/artifacts collapse `ANY` dice to specific elements"). The base
/// roll never produces `Element::Any` itself (`RandomSource::roll_dice`
/// only returns aurable colours); this stage exists so a support/artifact
/// that wants to retint some of a player's freshly rolled dice has a
/// single well-defined hook to do it at, before the pool is built.
pub fn preprocess_roll_init(state: &mut GameState, pid: Pid, dice: Vec<Element>) -> Vec<Element> {
    let mut event = Preprocessable::RollInit(RollInitPEvent { pid, dice });
    run_preprocess(state, pid, PreprocessStage::RollDiceInit, &mut event);
    match event {
        Preprocessable::RollInit(r) => r.dice,
        _ => unreachable!("preprocess_roll_init only ever wraps a RollInit event"),
    }
}

/// Runs the mode's base reroll allowance through `ROLL_CHANCES`
/// (`spec.md` §4.2 "up to `roll_chances` rerolls"), letting a status grant
/// an extra reroll for this player this round.
pub fn preprocess_roll_chances(state: &mut GameState, pid: Pid, base_chances: u8) -> u8 {
    let mut event = Preprocessable::RollChance(RollChancePEvent {
        pid,
        chances_left: base_chances,
    });
    run_preprocess(state, pid, PreprocessStage::RollChances, &mut event);
    match event {
        Preprocessable::RollChance(r) => r.chances_left,
        _ => unreachable!("preprocess_roll_chances only ever wraps a RollChance event"),
    }
}
