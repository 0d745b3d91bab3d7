//! The engine's external interface (`spec.md` §6): `new_game`,
//! `waiting_for`, `action_step`, `one_step`, `auto_step`, plus the
//! dedicated phase-transition entry points for `CardSelect`/
//! `StartingHandSelect`/`RollDice` that the §4.6 action categories don't
//! cover (see `action.rs`'s module doc and DESIGN.md).

use crate::action::{base_swap_cost, PlayerAction};
use crate::card::CardPlayArgs;
use crate::character::{Character, Characters};
use crate::deck::{Deck, ModeDescriptor};
use crate::dice::DicePool;
use crate::effect::{Effect, SignalScope};
use crate::effect_stack::EffectStack;
use crate::element::Element;
use crate::error::{IllegalAction, RejectReason};
use crate::executor::execute_effect;
use crate::game_state::GameState;
use crate::ids::{CardKindId, CharId, Pid};
use crate::phase::{next_actor, Phase};
use crate::preprocess::{broadcast_signal, preprocess_cost, preprocess_roll_chances, preprocess_roll_init};
use crate::rng::RandomSource;
use crate::signal::{CostKind, Signal};
use crate::statuses::PlayerHiddenStatus;

pub use crate::legal_actions::legal_actions as action_generator;

/// Builds the starting `GameState`: both decks are shuffled into their
/// draw piles and the initial hand is dealt, leaving the engine paused in
/// `Phase::CardSelect` awaiting each player's redraw decision. Callers
/// are expected to have already checked `Deck::validate` -- this
/// function does not re-validate (`spec.md` §6 signature carries no
/// `Result`).
pub fn new_game(deck_p1: Deck, deck_p2: Deck, mode: ModeDescriptor, seed: u64) -> GameState {
    let mut rng = RandomSource::from_seed(seed);
    let player1 = build_player(deck_p1, &mode, &mut rng);
    let player2 = build_player(deck_p2, &mode, &mut rng);
    GameState {
        round: 1,
        active_player: Pid::P1,
        mode,
        phase: Phase::CardSelect,
        player1,
        player2,
        effect_stack: EffectStack::new(),
        rng,
    }
}

fn build_player(deck: Deck, mode: &ModeDescriptor, rng: &mut RandomSource) -> crate::game_state::PlayerState {
    let mut deck_cards: Vec<CardKindId> = deck
        .cards
        .iter()
        .flat_map(|(&kind, &count)| std::iter::repeat(kind).take(count as usize))
        .collect();
    rng.shuffle(&mut deck_cards);

    let characters = Characters::new(
        deck.characters
            .iter()
            .enumerate()
            .map(|(i, &kind)| Character::new(CharId((i + 1) as u8), crate::characters::descriptor(kind)))
            .collect(),
    );

    let mut state = crate::game_state::PlayerState::new(deck, characters, mode);
    state.deck_cards = deck_cards;
    let drawn: Vec<CardKindId> = (0..mode.initial_draw)
        .filter_map(|_| state.deck_cards.pop())
        .collect();
    state.draw_cards(drawn);
    state
}

/// The player currently expected to act, or `None` if the engine has
/// pending effects to drain (call `one_step`/`auto_step`) or the game has
/// ended.
pub fn waiting_for(state: &GameState) -> Option<Pid> {
    if state.phase.is_terminal() || !state.effect_stack.is_empty() {
        return None;
    }
    match state.phase {
        Phase::CardSelect | Phase::StartingHandSelect | Phase::RollDice => {
            if !state.player1.phase_ready {
                Some(Pid::P1)
            } else if !state.player2.phase_ready {
                Some(Pid::P2)
            } else {
                None
            }
        }
        Phase::Action => {
            for pid in GameState::both_pids() {
                if death_swap_pending(state, pid) {
                    return Some(pid);
                }
            }
            if state.player1.declared_end && state.player2.declared_end {
                None
            } else {
                Some(state.active_player)
            }
        }
        Phase::End | Phase::GameEnd { .. } => None,
    }
}

fn death_swap_pending(state: &GameState, pid: Pid) -> bool {
    state
        .player(pid)
        .hidden_statuses
        .as_slice()
        .iter()
        .any(|s| matches!(s, PlayerHiddenStatus::DeathSwapPending))
}

/// Drains exactly one effect off the stack. A no-op if the stack is
/// already empty.
pub fn one_step(state: &GameState) -> GameState {
    let mut next = state.clone();
    if let Some(effect) = next.effect_stack.pop() {
        let produced = execute_effect(&mut next, effect);
        Effect::push_many_fl(next.effect_stack.as_vec_mut(), produced);
    }
    next
}

/// Repeatedly drains the effect stack and advances automatic phase
/// transitions until the engine is waiting for a player action or the
/// game has ended.
pub fn auto_step(state: &GameState) -> GameState {
    let mut next = state.clone();
    loop {
        if let Some(effect) = next.effect_stack.pop() {
            let produced = execute_effect(&mut next, effect);
            Effect::push_many_fl(next.effect_stack.as_vec_mut(), produced);
            continue;
        }
        if next.phase.is_terminal() {
            return next;
        }
        if !advance_phase_if_ready(&mut next) {
            return next;
        }
    }
}

/// Attempts one automatic phase transition. Returns `true` if a
/// transition (or a signal-broadcast effect push) happened and the drain
/// loop should continue; `false` if the engine is genuinely waiting on a
/// player.
fn advance_phase_if_ready(state: &mut GameState) -> bool {
    match state.phase {
        Phase::CardSelect => {
            if !state.both_phase_ready() {
                return false;
            }
            state.phase = Phase::StartingHandSelect;
            state.reset_phase_ready();
            true
        }
        Phase::StartingHandSelect => {
            if !state.both_phase_ready() {
                return false;
            }
            state.phase = Phase::RollDice;
            state.reset_phase_ready();
            for pid in GameState::both_pids() {
                let rolled = state.rng.roll_dice(state.mode.dice_per_roll);
                let rolled = preprocess_roll_init(state, pid, rolled);
                state.player_mut(pid).dice = DicePool::from_counts(
                    rolled.into_iter().map(|e| (e, 1)).fold(
                        std::collections::HashMap::new(),
                        |mut acc: std::collections::HashMap<Element, u32>, (e, n)| {
                            *acc.entry(e).or_insert(0) += n;
                            acc
                        },
                    ),
                );
                state.player_mut(pid).dice_reroll_chances =
                    preprocess_roll_chances(state, pid, state.mode.reroll_chances);
            }
            true
        }
        Phase::RollDice => {
            if !state.both_phase_ready() {
                return false;
            }
            state.phase = Phase::Action;
            state.reset_phase_ready();
            state.player1.declared_end = false;
            state.player2.declared_end = false;
            let effects = broadcast_signal(state, SignalScope::Everyone, Signal::RoundStart);
            Effect::push_many_fl(state.effect_stack.as_vec_mut(), effects);
            true
        }
        Phase::Action => {
            if !(state.player1.declared_end && state.player2.declared_end) {
                return false;
            }
            state.phase = Phase::End;
            let mut effects = broadcast_signal(state, SignalScope::Everyone, Signal::EndRoundCheckOut);
            effects.extend(broadcast_signal(state, SignalScope::Everyone, Signal::RoundEnd));
            for pid in GameState::both_pids() {
                effects.push(Effect::DrawCards { pid, count: 2 });
            }
            Effect::push_many_fl(state.effect_stack.as_vec_mut(), effects);
            true
        }
        Phase::End => {
            if let Some(winner) = state.winner() {
                state.phase = Phase::GameEnd { winner: Some(winner) };
            } else if state.defeated(Pid::P1) && state.defeated(Pid::P2) {
                state.phase = Phase::GameEnd { winner: None };
            } else {
                state.round += 1;
                state.phase = Phase::RollDice;
                state.reset_phase_ready();
            }
            true
        }
        Phase::GameEnd { .. } => false,
    }
}

/// Applies `action` on behalf of `pid`, validating it against
/// `legal_actions` first. Returns the new state with the action's direct
/// effects pushed onto the stack (not yet drained -- call `auto_step`
/// afterwards) on success.
pub fn action_step(state: &GameState, pid: Pid, action: PlayerAction) -> Result<GameState, RejectReason> {
    if !legal_actions(state, pid).contains(&action) {
        return Err(illegal_reason(state, pid, &action).into());
    }
    let mut next = state.clone();
    let mut fast = false;

    match action.clone() {
        PlayerAction::DeathSwap { to } => {
            next.player_mut(pid)
                .hidden_statuses
                .remove_kind(&PlayerHiddenStatus::DeathSwapPending);
            push(&mut next, vec![Effect::SwapCharacter { pid, to }]);
            return Ok(next);
        }
        PlayerAction::EndRound => {
            next.player_mut(pid).declared_end = true;
            push(
                &mut next,
                vec![Effect::BroadcastSignal {
                    scope: SignalScope::Player(pid),
                    signal: Signal::SelfDeclareEndRound,
                }],
            );
        }
        PlayerAction::ElementalTuning { card, die } => {
            spend_hand_card(&mut next, pid, card);
            next.player_mut(pid).dice.remove(die, 1);
            let active_element = active_character_element(&next, pid);
            next.player_mut(pid).dice.add(active_element, 1);
        }
        PlayerAction::Swap { to, payment } => {
            // Commit whatever the cost-preprocessor chain would have
            // consumed (e.g. a once-per-round discount's flag) — the
            // returned, already-discounted cost is discarded since
            // `payment` (validated against that same preview by
            // `legal_actions`) already reflects it.
            preprocess_cost(&mut next, pid, CostKind::Swap, base_swap_cost());
            if !next.player_mut(pid).dice.checked_sub(&payment).map(|p| {
                next.player_mut(pid).dice = p;
                true
            }).unwrap_or(false) {
                return Err(IllegalAction::InsufficientDice.into());
            }
            push(&mut next, vec![Effect::SwapCharacter { pid, to }]);
        }
        PlayerAction::CastSkill {
            caster,
            skill,
            payment,
        } => {
            let base_cost = skill_dice_cost(&next, pid, caster, skill);
            preprocess_cost(&mut next, pid, CostKind::Skill, base_cost);
            pay_dice(&mut next, pid, &payment)?;
            push(
                &mut next,
                vec![Effect::CastSkill {
                    caster: crate::ids::StaticTarget::character(pid, caster),
                    skill,
                }],
            );
        }
        PlayerAction::PlayCard {
            card,
            target,
            payment,
        } => {
            let base_cost = crate::cards::descriptor(card).dice_cost.clone();
            preprocess_cost(&mut next, pid, CostKind::Card1, base_cost);
            pay_dice(&mut next, pid, &payment)?;
            spend_hand_card(&mut next, pid, card);
            let descriptor = crate::cards::descriptor(card);
            let effects = (descriptor.play_effects)(&next, CardPlayArgs { pid, target });
            push(&mut next, effects);
        }
    }

    let produced_fast_marker = next
        .effect_stack
        .as_slice()
        .iter()
        .any(|e| matches!(e, Effect::ConsecutiveAction(p) if *p == pid));
    if produced_fast_marker {
        fast = true;
    }

    let opponent_declared_end = next.player(pid.other()).declared_end;
    next.active_player = next_actor(pid, fast, opponent_declared_end);
    Ok(next)
}

fn push(state: &mut GameState, effects: Vec<Effect>) {
    Effect::push_many_fl(state.effect_stack.as_vec_mut(), effects);
}

fn pay_dice(state: &mut GameState, pid: Pid, payment: &DicePool) -> Result<(), RejectReason> {
    match state.player(pid).dice.checked_sub(payment) {
        Some(remaining) => {
            state.player_mut(pid).dice = remaining;
            Ok(())
        }
        None => Err(IllegalAction::InsufficientDice.into()),
    }
}

fn spend_hand_card(state: &mut GameState, pid: Pid, card: CardKindId) {
    if let Some(count) = state.player_mut(pid).hand_cards.get_mut(&card) {
        *count = count.saturating_sub(1);
    }
}

/// The base (pre-preprocessor) dice cost of `caster`'s `skill`, looked up
/// from the character catalogue rather than trusted from the action —
/// mirrors the lookup `legal_actions` used when it first computed
/// `effective_cost` for this same action.
fn skill_dice_cost(state: &GameState, pid: Pid, caster: CharId, skill: crate::character::SkillId) -> crate::dice::DiceCost {
    let kind_id = state
        .player(pid)
        .characters
        .get(caster)
        .map(|c| c.kind_id)
        .expect("CastSkill caster must exist");
    let descriptor = crate::characters::descriptor(kind_id);
    descriptor
        .skills
        .iter()
        .find(|s| s.id == skill)
        .map(|s| s.dice_cost.clone())
        .expect("CastSkill skill must exist on caster's descriptor")
}

fn active_character_element(state: &GameState, pid: Pid) -> Element {
    let kind = state
        .player(pid)
        .characters
        .active()
        .map(|c| c.kind_id);
    kind.map(|k| crate::characters::descriptor(k).element)
        .unwrap_or(Element::Pyro)
}

fn illegal_reason(state: &GameState, pid: Pid, action: &PlayerAction) -> IllegalAction {
    if state.active_player != pid && !matches!(action, PlayerAction::DeathSwap { .. }) {
        return IllegalAction::NotYourTurn {
            expected: state.active_player,
        };
    }
    match action {
        PlayerAction::DeathSwap { .. } => IllegalAction::DeathSwapRequiredFirst,
        PlayerAction::EndRound => IllegalAction::WrongPhase { expected: "Action" },
        PlayerAction::Swap { .. } => IllegalAction::UnknownSwapTarget,
        PlayerAction::CastSkill { .. } => IllegalAction::SkillEnergyNotFull,
        PlayerAction::PlayCard { .. } => IllegalAction::CardNotInHand,
        PlayerAction::ElementalTuning { .. } => IllegalAction::CardDoesNotMatchTuningElement,
    }
}

// ---- Dedicated phase-transition entry points -----------------------------

/// `CardSelect`: discards `discard` from hand back into the deck and
/// draws an equal number of replacements, then marks `pid` ready.
pub fn redraw_cards(state: &GameState, pid: Pid, discard: Vec<CardKindId>) -> Result<GameState, RejectReason> {
    if state.phase != Phase::CardSelect || state.player(pid).phase_ready {
        return Err(IllegalAction::WrongPhase { expected: "CardSelect" }.into());
    }
    let mut next = state.clone();
    let n = discard.len();
    for kind in &discard {
        spend_hand_card(&mut next, pid, *kind);
        next.player_mut(pid).deck_cards.push(*kind);
    }
    {
        let rng = &mut next.rng;
        rng.shuffle(&mut next.player_mut(pid).deck_cards);
    }
    let drawn: Vec<CardKindId> = (0..n).filter_map(|_| next.player_mut(pid).deck_cards.pop()).collect();
    next.player_mut(pid).draw_cards(drawn);
    next.player_mut(pid).phase_ready = true;
    Ok(next)
}

/// `StartingHandSelect`: picks `char_id` as this player's active
/// character.
pub fn select_starting_character(state: &GameState, pid: Pid, char_id: CharId) -> Result<GameState, RejectReason> {
    if state.phase != Phase::StartingHandSelect || state.player(pid).phase_ready {
        return Err(IllegalAction::WrongPhase {
            expected: "StartingHandSelect",
        }
        .into());
    }
    if state.player(pid).characters.get(char_id).is_none() {
        return Err(IllegalAction::UnknownSwapTarget.into());
    }
    let mut next = state.clone();
    next.player_mut(pid).characters.active_character_id = Some(char_id);
    next.player_mut(pid).phase_ready = true;
    Ok(next)
}

/// `RollDice`: rerolls the given dice (by element, one reroll attempt per
/// call) and/or finishes rolling for this round. Pass an empty `reroll`
/// to keep the current roll and mark `pid` ready.
pub fn reroll_dice(state: &GameState, pid: Pid, reroll: Vec<Element>) -> Result<GameState, RejectReason> {
    if state.phase != Phase::RollDice || state.player(pid).phase_ready {
        return Err(IllegalAction::WrongPhase { expected: "RollDice" }.into());
    }
    let mut next = state.clone();
    if reroll.is_empty() {
        next.player_mut(pid).phase_ready = true;
        return Ok(next);
    }
    if next.player(pid).dice_reroll_chances == 0 {
        return Err(IllegalAction::InsufficientDice.into());
    }
    for &e in &reroll {
        next.player_mut(pid).dice.remove(e, 1);
    }
    let fresh = next.rng.roll_dice(reroll.len() as u8);
    for e in fresh {
        next.player_mut(pid).dice.add(e, 1);
    }
    next.player_mut(pid).dice_reroll_chances -= 1;
    Ok(next)
}
