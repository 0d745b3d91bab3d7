//! End-to-end scenario tests exercising the engine through its public
//! surface: build a board by hand, push effects, drain with `auto_step`,
//! and check the resulting state.

use std::collections::HashMap;

use tcg_engine::action::PlayerAction;
use tcg_engine::auto_step;
use tcg_engine::character::{Character, Characters};
use tcg_engine::characters;
use tcg_engine::deck::{Deck, ModeDescriptor};
use tcg_engine::effect::{Effect, SignalScope};
use tcg_engine::effect_stack::EffectStack;
use tcg_engine::element::Element;
use tcg_engine::game_state::{GameState, PlayerState};
use tcg_engine::ids::{CharId, CharacterKindId, Pid, StaticTarget};
use tcg_engine::phase::Phase;
use tcg_engine::rng::RandomSource;
use tcg_engine::signal::{DamageType, Signal};
use tcg_engine::statuses::mixins::{StackedShieldState, UsageState};
use tcg_engine::statuses::{CharacterStatus, CombatStatus, EquipmentStatus, PlayerHiddenStatus};
use tcg_engine::waiting_for;

fn roster(kinds: &[u16]) -> Vec<Character> {
    kinds
        .iter()
        .enumerate()
        .map(|(i, &k)| Character::new(CharId((i + 1) as u8), characters::descriptor(CharacterKindId(k))))
        .collect()
}

fn padded_deck_characters(kinds: &[u16]) -> [CharacterKindId; 3] {
    let mut arr = [CharacterKindId(kinds[0]); 3];
    for (slot, &k) in arr.iter_mut().zip(kinds.iter().chain(kinds.iter()).chain(kinds.iter())) {
        *slot = CharacterKindId(k);
    }
    arr
}

/// Builds a paused-in-`Action`-phase board with the given character
/// rosters (by `CharacterKindId` numeric id) and no dice/hand/deck
/// contents, since these scenario tests only exercise the effect stack.
fn build_state(p1_kinds: &[u16], p2_kinds: &[u16]) -> GameState {
    let mode = ModeDescriptor::default();
    let rng = RandomSource::from_seed(1);
    let deck1 = Deck {
        characters: padded_deck_characters(p1_kinds),
        cards: HashMap::new(),
    };
    let deck2 = Deck {
        characters: padded_deck_characters(p2_kinds),
        cards: HashMap::new(),
    };
    let player1 = PlayerState::new(deck1, Characters::new(roster(p1_kinds)), &mode);
    let player2 = PlayerState::new(deck2, Characters::new(roster(p2_kinds)), &mode);
    GameState {
        round: 1,
        active_player: Pid::P1,
        mode,
        phase: Phase::Action,
        player1,
        player2,
        effect_stack: EffectStack::new(),
        rng,
    }
}

fn push_and_drain(state: &GameState, effects: Vec<Effect>) -> GameState {
    let mut next = state.clone();
    next.effect_stack.push_many_fl(effects);
    auto_step(&next)
}

const ELECTRO_DUELIST: u16 = 1;
const HYDRO_MAGE: u16 = 2;

#[test]
fn basic_pyro_hydro_vaporize() {
    let state = build_state(&[ELECTRO_DUELIST], &[HYDRO_MAGE]);
    let p1_active = state.player1.characters.active_character_id.unwrap();
    let p2_active = state.player2.characters.active_character_id.unwrap();

    let state = push_and_drain(
        &state,
        vec![Effect::ApplyElementalAura {
            target: StaticTarget::character(Pid::P2, p2_active),
            element: Element::Hydro,
        }],
    );
    assert!(state.player2.characters.active().unwrap().elemental_aura.contains(Element::Hydro));

    let state = push_and_drain(
        &state,
        vec![Effect::SpecificDamage {
            source: StaticTarget::character(Pid::P1, p1_active),
            target: p2_active,
            target_pid: Pid::P2,
            element: Element::Pyro,
            amount: 3,
            damage_type: DamageType::ElementalSkill,
        }],
    );

    let target = state.player2.characters.active().unwrap();
    assert_eq!(target.hp, 10 - (3 + 2));
    assert!(target.elemental_aura.is_empty());
}

#[test]
fn dendro_core_boosts_electro_and_is_consumed() {
    let mut state = build_state(&[ELECTRO_DUELIST], &[HYDRO_MAGE]);
    state.player1.combat_statuses.add(CombatStatus::DendroCore(UsageState::new(1, 1)));
    let p1_active = state.player1.characters.active_character_id.unwrap();
    let p2_active = state.player2.characters.active_character_id.unwrap();

    let state = push_and_drain(
        &state,
        vec![Effect::SpecificDamage {
            source: StaticTarget::character(Pid::P1, p1_active),
            target: p2_active,
            target_pid: Pid::P2,
            element: Element::Electro,
            amount: 2,
            damage_type: DamageType::ElementalSkill,
        }],
    );

    assert_eq!(state.player2.characters.active().unwrap().hp, 10 - 4);
    assert!(state.player1.combat_statuses.as_slice().is_empty());
}

#[test]
fn stacked_crystallize_shield_absorbs_then_breaks() {
    let mut state = build_state(&[ELECTRO_DUELIST], &[HYDRO_MAGE]);
    state
        .player1
        .combat_statuses
        .add(CombatStatus::Crystallize(StackedShieldState::new(2, 2, 1)));
    let p1_active = state.player1.characters.active_character_id.unwrap();
    let p2_active = state.player2.characters.active_character_id.unwrap();

    let state = push_and_drain(
        &state,
        vec![Effect::SpecificDamage {
            source: StaticTarget::character(Pid::P2, p2_active),
            target: p1_active,
            target_pid: Pid::P1,
            element: Element::Anemo,
            amount: 3,
            damage_type: DamageType::ElementalSkill,
        }],
    );

    assert_eq!(state.player1.characters.active().unwrap().hp, 10 - 1);
    assert!(state.player1.combat_statuses.as_slice().is_empty());
}

#[test]
fn prepare_skill_cancels_on_self_swap_and_deals_no_damage() {
    let mut state = build_state(&[ELECTRO_DUELIST, HYDRO_MAGE], &[HYDRO_MAGE]);
    let from = state.player1.characters.active_character_id.unwrap();
    let to = state.player1.characters.next_alive_after(from).unwrap();

    state
        .player1
        .characters
        .get_mut(to)
        .unwrap()
        .character_statuses
        .add(CharacterStatus::PrepareSkill {
            skill: tcg_engine::character::SkillId(1),
        });

    let state = push_and_drain(&state, vec![Effect::SwapCharacter { pid: Pid::P1, to }]);

    assert_eq!(state.player1.characters.active_character_id, Some(to));
    assert!(state
        .player1
        .characters
        .get(to)
        .unwrap()
        .character_statuses
        .as_slice()
        .is_empty());
    assert!(state.effect_stack.is_empty());
    let opponent = state.player2.characters.active().unwrap();
    assert_eq!(opponent.hp, opponent.max_hp);
}

#[test]
fn engulfing_lightning_refills_energy_each_round_start_while_empty() {
    let mut state = build_state(&[ELECTRO_DUELIST], &[HYDRO_MAGE]);
    let p1_active = state.player1.characters.active_character_id.unwrap();
    state
        .player1
        .characters
        .get_mut(p1_active)
        .unwrap()
        .equipment
        .add(EquipmentStatus::EngulfingLightning);
    assert_eq!(state.player1.characters.get(p1_active).unwrap().energy, 0);

    let state = push_and_drain(
        &state,
        vec![Effect::BroadcastSignal {
            scope: SignalScope::Everyone,
            signal: Signal::RoundStart,
        }],
    );
    assert_eq!(state.player1.characters.get(p1_active).unwrap().energy, 1);

    let mut state = state;
    state.player1.characters.get_mut(p1_active).unwrap().set_energy(0);
    let state = push_and_drain(
        &state,
        vec![Effect::BroadcastSignal {
            scope: SignalScope::Everyone,
            signal: Signal::RoundStart,
        }],
    );
    assert_eq!(state.player1.characters.get(p1_active).unwrap().energy, 1);
}

#[test]
fn lethal_hit_marks_death_swap_pending_and_blocks_other_actions() {
    let mut state = build_state(&[ELECTRO_DUELIST], &[HYDRO_MAGE, ELECTRO_DUELIST]);
    let p1_active = state.player1.characters.active_character_id.unwrap();
    let p2_active = state.player2.characters.active_character_id.unwrap();
    state.player2.characters.get_mut(p2_active).unwrap().hp = 1;
    state.player1.declared_end = false;
    state.player2.declared_end = false;

    let state = push_and_drain(
        &state,
        vec![Effect::SpecificDamage {
            source: StaticTarget::character(Pid::P1, p1_active),
            target: p2_active,
            target_pid: Pid::P2,
            element: Element::Physical,
            amount: 3,
            damage_type: DamageType::NormalAttack,
        }],
    );

    assert!(!state.player2.characters.get(p2_active).unwrap().alive);
    assert!(state
        .player2
        .hidden_statuses
        .as_slice()
        .iter()
        .any(|s| matches!(s, PlayerHiddenStatus::DeathSwapPending)));
    assert_eq!(waiting_for(&state), Some(Pid::P2));

    let legal = tcg_engine::legal_actions::legal_actions(&state, Pid::P2);
    assert!(legal.iter().all(|a| matches!(a, PlayerAction::DeathSwap { .. })));
}
