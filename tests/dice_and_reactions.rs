//! Integration coverage for the dice payment solver driven through real
//! action enumeration/execution, and for reaction secondary effects
//! (forward swap, off-field piercing splash) that only show up once the
//! full effect stack runs, as opposed to `dice.rs`/`element.rs`'s inline
//! unit tests of the pure functions alone.

use std::collections::HashMap;

use tcg_engine::action::PlayerAction;
use tcg_engine::action_step;
use tcg_engine::auto_step;
use tcg_engine::character::Character;
use tcg_engine::characters;
use tcg_engine::deck::{Deck, ModeDescriptor};
use tcg_engine::dice::DicePool;
use tcg_engine::effect::{Effect, StaticTargetAlias};
use tcg_engine::element::Element;
use tcg_engine::game_state::{GameState, PlayerState};
use tcg_engine::ids::{CharId, CharacterKindId, Pid, StaticTarget};
use tcg_engine::legal_actions::legal_actions;
use tcg_engine::phase::Phase;
use tcg_engine::rng::RandomSource;
use tcg_engine::signal::DamageType;
use tcg_engine::{character::Characters, effect_stack::EffectStack};

fn roster(kinds: &[u16]) -> Vec<Character> {
    kinds
        .iter()
        .enumerate()
        .map(|(i, &k)| Character::new(CharId((i + 1) as u8), characters::descriptor(CharacterKindId(k))))
        .collect()
}

fn padded_deck_characters(kinds: &[u16]) -> [CharacterKindId; 3] {
    let mut arr = [CharacterKindId(kinds[0]); 3];
    for (slot, &k) in arr.iter_mut().zip(kinds.iter().cycle()) {
        *slot = CharacterKindId(k);
    }
    arr
}

fn build_state(p1_kinds: &[u16], p2_kinds: &[u16]) -> GameState {
    let mode = ModeDescriptor::default();
    let rng = RandomSource::from_seed(7);
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

const ELECTRO_DUELIST: u16 = 1;
const HYDRO_MAGE: u16 = 2;
const PYRO_MAGE: u16 = 3;
const ANEMO_SWORDSMAN: u16 = 7;

#[test]
fn swap_action_prefers_non_omni_dice_over_real_omni() {
    let mut state = build_state(&[ELECTRO_DUELIST, HYDRO_MAGE], &[HYDRO_MAGE]);
    state.player1.dice = DicePool::from_counts([(Element::Pyro, 1), (Element::Omni, 1)]);

    let actions = legal_actions(&state, Pid::P1);
    let swap = actions
        .iter()
        .find(|a| matches!(a, PlayerAction::Swap { .. }))
        .cloned()
        .expect("a swap action should be legal with 2 dice available");
    let PlayerAction::Swap { payment, .. } = &swap else {
        unreachable!()
    };
    assert_eq!(payment.get(Element::Pyro), 1);
    assert_eq!(payment.get(Element::Omni), 0);

    let next = action_step(&state, Pid::P1, swap).expect("swap should succeed");
    let next = auto_step(&next);
    assert_eq!(next.player1.dice.get(Element::Pyro), 0);
    assert_eq!(next.player1.dice.get(Element::Omni), 1);
}

#[test]
fn action_step_rejects_a_swap_no_legal_actions_offered() {
    let state = build_state(&[ELECTRO_DUELIST], &[HYDRO_MAGE]);
    let fabricated = PlayerAction::Swap {
        to: CharId(99),
        payment: DicePool::new(),
    };
    assert!(action_step(&state, Pid::P1, fabricated).is_err());
}

#[test]
fn overloaded_reaction_forces_the_opponent_into_a_forward_swap() {
    let mut state = build_state(&[PYRO_MAGE], &[HYDRO_MAGE, ELECTRO_DUELIST]);
    let p1_active = state.player1.characters.active_character_id.unwrap();
    let p2_active = state.player2.characters.active_character_id.unwrap();
    let p2_other = state.player2.characters.next_alive_after(p2_active).unwrap();

    state
        .player2
        .characters
        .get_mut(p2_active)
        .unwrap()
        .elemental_aura
        .apply(Element::Electro);

    let mut next = state.clone();
    next.effect_stack.push_many_fl(vec![Effect::SpecificDamage {
        source: StaticTarget::character(Pid::P1, p1_active),
        target: p2_active,
        target_pid: Pid::P2,
        element: Element::Pyro,
        amount: 2,
        damage_type: DamageType::ElementalSkill,
    }]);
    let next = auto_step(&next);

    assert_eq!(next.player2.characters.active_character_id, Some(p2_other));
    assert_eq!(
        next.player2.characters.get(p2_active).unwrap().hp,
        10 - (2 + 2)
    );
}

#[test]
fn swirl_splashes_one_piercing_damage_onto_every_off_field_opponent() {
    let mut state = build_state(&[ANEMO_SWORDSMAN], &[HYDRO_MAGE, ELECTRO_DUELIST]);
    let p1_active = state.player1.characters.active_character_id.unwrap();
    let p2_active = state.player2.characters.active_character_id.unwrap();
    let p2_other = state.player2.characters.next_alive_after(p2_active).unwrap();

    state
        .player2
        .characters
        .get_mut(p2_active)
        .unwrap()
        .elemental_aura
        .apply(Element::Hydro);

    let mut next = state.clone();
    next.effect_stack.push_many_fl(vec![Effect::SpecificDamage {
        source: StaticTarget::character(Pid::P1, p1_active),
        target: p2_active,
        target_pid: Pid::P2,
        element: Element::Anemo,
        amount: 1,
        damage_type: DamageType::ElementalSkill,
    }]);
    let next = auto_step(&next);

    assert_eq!(
        next.player2.characters.get(p2_active).unwrap().hp,
        10 - (1 + 1)
    );
    assert_eq!(next.player2.characters.get(p2_other).unwrap().hp, 10 - 1);
}
