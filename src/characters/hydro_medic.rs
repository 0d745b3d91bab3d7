//! A generic Hydro polearm healer: its burst tops off every one of its
//! own characters rather than hitting the opponent (exercises
//! `AllOwnCharacters`).

use crate::character::{CharacterDescriptor, SkillDescriptor, SkillId, SkillKind, WeaponType};
use crate::dice::DiceCost;
use crate::effect::{DynamicTarget, Effect};
use crate::element::Element;
use crate::game_state::GameState;
use crate::ids::{CharId, CharacterKindId, Pid, StaticTarget};

pub fn descriptor() -> CharacterDescriptor {
    CharacterDescriptor {
        kind_id: CharacterKindId(8),
        name: "Springwarden",
        max_hp: 10,
        max_energy: 3,
        weapon_type: WeaponType::Polearm,
        element: Element::Hydro,
        skills: vec![
            SkillDescriptor {
                id: SkillId(0),
                kind: SkillKind::NormalAttack,
                name: "Spring Thrust",
                dice_cost: DiceCost::new().same_color(1).any(1),
                energy_cost: 0,
                effects: normal_attack,
            },
            SkillDescriptor {
                id: SkillId(1),
                kind: SkillKind::ElementalSkill,
                name: "Bubbling Wellspring",
                dice_cost: DiceCost::new().same_color(3),
                energy_cost: 0,
                effects: elemental_skill,
            },
            SkillDescriptor {
                id: SkillId(2),
                kind: SkillKind::ElementalBurst,
                name: "Tide of Renewal",
                dice_cost: DiceCost::new().same_color(3),
                energy_cost: 3,
                effects: burst,
            },
        ],
    }
}

fn normal_attack(_state: &GameState, pid: Pid, caster: CharId) -> Vec<Effect> {
    vec![Effect::ReferredDamage {
        source: StaticTarget::character(pid, caster),
        target: DynamicTarget::OpponentActive,
        element: Element::Physical,
        amount: 1,
    }]
}

fn elemental_skill(_state: &GameState, pid: Pid, caster: CharId) -> Vec<Effect> {
    vec![
        Effect::ReferredDamage {
            source: StaticTarget::character(pid, caster),
            target: DynamicTarget::OpponentActive,
            element: Element::Hydro,
            amount: 1,
        },
        Effect::RecoverHp {
            target: StaticTarget::character(pid, caster),
            amount: 1,
        },
    ]
}

fn burst(state: &GameState, pid: Pid, caster: CharId) -> Vec<Effect> {
    let mut effects: Vec<Effect> = state
        .player(pid)
        .characters
        .iter()
        .filter(|c| c.alive)
        .map(|c| Effect::RecoverHp {
            target: StaticTarget::character(pid, c.id),
            amount: 2,
        })
        .collect();
    effects.push(Effect::ReferredDamage {
        source: StaticTarget::character(pid, caster),
        target: DynamicTarget::OpponentActive,
        element: Element::Hydro,
        amount: 1,
    });
    effects
}
