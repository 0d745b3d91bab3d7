//! A generic Cryo bow-user: its burst wraps itself in a personal shield
//! on top of the usual Cryo application (exercises `PersonalShield`).

use crate::character::{CharacterDescriptor, SkillDescriptor, SkillId, SkillKind, WeaponType};
use crate::dice::DiceCost;
use crate::effect::{DynamicTarget, Effect};
use crate::element::Element;
use crate::game_state::GameState;
use crate::ids::{CharId, CharacterKindId, Pid, StaticTarget};
use crate::statuses::CharacterStatus;
use crate::statuses::mixins::FixedShieldState;

pub fn descriptor() -> CharacterDescriptor {
    CharacterDescriptor {
        kind_id: CharacterKindId(4),
        name: "Frostfletcher",
        max_hp: 10,
        max_energy: 3,
        weapon_type: WeaponType::Bow,
        element: Element::Cryo,
        skills: vec![
            SkillDescriptor {
                id: SkillId(0),
                kind: SkillKind::NormalAttack,
                name: "Glacial Shot",
                dice_cost: DiceCost::new().same_color(1).any(1),
                energy_cost: 0,
                effects: normal_attack,
            },
            SkillDescriptor {
                id: SkillId(1),
                kind: SkillKind::ElementalSkill,
                name: "Icebound Arrow",
                dice_cost: DiceCost::new().same_color(3),
                energy_cost: 0,
                effects: elemental_skill,
            },
            SkillDescriptor {
                id: SkillId(2),
                kind: SkillKind::ElementalBurst,
                name: "Absolute Zero",
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
        amount: 2,
    }]
}

fn elemental_skill(_state: &GameState, pid: Pid, caster: CharId) -> Vec<Effect> {
    vec![Effect::ReferredDamage {
        source: StaticTarget::character(pid, caster),
        target: DynamicTarget::OpponentActive,
        element: Element::Cryo,
        amount: 2,
    }]
}

fn burst(_state: &GameState, pid: Pid, caster: CharId) -> Vec<Effect> {
    vec![
        Effect::ReferredDamage {
            source: StaticTarget::character(pid, caster),
            target: DynamicTarget::OpponentActive,
            element: Element::Cryo,
            amount: 1,
        },
        Effect::AddCharacterStatus {
            target: StaticTarget::character(pid, caster),
            status: CharacterStatus::PersonalShield(FixedShieldState::new(1, 1, 3)),
        },
    ]
}
