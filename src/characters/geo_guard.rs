//! A generic Geo claymore-user: sturdy normal attacks, and a burst that
//! wards the whole team (exercises `CombatStatus::TeamWard`).

use crate::character::{CharacterDescriptor, SkillDescriptor, SkillId, SkillKind, WeaponType};
use crate::dice::DiceCost;
use crate::effect::{DynamicTarget, Effect};
use crate::element::Element;
use crate::game_state::GameState;
use crate::ids::{CharId, CharacterKindId, Pid, StaticTarget};
use crate::statuses::CombatStatus;
use crate::statuses::mixins::FixedShieldState;

pub fn descriptor() -> CharacterDescriptor {
    CharacterDescriptor {
        kind_id: CharacterKindId(6),
        name: "Stonewarden",
        max_hp: 11,
        max_energy: 3,
        weapon_type: WeaponType::Claymore,
        element: Element::Geo,
        skills: vec![
            SkillDescriptor {
                id: SkillId(0),
                kind: SkillKind::NormalAttack,
                name: "Boulder Swing",
                dice_cost: DiceCost::new().same_color(1).any(1),
                energy_cost: 0,
                effects: normal_attack,
            },
            SkillDescriptor {
                id: SkillId(1),
                kind: SkillKind::ElementalSkill,
                name: "Rampart Strike",
                dice_cost: DiceCost::new().same_color(3),
                energy_cost: 0,
                effects: elemental_skill,
            },
            SkillDescriptor {
                id: SkillId(2),
                kind: SkillKind::ElementalBurst,
                name: "Bastion's Resolve",
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
        amount: 3,
    }]
}

fn elemental_skill(_state: &GameState, pid: Pid, caster: CharId) -> Vec<Effect> {
    vec![Effect::ReferredDamage {
        source: StaticTarget::character(pid, caster),
        target: DynamicTarget::OpponentActive,
        element: Element::Geo,
        amount: 2,
    }]
}

fn burst(_state: &GameState, pid: Pid, caster: CharId) -> Vec<Effect> {
    vec![
        Effect::ReferredDamage {
            source: StaticTarget::character(pid, caster),
            target: DynamicTarget::OpponentActive,
            element: Element::Geo,
            amount: 3,
        },
        Effect::AddCombatStatus {
            pid,
            status: CombatStatus::TeamWard(FixedShieldState::new(2, 2, 1)),
        },
    ]
}
