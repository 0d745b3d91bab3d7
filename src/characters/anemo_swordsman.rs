//! A generic Anemo sword-user. Its elemental skill is a wind-up: it deals
//! no damage itself but arms a `PrepareSkill` status that casts the burst
//! automatically next turn (exercises `CharacterStatus::PrepareSkill`).

use crate::character::{CharacterDescriptor, SkillDescriptor, SkillId, SkillKind, WeaponType};
use crate::dice::DiceCost;
use crate::effect::{DynamicTarget, Effect};
use crate::element::Element;
use crate::game_state::GameState;
use crate::ids::{CharId, CharacterKindId, Pid, StaticTarget};
use crate::statuses::CharacterStatus;

const BURST_SKILL: SkillId = SkillId(2);

pub fn descriptor() -> CharacterDescriptor {
    CharacterDescriptor {
        kind_id: CharacterKindId(7),
        name: "Galeblade",
        max_hp: 10,
        max_energy: 2,
        weapon_type: WeaponType::Sword,
        element: Element::Anemo,
        skills: vec![
            SkillDescriptor {
                id: SkillId(0),
                kind: SkillKind::NormalAttack,
                name: "Windcut",
                dice_cost: DiceCost::new().same_color(1).any(1),
                energy_cost: 0,
                effects: normal_attack,
            },
            SkillDescriptor {
                id: SkillId(1),
                kind: SkillKind::ElementalSkill,
                name: "Gathering Gale",
                dice_cost: DiceCost::new().same_color(3),
                energy_cost: 0,
                effects: elemental_skill,
            },
            SkillDescriptor {
                id: BURST_SKILL,
                kind: SkillKind::ElementalBurst,
                name: "Vortex Cutter",
                dice_cost: DiceCost::new().same_color(3),
                energy_cost: 2,
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
    vec![
        Effect::ReferredDamage {
            source: StaticTarget::character(pid, caster),
            target: DynamicTarget::OpponentActive,
            element: Element::Anemo,
            amount: 1,
        },
        Effect::AddCharacterStatus {
            target: StaticTarget::character(pid, caster),
            status: CharacterStatus::PrepareSkill { skill: BURST_SKILL },
        },
    ]
}

fn burst(_state: &GameState, pid: Pid, caster: CharId) -> Vec<Effect> {
    vec![Effect::ReferredDamage {
        source: StaticTarget::character(pid, caster),
        target: DynamicTarget::AllOpponentCharacters,
        element: Element::Anemo,
        amount: 2,
    }]
}
