//! A generic Dendro bow-user whose skill infuses its own normal attacks
//! with Dendro for the rest of the character's time on the field
//! (exercises `CharacterStatus::Infusion`).

use crate::character::{CharacterDescriptor, SkillDescriptor, SkillId, SkillKind, WeaponType};
use crate::dice::DiceCost;
use crate::effect::{DynamicTarget, Effect};
use crate::element::Element;
use crate::game_state::GameState;
use crate::ids::{CharId, CharacterKindId, Pid, StaticTarget};
use crate::statuses::CharacterStatus;

pub fn descriptor() -> CharacterDescriptor {
    CharacterDescriptor {
        kind_id: CharacterKindId(5),
        name: "Thornweaver",
        max_hp: 10,
        max_energy: 2,
        weapon_type: WeaponType::Bow,
        element: Element::Dendro,
        skills: vec![
            SkillDescriptor {
                id: SkillId(0),
                kind: SkillKind::NormalAttack,
                name: "Thorn Shot",
                dice_cost: DiceCost::new().same_color(1).any(1),
                energy_cost: 0,
                effects: normal_attack,
            },
            SkillDescriptor {
                id: SkillId(1),
                kind: SkillKind::ElementalSkill,
                name: "Verdant Bind",
                dice_cost: DiceCost::new().same_color(3),
                energy_cost: 0,
                effects: elemental_skill,
            },
            SkillDescriptor {
                id: SkillId(2),
                kind: SkillKind::ElementalBurst,
                name: "Overgrowth",
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
            element: Element::Dendro,
            amount: 1,
        },
        Effect::AddCharacterStatus {
            target: StaticTarget::character(pid, caster),
            status: CharacterStatus::Infusion {
                element: Element::Dendro,
                bonus_on_match: 1,
            },
        },
    ]
}

fn burst(_state: &GameState, pid: Pid, caster: CharId) -> Vec<Effect> {
    vec![Effect::ReferredDamage {
        source: StaticTarget::character(pid, caster),
        target: DynamicTarget::AllOpponentCharacters,
        element: Element::Dendro,
        amount: 2,
    }]
}
