//! A generic Electro sword-user, representative of Keqing-style kits:
//! fast normal attacks plus a high-energy burst.

use crate::character::{CharacterDescriptor, SkillDescriptor, SkillId, SkillKind, WeaponType};
use crate::dice::DiceCost;
use crate::effect::{DynamicTarget, Effect};
use crate::element::Element;
use crate::game_state::GameState;
use crate::ids::{CharId, CharacterKindId, Pid, StaticTarget};

pub fn descriptor() -> CharacterDescriptor {
    CharacterDescriptor {
        kind_id: CharacterKindId(1),
        name: "Stormblade",
        max_hp: 10,
        max_energy: 3,
        weapon_type: WeaponType::Sword,
        element: Element::Electro,
        skills: vec![
            SkillDescriptor {
                id: SkillId(0),
                kind: SkillKind::NormalAttack,
                name: "Thunder Slash",
                dice_cost: DiceCost::new().same_color(1).any(1),
                energy_cost: 0,
                effects: normal_attack,
            },
            SkillDescriptor {
                id: SkillId(1),
                kind: SkillKind::ElementalSkill,
                name: "Starward Sword",
                dice_cost: DiceCost::new().same_color(3),
                energy_cost: 0,
                effects: elemental_skill,
            },
            SkillDescriptor {
                id: SkillId(2),
                kind: SkillKind::ElementalBurst,
                name: "Starward Sword, Reckoning",
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
        element: Element::Electro,
        amount: 3,
    }]
}

fn burst(_state: &GameState, pid: Pid, caster: CharId) -> Vec<Effect> {
    vec![Effect::ReferredDamage {
        source: StaticTarget::character(pid, caster),
        target: DynamicTarget::AllOpponentCharacters,
        element: Element::Electro,
        amount: 4,
    }]
}
