//! A generic Anemo catalyst-user: a support caster whose skill buffs the
//! whole team's next Anemo or Geo hits (exercises
//! `CombatStatus::ElementalResonanceBoost`).

use crate::character::{CharacterDescriptor, SkillDescriptor, SkillId, SkillKind, WeaponType};
use crate::dice::DiceCost;
use crate::effect::{DynamicTarget, Effect};
use crate::element::Element;
use crate::game_state::GameState;
use crate::ids::{CharId, CharacterKindId, Pid, StaticTarget};
use crate::statuses::CombatStatus;
use crate::statuses::mixins::UsageState;

pub fn descriptor() -> CharacterDescriptor {
    CharacterDescriptor {
        kind_id: CharacterKindId(11),
        name: "Windreader",
        max_hp: 9,
        max_energy: 2,
        weapon_type: WeaponType::Catalyst,
        element: Element::Anemo,
        skills: vec![
            SkillDescriptor {
                id: SkillId(0),
                kind: SkillKind::NormalAttack,
                name: "Gust Jab",
                dice_cost: DiceCost::new().same_color(1).any(1),
                energy_cost: 0,
                effects: normal_attack,
            },
            SkillDescriptor {
                id: SkillId(1),
                kind: SkillKind::ElementalSkill,
                name: "Favonius Rondo",
                dice_cost: DiceCost::new().same_color(3),
                energy_cost: 0,
                effects: elemental_skill,
            },
            SkillDescriptor {
                id: SkillId(2),
                kind: SkillKind::ElementalBurst,
                name: "Skyward Chorus",
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
        amount: 1,
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
        Effect::AddCombatStatus {
            pid,
            status: CombatStatus::ElementalResonanceBoost {
                element: Element::Geo,
                bonus: 1,
                usage: UsageState::new(1, 1),
            },
        },
    ]
}

fn burst(_state: &GameState, pid: Pid, caster: CharId) -> Vec<Effect> {
    vec![
        Effect::ReferredDamage {
            source: StaticTarget::character(pid, caster),
            target: DynamicTarget::AllOpponentCharacters,
            element: Element::Anemo,
            amount: 1,
        },
        Effect::AddCombatStatus {
            pid,
            status: CombatStatus::ElementalResonanceBoost {
                element: Element::Anemo,
                bonus: 2,
                usage: UsageState::new(2, 2),
            },
        },
    ]
}
