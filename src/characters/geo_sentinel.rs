//! A generic Geo polearm-user: raises a construct shield on skill and
//! tags the skill itself with a cooldown marker (exercises
//! `CharacterHiddenStatus::SkillCooldown`).

use crate::character::{CharacterDescriptor, SkillDescriptor, SkillId, SkillKind, WeaponType};
use crate::dice::DiceCost;
use crate::effect::{DynamicTarget, Effect};
use crate::element::Element;
use crate::game_state::GameState;
use crate::ids::{CharId, CharacterKindId, Pid, StaticTarget};
use crate::statuses::mixins::FixedShieldState;
use crate::statuses::{CharacterHiddenStatus, CombatStatus};

const SKILL_ID: SkillId = SkillId(1);

pub fn descriptor() -> CharacterDescriptor {
    CharacterDescriptor {
        kind_id: CharacterKindId(12),
        name: "Bastionkeeper",
        max_hp: 12,
        max_energy: 3,
        weapon_type: WeaponType::Polearm,
        element: Element::Geo,
        skills: vec![
            SkillDescriptor {
                id: SkillId(0),
                kind: SkillKind::NormalAttack,
                name: "Stoneguard Thrust",
                dice_cost: DiceCost::new().same_color(1).any(1),
                energy_cost: 0,
                effects: normal_attack,
            },
            SkillDescriptor {
                id: SKILL_ID,
                kind: SkillKind::ElementalSkill,
                name: "Raised Bulwark",
                dice_cost: DiceCost::new().same_color(3),
                energy_cost: 0,
                effects: elemental_skill,
            },
            SkillDescriptor {
                id: SkillId(2),
                kind: SkillKind::ElementalBurst,
                name: "Fortress Collapse",
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
    vec![
        Effect::ReferredDamage {
            source: StaticTarget::character(pid, caster),
            target: DynamicTarget::OpponentActive,
            element: Element::Geo,
            amount: 1,
        },
        Effect::AddCombatStatus {
            pid,
            status: CombatStatus::TeamWard(FixedShieldState::new(1, 1, 2)),
        },
        Effect::AddCharacterHiddenStatus {
            target: StaticTarget::character(pid, caster),
            status: CharacterHiddenStatus::SkillCooldown(crate::statuses::mixins::DurationState::new(1)),
        },
    ]
}

fn burst(_state: &GameState, pid: Pid, caster: CharId) -> Vec<Effect> {
    vec![Effect::ReferredDamage {
        source: StaticTarget::character(pid, caster),
        target: DynamicTarget::AllOpponentCharacters,
        element: Element::Geo,
        amount: 3,
    }]
}
