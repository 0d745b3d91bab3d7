//! Character data model (`spec.md` §3 "Character").

use crate::element::{AuraSet, Element};
use crate::ids::{CharId, CharacterKindId, Pid};
use crate::status::Statuses;
use crate::statuses::{CharacterHiddenStatus, CharacterStatus, EquipmentStatus};

/// Static, catalogue-defined facts about a character kind: HP cap, weapon
/// type, base element, energy cap, and skill descriptors. Looked up by
/// `CharacterKindId` through the `CharacterRegistry`; never mutated.
#[derive(Debug, Clone)]
pub struct CharacterDescriptor {
    pub kind_id: CharacterKindId,
    pub name: &'static str,
    pub max_hp: u8,
    pub max_energy: u8,
    pub weapon_type: WeaponType,
    pub element: Element,
    pub skills: Vec<SkillDescriptor>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeaponType {
    Sword,
    Claymore,
    Polearm,
    Bow,
    Catalyst,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillKind {
    NormalAttack,
    ElementalSkill,
    ElementalBurst,
    /// A hidden passive that is never directly castable (e.g. Albedo's
    /// descent passive) but is still addressed by `SkillId` for trigger
    /// bookkeeping.
    Passive,
}

/// A static skill descriptor: its dice cost, energy behaviour, and which
/// `react_to_signal`/effect-producing hook in the character's catalogue
/// entry implements it. The engine does not script skill bodies as data;
/// each character's catalogue file provides a `fn(&GameState, CharId) ->
/// Vec<Effect>` for its own skills, generalized to "function that builds
/// the effects" since skill damage depends on the caster's current
/// HP/energy/statuses.
#[derive(Clone)]
pub struct SkillDescriptor {
    pub id: SkillId,
    pub kind: SkillKind,
    pub name: &'static str,
    pub dice_cost: crate::dice::DiceCost,
    pub energy_cost: u8,
    /// Builds the effects this skill produces, given the state *before*
    /// its cost is paid and energy is spent (both handled by the
    /// executor/action step separately).
    pub effects: fn(&crate::game_state::GameState, Pid, CharId) -> Vec<crate::effect::Effect>,
}

impl std::fmt::Debug for SkillDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SkillDescriptor")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("name", &self.name)
            .finish()
    }
}

/// Identifies a skill within a character kind (not globally unique across
/// characters -- always paired with a `CharacterKindId`/`CharId`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SkillId(pub u8);

/// A character instance on the battlefield (`spec.md` §3).
#[derive(Debug, Clone)]
pub struct Character {
    pub id: CharId,
    pub kind_id: CharacterKindId,
    pub hp: u8,
    pub max_hp: u8,
    pub alive: bool,
    pub energy: u8,
    pub max_energy: u8,
    pub elemental_aura: AuraSet,
    /// Weapon/artifact/talent, visited before `character_statuses` in the
    /// preprocessor pipeline (`spec.md` §4.4 visitation order item 1).
    pub equipment: Statuses<EquipmentStatus>,
    pub character_statuses: Statuses<CharacterStatus>,
    pub hidden_statuses: Statuses<CharacterHiddenStatus>,
}

impl Character {
    pub fn new(id: CharId, descriptor: &CharacterDescriptor) -> Self {
        Self {
            id,
            kind_id: descriptor.kind_id,
            hp: descriptor.max_hp,
            max_hp: descriptor.max_hp,
            alive: true,
            energy: 0,
            max_energy: descriptor.max_energy,
            elemental_aura: AuraSet::new(),
            equipment: Statuses::new(),
            character_statuses: Statuses::new(),
            hidden_statuses: Statuses::new(),
        }
    }

    /// Applies `delta` HP (signed), clamping to `[0, max_hp]` and updating
    /// `alive` per invariant 1. Returns the actual HP change applied.
    pub fn apply_hp_delta(&mut self, delta: i32) -> i32 {
        let before = self.hp as i32;
        let after = (before + delta).clamp(0, self.max_hp as i32);
        self.hp = after as u8;
        self.alive = self.hp > 0;
        after - before
    }

    pub fn set_energy(&mut self, energy: u8) {
        self.energy = energy.min(self.max_energy);
    }

    pub fn gain_energy(&mut self, delta: u8) {
        self.energy = (self.energy + delta).min(self.max_energy);
    }
}

/// Ordered list of a player's characters plus the active-character cursor
/// (`spec.md` §3). Characters are 1-indexed by `CharId` and never removed.
#[derive(Debug, Clone)]
pub struct Characters {
    list: Vec<Character>,
    pub active_character_id: Option<CharId>,
}

impl Characters {
    pub fn new(list: Vec<Character>) -> Self {
        let active_character_id = list.first().map(|c| c.id);
        Self {
            list,
            active_character_id,
        }
    }

    pub fn get(&self, id: CharId) -> Option<&Character> {
        self.list.iter().find(|c| c.id == id)
    }

    pub fn get_mut(&mut self, id: CharId) -> Option<&mut Character> {
        self.list.iter_mut().find(|c| c.id == id)
    }

    pub fn active(&self) -> Option<&Character> {
        self.active_character_id.and_then(|id| self.get(id))
    }

    pub fn active_mut(&mut self) -> Option<&mut Character> {
        self.active_character_id.and_then(move |id| self.get_mut(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.list.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Character> {
        self.list.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn all_defeated(&self) -> bool {
        self.list.iter().all(|c| !c.alive)
    }

    pub fn any_alive(&self) -> bool {
        self.list.iter().any(|c| c.alive)
    }

    pub fn ids_in_order(&self) -> Vec<CharId> {
        self.list.iter().map(|c| c.id).collect()
    }

    /// The next alive character after `from`, wrapping around, per the
    /// swap-target ordering the action generator offers (`spec.md` §4.2
    /// `SwapAction`). Returns `None` if no other character is alive.
    pub fn next_alive_after(&self, from: CharId) -> Option<CharId> {
        let idx = self.list.iter().position(|c| c.id == from)?;
        let n = self.list.len();
        for step in 1..n {
            let candidate = &self.list[(idx + step) % n];
            if candidate.alive {
                return Some(candidate.id);
            }
        }
        None
    }

    /// The previous alive character before `from`, wrapping around.
    /// Mirrors `next_alive_after` in the opposite roster direction, for
    /// effects that push the active slot backward (`Effect::BackwardSwap`)
    /// rather than forward (`Effect::ForwardSwap`).
    pub fn next_alive_before(&self, from: CharId) -> Option<CharId> {
        let idx = self.list.iter().position(|c| c.id == from)?;
        let n = self.list.len();
        for step in 1..n {
            let candidate = &self.list[(idx + n - step) % n];
            if candidate.alive {
                return Some(candidate.id);
            }
        }
        None
    }
}

/// Looks up `skill` on the caster's kind and builds its effects. Called
/// by the executor for `Effect::CastSkill` (both direct `SkillAction`
/// casts and `PrepareSkillStatus` wind-ups).
pub fn cast_skill_effects(
    state: &crate::game_state::GameState,
    pid: Pid,
    caster: CharId,
    skill: SkillId,
) -> Vec<crate::effect::Effect> {
    let kind_id = match state.player(pid).characters.get(caster) {
        Some(ch) => ch.kind_id,
        None => return Vec::new(),
    };
    let descriptor = crate::characters::descriptor(kind_id);
    let Some(skill_descriptor) = descriptor.skills.iter().find(|s| s.id == skill) else {
        return Vec::new();
    };
    let mut effects = (skill_descriptor.effects)(state, pid, caster);
    let caster_target = crate::ids::StaticTarget::character(pid, caster);
    match skill_descriptor.kind {
        SkillKind::NormalAttack | SkillKind::ElementalSkill => {
            effects.push(crate::effect::Effect::EnergyRecharge {
                target: caster_target,
                amount: 1,
            });
        }
        SkillKind::ElementalBurst => {
            effects.push(crate::effect::Effect::EnergyDrain {
                target: caster_target,
                amount: skill_descriptor.energy_cost,
            });
        }
        SkillKind::Passive => {}
    }
    effects
}
