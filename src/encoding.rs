//! External observability / encoding (`spec.md` §4.7). Every addressable
//! entity exposes `encoding(plan) -> Vec<i32>` whose first element is its
//! type code, looked up by name in `EncodingPlan`; the remaining elements
//! are its scalar fields, padded to that type's fixed width. `decoding`
//! reverses the operation by walking the same flattened `Vec<i32>` with a
//! cursor. This is the engine's only observability contract; the
//! interactive session's pretty-printer is non-normative and lives
//! outside this crate (`spec.md` §1 "out of scope").
//!
//! Only states at a pause point (`waiting_for` returns `Some`, i.e. the
//! effect stack is empty — `spec.md` §3 invariant 7) are ever encoded in
//! practice, so the effect stack itself carries no payload in the wire
//! format; see DESIGN.md for this Open Question resolution.

use std::collections::HashMap;

use crate::character::{Character, Characters};
use crate::deck::ModeDescriptor;
use crate::dice::DicePool;
use crate::effect_stack::EffectStack;
use crate::element::{AuraSet, Element};
use crate::error::InvalidEncoding;
use crate::game_state::{GameState, PlayerState, Supports};
use crate::ids::{CardKindId, CharId, CharacterKindId, Pid, SupportSlot};
use crate::phase::{ActTag, Phase};
use crate::signal::DamageType;
use crate::status::{StatusBehavior, Statuses};
use crate::statuses::{
    CharacterHiddenStatus, CharacterStatus, CombatStatus, EquipmentStatus, PlayerHiddenStatus,
    SummonStatus, SupportStatus,
};

/// Fixed scalar-field width every status entity is padded to, regardless
/// of family. The richest concrete variant (`StackedShieldState`-backed
/// statuses) needs three fields; four leaves room without per-family
/// tables.
const STATUS_FIELDS: usize = 4;

/// A `(type name -> i32 code)` / `(code -> name)` table, built once and
/// threaded by reference into every `encoding`/`decoding` call
/// (`spec.md` §4.7).
#[derive(Debug, Clone)]
pub struct EncodingPlan {
    code_of: HashMap<&'static str, i32>,
    name_of: HashMap<i32, &'static str>,
}

/// The fixed `(name, code)` table. Entity markers first, then one entry
/// per concrete status variant across every family (`spec.md` §4.5).
const TABLE: &[(&str, i32)] = &[
    ("GameState", 1),
    ("PlayerState", 2),
    ("Character", 3),
    ("CharacterStatus::Frozen", 100),
    ("CharacterStatus::Infusion", 101),
    ("CharacterStatus::PersonalShield", 102),
    ("CharacterStatus::PrepareSkill", 103),
    ("CharacterStatus::Revival", 104),
    ("CharacterStatus::Satiated", 105),
    ("CharacterStatus::Burning", 106),
    ("CharacterStatus::AttackUp", 107),
    ("CharacterStatus::Immune", 108),
    ("EquipmentStatus::Weapon", 110),
    ("EquipmentStatus::Artifact", 111),
    ("EquipmentStatus::EngulfingLightning", 112),
    ("EquipmentStatus::TalentDamageBoost", 113),
    ("EquipmentStatus::ArtifactRoundStartHeal", 114),
    ("CharacterHiddenStatus::GameStartPassiveFired", 120),
    ("CharacterHiddenStatus::TalentSkillUsed", 121),
    ("CharacterHiddenStatus::OncePerRoundUsed", 122),
    ("CharacterHiddenStatus::Timed", 123),
    ("CharacterHiddenStatus::SkillCooldown", 124),
    ("CombatStatus::DendroCore", 130),
    ("CombatStatus::CatalyzingField", 131),
    ("CombatStatus::Crystallize", 132),
    ("CombatStatus::TeamWard", 133),
    ("CombatStatus::ElementalResonanceBoost", 134),
    ("CombatStatus::RoundStartHeal", 135),
    ("SummonStatus::BurningFlame", 140),
    ("SummonStatus::Generic", 141),
    ("SummonStatus::GenericWithShield", 142),
    ("SupportStatus::CardDrawEachRound", 150),
    ("SupportStatus::CostDiscountCompanion", 151),
    ("SupportStatus::HealingCompanion", 152),
    ("SupportStatus::EnergyCompanion", 153),
    ("PlayerHiddenStatus::DeathSwapPending", 160),
    ("PlayerHiddenStatus::PlungeAttackEligible", 161),
    ("PlayerHiddenStatus::RerollChancesLeft", 162),
    ("PlayerHiddenStatus::CardsPlayedThisRound", 163),
];

impl EncodingPlan {
    /// Builds the plan from the fixed `TABLE`. Cheap enough to call more
    /// than once; callers that encode/decode many states in a loop should
    /// still build it once and hold the reference.
    pub fn standard() -> Self {
        let mut code_of = HashMap::new();
        let mut name_of = HashMap::new();
        for &(name, code) in TABLE {
            code_of.insert(name, code);
            name_of.insert(code, name);
        }
        Self { code_of, name_of }
    }

    fn code(&self, name: &'static str) -> i32 {
        *self
            .code_of
            .get(name)
            .unwrap_or_else(|| panic!("encoding plan has no entry for {name}"))
    }

    fn name(&self, code: i32) -> Result<&'static str, InvalidEncoding> {
        self.name_of
            .get(&code)
            .copied()
            .ok_or(InvalidEncoding::UnknownTypeCode(code))
    }
}

/// Implemented by every entity `spec.md` §4.7 names as externally
/// observable.
pub trait Encodable {
    fn encoding(&self, plan: &EncodingPlan) -> Vec<i32>;
}

/// A read cursor over a flattened `&[i32]` encoding, used by every
/// `decode_*` function below.
struct Cursor<'a> {
    data: &'a [i32],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [i32]) -> Self {
        Self { data, pos: 0 }
    }

    fn next(&mut self) -> Result<i32, InvalidEncoding> {
        let v = self
            .data
            .get(self.pos)
            .copied()
            .ok_or(InvalidEncoding::WrongFieldCount {
                expected: self.pos + 1,
                got: self.data.len(),
            })?;
        self.pos += 1;
        Ok(v)
    }

    fn next_n(&mut self, n: usize) -> Result<Vec<i32>, InvalidEncoding> {
        (0..n).map(|_| self.next()).collect()
    }
}

// ---- Element / aura --------------------------------------------------

fn element_code(e: Element) -> i32 {
    match e {
        Element::Pyro => 0,
        Element::Hydro => 1,
        Element::Electro => 2,
        Element::Cryo => 3,
        Element::Anemo => 4,
        Element::Geo => 5,
        Element::Dendro => 6,
        Element::Physical => 7,
        Element::Piercing => 8,
        Element::Any => 9,
        Element::Omni => 10,
    }
}

fn decode_element(code: i32) -> Result<Element, InvalidEncoding> {
    Ok(match code {
        0 => Element::Pyro,
        1 => Element::Hydro,
        2 => Element::Electro,
        3 => Element::Cryo,
        4 => Element::Anemo,
        5 => Element::Geo,
        6 => Element::Dendro,
        7 => Element::Physical,
        8 => Element::Piercing,
        9 => Element::Any,
        10 => Element::Omni,
        other => return Err(InvalidEncoding::UnknownTypeCode(other)),
    })
}

/// Fixed width 2: two aura slots, `-1` meaning "empty".
impl Encodable for AuraSet {
    fn encoding(&self, _plan: &EncodingPlan) -> Vec<i32> {
        let mut slots = [-1i32, -1i32];
        for (i, &e) in self.elements().iter().take(2).enumerate() {
            slots[i] = element_code(e);
        }
        slots.to_vec()
    }
}

fn decode_aura(cur: &mut Cursor) -> Result<AuraSet, InvalidEncoding> {
    let mut aura = AuraSet::new();
    for _ in 0..2 {
        let code = cur.next()?;
        if code >= 0 {
            aura.apply(decode_element(code)?);
        }
    }
    Ok(aura)
}

/// Fixed width: one count per `ActualDice` colour (the seven aurable
/// elements plus `Omni`), in `Element::AURABLE` order followed by `Omni`.
impl Encodable for DicePool {
    fn encoding(&self, _plan: &EncodingPlan) -> Vec<i32> {
        let mut out: Vec<i32> = Element::AURABLE.iter().map(|&e| self.get(e) as i32).collect();
        out.push(self.get(Element::Omni) as i32);
        out
    }
}

fn damage_type_code(t: DamageType) -> i32 {
    match t {
        DamageType::NormalAttack => 0,
        DamageType::ElementalSkill => 1,
        DamageType::ElementalBurst => 2,
        DamageType::Summon => 3,
        DamageType::Reaction => 4,
    }
}

fn decode_damage_type(code: i32) -> Result<DamageType, InvalidEncoding> {
    Ok(match code {
        0 => DamageType::NormalAttack,
        1 => DamageType::ElementalSkill,
        2 => DamageType::ElementalBurst,
        3 => DamageType::Summon,
        4 => DamageType::Reaction,
        other => return Err(InvalidEncoding::UnknownTypeCode(other)),
    })
}

fn decode_dice_pool(cur: &mut Cursor) -> Result<DicePool, InvalidEncoding> {
    let mut pool = DicePool::new();
    for &e in Element::AURABLE.iter() {
        let n = cur.next()?;
        pool.add(e, n.max(0) as u32);
    }
    let omni = cur.next()?;
    pool.add(Element::Omni, omni.max(0) as u32);
    Ok(pool)
}

// ---- Status families ---------------------------------------------------
//
// Every concrete status entity encodes as `[type_code, f0, f1, f2, f3]`
// (`STATUS_FIELDS` = 4), unused trailing fields zeroed.

fn pad(name: &'static str, plan: &EncodingPlan, fields: &[i32]) -> Vec<i32> {
    let mut out = Vec::with_capacity(1 + STATUS_FIELDS);
    out.push(plan.code(name));
    out.extend_from_slice(fields);
    out.resize(1 + STATUS_FIELDS, 0);
    out
}

impl Encodable for CharacterStatus {
    fn encoding(&self, plan: &EncodingPlan) -> Vec<i32> {
        match self {
            CharacterStatus::Frozen(d) => {
                pad("CharacterStatus::Frozen", plan, &[d.rounds_left as i32])
            }
            CharacterStatus::Infusion {
                element,
                bonus_on_match,
            } => pad(
                "CharacterStatus::Infusion",
                plan,
                &[element_code(*element), *bonus_on_match],
            ),
            CharacterStatus::PersonalShield(s) => pad(
                "CharacterStatus::PersonalShield",
                plan,
                &[s.usages as i32, s.max_usages as i32, s.shield_amount],
            ),
            CharacterStatus::PrepareSkill { skill } => {
                pad("CharacterStatus::PrepareSkill", plan, &[skill.0 as i32])
            }
            CharacterStatus::Revival { heal_to, uses_left } => pad(
                "CharacterStatus::Revival",
                plan,
                &[*heal_to as i32, *uses_left as i32],
            ),
            CharacterStatus::Satiated(d) => {
                pad("CharacterStatus::Satiated", plan, &[d.rounds_left as i32])
            }
            CharacterStatus::Burning(d) => {
                pad("CharacterStatus::Burning", plan, &[d.rounds_left as i32])
            }
            CharacterStatus::AttackUp { bonus, usage } => pad(
                "CharacterStatus::AttackUp",
                plan,
                &[*bonus, usage.usages as i32, usage.max_usages as i32],
            ),
            CharacterStatus::Immune(d) => {
                pad("CharacterStatus::Immune", plan, &[d.rounds_left as i32])
            }
        }
    }
}

fn decode_character_status(
    code: i32,
    name: &str,
    f: &[i32],
) -> Result<CharacterStatus, InvalidEncoding> {
    use crate::statuses::mixins::{DurationState, FixedShieldState, UsageState};
    Ok(match name {
        "CharacterStatus::Frozen" => CharacterStatus::Frozen(DurationState::new(f[0].max(0) as u8)),
        "CharacterStatus::Infusion" => CharacterStatus::Infusion {
            element: decode_element(f[0])?,
            bonus_on_match: f[1],
        },
        "CharacterStatus::PersonalShield" => CharacterStatus::PersonalShield(FixedShieldState::new(
            f[0].max(0) as u8,
            f[1].max(0) as u8,
            f[2],
        )),
        "CharacterStatus::PrepareSkill" => CharacterStatus::PrepareSkill {
            skill: crate::character::SkillId(f[0].max(0) as u8),
        },
        "CharacterStatus::Revival" => CharacterStatus::Revival {
            heal_to: f[0].max(0) as u8,
            uses_left: f[1].max(0) as u8,
        },
        "CharacterStatus::Satiated" => CharacterStatus::Satiated(DurationState::new(f[0].max(0) as u8)),
        "CharacterStatus::Burning" => CharacterStatus::Burning(DurationState::new(f[0].max(0) as u8)),
        "CharacterStatus::AttackUp" => CharacterStatus::AttackUp {
            bonus: f[0],
            usage: UsageState::new(f[1].max(0) as u8, f[2].max(0) as u8),
        },
        "CharacterStatus::Immune" => CharacterStatus::Immune(DurationState::new(f[0].max(0) as u8)),
        _ => return Err(InvalidEncoding::UnknownTypeCode(code)),
    })
}

impl Encodable for EquipmentStatus {
    fn encoding(&self, plan: &EncodingPlan) -> Vec<i32> {
        match self {
            EquipmentStatus::Weapon { boost } => {
                pad("EquipmentStatus::Weapon", plan, &[*boost])
            }
            EquipmentStatus::Artifact { used_this_round } => pad(
                "EquipmentStatus::Artifact",
                plan,
                &[*used_this_round as i32],
            ),
            EquipmentStatus::EngulfingLightning => {
                pad("EquipmentStatus::EngulfingLightning", plan, &[])
            }
            EquipmentStatus::TalentDamageBoost { applies_to, bonus } => pad(
                "EquipmentStatus::TalentDamageBoost",
                plan,
                &[damage_type_code(*applies_to), *bonus],
            ),
            EquipmentStatus::ArtifactRoundStartHeal { amount } => pad(
                "EquipmentStatus::ArtifactRoundStartHeal",
                plan,
                &[*amount as i32],
            ),
        }
    }
}

fn decode_equipment_status(code: i32, name: &str, f: &[i32]) -> Result<EquipmentStatus, InvalidEncoding> {
    Ok(match name {
        "EquipmentStatus::Weapon" => EquipmentStatus::Weapon { boost: f[0] },
        "EquipmentStatus::Artifact" => EquipmentStatus::Artifact {
            used_this_round: f[0] != 0,
        },
        "EquipmentStatus::EngulfingLightning" => EquipmentStatus::EngulfingLightning,
        "EquipmentStatus::TalentDamageBoost" => EquipmentStatus::TalentDamageBoost {
            applies_to: decode_damage_type(f[0])?,
            bonus: f[1],
        },
        "EquipmentStatus::ArtifactRoundStartHeal" => EquipmentStatus::ArtifactRoundStartHeal {
            amount: f[0].max(0) as u8,
        },
        _ => return Err(InvalidEncoding::UnknownTypeCode(code)),
    })
}

impl Encodable for CharacterHiddenStatus {
    fn encoding(&self, plan: &EncodingPlan) -> Vec<i32> {
        match self {
            CharacterHiddenStatus::GameStartPassiveFired => {
                pad("CharacterHiddenStatus::GameStartPassiveFired", plan, &[])
            }
            CharacterHiddenStatus::TalentSkillUsed { skill_index } => pad(
                "CharacterHiddenStatus::TalentSkillUsed",
                plan,
                &[*skill_index as i32],
            ),
            CharacterHiddenStatus::OncePerRoundUsed { used } => pad(
                "CharacterHiddenStatus::OncePerRoundUsed",
                plan,
                &[*used as i32],
            ),
            CharacterHiddenStatus::Timed(d) => pad(
                "CharacterHiddenStatus::Timed",
                plan,
                &[d.rounds_left as i32],
            ),
            CharacterHiddenStatus::SkillCooldown(d) => pad(
                "CharacterHiddenStatus::SkillCooldown",
                plan,
                &[d.rounds_left as i32],
            ),
        }
    }
}

fn decode_character_hidden_status(
    code: i32,
    name: &str,
    f: &[i32],
) -> Result<CharacterHiddenStatus, InvalidEncoding> {
    use crate::statuses::mixins::DurationState;
    Ok(match name {
        "CharacterHiddenStatus::GameStartPassiveFired" => {
            CharacterHiddenStatus::GameStartPassiveFired
        }
        "CharacterHiddenStatus::TalentSkillUsed" => CharacterHiddenStatus::TalentSkillUsed {
            skill_index: f[0].max(0) as u8,
        },
        "CharacterHiddenStatus::OncePerRoundUsed" => {
            CharacterHiddenStatus::OncePerRoundUsed { used: f[0] != 0 }
        }
        "CharacterHiddenStatus::Timed" => {
            CharacterHiddenStatus::Timed(DurationState::new(f[0].max(0) as u8))
        }
        "CharacterHiddenStatus::SkillCooldown" => {
            CharacterHiddenStatus::SkillCooldown(DurationState::new(f[0].max(0) as u8))
        }
        _ => return Err(InvalidEncoding::UnknownTypeCode(code)),
    })
}

impl Encodable for CombatStatus {
    fn encoding(&self, plan: &EncodingPlan) -> Vec<i32> {
        match self {
            CombatStatus::DendroCore(u) => pad(
                "CombatStatus::DendroCore",
                plan,
                &[u.usages as i32, u.max_usages as i32],
            ),
            CombatStatus::CatalyzingField(u) => pad(
                "CombatStatus::CatalyzingField",
                plan,
                &[u.usages as i32, u.max_usages as i32],
            ),
            CombatStatus::Crystallize(s) => pad(
                "CombatStatus::Crystallize",
                plan,
                &[s.stacks as i32, s.max_stacks as i32, s.shield_amount_per_stack],
            ),
            CombatStatus::TeamWard(s) => pad(
                "CombatStatus::TeamWard",
                plan,
                &[s.usages as i32, s.max_usages as i32, s.shield_amount],
            ),
            CombatStatus::ElementalResonanceBoost {
                element,
                bonus,
                usage,
            } => pad(
                "CombatStatus::ElementalResonanceBoost",
                plan,
                &[element_code(*element), *bonus, usage.usages as i32, usage.max_usages as i32],
            ),
            CombatStatus::RoundStartHeal(u) => pad(
                "CombatStatus::RoundStartHeal",
                plan,
                &[u.usages as i32, u.max_usages as i32],
            ),
        }
    }
}

fn decode_combat_status(code: i32, name: &str, f: &[i32]) -> Result<CombatStatus, InvalidEncoding> {
    use crate::statuses::mixins::{FixedShieldState, StackedShieldState, UsageState};
    Ok(match name {
        "CombatStatus::DendroCore" => {
            CombatStatus::DendroCore(UsageState::new(f[0].max(0) as u8, f[1].max(0) as u8))
        }
        "CombatStatus::CatalyzingField" => {
            CombatStatus::CatalyzingField(UsageState::new(f[0].max(0) as u8, f[1].max(0) as u8))
        }
        "CombatStatus::Crystallize" => CombatStatus::Crystallize(StackedShieldState::new(
            f[0].max(0) as u8,
            f[1].max(0) as u8,
            f[2],
        )),
        "CombatStatus::TeamWard" => {
            CombatStatus::TeamWard(FixedShieldState::new(f[0].max(0) as u8, f[1].max(0) as u8, f[2]))
        }
        "CombatStatus::ElementalResonanceBoost" => CombatStatus::ElementalResonanceBoost {
            element: decode_element(f[0])?,
            bonus: f[1],
            usage: UsageState::new(f[2].max(0) as u8, f[3].max(0) as u8),
        },
        "CombatStatus::RoundStartHeal" => {
            CombatStatus::RoundStartHeal(UsageState::new(f[0].max(0) as u8, f[1].max(0) as u8))
        }
        _ => return Err(InvalidEncoding::UnknownTypeCode(code)),
    })
}

impl Encodable for SummonStatus {
    fn encoding(&self, plan: &EncodingPlan) -> Vec<i32> {
        match self {
            SummonStatus::BurningFlame(u) => pad(
                "SummonStatus::BurningFlame",
                plan,
                &[u.usages as i32, u.max_usages as i32],
            ),
            SummonStatus::Generic {
                element,
                damage,
                usage,
            } => pad(
                "SummonStatus::Generic",
                plan,
                &[element_code(*element), *damage, usage.usages as i32, usage.max_usages as i32],
            ),
            SummonStatus::GenericWithShield {
                element,
                damage,
                usage,
            } => pad(
                "SummonStatus::GenericWithShield",
                plan,
                &[element_code(*element), *damage, usage.usages as i32, usage.max_usages as i32],
            ),
        }
    }
}

fn decode_summon_status(code: i32, name: &str, f: &[i32]) -> Result<SummonStatus, InvalidEncoding> {
    use crate::statuses::mixins::UsageState;
    Ok(match name {
        "SummonStatus::BurningFlame" => {
            SummonStatus::BurningFlame(UsageState::new(f[0].max(0) as u8, f[1].max(0) as u8))
        }
        "SummonStatus::Generic" => SummonStatus::Generic {
            element: decode_element(f[0])?,
            damage: f[1],
            usage: UsageState::new(f[2].max(0) as u8, f[3].max(0) as u8),
        },
        "SummonStatus::GenericWithShield" => SummonStatus::GenericWithShield {
            element: decode_element(f[0])?,
            damage: f[1],
            usage: UsageState::new(f[2].max(0) as u8, f[3].max(0) as u8),
        },
        _ => return Err(InvalidEncoding::UnknownTypeCode(code)),
    })
}

impl Encodable for SupportStatus {
    fn encoding(&self, plan: &EncodingPlan) -> Vec<i32> {
        match self {
            SupportStatus::CardDrawEachRound(u) => pad(
                "SupportStatus::CardDrawEachRound",
                plan,
                &[u.usages as i32, u.max_usages as i32],
            ),
            SupportStatus::CostDiscountCompanion { used_this_round } => pad(
                "SupportStatus::CostDiscountCompanion",
                plan,
                &[*used_this_round as i32],
            ),
            SupportStatus::HealingCompanion(u) => pad(
                "SupportStatus::HealingCompanion",
                plan,
                &[u.usages as i32, u.max_usages as i32],
            ),
            SupportStatus::EnergyCompanion(u) => pad(
                "SupportStatus::EnergyCompanion",
                plan,
                &[u.usages as i32, u.max_usages as i32],
            ),
        }
    }
}

fn decode_support_status(code: i32, name: &str, f: &[i32]) -> Result<SupportStatus, InvalidEncoding> {
    use crate::statuses::mixins::UsageState;
    Ok(match name {
        "SupportStatus::CardDrawEachRound" => {
            SupportStatus::CardDrawEachRound(UsageState::new(f[0].max(0) as u8, f[1].max(0) as u8))
        }
        "SupportStatus::CostDiscountCompanion" => SupportStatus::CostDiscountCompanion {
            used_this_round: f[0] != 0,
        },
        "SupportStatus::HealingCompanion" => {
            SupportStatus::HealingCompanion(UsageState::new(f[0].max(0) as u8, f[1].max(0) as u8))
        }
        "SupportStatus::EnergyCompanion" => {
            SupportStatus::EnergyCompanion(UsageState::new(f[0].max(0) as u8, f[1].max(0) as u8))
        }
        _ => return Err(InvalidEncoding::UnknownTypeCode(code)),
    })
}

impl Encodable for PlayerHiddenStatus {
    fn encoding(&self, plan: &EncodingPlan) -> Vec<i32> {
        match self {
            PlayerHiddenStatus::DeathSwapPending => {
                pad("PlayerHiddenStatus::DeathSwapPending", plan, &[])
            }
            PlayerHiddenStatus::PlungeAttackEligible { eligible } => pad(
                "PlayerHiddenStatus::PlungeAttackEligible",
                plan,
                &[*eligible as i32],
            ),
            PlayerHiddenStatus::RerollChancesLeft { chances } => pad(
                "PlayerHiddenStatus::RerollChancesLeft",
                plan,
                &[*chances as i32],
            ),
            PlayerHiddenStatus::CardsPlayedThisRound { count } => pad(
                "PlayerHiddenStatus::CardsPlayedThisRound",
                plan,
                &[*count as i32],
            ),
        }
    }
}

fn decode_player_hidden_status(code: i32, name: &str, f: &[i32]) -> Result<PlayerHiddenStatus, InvalidEncoding> {
    Ok(match name {
        "PlayerHiddenStatus::DeathSwapPending" => PlayerHiddenStatus::DeathSwapPending,
        "PlayerHiddenStatus::PlungeAttackEligible" => PlayerHiddenStatus::PlungeAttackEligible {
            eligible: f[0] != 0,
        },
        "PlayerHiddenStatus::RerollChancesLeft" => PlayerHiddenStatus::RerollChancesLeft {
            chances: f[0].max(0) as u8,
        },
        "PlayerHiddenStatus::CardsPlayedThisRound" => PlayerHiddenStatus::CardsPlayedThisRound {
            count: f[0].max(0) as u8,
        },
        _ => return Err(InvalidEncoding::UnknownTypeCode(code)),
    })
}

/// Encodes an ordered `Statuses<T>` container as `[count, entry...]`,
/// where each entry is that status's own fixed-width encoding.
fn encode_statuses<T: StatusBehavior + Encodable>(
    statuses: &Statuses<T>,
    plan: &EncodingPlan,
) -> Vec<i32> {
    let mut out = vec![statuses.len() as i32];
    for item in statuses.iter() {
        out.extend(item.encoding(plan));
    }
    out
}

fn decode_statuses<T: StatusBehavior>(
    cur: &mut Cursor,
    plan: &EncodingPlan,
    decode_one: impl Fn(i32, &str, &[i32]) -> Result<T, InvalidEncoding>,
) -> Result<Statuses<T>, InvalidEncoding> {
    let count = cur.next()?;
    let mut statuses = Statuses::new();
    for _ in 0..count.max(0) {
        let code = cur.next()?;
        let fields = cur.next_n(STATUS_FIELDS)?;
        let name = plan.name(code)?;
        statuses.push_raw(decode_one(code, name, &fields)?);
    }
    Ok(statuses)
}

// ---- Character ----------------------------------------------------------

impl Encodable for Character {
    fn encoding(&self, plan: &EncodingPlan) -> Vec<i32> {
        let mut out = vec![
            plan.code("Character"),
            self.id.0 as i32,
            self.kind_id.0 as i32,
            self.hp as i32,
            self.max_hp as i32,
            self.alive as i32,
            self.energy as i32,
            self.max_energy as i32,
        ];
        out.extend(self.elemental_aura.encoding(plan));
        out.extend(encode_statuses(&self.equipment, plan));
        out.extend(encode_statuses(&self.character_statuses, plan));
        out.extend(encode_statuses(&self.hidden_statuses, plan));
        out
    }
}

fn decode_character(cur: &mut Cursor, plan: &EncodingPlan) -> Result<Character, InvalidEncoding> {
    let type_code = cur.next()?;
    if plan.name(type_code)? != "Character" {
        return Err(InvalidEncoding::UnknownTypeCode(type_code));
    }
    let id = CharId(cur.next()?.max(0) as u8);
    let kind_id = CharacterKindId(cur.next()?.max(0) as u16);
    let hp = cur.next()?.clamp(0, u8::MAX as i32) as u8;
    let max_hp = cur.next()?.clamp(0, u8::MAX as i32) as u8;
    let alive = cur.next()? != 0;
    let energy = cur.next()?.clamp(0, u8::MAX as i32) as u8;
    let max_energy = cur.next()?.clamp(0, u8::MAX as i32) as u8;
    let elemental_aura = decode_aura(cur)?;
    let equipment = decode_statuses(cur, plan, decode_equipment_status)?;
    let character_statuses = decode_statuses(cur, plan, decode_character_status)?;
    let hidden_statuses = decode_statuses(cur, plan, decode_character_hidden_status)?;
    Ok(Character {
        id,
        kind_id,
        hp,
        max_hp,
        alive,
        energy,
        max_energy,
        elemental_aura,
        equipment,
        character_statuses,
        hidden_statuses,
    })
}

// ---- PlayerState ----------------------------------------------------------

fn act_tag_code(tag: ActTag) -> i32 {
    match tag {
        ActTag::PassiveWait => 0,
        ActTag::Action => 1,
        ActTag::End => 2,
    }
}

fn decode_act_tag(code: i32) -> Result<ActTag, InvalidEncoding> {
    Ok(match code {
        0 => ActTag::PassiveWait,
        1 => ActTag::Action,
        2 => ActTag::End,
        other => return Err(InvalidEncoding::UnknownTypeCode(other)),
    })
}

impl Encodable for PlayerState {
    fn encoding(&self, plan: &EncodingPlan) -> Vec<i32> {
        let mut out = vec![plan.code("PlayerState"), act_tag_code(self.phase_act)];

        out.push(self.characters.len() as i32);
        out.push(
            self.characters
                .active_character_id
                .map(|c| c.0 as i32 + 1)
                .unwrap_or(0),
        );
        for ch in self.characters.iter() {
            out.extend(ch.encoding(plan));
        }

        out.push(self.hand_cards.len() as i32);
        let mut hand: Vec<(CardKindId, u32)> = self.hand_cards.iter().map(|(&k, &n)| (k, n)).collect();
        hand.sort_by_key(|(k, _)| k.0);
        for (kind, n) in hand {
            out.push(kind.0 as i32);
            out.push(n as i32);
        }

        out.push(self.deck_cards.len() as i32);
        out.extend(self.deck_cards.iter().map(|k| k.0 as i32));

        out.extend(self.dice.encoding(plan));
        out.extend(encode_statuses(&self.combat_statuses, plan));
        out.extend(encode_statuses(&self.summons, plan));

        out.push(self.supports.len() as i32);
        for (slot, support) in self.supports.iter() {
            out.push(slot.0 as i32);
            out.extend(support.encoding(plan));
        }

        out.extend(encode_statuses(&self.hidden_statuses, plan));

        out.push(self.card_redraw_chances as i32);
        out.push(self.dice_reroll_chances as i32);
        out.push(self.declared_end as i32);
        out.push(self.phase_ready as i32);
        out
    }
}

/// Decodes a `PlayerState` given the `initial_deck` it was built from --
/// the encoding does not re-transmit the immutable deck blueprint, which
/// callers already hold (`spec.md` §4.7 notes only scalar/entity fields
/// round-trip; the deck blueprint is supplied out of band exactly like
/// `new_game`'s `Deck` argument).
fn decode_player_state(
    cur: &mut Cursor,
    plan: &EncodingPlan,
    initial_deck: crate::deck::Deck,
    mode: &ModeDescriptor,
) -> Result<PlayerState, InvalidEncoding> {
    let type_code = cur.next()?;
    if plan.name(type_code)? != "PlayerState" {
        return Err(InvalidEncoding::UnknownTypeCode(type_code));
    }
    let phase_act = decode_act_tag(cur.next()?)?;

    let char_count = cur.next()?;
    let active_raw = cur.next()?;
    let active_character_id = if active_raw == 0 {
        None
    } else {
        Some(CharId((active_raw - 1) as u8))
    };
    let mut list = Vec::with_capacity(char_count.max(0) as usize);
    for _ in 0..char_count.max(0) {
        list.push(decode_character(cur, plan)?);
    }
    let mut characters = Characters::new(list);
    characters.active_character_id = active_character_id;

    let hand_count = cur.next()?;
    let mut hand_cards = std::collections::HashMap::new();
    for _ in 0..hand_count.max(0) {
        let kind = CardKindId(cur.next()?.max(0) as u16);
        let n = cur.next()?.max(0) as u32;
        hand_cards.insert(kind, n);
    }

    let deck_count = cur.next()?;
    let deck_cards: Vec<CardKindId> = (0..deck_count.max(0))
        .map(|_| cur.next().map(|v| CardKindId(v.max(0) as u16)))
        .collect::<Result<_, _>>()?;

    let dice = decode_dice_pool(cur)?;
    let combat_statuses = decode_statuses(cur, plan, decode_combat_status)?;
    let summons = decode_statuses(cur, plan, decode_summon_status)?;

    let support_count = cur.next()?;
    let mut supports = Supports::new(mode.supports_cap);
    for _ in 0..support_count.max(0) {
        let _slot = SupportSlot(cur.next()?.max(0) as u8);
        let code = cur.next()?;
        let fields = cur.next_n(STATUS_FIELDS)?;
        let name = plan.name(code)?;
        supports.insert(decode_support_status(code, name, &fields)?);
    }

    let hidden_statuses = decode_statuses(cur, plan, decode_player_hidden_status)?;

    let card_redraw_chances = cur.next()?.max(0) as u8;
    let dice_reroll_chances = cur.next()?.max(0) as u8;
    let declared_end = cur.next()? != 0;
    let phase_ready = cur.next()? != 0;

    Ok(PlayerState {
        phase_act,
        characters,
        hand_cards,
        deck_cards,
        initial_deck,
        dice,
        combat_statuses,
        summons,
        supports,
        hidden_statuses,
        card_redraw_chances,
        dice_reroll_chances,
        declared_end,
        phase_ready,
    })
}

// ---- GameState ------------------------------------------------------------

fn phase_codes(phase: Phase) -> (i32, i32) {
    match phase {
        Phase::CardSelect => (1, -1),
        Phase::StartingHandSelect => (2, -1),
        Phase::RollDice => (3, -1),
        Phase::Action => (4, -1),
        Phase::End => (5, -1),
        Phase::GameEnd { winner } => (6, winner.map(|p| p.index() as i32).unwrap_or(-1)),
    }
}

fn decode_phase(code: i32, winner_code: i32) -> Result<Phase, InvalidEncoding> {
    Ok(match code {
        1 => Phase::CardSelect,
        2 => Phase::StartingHandSelect,
        3 => Phase::RollDice,
        4 => Phase::Action,
        5 => Phase::End,
        6 => Phase::GameEnd {
            winner: match winner_code {
                0 => Some(Pid::P1),
                1 => Some(Pid::P2),
                _ => None,
            },
        },
        other => return Err(InvalidEncoding::UnknownTypeCode(other)),
    })
}

impl Encodable for GameState {
    fn encoding(&self, plan: &EncodingPlan) -> Vec<i32> {
        let mut out = vec![plan.code("GameState"), self.round as i32, self.active_player.index() as i32];
        let mode = &self.mode;
        out.extend([
            mode.cards_per_hand_cap as i32,
            mode.summons_cap as i32,
            mode.supports_cap as i32,
            mode.deck_size as i32,
            mode.initial_draw as i32,
            mode.dice_per_roll as i32,
            mode.reroll_chances as i32,
            mode.redraw_chances as i32,
            mode.arcane_legend_cap as i32,
        ]);
        let (phase_code, winner_code) = phase_codes(self.phase);
        out.push(phase_code);
        out.push(winner_code);
        out.extend(self.player1.encoding(plan));
        out.extend(self.player2.encoding(plan));
        out
    }
}

impl GameState {
    /// Reverses `Encodable::encoding`. Requires the original decks
    /// (`spec.md` §4.7 notes the encoding contract only round-trips
    /// observable/scalar state; the immutable deck blueprint is supplied
    /// out of band, matching `new_game`). Only ever meaningful for states
    /// where the effect stack was empty at encode time; the decoded state
    /// always carries a freshly-created, empty `RandomSource` and
    /// `EffectStack` (see module doc).
    pub fn decoding(
        data: &[i32],
        plan: &EncodingPlan,
        deck_p1: crate::deck::Deck,
        deck_p2: crate::deck::Deck,
        rng_seed: u64,
    ) -> Result<GameState, InvalidEncoding> {
        let mut cur = Cursor::new(data);
        let type_code = cur.next()?;
        if plan.name(type_code)? != "GameState" {
            return Err(InvalidEncoding::UnknownTypeCode(type_code));
        }
        let round = cur.next()?.max(0) as u32;
        let active_player = match cur.next()? {
            0 => Pid::P1,
            1 => Pid::P2,
            other => return Err(InvalidEncoding::UnknownTypeCode(other)),
        };
        let mode_fields = cur.next_n(9)?;
        let mode = ModeDescriptor {
            cards_per_hand_cap: mode_fields[0].max(0) as u8,
            summons_cap: mode_fields[1].max(0) as u8,
            supports_cap: mode_fields[2].max(0) as u8,
            deck_size: mode_fields[3].max(0) as u8,
            initial_draw: mode_fields[4].max(0) as u8,
            dice_per_roll: mode_fields[5].max(0) as u8,
            reroll_chances: mode_fields[6].max(0) as u8,
            redraw_chances: mode_fields[7].max(0) as u8,
            arcane_legend_cap: mode_fields[8].max(0) as u8,
        };
        let phase_code = cur.next()?;
        let winner_code = cur.next()?;
        let phase = decode_phase(phase_code, winner_code)?;

        let player1 = decode_player_state(&mut cur, plan, deck_p1, &mode)?;
        let player2 = decode_player_state(&mut cur, plan, deck_p2, &mode)?;

        Ok(GameState {
            round,
            active_player,
            mode,
            phase,
            player1,
            player2,
            effect_stack: EffectStack::new(),
            rng: crate::rng::RandomSource::from_seed(rng_seed),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Deck;
    use crate::ids::CharacterKindId;
    use std::collections::HashMap as Map;

    fn sample_deck() -> Deck {
        Deck {
            characters: [CharacterKindId(1), CharacterKindId(2), CharacterKindId(3)],
            cards: Map::new(),
        }
    }

    #[test]
    fn character_round_trips_through_encoding() {
        let plan = EncodingPlan::standard();
        let descriptor = crate::characters::descriptor(CharacterKindId(3));
        let mut ch = Character::new(CharId(1), descriptor);
        ch.elemental_aura.apply(Element::Hydro);
        ch.character_statuses.add(CharacterStatus::Revival {
            heal_to: 6,
            uses_left: 1,
        });

        let encoded = ch.encoding(&plan);
        let mut cur = Cursor::new(&encoded);
        let decoded = decode_character(&mut cur, &plan).unwrap();

        assert_eq!(decoded.id, ch.id);
        assert_eq!(decoded.kind_id, ch.kind_id);
        assert_eq!(decoded.hp, ch.hp);
        assert_eq!(decoded.elemental_aura.elements(), ch.elemental_aura.elements());
        assert_eq!(
            decoded.character_statuses.as_slice(),
            ch.character_statuses.as_slice()
        );
    }

    #[test]
    fn dice_pool_round_trips() {
        let plan = EncodingPlan::standard();
        let pool = DicePool::from_counts([(Element::Pyro, 2), (Element::Omni, 1)]);
        let encoded = pool.encoding(&plan);
        let mut cur = Cursor::new(&encoded);
        let decoded = decode_dice_pool(&mut cur).unwrap();
        assert_eq!(decoded, pool);
    }

    #[test]
    fn full_game_state_round_trips_at_a_pause_point() {
        let plan = EncodingPlan::standard();
        let state = crate::game_loop::new_game(sample_deck(), sample_deck(), ModeDescriptor::default(), 7);
        let encoded = state.encoding(&plan);
        let decoded =
            GameState::decoding(&encoded, &plan, sample_deck(), sample_deck(), 7).unwrap();
        assert_eq!(decoded.round, state.round);
        assert_eq!(decoded.phase, state.phase);
        assert_eq!(decoded.player1.hand_count(), state.player1.hand_count());
        assert_eq!(decoded.player2.hand_count(), state.player2.hand_count());
    }

    #[test]
    fn unknown_type_code_is_rejected() {
        let plan = EncodingPlan::standard();
        let bogus = vec![9999, 0, 0, 0, 0, 0, 0, 0];
        let mut cur = Cursor::new(&bogus);
        let code = cur.next().unwrap();
        assert_eq!(plan.name(code), Err(InvalidEncoding::UnknownTypeCode(9999)));
    }
}
