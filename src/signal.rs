//! Signals, informables, and preprocessable events (`spec.md` §4.4, §4.5).
//!
//! A `Signal` marks a moment in the turn/round lifecycle that statuses may
//! spontaneously react to (`react_to_signal`). An `Informable` is a past
//! event broadcast for observation only (`inform`). A `Preprocessable` is
//! an in-flight event that active statuses may rewrite before it
//! materialises, visited once per `PreprocessStage`.

use crate::dice::DiceCost;
use crate::element::{Element, Reaction};
use crate::ids::{CharId, Pid, StaticTarget};

/// Moments in the turn/round lifecycle statuses may subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signal {
    RoundStart,
    RoundEnd,
    EndRoundCheckOut,
    PreAction,
    PostAction,
    PostDmg,
    PostHealing,
    PostSkill,
    ActPreSkill,
    CombatAction,
    SelfSwap,
    SwapEvent1,
    SwapEvent2,
    PostCard,
    DeathEvent,
    InitGameStart,
    RevivalGameStart,
    SelfDeclareEndRound,
    TriggerRevival,
    PostAny,
    DirectTrigger,
    PostStatusRemoval,
}

/// Past events broadcast to statuses for observation (`inform`); these
/// never mutate the event they describe.
#[derive(Debug, Clone)]
pub enum Informable {
    DmgDealt {
        source: StaticTarget,
        target: CharId,
        target_pid: Pid,
        element: Element,
        amount: u8,
    },
    Healing {
        target: CharId,
        target_pid: Pid,
        amount: u8,
    },
    ReactionTriggered {
        target: CharId,
        target_pid: Pid,
        reaction: Reaction,
    },
    PreSkillUsage {
        caster: CharId,
        caster_pid: Pid,
        skill: crate::character::SkillId,
    },
    PostSkillUsage {
        caster: CharId,
        caster_pid: Pid,
        skill: crate::character::SkillId,
    },
    CharacterDeath {
        character: CharId,
        pid: Pid,
    },
    EquipmentDiscarding {
        character: CharId,
        pid: Pid,
    },
    SupportRemoval {
        pid: Pid,
        slot: crate::ids::SupportSlot,
    },
}

/// Which stage of the preprocessor pipeline is currently running
/// (`spec.md` §4.4's `Swap/Skill/Card/Damage/Roll` signal families).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreprocessStage {
    SwapCostAny,
    SwapCostElem,
    SwapCostOmni,
    Swap,
    SkillCostAny,
    SkillCostElem,
    SkillCostOmni,
    Skill,
    Card1CostAny,
    Card1CostElem,
    Card1CostOmni,
    Card2CostAny,
    Card2CostElem,
    Card2CostOmni,
    Card1,
    Card2,
    DmgElement,
    DmgReaction,
    DmgAmountPlus,
    DmgAmountMinus,
    DmgAmountMul,
    RollChances,
    RollDiceInit,
}

impl PreprocessStage {
    pub fn is_cost_stage(self) -> bool {
        matches!(
            self,
            PreprocessStage::SwapCostAny
                | PreprocessStage::SwapCostElem
                | PreprocessStage::SwapCostOmni
                | PreprocessStage::SkillCostAny
                | PreprocessStage::SkillCostElem
                | PreprocessStage::SkillCostOmni
                | PreprocessStage::Card1CostAny
                | PreprocessStage::Card1CostElem
                | PreprocessStage::Card1CostOmni
                | PreprocessStage::Card2CostAny
                | PreprocessStage::Card2CostElem
                | PreprocessStage::Card2CostOmni
        )
    }
}

/// Which damage type produced the hit; `Normal`/`Skill`/`Burst` influence
/// weapon-style "+1 on direct character damage" boosters, `Summon`-sourced
/// hits typically bypass those.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageType {
    NormalAttack,
    ElementalSkill,
    ElementalBurst,
    Summon,
    Reaction,
}

/// The in-flight damage event threaded through `DMG_ELEMENT` ..
/// `DMG_AMOUNT_MUL` (`spec.md` §4.4).
#[derive(Debug, Clone)]
pub struct DmgPEvent {
    pub source: StaticTarget,
    pub target: CharId,
    pub target_pid: Pid,
    pub element: Element,
    pub damage: i32,
    pub reaction: Option<Reaction>,
    pub damage_type: DamageType,
}

/// The cost-preprocessing payload for swap/skill/card actions. `kind`
/// records which of the two cards in a `CardAction` this is for multi-card
/// combo cards (`CARD1`/`CARD2` in `spec.md` §4.4); single-card plays
/// always use `Card1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostKind {
    Swap,
    Skill,
    Card1,
    Card2,
}

#[derive(Debug, Clone)]
pub struct CostPEvent {
    pub kind: CostKind,
    pub cost: DiceCost,
}

#[derive(Debug, Clone)]
pub struct RollInitPEvent {
    pub pid: Pid,
    pub dice: Vec<Element>,
}

#[derive(Debug, Clone)]
pub struct RollChancePEvent {
    pub pid: Pid,
    pub chances_left: u8,
}

/// An in-flight event that may be rewritten by active statuses before
/// materialising (`spec.md` §4.4 "Preprocessable event").
#[derive(Debug, Clone)]
pub enum Preprocessable {
    Cost(CostPEvent),
    Damage(DmgPEvent),
    RollInit(RollInitPEvent),
    RollChance(RollChancePEvent),
}

impl Preprocessable {
    pub fn as_cost(&mut self) -> Option<&mut CostPEvent> {
        match self {
            Preprocessable::Cost(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_damage(&mut self) -> Option<&mut DmgPEvent> {
        match self {
            Preprocessable::Damage(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_roll_init(&mut self) -> Option<&mut RollInitPEvent> {
        match self {
            Preprocessable::RollInit(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_roll_chance(&mut self) -> Option<&mut RollChancePEvent> {
        match self {
            Preprocessable::RollChance(r) => Some(r),
            _ => None,
        }
    }
}
