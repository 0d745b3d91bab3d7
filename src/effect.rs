//! The effect vocabulary (`spec.md` §4.3). `Effect` is one flat tagged
//! enum, not a trait object, so the effect stack stays a plain
//! `Vec<Effect>` that can be inspected and logged without dynamic
//! dispatch.

use crate::character::SkillId;
use crate::element::Element;
use crate::ids::{CharId, Pid, StaticTarget};
use crate::signal::{DamageType, Signal};
use crate::statuses::{
    CharacterHiddenStatus, CharacterStatus, CombatStatus, EquipmentStatus, PlayerHiddenStatus,
    SummonStatus, SupportStatus,
};

/// An abstract damage target resolved against the current `GameState` at
/// execution time (`spec.md` §4.3 "dynamic target" enum). `ReferredDamage`
/// carrying one of these is rewritten into one or more `SpecificDamage`
/// effects by the executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DynamicTarget {
    OwnActive,
    OpponentActive,
    Specific(Pid, CharId),
    AllOpponentCharacters,
    OffFieldOpponentCharacters,
    AllOwnCharacters,
}

/// Who broadcasting targets when firing a `Signal` at every subscribed
/// status (`spec.md` §4.3 "Signal broadcasts" / `AllStatusTriggerer`,
/// `PersonalStatusTriggerer`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalScope {
    /// Both players' combat statuses, summons, supports, hidden statuses,
    /// and every character's equipment/statuses/hidden statuses.
    Everyone,
    /// One player's combat statuses, summons, supports, hidden statuses,
    /// and all of that player's characters.
    Player(Pid),
    /// One character's equipment, character statuses, and character
    /// hidden statuses only.
    Character(StaticTarget),
}

#[derive(Debug, Clone)]
pub enum Effect {
    // ---- Damage --------------------------------------------------------
    ReferredDamage {
        source: StaticTarget,
        target: DynamicTarget,
        element: Element,
        amount: i32,
    },
    SpecificDamage {
        source: StaticTarget,
        target: CharId,
        target_pid: Pid,
        element: Element,
        amount: i32,
        damage_type: DamageType,
    },

    // ---- HP / energy ----------------------------------------------------
    RecoverHp {
        target: StaticTarget,
        amount: i32,
    },
    /// Bypasses the "only alive targets" rule; only takes effect if the
    /// target's `RevivalStatus` permits it (`spec.md` §4.3).
    ReviveRecoverHp {
        target: StaticTarget,
        amount: i32,
    },
    EnergyRecharge {
        target: StaticTarget,
        amount: u8,
    },
    EnergyDrain {
        target: StaticTarget,
        amount: u8,
    },

    // ---- Character-status mutation --------------------------------------
    AddCharacterStatus { target: StaticTarget, status: CharacterStatus },
    OverrideCharacterStatus { target: StaticTarget, status: CharacterStatus },
    RemoveCharacterStatus { target: StaticTarget, template: CharacterStatus },

    AddEquipmentStatus { target: StaticTarget, status: EquipmentStatus },
    OverrideEquipmentStatus { target: StaticTarget, status: EquipmentStatus },
    RemoveEquipmentStatus { target: StaticTarget, template: EquipmentStatus },

    AddCharacterHiddenStatus { target: StaticTarget, status: CharacterHiddenStatus },
    OverrideCharacterHiddenStatus { target: StaticTarget, status: CharacterHiddenStatus },
    RemoveCharacterHiddenStatus { target: StaticTarget, template: CharacterHiddenStatus },

    // ---- Combat/summon/support/hidden mutation --------------------------
    AddCombatStatus { pid: Pid, status: CombatStatus },
    OverrideCombatStatus { pid: Pid, status: CombatStatus },
    RemoveCombatStatus { pid: Pid, template: CombatStatus },

    AddSummonStatus { pid: Pid, status: SummonStatus },
    OverrideSummonStatus { pid: Pid, status: SummonStatus },
    RemoveSummonStatus { pid: Pid, template: SummonStatus },

    AddSupportStatus { pid: Pid, status: SupportStatus },
    OverrideSupportStatus { pid: Pid, status: SupportStatus },
    RemoveSupportStatus { pid: Pid, template: SupportStatus },

    AddPlayerHiddenStatus { pid: Pid, status: PlayerHiddenStatus },
    OverridePlayerHiddenStatus { pid: Pid, status: PlayerHiddenStatus },
    RemovePlayerHiddenStatus { pid: Pid, template: PlayerHiddenStatus },

    // ---- Targeting helpers (spec.md §4.3 — ordering matters) ------------
    /// No-op guard kept for parity with `spec.md`'s targeting-helper
    /// family: a dead target silently absorbs further effects aimed at it
    /// without this marker doing anything itself (enforced directly by
    /// `SpecificDamage`/`RecoverHp` checking `alive`).
    AliveMarkChecker { target: StaticTarget },
    DefeatedMarkChecker { target: StaticTarget },
    /// Drains the defeated-character queue: revives where possible, else
    /// marks the owner's `DeathSwapPending` hidden status
    /// (`spec.md` §4.4 damage resolution step 9).
    DeathCheckChecker,
    SwapCharacter { pid: Pid, to: CharId },
    ForwardSwap { pid: Pid },
    BackwardSwap { pid: Pid },

    // ---- Group markers (visual only) ------------------------------------
    EffectsGroupStart,
    EffectsGroupEnd,

    // ---- Signal broadcast ------------------------------------------------
    BroadcastSignal { scope: SignalScope, signal: Signal },

    // ---- Phase control ----------------------------------------------------
    /// Grants `pid` another action without passing the turn (a fast
    /// action just resolved).
    ConsecutiveAction(Pid),
    TurnEnd(Pid),
    CastSkill { caster: StaticTarget, skill: SkillId },
    ApplyElementalAura { target: StaticTarget, element: Element },
    DrawCards { pid: Pid, count: u8 },
}

impl Effect {
    /// Convenience: pushes `effects` (given in natural first-to-last
    /// execution order) onto a LIFO stack by reversing internally
    /// (`spec.md` §4.3 `push_many_fl`).
    pub fn push_many_fl(stack: &mut Vec<Effect>, effects: Vec<Effect>) {
        stack.extend(effects.into_iter().rev());
    }
}
