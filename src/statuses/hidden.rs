//! Invisible per-player and per-character flags (`spec.md` §4.5).

use crate::effect::Effect;
use crate::game_state::GameState;
use crate::ids::StaticTarget;
use crate::signal::Signal;
use crate::status::StatusBehavior;
use crate::statuses::mixins::DurationState;

/// Per-player invisible flags. Never shown to the opponent; used for
/// bookkeeping like "a death happened this round" or a once-per-round
/// weapon refund.
#[derive(Debug, Clone, PartialEq)]
pub enum PlayerHiddenStatus {
    /// Set when this player's active character is defeated and a
    /// `DeathSwap` action is owed (`spec.md` §8 scenario 6). Cleared once
    /// the swap resolves.
    DeathSwapPending,
    /// Tracks whether the active character performed a plunge attack this
    /// window (DESIGN NOTES §9 Open Question: reset on `POST_SKILL`,
    /// `ROUND_END`, and `SELF_SWAP`, resolved here in favour of the
    /// narrowest reading that keeps plunge eligibility scoped to "since
    /// this character became active and has not yet attacked").
    PlungeAttackEligible { eligible: bool },
    /// Counts remaining dice rerolls this round (`spec.md` §4.2).
    RerollChancesLeft { chances: u8 },
    /// Bookkeeping counter for "cards played this round", reset at
    /// `ROUND_END`; representative of the hidden state some resonance and
    /// combo cards key off (e.g. "has this player played 2+ cards?").
    CardsPlayedThisRound { count: u8 },
}

impl StatusBehavior for PlayerHiddenStatus {
    fn react_to_signal(
        &self,
        _state: &GameState,
        _pos: StaticTarget,
        signal: Signal,
    ) -> (Vec<Effect>, Option<Self>) {
        match (self, signal) {
            (PlayerHiddenStatus::PlungeAttackEligible { .. }, Signal::SelfSwap) => {
                (Vec::new(), Some(PlayerHiddenStatus::PlungeAttackEligible { eligible: true }))
            }
            (PlayerHiddenStatus::PlungeAttackEligible { .. }, Signal::RoundEnd) => {
                (Vec::new(), Some(PlayerHiddenStatus::PlungeAttackEligible { eligible: false }))
            }
            (PlayerHiddenStatus::PlungeAttackEligible { .. }, Signal::PostSkill) => {
                (Vec::new(), Some(PlayerHiddenStatus::PlungeAttackEligible { eligible: false }))
            }
            (PlayerHiddenStatus::CardsPlayedThisRound { .. }, Signal::RoundEnd) => {
                (Vec::new(), Some(PlayerHiddenStatus::CardsPlayedThisRound { count: 0 }))
            }
            _ => (Vec::new(), Some(self.clone())),
        }
    }

    fn update(&self, other: &Self) -> Option<Self> {
        match (self, other) {
            (
                PlayerHiddenStatus::CardsPlayedThisRound { count: a },
                PlayerHiddenStatus::CardsPlayedThisRound { count: b },
            ) => Some(PlayerHiddenStatus::CardsPlayedThisRound { count: a + b }),
            _ => Some(other.clone()),
        }
    }
}

/// Per-character invisible flags: passive game-start hooks, "talent skill
/// N was already used this match", etc.
#[derive(Debug, Clone, PartialEq)]
pub enum CharacterHiddenStatus {
    /// A passive that fires once when the game starts (`INIT_GAME_START`)
    /// and is otherwise inert.
    GameStartPassiveFired,
    /// Generic "this character's talent-enabled alternate skill N has been
    /// used" flag, consulted by skills whose effect depends on prior use.
    TalentSkillUsed { skill_index: u8 },
    /// A once-per-round counter, reset on `ROUND_END` (DESIGN NOTES §9
    /// "Once per round flags").
    OncePerRoundUsed { used: bool },
    /// Duration-style hidden counter, for passives that matter for a
    /// limited number of rounds (e.g. a revival window).
    Timed(DurationState),
    /// Marks a skill as on cooldown for the given number of rounds;
    /// consulted by the action generator (external to this status itself)
    /// to reject re-casting before it expires.
    SkillCooldown(DurationState),
}

impl StatusBehavior for CharacterHiddenStatus {
    fn react_to_signal(
        &self,
        _state: &GameState,
        _pos: StaticTarget,
        signal: Signal,
    ) -> (Vec<Effect>, Option<Self>) {
        match (self, signal) {
            (CharacterHiddenStatus::OncePerRoundUsed { .. }, Signal::RoundEnd) => {
                (Vec::new(), Some(CharacterHiddenStatus::OncePerRoundUsed { used: false }))
            }
            (CharacterHiddenStatus::Timed(d), Signal::RoundEnd) => {
                (Vec::new(), d.tick().map(CharacterHiddenStatus::Timed))
            }
            (CharacterHiddenStatus::SkillCooldown(d), Signal::RoundEnd) => {
                (Vec::new(), d.tick().map(CharacterHiddenStatus::SkillCooldown))
            }
            _ => (Vec::new(), Some(self.clone())),
        }
    }

    fn update(&self, other: &Self) -> Option<Self> {
        match (self, other) {
            (CharacterHiddenStatus::Timed(a), CharacterHiddenStatus::Timed(b)) => {
                Some(CharacterHiddenStatus::Timed(DurationState::new(
                    a.rounds_left.max(b.rounds_left),
                )))
            }
            (CharacterHiddenStatus::SkillCooldown(a), CharacterHiddenStatus::SkillCooldown(b)) => {
                Some(CharacterHiddenStatus::SkillCooldown(DurationState::new(
                    a.rounds_left.max(b.rounds_left),
                )))
            }
            _ => Some(other.clone()),
        }
    }
}
