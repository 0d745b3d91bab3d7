//! Error taxonomy (`spec.md` §7). No exceptions as control flow: every
//! fallible engine operation returns an explicit `Result`. Error enums are
//! hand-rolled with manual `Display`/`Error` impls rather than pulling in
//! `thiserror`.

use std::fmt;

use crate::ids::Pid;

/// A proposed `PlayerAction` contradicted a precondition or was proposed
/// outside the phase that allows it. Always propagated to the caller; the
/// engine never panics on an illegal action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IllegalAction {
    WrongPhase { expected: &'static str },
    NotYourTurn { expected: Pid },
    CardNotInHand,
    InsufficientDice,
    TargetNotAlive,
    SkillEnergyNotFull,
    NoActiveCharacter,
    UnknownSwapTarget,
    CardDoesNotMatchTuningElement,
    DeathSwapPending { pid: Pid },
    DeathSwapRequiredFirst,
    PaymentDoesNotMatchCost,
}

impl fmt::Display for IllegalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalAction::WrongPhase { expected } => {
                write!(f, "action is not legal outside the {expected} phase")
            }
            IllegalAction::NotYourTurn { expected } => {
                write!(f, "it is {expected}'s turn, not the acting player's")
            }
            IllegalAction::CardNotInHand => write!(f, "card is not in the acting player's hand"),
            IllegalAction::InsufficientDice => write!(f, "dice payment does not cover the cost"),
            IllegalAction::TargetNotAlive => write!(f, "target character is not alive"),
            IllegalAction::SkillEnergyNotFull => {
                write!(f, "character does not have enough energy for this skill")
            }
            IllegalAction::NoActiveCharacter => write!(f, "player has no active character"),
            IllegalAction::UnknownSwapTarget => {
                write!(f, "swap target is not a character on the acting player's side")
            }
            IllegalAction::CardDoesNotMatchTuningElement => write!(
                f,
                "elemental tuning requires a card whose element differs from the active character's"
            ),
            IllegalAction::DeathSwapPending { pid } => {
                write!(f, "{pid} must resolve a death-swap before any other action")
            }
            IllegalAction::DeathSwapRequiredFirst => {
                write!(f, "a death-swap is pending and must be resolved first")
            }
            IllegalAction::PaymentDoesNotMatchCost => {
                write!(f, "supplied dice payment does not exactly satisfy the cost")
            }
        }
    }
}

impl std::error::Error for IllegalAction {}

/// A decoded blob referred to an unknown type code or violated a container
/// cap (`spec.md` §4.7, §7).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidEncoding {
    UnknownTypeCode(i32),
    WrongFieldCount { expected: usize, got: usize },
    ContainerCapExceeded { zone: &'static str, cap: u8 },
}

impl fmt::Display for InvalidEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidEncoding::UnknownTypeCode(code) => {
                write!(f, "unknown encoding type code {code}")
            }
            InvalidEncoding::WrongFieldCount { expected, got } => write!(
                f,
                "expected {expected} scalar fields in encoded entity, got {got}"
            ),
            InvalidEncoding::ContainerCapExceeded { zone, cap } => {
                write!(f, "{zone} container exceeds its cap of {cap}")
            }
        }
    }
}

impl std::error::Error for InvalidEncoding {}

/// The deck fails a legality rule in `spec.md` §6.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckIllegal {
    WrongCharacterCount { got: usize },
    DuplicateCharacter,
    TooFewCards { min: u8, got: u8 },
    TooManyArcaneLegends { cap: u8 },
    DuplicateArcaneLegend,
    ResonanceRequirementNotMet { required_element_chars: u8 },
    TalentForAbsentCharacter,
}

impl fmt::Display for DeckIllegal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckIllegal::WrongCharacterCount { got } => {
                write!(f, "deck must have exactly 3 distinct characters, got {got}")
            }
            DeckIllegal::DuplicateCharacter => write!(f, "deck lists the same character twice"),
            DeckIllegal::TooFewCards { min, got } => {
                write!(f, "deck has {got} non-arcane-legend cards, needs at least {min}")
            }
            DeckIllegal::TooManyArcaneLegends { cap } => {
                write!(f, "deck exceeds the arcane-legend cap of {cap}")
            }
            DeckIllegal::DuplicateArcaneLegend => {
                write!(f, "deck has more than one copy of an arcane-legend card")
            }
            DeckIllegal::ResonanceRequirementNotMet {
                required_element_chars,
            } => write!(
                f,
                "resonance card requires at least {required_element_chars} characters of its element"
            ),
            DeckIllegal::TalentForAbsentCharacter => {
                write!(f, "talent card's character is not on the team")
            }
        }
    }
}

impl std::error::Error for DeckIllegal {}

/// A would-be transition violated an invariant in `spec.md` §3. This is a
/// bug in a status/effect implementation, not a user-facing error: the
/// engine aborts the transition and reports the offending state rather
/// than silently corrupting it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternalInvariant {
    pub message: String,
}

impl InternalInvariant {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for InternalInvariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "internal invariant violated: {}", self.message)
    }
}

impl std::error::Error for InternalInvariant {}

/// Reason an `action_step` call was rejected. Wraps the two user-facing
/// error families the public API surfaces; `InternalInvariant` is fatal to
/// the current game and is reported by panicking inside `debug_assert!`
/// guarded paths during development, per `spec.md` §7 ("fatal to the
/// current game but not the process") -- library callers should treat a
/// `RejectReason` as the only recoverable outcome of a malformed action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    Illegal(IllegalAction),
    BadDeck(DeckIllegal),
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::Illegal(e) => write!(f, "{e}"),
            RejectReason::BadDeck(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for RejectReason {}

impl From<IllegalAction> for RejectReason {
    fn from(e: IllegalAction) -> Self {
        RejectReason::Illegal(e)
    }
}

impl From<DeckIllegal> for RejectReason {
    fn from(e: DeckIllegal) -> Self {
        RejectReason::BadDeck(e)
    }
}
