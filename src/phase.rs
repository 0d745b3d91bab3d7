//! Phase/turn state machine (`spec.md` §4.2), implemented as small pure
//! functions over `&GameState` (`next_phase`, `next_step`) rather than a
//! trait-object state machine.

use crate::ids::Pid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    CardSelect,
    StartingHandSelect,
    RollDice,
    Action,
    End,
    GameEnd { winner: Option<Pid> },
}

/// Whether a player is still owed an action this round (`spec.md` §4.2
/// "Interleaved turns").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActTag {
    PassiveWait,
    Action,
    End,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::GameEnd { .. })
    }

    pub fn name(self) -> &'static str {
        match self {
            Phase::CardSelect => "CardSelect",
            Phase::StartingHandSelect => "StartingHandSelect",
            Phase::RollDice => "RollDice",
            Phase::Action => "Action",
            Phase::End => "End",
            Phase::GameEnd { .. } => "GameEnd",
        }
    }
}

/// Decides who acts next within the `Action` phase (`spec.md` §4.2 "The
/// active player alternates unless the last action was a fast action or
/// the opponent has already declared end").
pub fn next_actor(
    current: Pid,
    last_action_was_fast: bool,
    opponent_declared_end: bool,
) -> Pid {
    if last_action_was_fast || opponent_declared_end {
        current
    } else {
        current.other()
    }
}
