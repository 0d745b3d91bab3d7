//! A deterministic, two-player, turn-based card-and-character combat
//! engine in the style of the "Genius Invokation TCG" mini-game.
//!
//! The engine is a pure value-returning reducer: [`game_state::GameState`]
//! is immutable, every transition produces a new one, and the only
//! concurrency model is "single-threaded, synchronous, no suspension
//! points" (`spec.md` §5).

pub mod action;
pub mod card;
pub mod character;
pub mod deck;
pub mod dice;
pub mod effect;
pub mod effect_stack;
pub mod element;
pub mod encoding;
pub mod error;
pub mod executor;
pub mod game_loop;
pub mod game_state;
pub mod ids;
pub mod legal_actions;
pub mod phase;
pub mod preprocess;
pub mod rng;
pub mod signal;
pub mod status;
pub mod statuses;

pub mod characters;
pub mod cards;

pub use error::RejectReason;
pub use game_loop::{action_step, auto_step, new_game, one_step, waiting_for};
pub use game_state::GameState;
