//! Game logic for Duodice.
//!
//! The whole game is a flat record, [`DiceGameState`], with two transitions:
//! rolling both dice and toggling whether their values are shown.
//! [`DiceGame`] is the per-screen store that applies those transitions,
//! drawing faces from a [`DieSource`] and emitting a fire-and-forget
//! [`HapticPulse`] on every roll.
//!
//! # Example
//!
//! ```
//! use duodice_core::DieFace;
//! use duodice_game::{DiceGame, NoHaptics, ScriptedDieSource};
//!
//! let source = ScriptedDieSource::new([DieFace::D3, DieFace::D5]).unwrap();
//! let mut game = DiceGame::new(source, NoHaptics);
//! assert!(!game.state().is_visible());
//!
//! let state = game.roll();
//! assert_eq!(state.die1(), Some(DieFace::D5));
//! assert_eq!(state.die2(), Some(DieFace::D3));
//! assert!(state.is_visible());
//!
//! let state = game.toggle_visibility();
//! assert!(!state.is_visible());
//! ```

pub use self::{game::*, haptics::*, source::*, state::*};

mod game;
mod haptics;
mod source;
mod state;
