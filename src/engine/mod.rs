//! The turn state machine.

pub mod game;

pub use game::{Game, GameState};
