//! Core value types: players, cells, RNG.
//!
//! These are the fundamental building blocks shared by every other module.
//! Nothing in here knows about boards or game rules.

pub mod cell;
pub mod player;
pub mod rng;

pub use cell::Cell;
pub use player::{PlayerId, PlayerPair};
pub use rng::GameRng;
