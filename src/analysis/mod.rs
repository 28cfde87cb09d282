//! Graph analysis over the board: win detection and component tracking.
//!
//! `connectivity` answers "does this player's chain span their two sides"
//! with a full traversal per query. `components` keeps an incremental
//! partition of a player's stones for automated sources; it is an aid for
//! move selection, never an input to win detection.

pub mod components;
pub mod connectivity;

pub use components::ComponentTracker;
pub use connectivity::has_won;
