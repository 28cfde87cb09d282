//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Hex is strictly a two-player game, so `PlayerId` is a closed two-variant
//! enum rather than an open numeric id. `First` owns the top and bottom
//! rows; `Second` owns the left and right columns.
//!
//! ## PlayerPair
//!
//! Fixed two-entry per-player storage indexed by `PlayerId`. Used wherever
//! both players need a value of the same type (e.g. component lists).

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
///
/// `First` moves on even turns and connects row 0 to row N-1;
/// `Second` moves on odd turns and connects column 0 to column N-1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    First,
    Second,
}

impl PlayerId {
    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::First => PlayerId::Second,
            PlayerId::Second => PlayerId::First,
        }
    }

    /// 0 for `First`, 1 for `Second`.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::First => 0,
            PlayerId::Second => 1,
        }
    }

    /// The player whose move it is after `turn` completed moves.
    ///
    /// ```
    /// use hexgame::PlayerId;
    ///
    /// assert_eq!(PlayerId::on_turn(0), PlayerId::First);
    /// assert_eq!(PlayerId::on_turn(1), PlayerId::Second);
    /// assert_eq!(PlayerId::on_turn(2), PlayerId::First);
    /// ```
    #[must_use]
    pub const fn on_turn(turn: u32) -> Self {
        if turn % 2 == 0 {
            PlayerId::First
        } else {
            PlayerId::Second
        }
    }

    /// Both players, first-mover first.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        [PlayerId::First, PlayerId::Second].into_iter()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerId::First => write!(f, "Player 1"),
            PlayerId::Second => write!(f, "Player 2"),
        }
    }
}

/// Per-player data storage with exactly one entry per player.
///
/// ## Example
///
/// ```
/// use hexgame::{PlayerId, PlayerPair};
///
/// let mut wins: PlayerPair<u32> = PlayerPair::default();
/// wins[PlayerId::First] += 1;
///
/// assert_eq!(wins[PlayerId::First], 1);
/// assert_eq!(wins[PlayerId::Second], 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    first: T,
    second: T,
}

impl<T> PlayerPair<T> {
    /// Create a pair from explicit values.
    pub fn new(first: T, second: T) -> Self {
        Self { first, second }
    }

    /// Create a pair with values from a factory function.
    pub fn from_fn(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            first: factory(PlayerId::First),
            second: factory(PlayerId::Second),
        }
    }

    /// Get a reference to a player's entry.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        match player {
            PlayerId::First => &self.first,
            PlayerId::Second => &self.second,
        }
    }

    /// Get a mutable reference to a player's entry.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        match player {
            PlayerId::First => &mut self.first,
            PlayerId::Second => &mut self.second,
        }
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        [
            (PlayerId::First, &self.first),
            (PlayerId::Second, &self.second),
        ]
        .into_iter()
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        assert_eq!(PlayerId::First.opponent(), PlayerId::Second);
        assert_eq!(PlayerId::Second.opponent(), PlayerId::First);
        for player in PlayerId::both() {
            assert_eq!(player.opponent().opponent(), player);
        }
    }

    #[test]
    fn test_on_turn_parity() {
        assert_eq!(PlayerId::on_turn(0), PlayerId::First);
        assert_eq!(PlayerId::on_turn(1), PlayerId::Second);
        assert_eq!(PlayerId::on_turn(14), PlayerId::First);
        assert_eq!(PlayerId::on_turn(195), PlayerId::Second);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", PlayerId::First), "Player 1");
        assert_eq!(format!("{}", PlayerId::Second), "Player 2");
    }

    #[test]
    fn test_pair_from_fn() {
        let pair = PlayerPair::from_fn(|p| p.index() * 10);
        assert_eq!(pair[PlayerId::First], 0);
        assert_eq!(pair[PlayerId::Second], 10);
    }

    #[test]
    fn test_pair_mutation() {
        let mut pair: PlayerPair<Vec<u32>> = PlayerPair::default();
        pair[PlayerId::Second].push(7);

        assert!(pair[PlayerId::First].is_empty());
        assert_eq!(pair[PlayerId::Second], vec![7]);
    }

    #[test]
    fn test_pair_iter() {
        let pair = PlayerPair::new('x', 'o');
        let entries: Vec<_> = pair.iter().collect();
        assert_eq!(entries, vec![(PlayerId::First, &'x'), (PlayerId::Second, &'o')]);
    }

    #[test]
    fn test_player_id_serialization() {
        let json = serde_json::to_string(&PlayerId::Second).unwrap();
        let back: PlayerId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PlayerId::Second);
    }
}
