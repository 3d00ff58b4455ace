//! Game state owned by the level controller.

use crate::types::{Level, Sequence, Symbol};

/// Everything the game remembers between steps.
///
/// Holds the active level plus a target and a player buffer per level. The
/// capture cursor of a level is the number of symbols in its player buffer, so
/// it can never run ahead of what was actually captured.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameState {
    level: Level,
    targets: [Sequence; Level::COUNT],
    players: [Sequence; Level::COUNT],
}

impl GameState {
    /// Fresh state: level one, every buffer empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the active level.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns the target sequence stored for `level`.
    pub fn target(&self, level: Level) -> &[Symbol] {
        &self.targets[level.index()]
    }

    /// Returns the symbols captured so far for `level`.
    pub fn player(&self, level: Level) -> &[Symbol] {
        &self.players[level.index()]
    }

    /// Returns how many symbols have been captured for `level`.
    pub fn cursor(&self, level: Level) -> usize {
        self.players[level.index()].len()
    }

    /// Returns true if the state is identical to a fresh start.
    pub fn is_fresh(&self) -> bool {
        *self == Self::new()
    }

    pub(crate) fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    /// Stores the target for `level`, cut to the level's length.
    pub(crate) fn set_target(&mut self, level: Level, mut target: Sequence) {
        target.truncate(level.sequence_len());
        self.targets[level.index()] = target;
    }

    pub(crate) fn player_mut(&mut self, level: Level) -> &mut Sequence {
        &mut self.players[level.index()]
    }

    /// Clears every target and player sequence and returns to level one.
    ///
    /// Idempotent.
    pub fn reset(&mut self) {
        for target in self.targets.iter_mut() {
            target.clear();
        }
        for player in self.players.iter_mut() {
            player.clear();
        }
        self.level = Level::FIRST;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(values: &[u8]) -> Sequence {
        values.iter().map(|&v| Symbol::new(v).unwrap()).collect()
    }

    fn played_state() -> GameState {
        let mut state = GameState::new();
        for level in Level::ALL {
            state.set_target(level, sequence(&[1, 2, 3, 4]));
            state.player_mut(level).extend_from_slice(&sequence(&[4, 3])).unwrap();
        }
        state.set_level(Level::Three);
        state
    }

    #[test]
    fn new_state_is_fresh() {
        let state = GameState::new();
        assert!(state.is_fresh());
        assert_eq!(state.level(), Level::One);
        for level in Level::ALL {
            assert!(state.target(level).is_empty());
            assert_eq!(state.cursor(level), 0);
        }
    }

    #[test]
    fn target_is_cut_to_level_length() {
        let state = played_state();
        assert_eq!(state.target(Level::One).len(), 2);
        assert_eq!(state.target(Level::Two).len(), 3);
        assert_eq!(state.target(Level::Three).len(), 4);
    }

    #[test]
    fn reset_restores_fresh_state() {
        let mut state = played_state();
        assert!(!state.is_fresh());

        state.reset();
        assert_eq!(state, GameState::new());

        state.reset();
        assert!(state.is_fresh());
    }
}
