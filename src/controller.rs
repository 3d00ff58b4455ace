//! Level controller: the game's state machine.
//!
//! Provides [`LevelController`], which owns the [`GameState`] and all hardware,
//! and plays the game one level at a time:
//! generate → present → capture → compare → advance, fail or win.
//! After a failure or a win the state is reset and play restarts at level one.

use crate::capture::InputCapture;
use crate::colors::StatusColor;
use crate::comparator::{Comparison, compare};
use crate::config::{ConfigError, GameConfig};
use crate::generator::{RandomSequenceGenerator, SequenceSource};
use crate::hardware::{Board, EntropySource, LevelDisplay, Peripherals};
use crate::presenter::SignalPresenter;
use crate::state::GameState;
use crate::types::Level;

/// Digit shown on the display after a win.
pub const VICTORY_DIGIT: u8 = 0;

/// Game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// A level is being played.
    Playing(Level),
    /// The player got a symbol wrong at `index`.
    Failed { index: usize },
    /// The last level was passed.
    Won,
}

impl Phase {
    /// Phase every game starts in.
    pub const INITIAL: Phase = Phase::Playing(Level::FIRST);

    /// Returns the phase following a level's comparison.
    ///
    /// Terminal phases ignore the comparison and go back to [`Phase::INITIAL`].
    pub fn transition(self, comparison: Comparison) -> Phase {
        match (self, comparison) {
            (Phase::Playing(_), Comparison::Mismatch { index }) => Phase::Failed { index },
            (Phase::Playing(level), Comparison::Match) => match level.next() {
                Some(next) => Phase::Playing(next),
                None => Phase::Won,
            },
            (Phase::Failed { .. } | Phase::Won, _) => Phase::INITIAL,
        }
    }

    /// Leaves a terminal phase for [`Phase::INITIAL`]; other phases are kept.
    pub fn restart(self) -> Phase {
        if self.is_terminal() { Phase::INITIAL } else { self }
    }

    /// Returns true for [`Phase::Failed`] and [`Phase::Won`].
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Failed { .. } | Phase::Won)
    }
}

/// What happened in one call to [`LevelController::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LevelOutcome {
    /// Level passed; play continues at the given level.
    Advanced(Level),
    /// Wrong symbol at `index` of `level`. The game was reset.
    Failed { level: Level, index: usize },
    /// Last level passed. The game was reset.
    Won,
}

/// Runs the game on a board.
///
/// # Type Parameters
/// * `B` - The board's hardware types
/// * `G` - Source of target sequences
pub struct LevelController<B: Board, G: SequenceSource> {
    presenter: SignalPresenter<B>,
    capture: InputCapture<B>,
    display: B::Display,
    source: G,
    config: GameConfig,
    state: GameState,
    phase: Phase,
}

impl<B: Board> LevelController<B, RandomSequenceGenerator> {
    /// Creates a controller whose sequences come from a generator seeded by `entropy`.
    pub fn with_entropy<E: EntropySource>(
        peripherals: Peripherals<B>,
        entropy: &mut E,
        config: GameConfig,
    ) -> Result<Self, ConfigError> {
        Self::new(
            peripherals,
            RandomSequenceGenerator::from_entropy(entropy),
            config,
        )
    }
}

impl<B: Board, G: SequenceSource> LevelController<B, G> {
    /// Creates a controller at level one with every output off.
    ///
    /// # Errors
    /// * `ZeroOnDuration` - the configuration would present invisible symbols
    pub fn new(peripherals: Peripherals<B>, source: G, config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let Peripherals {
            leds,
            buzzer,
            delay,
            buttons,
            display,
            status,
        } = peripherals;

        Ok(Self {
            presenter: SignalPresenter::new(leds, buzzer, status, delay, config.tone_ms),
            capture: InputCapture::new(buttons),
            display,
            source,
            config,
            state: GameState::new(),
            phase: Phase::INITIAL,
        })
    }

    /// Plays the current level to its end.
    ///
    /// Blocks through playback and through capture; capture has no timeout.
    pub fn step(&mut self) -> LevelOutcome {
        let level = self.state.level();
        let length = level.sequence_len();

        #[cfg(feature = "defmt")]
        defmt::info!("level {=u8}: {=usize} symbols", level.number(), length);

        self.display.show_digit(level.number());
        self.presenter.set_status(StatusColor::Active);

        let target = self.source.generate(length);
        self.state.set_target(level, target);
        self.presenter
            .present_sequence(self.state.target(level), self.config.playback);

        let feedback = self.config.feedback;
        let player = self.state.player_mut(level);
        player.clear();
        self.capture
            .capture_into(player, length, &mut self.presenter, feedback);

        let comparison = compare(self.state.target(level), self.state.player(level));
        self.phase = Phase::Playing(level).transition(comparison);

        let outcome = match self.phase {
            Phase::Playing(next) => {
                self.presenter.play_pattern(&self.config.level_pass);
                self.state.set_level(next);
                LevelOutcome::Advanced(next)
            }
            Phase::Failed { index } => {
                self.presenter.play_pattern(&self.config.failure);
                self.finish_game();
                LevelOutcome::Failed { level, index }
            }
            Phase::Won => {
                self.display.show_digit(VICTORY_DIGIT);
                self.presenter.play_pattern(&self.config.victory);
                self.finish_game();
                LevelOutcome::Won
            }
        };

        #[cfg(feature = "defmt")]
        defmt::info!("level {=u8}: {}", level.number(), outcome);

        outcome
    }

    /// Plays forever. There is no stop state: every win or loss restarts the game.
    pub fn run(&mut self) -> ! {
        loop {
            self.step();
        }
    }

    /// Returns the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the current phase. Between steps this is always `Playing`.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Resets the state after a terminal phase and returns to level one.
    fn finish_game(&mut self) {
        self.state.reset();
        self.phase = self.phase.restart();

        #[cfg(feature = "defmt")]
        defmt::debug!("game reset");
    }
}
