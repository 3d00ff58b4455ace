//! Game timing and feedback configuration.

use crate::pattern::SignalPattern;

/// Default on-time of a presented symbol.
pub const DEFAULT_ON_MS: u32 = 500;

/// Default dark gap after a presented symbol.
pub const DEFAULT_OFF_MS: u32 = 500;

/// Default length of a symbol's note.
pub const DEFAULT_TONE_MS: u32 = 50;

/// On/off timing for presenting one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SignalTiming {
    /// How long the symbol's LED stays lit.
    pub on_ms: u32,

    /// How long everything stays dark afterwards.
    pub off_ms: u32,
}

impl SignalTiming {
    /// Creates a timing.
    #[inline]
    pub const fn new(on_ms: u32, off_ms: u32) -> Self {
        Self { on_ms, off_ms }
    }

    /// Total blocking time of one presentation.
    #[inline]
    pub const fn total_ms(&self) -> u32 {
        self.on_ms.saturating_add(self.off_ms)
    }
}

impl Default for SignalTiming {
    fn default() -> Self {
        Self::new(DEFAULT_ON_MS, DEFAULT_OFF_MS)
    }
}

/// Configuration errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A presentation timing has a zero on-time, so the symbol would never be visible.
    ZeroOnDuration,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroOnDuration => {
                write!(f, "symbol on-duration must be non-zero")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Everything about the game that is timing or feedback, not rules.
///
/// Levels and their lengths are fixed and not part of the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Timing of the target sequence playback.
    pub playback: SignalTiming,

    /// Timing of the feedback given for each captured press.
    pub feedback: SignalTiming,

    /// Length of each symbol's note.
    pub tone_ms: u32,

    /// Played after a wrong sequence.
    pub failure: SignalPattern,

    /// Played after every passed level except the last.
    pub level_pass: SignalPattern,

    /// Played after the last level is passed.
    pub victory: SignalPattern,
}

impl GameConfig {
    /// Sets the playback timing.
    pub fn with_playback(mut self, timing: SignalTiming) -> Self {
        self.playback = timing;
        self
    }

    /// Sets the per-press feedback timing.
    pub fn with_feedback(mut self, timing: SignalTiming) -> Self {
        self.feedback = timing;
        self
    }

    /// Sets the note length.
    pub fn with_tone_ms(mut self, tone_ms: u32) -> Self {
        self.tone_ms = tone_ms;
        self
    }

    /// Sets the failure signal.
    pub fn with_failure(mut self, pattern: SignalPattern) -> Self {
        self.failure = pattern;
        self
    }

    /// Sets the level-pass signal.
    pub fn with_level_pass(mut self, pattern: SignalPattern) -> Self {
        self.level_pass = pattern;
        self
    }

    /// Sets the victory signal.
    pub fn with_victory(mut self, pattern: SignalPattern) -> Self {
        self.victory = pattern;
        self
    }

    /// Checks that every symbol presentation is visible.
    ///
    /// # Errors
    /// * `ZeroOnDuration` - playback or feedback has `on_ms == 0`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.playback.on_ms == 0 || self.feedback.on_ms == 0 {
            return Err(ConfigError::ZeroOnDuration);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            playback: SignalTiming::default(),
            feedback: SignalTiming::new(250, 100),
            tone_ms: DEFAULT_TONE_MS,
            failure: SignalPattern::failure(),
            level_pass: SignalPattern::level_pass(),
            victory: SignalPattern::victory(),
        }
    }
}
