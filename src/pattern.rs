use crate::colors::StatusColor;
use crate::types::LedMask;
use heapless::Vec;

/// Maximum number of steps in one pattern loop.
pub const MAX_PATTERN_STEPS: usize = 4;

const _: () = assert!(MAX_PATTERN_STEPS >= 2, "flash patterns need two steps");

/// LEDs lit by the failure signal.
pub const FAILURE_LEDS: LedMask = LedMask::ALL_ON;

/// LEDs lit by the level-pass signal (outer pair).
pub const LEVEL_PASS_LEDS: LedMask = LedMask::new(0x09);

/// LEDs lit by the victory signal (inner pair).
pub const VICTORY_LEDS: LedMask = LedMask::new(0x06);

/// A single step of a signal pattern: what to show and for how long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PatternStep {
    /// LEDs lit during the step.
    pub leds: LedMask,

    /// Status LED color during the step.
    pub status: StatusColor,

    /// Step duration in milliseconds.
    pub duration_ms: u32,
}

impl PatternStep {
    /// Creates a new pattern step.
    #[inline]
    pub const fn new(leds: LedMask, status: StatusColor, duration_ms: u32) -> Self {
        Self {
            leds,
            status,
            duration_ms,
        }
    }

    /// A dark step: LEDs and status off.
    #[inline]
    pub const fn blank(duration_ms: u32) -> Self {
        Self::new(LedMask::ALL_OFF, StatusColor::Off, duration_ms)
    }
}

/// Pattern validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PatternError {
    /// No steps provided.
    EmptyPattern,

    /// Pattern capacity exceeded.
    CapacityExceeded,

    /// Repeat count of zero.
    ZeroRepeat,
}

impl core::fmt::Display for PatternError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PatternError::EmptyPattern => {
                write!(f, "pattern must have at least one step")
            }
            PatternError::CapacityExceeded => {
                write!(f, "pattern capacity exceeded")
            }
            PatternError::ZeroRepeat => {
                write!(f, "pattern must repeat at least once")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PatternError {}

/// A short LED + status animation used for game feedback.
///
/// The steps are played in order `repeat` times, followed by the optional
/// landing step (a longer static hold). After the pattern the presenter turns
/// everything off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignalPattern {
    steps: Vec<PatternStep, MAX_PATTERN_STEPS>,
    repeat: u32,
    landing: Option<PatternStep>,
}

impl SignalPattern {
    /// Creates a new pattern builder.
    pub fn builder() -> PatternBuilder {
        PatternBuilder::new()
    }

    /// On/off flash: `leds` and `status` for `on_ms`, dark for `off_ms`,
    /// `repeat` times. A repeat of zero is treated as one.
    pub fn flash(leds: LedMask, status: StatusColor, on_ms: u32, off_ms: u32, repeat: u32) -> Self {
        let mut steps = Vec::new();
        // capacity checked at compile time above
        let _ = steps.push(PatternStep::new(leds, status, on_ms));
        let _ = steps.push(PatternStep::blank(off_ms));

        Self {
            steps,
            repeat: repeat.max(1),
            landing: None,
        }
    }

    /// Failure signal: every LED and red status, four times 500/500 ms.
    pub fn failure() -> Self {
        Self::flash(FAILURE_LEDS, StatusColor::Fail, 500, 500, 4)
    }

    /// Level-pass signal: outer LEDs and green status, four times 500/500 ms.
    pub fn level_pass() -> Self {
        Self::flash(LEVEL_PASS_LEDS, StatusColor::Pass, 500, 500, 4)
    }

    /// Victory signal: quick inner-LED flashes, then a 3 s static hold.
    pub fn victory() -> Self {
        Self::flash(VICTORY_LEDS, StatusColor::Pass, 250, 250, 3)
            .with_landing(PatternStep::new(VICTORY_LEDS, StatusColor::Pass, 3000))
    }

    /// Replaces the landing step.
    pub fn with_landing(mut self, landing: PatternStep) -> Self {
        self.landing = Some(landing);
        self
    }

    /// Returns the steps of one loop.
    pub fn steps(&self) -> &[PatternStep] {
        &self.steps
    }

    /// Returns the number of steps in one loop.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Returns a reference to the step at the given index.
    pub fn get_step(&self, index: usize) -> Option<&PatternStep> {
        self.steps.get(index)
    }

    /// Returns how many times the steps are played.
    pub fn repeat(&self) -> u32 {
        self.repeat
    }

    /// Returns the landing step if one is configured.
    pub fn landing(&self) -> Option<PatternStep> {
        self.landing
    }

    /// Iterates over every step in play order, loops unrolled, landing last.
    pub fn iter(&self) -> impl Iterator<Item = PatternStep> + '_ {
        (0..self.repeat)
            .flat_map(move |_| self.steps.iter().copied())
            .chain(self.landing)
    }

    /// Total play time in milliseconds.
    pub fn total_duration_ms(&self) -> u64 {
        self.iter().map(|step| u64::from(step.duration_ms)).sum()
    }
}

/// Builder for constructing validated signal patterns.
#[derive(Debug)]
pub struct PatternBuilder {
    steps: Vec<PatternStep, MAX_PATTERN_STEPS>,
    repeat: u32,
    landing: Option<PatternStep>,
}

impl PatternBuilder {
    /// Creates a new empty pattern builder.
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            repeat: 1,
            landing: None,
        }
    }

    /// Adds a step to the pattern.
    ///
    /// # Errors
    /// * `CapacityExceeded` - More than [`MAX_PATTERN_STEPS`] steps
    pub fn step(
        mut self,
        leds: LedMask,
        status: StatusColor,
        duration_ms: u32,
    ) -> Result<Self, PatternError> {
        self.steps
            .push(PatternStep::new(leds, status, duration_ms))
            .map_err(|_| PatternError::CapacityExceeded)?;
        Ok(self)
    }

    /// Sets how many times the steps are played. Default is 1.
    pub fn repeat(mut self, count: u32) -> Self {
        self.repeat = count;
        self
    }

    /// Sets a static step held once after the last repetition.
    pub fn landing(mut self, leds: LedMask, status: StatusColor, duration_ms: u32) -> Self {
        self.landing = Some(PatternStep::new(leds, status, duration_ms));
        self
    }

    /// Builds and validates the pattern.
    ///
    /// # Errors
    /// * `EmptyPattern` - No steps were added
    /// * `ZeroRepeat` - Repeat count is zero
    pub fn build(self) -> Result<SignalPattern, PatternError> {
        if self.steps.is_empty() {
            return Err(PatternError::EmptyPattern);
        }

        if self.repeat == 0 {
            return Err(PatternError::ZeroRepeat);
        }

        Ok(SignalPattern {
            steps: self.steps,
            repeat: self.repeat,
            landing: self.landing,
        })
    }
}

impl Default for PatternBuilder {
    fn default() -> Self {
        Self::new()
    }
}
