#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Symbol`**: One of the four button/LED/tone channels (1-4)
//! - **`Level`**: A stage with a fixed sequence length (2, 3, 4)
//! - **`Sequence`**: Bounded list of symbols, target or player
//! - **`GameState`**: Levels, target/player buffers and capture cursors, owned by the controller
//! - **`LevelController`**: Plays the game: generate, present, capture, compare, advance/fail/win
//! - **`SignalPresenter`**: Blocking LED + tone playback and feedback patterns
//! - **`InputCapture`**: Blocking button polling with no timeout
//! - **`Board`**: Trait bundling the hardware types you implement for your board
//!
//! The game is strictly sequential: a sequence is fully presented before the
//! first button read, and fully captured before it is compared.

pub mod capture;
pub mod colors;
pub mod comparator;
pub mod config;
pub mod controller;
pub mod generator;
pub mod hardware;
pub mod pattern;
pub mod presenter;
pub mod state;
pub mod types;

pub use capture::{InputCapture, PollOutcome};
pub use colors::StatusColor;
pub use comparator::{Comparison, compare};
pub use config::{ConfigError, GameConfig, SignalTiming};
pub use controller::{LevelController, LevelOutcome, Phase};
pub use generator::{RandomSequenceGenerator, SequenceSource};
pub use hardware::{
    Board, ButtonPad, Buzzer, EntropySource, LedBank, LevelDisplay, Peripherals, StatusLed,
};
pub use pattern::{PatternBuilder, PatternError, PatternStep, SignalPattern};
pub use presenter::SignalPresenter;
pub use state::GameState;
pub use types::{
    LEVEL_LENGTHS, LedMask, Level, MAX_SEQUENCE_LEN, Note, Sequence, Symbol, SymbolError,
};

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;
