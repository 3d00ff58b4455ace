//! Player input capture.
//!
//! [`InputCapture`] busy-polls the buttons and turns valid presses into
//! symbols. The blocking calls have no timeout: if nobody presses a button
//! they never return.

use crate::config::SignalTiming;
use crate::hardware::{Board, ButtonPad};
use crate::presenter::SignalPresenter;
use crate::types::{MAX_SEQUENCE_LEN, Sequence, Symbol};

/// What a single button poll did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollOutcome {
    /// No button pressed.
    Idle,
    /// A press that maps to no symbol (several buttons, or unknown bits). Ignored.
    Rejected(u8),
    /// A valid press, appended to the buffer.
    Captured(Symbol),
    /// The buffer already holds the expected number of symbols; nothing was read.
    Full,
}

/// Reads the buttons and fills player sequences.
pub struct InputCapture<B: Board> {
    buttons: B::Buttons,
}

impl<B: Board> InputCapture<B> {
    pub fn new(buttons: B::Buttons) -> Self {
        Self { buttons }
    }

    /// Performs one button read.
    ///
    /// A valid press is appended to `buffer` and echoed through `presenter`
    /// with `feedback` timing. Zero reads and invalid codes leave `buffer`
    /// untouched. `buffer` never grows past `expected_len`.
    pub fn poll(
        &mut self,
        buffer: &mut Sequence,
        expected_len: usize,
        presenter: &mut SignalPresenter<B>,
        feedback: SignalTiming,
    ) -> PollOutcome {
        if buffer.len() >= expected_len.min(MAX_SEQUENCE_LEN) {
            return PollOutcome::Full;
        }

        let raw = self.buttons.read_raw();
        if raw == 0 {
            return PollOutcome::Idle;
        }

        let Some(symbol) = Symbol::from_raw_buttons(raw) else {
            #[cfg(feature = "defmt")]
            defmt::warn!("ignoring button code {=u8:#x}", raw);
            return PollOutcome::Rejected(raw);
        };

        if buffer.push(symbol).is_err() {
            return PollOutcome::Full;
        }
        presenter.present(symbol, feedback);
        PollOutcome::Captured(symbol)
    }

    /// Polls until `buffer` holds `expected_len` symbols.
    ///
    /// Blocks indefinitely until that many valid presses are observed.
    pub fn capture_into(
        &mut self,
        buffer: &mut Sequence,
        expected_len: usize,
        presenter: &mut SignalPresenter<B>,
        feedback: SignalTiming,
    ) {
        while self.poll(buffer, expected_len, presenter, feedback) != PollOutcome::Full {}
    }

    /// Captures a fresh sequence of `expected_len` symbols.
    ///
    /// Blocks indefinitely until that many valid presses are observed.
    pub fn capture_sequence(
        &mut self,
        expected_len: usize,
        presenter: &mut SignalPresenter<B>,
        feedback: SignalTiming,
    ) -> Sequence {
        let mut sequence = Sequence::new();
        self.capture_into(&mut sequence, expected_len, presenter, feedback);
        sequence
    }
}
