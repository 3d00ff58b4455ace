//! LED + tone playback.
//!
//! Provides [`SignalPresenter`] which renders symbols and feedback patterns on
//! the board's outputs. Every call blocks on the board delay for its full
//! duration and leaves all symbol outputs off when it returns.

use crate::colors::StatusColor;
use crate::config::SignalTiming;
use crate::hardware::{Board, Buzzer, LedBank, StatusLed};
use crate::pattern::SignalPattern;
use crate::types::Symbol;
use embedded_hal::delay::DelayNs;

/// Drives the symbol LEDs, buzzer and status LED.
pub struct SignalPresenter<B: Board> {
    leds: B::Leds,
    buzzer: B::Buzzer,
    status: B::Status,
    delay: B::Delay,
    tone_ms: u32,
    current_status: StatusColor,
}

impl<B: Board> SignalPresenter<B> {
    /// Creates a presenter with every output turned off.
    pub fn new(
        mut leds: B::Leds,
        buzzer: B::Buzzer,
        mut status: B::Status,
        delay: B::Delay,
        tone_ms: u32,
    ) -> Self {
        leds.all_off();
        status.set_color(StatusColor::Off.to_srgb());

        Self {
            leds,
            buzzer,
            status,
            delay,
            tone_ms,
            current_status: StatusColor::Off,
        }
    }

    /// Shows `symbol`: its LED and note for `timing.on_ms`, then everything
    /// dark for `timing.off_ms`.
    pub fn present(&mut self, symbol: Symbol, timing: SignalTiming) {
        self.light(symbol);
        self.delay.delay_ms(timing.on_ms);
        self.leds.all_off();
        self.delay.delay_ms(timing.off_ms);
    }

    /// Like [`present`](Self::present) for a raw value. Anything outside
    /// `1..=4`, including 0, keeps all outputs off and plays no tone, but
    /// still takes the full time.
    pub fn present_raw(&mut self, raw: u8, timing: SignalTiming) {
        match Symbol::new(raw) {
            Some(symbol) => self.present(symbol, timing),
            None => {
                self.leds.all_off();
                self.delay.delay_ms(timing.total_ms());
            }
        }
    }

    /// Presents each symbol in order.
    pub fn present_sequence(&mut self, sequence: &[Symbol], timing: SignalTiming) {
        for &symbol in sequence {
            self.present(symbol, timing);
        }
    }

    /// Plays a feedback pattern, then turns the LEDs and status LED off.
    pub fn play_pattern(&mut self, pattern: &SignalPattern) {
        for step in pattern.iter() {
            self.leds.set_leds(step.leds);
            self.set_status(step.status);
            self.delay.delay_ms(step.duration_ms);
        }

        self.leds.all_off();
        self.set_status(StatusColor::Off);
    }

    /// Sets the status LED, skipping the write if it already shows `status`.
    pub fn set_status(&mut self, status: StatusColor) {
        if status != self.current_status {
            self.status.set_color(status.to_srgb());
            self.current_status = status;
        }
    }

    /// Returns the status currently shown.
    pub fn current_status(&self) -> StatusColor {
        self.current_status
    }

    /// Lights the symbol's LED and starts its note.
    fn light(&mut self, symbol: Symbol) {
        self.leds.set_channel(symbol);
        self.buzzer
            .play_tone(symbol.note().frequency_hz(), self.tone_ms);
    }
}
