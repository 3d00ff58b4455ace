//! Hardware abstraction traits.
//!
//! The game core never touches registers. The firmware implements these traits
//! for its board (GPIO, PWM, SysTick, ...) and hands the implementations over
//! in a [`Peripherals`] bundle. All output methods are infallible: handle
//! hardware errors inside the implementation.
//!
//! Blocking delays use [`embedded_hal::delay::DelayNs`] directly.

use crate::types::{LedMask, Symbol};
use embedded_hal::delay::DelayNs;
use palette::Srgb;

/// The four symbol LEDs.
pub trait LedBank {
    /// Drives the LEDs to exactly `mask`.
    fn set_leds(&mut self, mask: LedMask);

    /// Lights the single LED for `symbol`.
    fn set_channel(&mut self, symbol: Symbol) {
        self.set_leds(symbol.led_mask());
    }

    /// Turns every LED off.
    fn all_off(&mut self) {
        self.set_leds(LedMask::ALL_OFF);
    }
}

/// The piezo/magnetic buzzer.
pub trait Buzzer {
    /// Plays a square tone. May block for `duration_ms`; the caller does not
    /// rely on either behavior.
    fn play_tone(&mut self, frequency_hz: u32, duration_ms: u32);
}

/// The four push buttons.
pub trait ButtonPad {
    /// Returns the currently pressed buttons as a bitmask.
    ///
    /// `0` means no button is pressed. A valid press sets exactly one of the
    /// low four bits. Debouncing is the implementation's job.
    fn read_raw(&mut self) -> u8;
}

/// The numeric (seven-segment) display.
pub trait LevelDisplay {
    /// Shows a single decimal digit.
    fn show_digit(&mut self, digit: u8);
}

/// The RGB status LED.
pub trait StatusLed {
    /// Sets the LED to the specified color (components in 0.0-1.0).
    fn set_color(&mut self, color: Srgb);
}

/// Source of a seed for the sequence generator, e.g. a free-running timer.
pub trait EntropySource {
    /// Returns a seed. Called once at start-up.
    fn seed(&mut self) -> u64;
}

/// Ties together the concrete hardware types of a board.
pub trait Board {
    type Leds: LedBank;
    type Buzzer: Buzzer;
    type Delay: DelayNs;
    type Buttons: ButtonPad;
    type Display: LevelDisplay;
    type Status: StatusLed;
}

/// Owned hardware handed to the game.
pub struct Peripherals<B: Board> {
    pub leds: B::Leds,
    pub buzzer: B::Buzzer,
    pub delay: B::Delay,
    pub buttons: B::Buttons,
    pub display: B::Display,
    pub status: B::Status,
}
