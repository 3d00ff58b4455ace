//! Shared test infrastructure for simon-says integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use simon_says::{
    Board, ButtonPad, Buzzer, LedBank, LedMask, LevelDisplay, Peripherals, Sequence,
    SequenceSource, SignalPresenter, Srgb, StatusLed, Symbol,
};

// ============================================================================
// Event Trace
// ============================================================================

/// Everything the game did to the hardware, in order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Leds(u8),
    Tone(u32),
    Delay(u32),
    Digit(u8),
    Status(Srgb),
    Read(u8),
}

#[derive(Clone, Default)]
pub struct Trace(Rc<RefCell<Vec<Event>>>);

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    /// Sum of all blocking delays in milliseconds
    pub fn total_delay_ms(&self) -> u64 {
        self.events()
            .iter()
            .map(|e| match e {
                Event::Delay(ms) => u64::from(*ms),
                _ => 0,
            })
            .sum()
    }

    /// Position of the first button read, if any
    pub fn first_read(&self) -> Option<usize> {
        self.events().iter().position(|e| matches!(e, Event::Read(_)))
    }

    pub fn reads(&self) -> Vec<u8> {
        self.filter(|e| match e {
            Event::Read(raw) => Some(raw),
            _ => None,
        })
    }

    pub fn leds(&self) -> Vec<u8> {
        self.filter(|e| match e {
            Event::Leds(bits) => Some(bits),
            _ => None,
        })
    }

    pub fn tones(&self) -> Vec<u32> {
        self.filter(|e| match e {
            Event::Tone(hz) => Some(hz),
            _ => None,
        })
    }

    pub fn digits(&self) -> Vec<u8> {
        self.filter(|e| match e {
            Event::Digit(d) => Some(d),
            _ => None,
        })
    }

    pub fn statuses(&self) -> Vec<Srgb> {
        self.filter(|e| match e {
            Event::Status(c) => Some(c),
            _ => None,
        })
    }

    fn filter<T>(&self, f: impl Fn(Event) -> Option<T>) -> Vec<T> {
        self.events().into_iter().filter_map(f).collect()
    }
}

// ============================================================================
// Mock Hardware
// ============================================================================

pub struct MockLeds(Trace);

impl LedBank for MockLeds {
    fn set_leds(&mut self, mask: LedMask) {
        self.0.push(Event::Leds(mask.bits()));
    }
}

pub struct MockBuzzer(Trace);

impl Buzzer for MockBuzzer {
    fn play_tone(&mut self, frequency_hz: u32, _duration_ms: u32) {
        self.0.push(Event::Tone(frequency_hz));
    }
}

/// Delay that records instead of sleeping
pub struct MockDelay(Trace);

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.push(Event::Delay(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.push(Event::Delay(ms));
    }
}

/// Buttons replaying a fixed script of raw reads.
///
/// Panics when the script runs out, so a game waiting for more presses than
/// scripted fails the test instead of spinning forever.
pub struct MockButtons {
    trace: Trace,
    script: VecDeque<u8>,
}

impl MockButtons {
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl ButtonPad for MockButtons {
    fn read_raw(&mut self) -> u8 {
        let raw = self
            .script
            .pop_front()
            .expect("button script exhausted: game is still waiting for input");
        self.trace.push(Event::Read(raw));
        raw
    }
}

pub struct MockDisplay(Trace);

impl LevelDisplay for MockDisplay {
    fn show_digit(&mut self, digit: u8) {
        self.0.push(Event::Digit(digit));
    }
}

pub struct MockStatus(Trace);

impl StatusLed for MockStatus {
    fn set_color(&mut self, color: Srgb) {
        self.0.push(Event::Status(color));
    }
}

pub struct MockBoard;

impl Board for MockBoard {
    type Leds = MockLeds;
    type Buzzer = MockBuzzer;
    type Delay = MockDelay;
    type Buttons = MockButtons;
    type Display = MockDisplay;
    type Status = MockStatus;
}

/// Mock peripherals sharing one trace, with buttons replaying `presses`
pub fn peripherals(trace: &Trace, presses: &[u8]) -> Peripherals<MockBoard> {
    Peripherals {
        leds: MockLeds(trace.clone()),
        buzzer: MockBuzzer(trace.clone()),
        delay: MockDelay(trace.clone()),
        buttons: buttons(trace, presses),
        display: MockDisplay(trace.clone()),
        status: MockStatus(trace.clone()),
    }
}

pub fn buttons(trace: &Trace, presses: &[u8]) -> MockButtons {
    MockButtons {
        trace: trace.clone(),
        script: presses.iter().copied().collect(),
    }
}

/// Presenter on mock outputs with a 50 ms note
pub fn presenter(trace: &Trace) -> SignalPresenter<MockBoard> {
    SignalPresenter::new(
        MockLeds(trace.clone()),
        MockBuzzer(trace.clone()),
        MockStatus(trace.clone()),
        MockDelay(trace.clone()),
        50,
    )
}

// ============================================================================
// Scripted Sequences
// ============================================================================

/// Sequence source returning pre-set targets in order
pub struct ScriptedSource(VecDeque<Sequence>);

impl ScriptedSource {
    pub fn new(targets: &[&[u8]]) -> Self {
        Self(targets.iter().map(|t| seq(t)).collect())
    }
}

impl SequenceSource for ScriptedSource {
    fn generate(&mut self, length: usize) -> Sequence {
        let target = self.0.pop_front().expect("no scripted target left");
        assert_eq!(target.len(), length, "scripted target has wrong length");
        target
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

pub fn seq(values: &[u8]) -> Sequence {
    values.iter().map(|&v| Symbol::new(v).unwrap()).collect()
}

pub fn symbols(values: &[u8]) -> Vec<Symbol> {
    values.iter().map(|&v| Symbol::new(v).unwrap()).collect()
}

/// Raw button code for a symbol value 1-4
pub fn press(value: u8) -> u8 {
    1 << (value - 1)
}
