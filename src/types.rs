//! Core game types: symbols, levels and sequences.

use heapless::Vec;

/// Length of the longest level sequence.
pub const MAX_SEQUENCE_LEN: usize = 4;

/// Sequence length of each level, indexed by [`Level::index`].
pub const LEVEL_LENGTHS: [usize; Level::COUNT] = [2, 3, 4];

/// An ordered list of symbols, bounded by the longest level.
///
/// The active length is always the length of the level it belongs to.
pub type Sequence = Vec<Symbol, MAX_SEQUENCE_LEN>;

/// One of the four button/LED/tone channels.
///
/// Always in `1..=4`. The raw value 0 means "no input" on the hardware side
/// and cannot be represented by this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Symbol(u8);

impl Symbol {
    /// Smallest valid symbol value.
    pub const MIN: u8 = 1;

    /// Largest valid symbol value.
    pub const MAX: u8 = 4;

    /// Number of distinct symbols.
    pub const COUNT: usize = 4;

    /// All symbols in channel order.
    pub const ALL: [Symbol; Self::COUNT] = [Symbol(1), Symbol(2), Symbol(3), Symbol(4)];

    /// Creates a symbol, returning `None` outside `1..=4`.
    #[inline]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN && value <= Self::MAX {
            Some(Symbol(value))
        } else {
            None
        }
    }

    /// Decodes a raw button bitmask.
    ///
    /// Exactly one of the low four bits must be set: `0x01 -> 1`, `0x02 -> 2`,
    /// `0x04 -> 3`, `0x08 -> 4`. Zero (no press), simultaneous presses and
    /// bits outside the four channels all decode to `None`.
    #[inline]
    pub const fn from_raw_buttons(raw: u8) -> Option<Self> {
        match raw {
            0x01 => Some(Symbol(1)),
            0x02 => Some(Symbol(2)),
            0x04 => Some(Symbol(3)),
            0x08 => Some(Symbol(4)),
            _ => None,
        }
    }

    /// Returns the numeric value (`1..=4`).
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the zero-based channel index (`0..=3`).
    #[inline]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// LED bit driven for this symbol.
    #[inline]
    pub const fn led_mask(self) -> LedMask {
        LedMask(1 << (self.0 - 1))
    }

    /// Note played for this symbol.
    #[inline]
    pub const fn note(self) -> Note {
        Note::ALL[self.index()]
    }
}

impl TryFrom<u8> for Symbol {
    type Error = SymbolError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Symbol::new(value).ok_or(SymbolError::OutOfRange(value))
    }
}

impl From<Symbol> for u8 {
    fn from(symbol: Symbol) -> u8 {
        symbol.0
    }
}

/// Error converting a raw value into a [`Symbol`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SymbolError {
    /// Value outside `1..=4`.
    OutOfRange(u8),
}

impl core::fmt::Display for SymbolError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SymbolError::OutOfRange(value) => {
                write!(
                    f,
                    "symbol {} out of range {}..={}",
                    value,
                    Symbol::MIN,
                    Symbol::MAX
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SymbolError {}

/// Bitmask over the four LEDs. Bit `n` lights the LED of symbol `n + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedMask(u8);

impl LedMask {
    /// Every LED off.
    pub const ALL_OFF: LedMask = LedMask(0x00);

    /// Every LED on.
    pub const ALL_ON: LedMask = LedMask(0x0F);

    /// Creates a mask; bits above the four LEDs are dropped.
    #[inline]
    pub const fn new(bits: u8) -> Self {
        LedMask(bits & Self::ALL_ON.0)
    }

    /// Returns the raw bits.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if no LED is lit.
    #[inline]
    pub const fn is_off(self) -> bool {
        self.0 == 0
    }

    /// Returns true if the LED for `symbol` is lit.
    #[inline]
    pub const fn contains(self, symbol: Symbol) -> bool {
        self.0 & symbol.led_mask().0 != 0
    }
}

impl From<Symbol> for LedMask {
    fn from(symbol: Symbol) -> Self {
        symbol.led_mask()
    }
}

/// Notes assigned to the four symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Note {
    /// G4, symbol 1.
    G4,
    /// A4, symbol 2.
    A4,
    /// B4, symbol 3.
    B4,
    /// C5, symbol 4.
    C5,
}

impl Note {
    /// Notes in symbol order.
    pub const ALL: [Note; Symbol::COUNT] = [Note::G4, Note::A4, Note::B4, Note::C5];

    /// Frequency in hertz, rounded to the nearest integer.
    #[inline]
    pub const fn frequency_hz(self) -> u32 {
        match self {
            Note::G4 => 392,
            Note::A4 => 440,
            Note::B4 => 494,
            Note::C5 => 523,
        }
    }
}

/// A game stage. Each level has a fixed sequence length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    /// Two symbols.
    #[default]
    One,
    /// Three symbols.
    Two,
    /// Four symbols.
    Three,
}

impl Level {
    /// Number of levels.
    pub const COUNT: usize = 3;

    /// All levels in play order.
    pub const ALL: [Level; Self::COUNT] = [Level::One, Level::Two, Level::Three];

    /// Level every game starts at.
    pub const FIRST: Level = Level::One;

    /// Level whose completion wins the game.
    pub const LAST: Level = Level::Three;

    /// Zero-based index into per-level tables.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Level::One => 0,
            Level::Two => 1,
            Level::Three => 2,
        }
    }

    /// One-based level number, as shown on the display.
    #[inline]
    pub const fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Sequence length for this level.
    #[inline]
    pub const fn sequence_len(self) -> usize {
        LEVEL_LENGTHS[self.index()]
    }

    /// Returns the following level, or `None` for the last one.
    #[inline]
    pub const fn next(self) -> Option<Level> {
        match self {
            Level::One => Some(Level::Two),
            Level::Two => Some(Level::Three),
            Level::Three => None,
        }
    }

    /// Returns true for the final level.
    #[inline]
    pub const fn is_last(self) -> bool {
        self.next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_rejects_sentinel_and_out_of_range() {
        assert_eq!(Symbol::new(0), None);
        assert_eq!(Symbol::new(5), None);
        assert_eq!(Symbol::try_from(0), Err(SymbolError::OutOfRange(0)));
        assert_eq!(Symbol::try_from(3).map(u8::from), Ok(3));
    }

    #[test]
    fn raw_buttons_decode_single_bits_only() {
        assert_eq!(Symbol::from_raw_buttons(0x01), Symbol::new(1));
        assert_eq!(Symbol::from_raw_buttons(0x02), Symbol::new(2));
        assert_eq!(Symbol::from_raw_buttons(0x04), Symbol::new(3));
        assert_eq!(Symbol::from_raw_buttons(0x08), Symbol::new(4));

        assert_eq!(Symbol::from_raw_buttons(0x00), None);
        assert_eq!(Symbol::from_raw_buttons(0x03), None);
        assert_eq!(Symbol::from_raw_buttons(0x10), None);
        assert_eq!(Symbol::from_raw_buttons(0xFF), None);
    }

    #[test]
    fn symbol_channels_are_mutually_exclusive() {
        for a in Symbol::ALL {
            for b in Symbol::ALL {
                assert_eq!(a.led_mask().contains(b), a == b);
            }
        }
        assert_eq!(Symbol::ALL[3].led_mask().bits(), 0x08);
        assert_eq!(Symbol::ALL[0].note(), Note::G4);
        assert_eq!(Symbol::ALL[3].note().frequency_hz(), 523);
    }

    #[test]
    fn level_table_matches_lengths() {
        let lengths: [usize; 3] = Level::ALL.map(Level::sequence_len);
        assert_eq!(lengths, [2, 3, 4]);
        assert!(Level::ALL.iter().all(|l| l.sequence_len() <= MAX_SEQUENCE_LEN));
    }

    #[test]
    fn level_progression_ends_at_last() {
        assert_eq!(Level::FIRST.next(), Some(Level::Two));
        assert_eq!(Level::Two.next(), Some(Level::LAST));
        assert!(Level::LAST.is_last());
        assert_eq!(Level::Three.number(), 3);
    }

    #[test]
    fn led_mask_drops_upper_bits() {
        assert_eq!(LedMask::new(0xF9).bits(), 0x09);
        assert!(LedMask::ALL_OFF.is_off());
    }
}
