//! Status LED colors.
//!
//! The RGB status LED tells the player what the game is doing: blue while a
//! level is active, red on failure, green on a passed level or a win.

use palette::Srgb;

pub const OFF: Srgb = Srgb::new(0.0, 0.0, 0.0);
pub const RED: Srgb = Srgb::new(1.0, 0.0, 0.0);
pub const GREEN: Srgb = Srgb::new(0.0, 1.0, 0.0);
pub const BLUE: Srgb = Srgb::new(0.0, 0.0, 1.0);

/// Meaning shown on the status LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StatusColor {
    /// Idle, LED dark.
    #[default]
    Off,
    /// A level is being presented or captured.
    Active,
    /// The player entered a wrong sequence.
    Fail,
    /// Level passed or game won.
    Pass,
}

impl StatusColor {
    /// Color driven on the RGB status LED.
    #[inline]
    pub const fn to_srgb(self) -> Srgb {
        match self {
            StatusColor::Off => OFF,
            StatusColor::Active => BLUE,
            StatusColor::Fail => RED,
            StatusColor::Pass => GREEN,
        }
    }
}

impl From<StatusColor> for Srgb {
    fn from(status: StatusColor) -> Self {
        status.to_srgb()
    }
}
