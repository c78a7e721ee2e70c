use postcard::experimental::max_size::MaxSize;
use serde::{Deserialize, Serialize};

/// A color of a single RGB matrix LED, 8 bits per channel.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize, MaxSize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const OFF: Self = Self::new(0x00, 0x00, 0x00);
    pub const WHITE: Self = Self::new(0xFF, 0xFF, 0xFF);
    pub const RED: Self = Self::new(0xFF, 0x00, 0x00);
    pub const GREEN: Self = Self::new(0x00, 0xFF, 0x00);
    pub const BLUE: Self = Self::new(0x00, 0x00, 0xFF);
    pub const YELLOW: Self = Self::new(0xFF, 0xFF, 0x00);
    pub const CYAN: Self = Self::new(0x00, 0xFF, 0xFF);
    pub const PURPLE: Self = Self::new(0x7A, 0x00, 0xFF);
    pub const PINK: Self = Self::new(0xFF, 0x80, 0xBF);
    pub const SPRING_GREEN: Self = Self::new(0x00, 0xFF, 0x80);
    pub const CHARTREUSE: Self = Self::new(0x80, 0xFF, 0x00);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn is_off(&self) -> bool {
        *self == Self::OFF
    }
}
