// LED colors - two 2-bit channels (red, green) packed into a velocity byte

use crate::enumerable::{Enumerable, index_out_of_range};
use serde::{Deserialize, Serialize};

/// Intensity of one LED channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Brightness {
    #[default]
    Off = 0,
    Low = 1,
    Medium = 2,
    Full = 3,
}

impl Brightness {
    /// 2-bit LED level (0-3)
    pub fn level(self) -> u8 {
        self as u8
    }

    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            0 => Some(Brightness::Off),
            1 => Some(Brightness::Low),
            2 => Some(Brightness::Medium),
            3 => Some(Brightness::Full),
            _ => None,
        }
    }
}

impl Enumerable for Brightness {
    fn count() -> usize {
        4
    }

    fn at_index(index: usize) -> Self {
        match index {
            0 => Brightness::Off,
            1 => Brightness::Low,
            2 => Brightness::Medium,
            3 => Brightness::Full,
            _ => index_out_of_range(index, Self::count()),
        }
    }
}

/// Double-buffering bits carried in every LED velocity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferFlags {
    /// Write the value to both buffers
    pub copy: bool,
    /// Clear the other buffer's copy of this LED
    pub clear: bool,
}

impl BufferFlags {
    const COPY: u8 = 0x04;
    const CLEAR: u8 = 0x08;

    /// Normal single-buffered use
    pub const NORMAL: BufferFlags = BufferFlags {
        copy: true,
        clear: true,
    };

    /// Write only to the updating buffer
    pub const NONE: BufferFlags = BufferFlags {
        copy: false,
        clear: false,
    };

    pub fn bits(self) -> u8 {
        let mut bits = 0;
        if self.copy {
            bits |= Self::COPY;
        }
        if self.clear {
            bits |= Self::CLEAR;
        }
        bits
    }
}

impl Default for BufferFlags {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Payload of one pad: a brightness per LED channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub red: Brightness,
    pub green: Brightness,
}

impl Color {
    pub const OFF: Color = Color::new(Brightness::Off, Brightness::Off);
    pub const RED: Color = Color::new(Brightness::Full, Brightness::Off);
    pub const GREEN: Color = Color::new(Brightness::Off, Brightness::Full);
    pub const AMBER: Color = Color::new(Brightness::Full, Brightness::Full);
    pub const YELLOW: Color = Color::new(Brightness::Medium, Brightness::Full);

    pub const fn new(red: Brightness, green: Brightness) -> Self {
        Self { red, green }
    }

    /// Velocity byte with the normal buffer flags
    pub fn velocity(self) -> u8 {
        self.velocity_with(BufferFlags::NORMAL)
    }

    /// Velocity byte: `0x10 * green + red + flags`
    pub fn velocity_with(self, flags: BufferFlags) -> u8 {
        (self.green.level() << 4) | self.red.level() | flags.bits()
    }

    /// Inverse of `velocity_with`, ignoring the buffer flags
    pub fn from_velocity(velocity: u8) -> Self {
        let red = Brightness::from_level(velocity & 0x03).unwrap_or_default();
        let green = Brightness::from_level((velocity >> 4) & 0x03).unwrap_or_default();
        Self { red, green }
    }

    pub fn is_off(self) -> bool {
        self == Color::OFF
    }
}

impl From<(Brightness, Brightness)> for Color {
    fn from((red, green): (Brightness, Brightness)) -> Self {
        Self { red, green }
    }
}
