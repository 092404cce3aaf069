// Launchpad commands - addressed pad updates and control messages

use crate::error::{LaunchpadError, LaunchpadResult};
use crate::launchpad::color::{Brightness, Color};
use crate::launchpad::layout::{Layout, TOP_BUTTONS};

const NOTE_ON: u8 = 0x90;
const CONTROL_CHANGE: u8 = 0xB0;
const TOP_BUTTON_BASE: u8 = 0x68;

/// MIDI channel (0-15)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Channel(u8);

impl Channel {
    pub fn new(channel: u8) -> LaunchpadResult<Self> {
        if channel <= 0x0F {
            Ok(Self(channel))
        } else {
            Err(LaunchpadError::InvalidChannel(channel))
        }
    }

    pub fn as_u8(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Channel {
    type Error = LaunchpadError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Channel::new(value)
    }
}

/// Round button above the grid, 0 = leftmost
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TopButton(u8);

impl TopButton {
    pub fn new(index: u8) -> LaunchpadResult<Self> {
        if (index as usize) < TOP_BUTTONS {
            Ok(Self(index))
        } else {
            Err(LaunchpadError::InvalidTopButton(index))
        }
    }

    pub fn index(self) -> u8 {
        self.0
    }

    fn controller(self) -> u8 {
        TOP_BUTTON_BASE + self.0
    }
}

impl TryFrom<u8> for TopButton {
    type Error = LaunchpadError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        TopButton::new(value)
    }
}

/// One pad update, addressed for the layout it was built with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Command {
    row: u8,
    column: u8,
    color: Color,
    address: u8,
}

impl Command {
    /// Command for the pad at `(row, column)`, `None` outside the grid
    pub fn pad(layout: Layout, row: usize, column: usize, color: Color) -> Option<Self> {
        let address = layout.try_address(row, column)?;
        Some(Self {
            row: row as u8,
            column: column as u8,
            color,
            address,
        })
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    pub fn column(&self) -> usize {
        self.column as usize
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Note On triple `[status | channel, address, velocity]`
    pub fn to_bytes(&self, channel: Channel) -> [u8; 3] {
        [NOTE_ON | channel.as_u8(), self.address, self.color.velocity()]
    }
}

/// Device-wide control messages, sent as Control Change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCommand {
    /// All LEDs off, layout back to X-Y
    Reset,
    SetLayout(Layout),
    TopButton { button: TopButton, color: Color },
    /// Light every LED for testing. `Off` is sent as `Reset`, the device
    /// has no "all on" level for it.
    AllOn(Brightness),
}

impl ControlCommand {
    pub fn to_bytes(&self, channel: Channel) -> [u8; 3] {
        let status = CONTROL_CHANGE | channel.as_u8();
        match *self {
            ControlCommand::Reset => [status, 0x00, 0x00],
            ControlCommand::SetLayout(layout) => [status, 0x00, layout.mode_value()],
            ControlCommand::TopButton { button, color } => {
                [status, button.controller(), color.velocity()]
            }
            ControlCommand::AllOn(Brightness::Off) => [status, 0x00, 0x00],
            ControlCommand::AllOn(brightness) => {
                // 0x7D low, 0x7E medium, 0x7F full
                [status, 0x00, 0x7C + brightness.level()]
            }
        }
    }
}
