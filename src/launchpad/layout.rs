// Pad addressing - maps grid coordinates to MIDI note numbers

use serde::{Deserialize, Serialize};

/// Physical pad grid of the Launchpad S
pub const GRID_ROWS: usize = 8;
pub const GRID_COLUMNS: usize = 8;

/// Number of round buttons above the grid (CC 104-111)
pub const TOP_BUTTONS: usize = 8;

/// Note mapping selected on the device with `ControlCommand::SetLayout`.
///
/// Rows are counted from the top of the device, columns from the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Layout {
    /// `0x10 * row + column`; column 8 holds the scene launch buttons
    #[default]
    XY,
    /// Two 4x8 halves of consecutive notes counted from the bottom, starting at 36 and 68
    DrumRack,
}

const DRUM_LEFT_BASE: u8 = 36;
const DRUM_RIGHT_BASE: u8 = 68;
const DRUM_SCENE_BASE: u8 = 100;
const DRUM_HALF_WIDTH: usize = 4;

impl Layout {
    /// Address of the pad at `(row, column)`.
    ///
    /// # Panics
    ///
    /// Panics when the position lies outside the 8x8 grid.
    #[track_caller]
    pub fn address(self, row: usize, column: usize) -> u8 {
        match self.try_address(row, column) {
            Some(address) => address,
            None => panic!(
                "pad ({row}, {column}) is outside the {GRID_ROWS}x{GRID_COLUMNS} grid"
            ),
        }
    }

    pub fn try_address(self, row: usize, column: usize) -> Option<u8> {
        if row >= GRID_ROWS || column >= GRID_COLUMNS {
            return None;
        }

        let address = match self {
            Layout::XY => 0x10 * row + column,
            Layout::DrumRack => {
                let from_bottom = GRID_ROWS - 1 - row;
                if column < DRUM_HALF_WIDTH {
                    DRUM_LEFT_BASE as usize + DRUM_HALF_WIDTH * from_bottom + column
                } else {
                    DRUM_RIGHT_BASE as usize
                        + DRUM_HALF_WIDTH * from_bottom
                        + (column - DRUM_HALF_WIDTH)
                }
            }
        };
        Some(address as u8)
    }

    /// Grid position of a pad address, `None` for scene buttons and unused notes
    pub fn position_of(self, address: u8) -> Option<(usize, usize)> {
        match self {
            Layout::XY => {
                let row = (address >> 4) as usize;
                let column = (address & 0x0F) as usize;
                (row < GRID_ROWS && column < GRID_COLUMNS).then_some((row, column))
            }
            Layout::DrumRack => {
                let (offset, column_base) = match address {
                    DRUM_LEFT_BASE..DRUM_RIGHT_BASE => (address - DRUM_LEFT_BASE, 0),
                    DRUM_RIGHT_BASE..DRUM_SCENE_BASE => {
                        (address - DRUM_RIGHT_BASE, DRUM_HALF_WIDTH)
                    }
                    _ => return None,
                };
                let offset = offset as usize;
                let row = GRID_ROWS - 1 - offset / DRUM_HALF_WIDTH;
                Some((row, column_base + offset % DRUM_HALF_WIDTH))
            }
        }
    }

    /// Address of the scene launch button on the right of `row`
    pub fn scene_address(self, row: usize) -> Option<u8> {
        if row >= GRID_ROWS {
            return None;
        }
        Some(match self {
            Layout::XY => (0x10 * row + GRID_COLUMNS) as u8,
            Layout::DrumRack => DRUM_SCENE_BASE + row as u8,
        })
    }

    pub fn scene_row_of(self, address: u8) -> Option<usize> {
        match self {
            Layout::XY => {
                let row = (address >> 4) as usize;
                (row < GRID_ROWS && (address & 0x0F) as usize == GRID_COLUMNS).then_some(row)
            }
            Layout::DrumRack => {
                let row = address.checked_sub(DRUM_SCENE_BASE)? as usize;
                (row < GRID_ROWS).then_some(row)
            }
        }
    }

    /// Data byte of the mapping-mode control message
    pub(crate) fn mode_value(self) -> u8 {
        match self {
            Layout::XY => 0x01,
            Layout::DrumRack => 0x02,
        }
    }
}
