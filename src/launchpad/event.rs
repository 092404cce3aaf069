// Inbound Launchpad messages - pad presses and button presses

use crate::launchpad::layout::{Layout, TOP_BUTTONS};

const TOP_BUTTON_BASE: u8 = 0x68;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchpadEvent {
    PadPressed { row: usize, column: usize, velocity: u8 },
    PadReleased { row: usize, column: usize },
    SceneButton { row: usize, pressed: bool },
    TopButton { index: usize, pressed: bool },
}

impl LaunchpadEvent {
    /// Parse a raw MIDI message received from the device
    pub fn from_bytes(bytes: &[u8], layout: Layout) -> Option<Self> {
        if bytes.len() < 3 {
            return None;
        }

        let status = bytes[0];
        let (data1, data2) = (bytes[1], bytes[2]);

        match status & 0xF0 {
            // Note On, velocity 0 = Note Off
            0x90 => Self::note(layout, data1, data2),
            0x80 => Self::note(layout, data1, 0),
            0xB0 => {
                let index = data1.checked_sub(TOP_BUTTON_BASE)? as usize;
                (index < TOP_BUTTONS).then_some(LaunchpadEvent::TopButton {
                    index,
                    pressed: data2 > 0,
                })
            }
            _ => None,
        }
    }

    fn note(layout: Layout, address: u8, velocity: u8) -> Option<Self> {
        if let Some((row, column)) = layout.position_of(address) {
            return Some(if velocity > 0 {
                LaunchpadEvent::PadPressed {
                    row,
                    column,
                    velocity,
                }
            } else {
                LaunchpadEvent::PadReleased { row, column }
            });
        }

        layout
            .scene_row_of(address)
            .map(|row| LaunchpadEvent::SceneButton {
                row,
                pressed: velocity > 0,
            })
    }
}
