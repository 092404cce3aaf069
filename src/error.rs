// Error types shared by the Launchpad adapters

use thiserror::Error;

/// Errors raised outside the pure core (geometry checks, MIDI I/O, config)
#[derive(Debug, Error)]
pub enum LaunchpadError {
    #[error("Invalid MIDI channel: {0} (expected 0-15)")]
    InvalidChannel(u8),

    #[error("Invalid top button: {0} (expected 0-7)")]
    InvalidTopButton(u8),

    #[error("Invalid grid geometry: {rows}x{columns} does not fit the 8x8 pad grid")]
    InvalidGeometry { rows: usize, columns: usize },

    #[error("MIDI device not found: {0}")]
    DeviceNotFound(String),

    #[error("MIDI initialization failed: {0}")]
    MidiInit(String),

    #[error("MIDI connection failed: {0}")]
    Connection(String),

    #[error("MIDI send failed: {0}")]
    Transport(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type LaunchpadResult<T> = Result<T, LaunchpadError>;
