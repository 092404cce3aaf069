// Launchpad Kit - enumerable MIDI endpoints and Launchpad S grid commands

pub mod config;
pub mod enumerable;
pub mod error;
pub mod launchpad;
pub mod messaging;
pub mod midi;

// Re-export commonly used types for convenience
pub use config::Config;
pub use enumerable::{AllLazy, Enumerable, LazyIter, all, all_lazy};
pub use error::{LaunchpadError, LaunchpadResult};
pub use launchpad::{
    Brightness, Channel, Color, Command, ControlCommand, GridCommandBuilder, GridSpec,
    LaunchpadEvent, Layout, TopButton, fill_grid, try_fill_grid,
};
pub use messaging::{create_event_channel, drain_events};
pub use midi::{Destination, LaunchpadInput, LaunchpadOutput, MidiSender, Source};
