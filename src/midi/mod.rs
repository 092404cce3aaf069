// MIDI endpoints and the midir-backed transport

pub mod device;
pub mod input;
pub mod output;

pub use device::{Destination, Source, find_destination, find_source};
pub use input::LaunchpadInput;
pub use output::{LaunchpadOutput, MidiSender};
