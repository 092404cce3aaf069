// MIDI endpoints as enumerable domains
//
// Every count/at_index call opens a short-lived midir client and reads the
// port list again, so the domains always reflect the devices plugged in now.
// Lookups by name and listings go through `snapshot`, which reads the list
// once and cannot race with a device being unplugged.

use log::warn;
use midir::{MidiIO, MidiInput as MidirInput, MidiOutput as MidirOutput};

use crate::enumerable::{Enumerable, index_out_of_range};

const SCANNER_CLIENT_NAME: &str = "Launchpad Kit Scanner";

/// A MIDI output port (somewhere we can send to)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Destination {
    index: usize,
    name: String,
}

/// A MIDI input port (somewhere we can receive from)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Source {
    index: usize,
    name: String,
}

impl Destination {
    /// Every destination from a single read of the port list
    pub fn snapshot() -> Vec<Destination> {
        scanner_output()
            .map(|midi_out| port_names(&midi_out))
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, name)| Destination { index, name })
            .collect()
    }

    /// Position in the port list when this endpoint was read
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Source {
    /// Every source from a single read of the port list
    pub fn snapshot() -> Vec<Source> {
        scanner_input()
            .map(|midi_in| port_names(&midi_in))
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(index, name)| Source { index, name })
            .collect()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

fn port_names<M: MidiIO>(midi_io: &M) -> Vec<String> {
    midi_io
        .ports()
        .iter()
        .map(|port| {
            midi_io
                .port_name(port)
                .unwrap_or_else(|_| "Unknown".to_string())
        })
        .collect()
}

fn scanner_output() -> Option<MidirOutput> {
    match MidirOutput::new(SCANNER_CLIENT_NAME) {
        Ok(m) => Some(m),
        Err(e) => {
            warn!("Failed to initialize MIDI output scanner: {}", e);
            None
        }
    }
}

fn scanner_input() -> Option<MidirInput> {
    match MidirInput::new(SCANNER_CLIENT_NAME) {
        Ok(m) => Some(m),
        Err(e) => {
            warn!("Failed to initialize MIDI input scanner: {}", e);
            None
        }
    }
}

impl Enumerable for Destination {
    fn count() -> usize {
        scanner_output().map_or(0, |midi_out| midi_out.port_count())
    }

    fn at_index(index: usize) -> Self {
        let Some(midi_out) = scanner_output() else {
            index_out_of_range(index, 0);
        };

        let ports = midi_out.ports();
        let Some(port) = ports.get(index) else {
            index_out_of_range(index, ports.len());
        };

        let name = midi_out
            .port_name(port)
            .unwrap_or_else(|_| "Unknown".to_string());

        Destination { index, name }
    }
}

impl Enumerable for Source {
    fn count() -> usize {
        scanner_input().map_or(0, |midi_in| midi_in.port_count())
    }

    fn at_index(index: usize) -> Self {
        let Some(midi_in) = scanner_input() else {
            index_out_of_range(index, 0);
        };

        let ports = midi_in.ports();
        let Some(port) = ports.get(index) else {
            index_out_of_range(index, ports.len());
        };

        let name = midi_in
            .port_name(port)
            .unwrap_or_else(|_| "Unknown".to_string());

        Source { index, name }
    }
}

/// First destination whose name matches exactly
pub fn find_destination(name: &str) -> Option<Destination> {
    find_named(Destination::snapshot(), name, Destination::name)
}

/// First source whose name matches exactly
pub fn find_source(name: &str) -> Option<Source> {
    find_named(Source::snapshot(), name, Source::name)
}

fn find_named<T>(endpoints: Vec<T>, name: &str, name_of: fn(&T) -> &str) -> Option<T> {
    endpoints.into_iter().find(|endpoint| name_of(endpoint) == name)
}
