// MIDI Output - sends Launchpad commands to a destination

use log::{debug, info};
use midir::{MidiOutput as MidirOutput, MidiOutputConnection};

use crate::error::{LaunchpadError, LaunchpadResult};
use crate::launchpad::{Channel, Command, ControlCommand};
use crate::midi::device::Destination;

/// Anything that can deliver raw MIDI messages.
///
/// A failed send is reported once and never retried here.
pub trait MidiSender {
    fn send(&mut self, message: &[u8]) -> LaunchpadResult<()>;

    fn send_command(&mut self, command: &Command, channel: Channel) -> LaunchpadResult<()> {
        debug!(
            "pad ({}, {}) -> address 0x{:02X}",
            command.row(),
            command.column(),
            command.address()
        );
        self.send(&command.to_bytes(channel))
    }

    fn send_control(&mut self, control: &ControlCommand, channel: Channel) -> LaunchpadResult<()> {
        debug!("control {:?}", control);
        self.send(&control.to_bytes(channel))
    }

    /// Send in order, stopping at the first failure. Returns how many were sent.
    fn send_commands<'a, I>(&mut self, commands: I, channel: Channel) -> LaunchpadResult<usize>
    where
        I: IntoIterator<Item = &'a Command>,
        Self: Sized,
    {
        let mut sent = 0;
        for command in commands {
            self.send_command(command, channel)?;
            sent += 1;
        }
        Ok(sent)
    }
}

/// Open connection to a MIDI destination
pub struct LaunchpadOutput {
    connection: MidiOutputConnection,
    destination_name: String,
}

impl LaunchpadOutput {
    pub fn connect(destination: &Destination, client_name: &str) -> LaunchpadResult<Self> {
        let midi_out =
            MidirOutput::new(client_name).map_err(|e| LaunchpadError::MidiInit(e.to_string()))?;

        // Port handles are per client: look the destination up again by name
        let ports = midi_out.ports();
        let port = ports
            .iter()
            .find(|p| {
                midi_out
                    .port_name(p)
                    .map(|name| name == destination.name())
                    .unwrap_or(false)
            })
            .ok_or_else(|| LaunchpadError::DeviceNotFound(destination.name().to_string()))?;

        let connection = midi_out
            .connect(port, "launchpad-kit-output")
            .map_err(|e| LaunchpadError::Connection(e.to_string()))?;

        info!("MIDI output connected: {}", destination.name());

        Ok(Self {
            connection,
            destination_name: destination.name().to_string(),
        })
    }

    pub fn destination_name(&self) -> &str {
        &self.destination_name
    }

    pub fn close(self) {
        let _ = self.connection.close();
    }
}

impl MidiSender for LaunchpadOutput {
    fn send(&mut self, message: &[u8]) -> LaunchpadResult<()> {
        self.connection
            .send(message)
            .map_err(|e| LaunchpadError::Transport(format!("{}: {}", self.destination_name, e)))
    }
}
