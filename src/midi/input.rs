// MIDI Input - receives pad and button presses from a source

use log::{info, trace, warn};
use midir::{MidiInput as MidirInput, MidiInputConnection};

use crate::error::{LaunchpadError, LaunchpadResult};
use crate::launchpad::{LaunchpadEvent, Layout};
use crate::messaging::channels::EventProducer;
use crate::midi::device::Source;

/// Listening connection; events stop when this is dropped
pub struct LaunchpadInput {
    _connection: MidiInputConnection<()>,
    source_name: String,
}

impl LaunchpadInput {
    pub fn connect(
        source: &Source,
        client_name: &str,
        layout: Layout,
        mut event_tx: EventProducer,
    ) -> LaunchpadResult<Self> {
        let midi_in =
            MidirInput::new(client_name).map_err(|e| LaunchpadError::MidiInit(e.to_string()))?;

        let ports = midi_in.ports();
        let port = ports
            .iter()
            .find(|p| {
                midi_in
                    .port_name(p)
                    .map(|name| name == source.name())
                    .unwrap_or(false)
            })
            .ok_or_else(|| LaunchpadError::DeviceNotFound(source.name().to_string()))?;

        let connection = midi_in
            .connect(
                port,
                "launchpad-kit-input",
                move |_timestamp, message, _| {
                    // Runs on midir's thread
                    match LaunchpadEvent::from_bytes(message, layout) {
                        Some(event) => {
                            // try_push is not blocking
                            if ringbuf::traits::Producer::try_push(&mut event_tx, event).is_err() {
                                warn!("Event buffer full, {:?} dropped", event);
                            }
                        }
                        None => trace!("Ignored MIDI message {:02X?}", message),
                    }
                },
                (),
            )
            .map_err(|e| LaunchpadError::Connection(e.to_string()))?;

        info!("MIDI input connected: {}", source.name());

        Ok(Self {
            _connection: connection,
            source_name: source.name().to_string(),
        })
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }
}
