pub mod channels;

pub use channels::{EventConsumer, EventProducer, create_event_channel, drain_events};
