// Lock-free channel from the MIDI callback thread to the main loop

use crate::launchpad::LaunchpadEvent;
use ringbuf::{HeapRb, traits::Split};

pub type EventProducer = ringbuf::HeapProd<LaunchpadEvent>;
pub type EventConsumer = ringbuf::HeapCons<LaunchpadEvent>;

pub fn create_event_channel(capacity: usize) -> (EventProducer, EventConsumer) {
    let rb = HeapRb::<LaunchpadEvent>::new(capacity);
    rb.split()
}

/// Pop everything currently queued
pub fn drain_events(consumer: &mut EventConsumer) -> Vec<LaunchpadEvent> {
    let mut events = Vec::new();
    while let Some(event) = ringbuf::traits::Consumer::try_pop(consumer) {
        events.push(event);
    }
    events
}
