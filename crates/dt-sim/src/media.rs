//! The Media Broadcaster (SPEC_FULL.md §4.7), wired to the bus's media
//! topic.

use dt_bus::payload::MediaEntity;
use dt_bus::{topics, Transport};
use dt_schedule::{active_events, MediaEvent};

use crate::error::SimResult;

/// Holds the static scripted-event table and emits active events each step.
pub struct MediaBroadcaster {
    events: Vec<MediaEvent>,
}

impl MediaBroadcaster {
    pub fn new(events: Vec<MediaEvent>) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &[MediaEvent] {
        &self.events
    }

    /// Publish every event active at `step` on `aria/media/{universe}`.
    /// Emission order within a step is insignificant (SPEC_FULL.md §4.7).
    pub fn publish_active(&self, transport: &impl Transport, universe: &str, step: u32) -> SimResult<()> {
        let topic = topics::media(universe);
        for event in active_events(&self.events, step) {
            let Some(pos) = event.position_at(step) else { continue };
            let entity = MediaEntity {
                x: pos.x,
                y: pos.y,
                size: event.size,
                acquisition: event.acquisition,
                kind: event.kind.clone(),
            };
            let bytes = serde_json::to_vec(&entity)?;
            transport.publish(&topic, &bytes)?;
        }
        Ok(())
    }
}
