//! Media Broadcaster's scripted-event table.
//!
//! A [`MediaEvent`] fires for every step in `[step, step + duration]`,
//! cycling through its `positions` list one entry per step
//! (SPEC_FULL.md §4.7).

use dt_core::Point;

/// A single scripted broadcast event.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaEvent {
    pub step: u32,
    pub duration: u32,
    pub acquisition: f32,
    pub size: f32,
    pub kind: String,
    pub positions: Vec<Point>,
}

impl MediaEvent {
    /// `true` if this event is active at step `s`.
    pub fn is_active_at(&self, s: u32) -> bool {
        s >= self.step && s - self.step <= self.duration
    }

    /// The broadcast position for step `s`, cycling through `positions`.
    /// `None` if the event has no positions or is not active.
    pub fn position_at(&self, s: u32) -> Option<Point> {
        if !self.is_active_at(s) || self.positions.is_empty() {
            return None;
        }
        let offset = (s - self.step) as usize % self.positions.len();
        Some(self.positions[offset])
    }
}

/// All events active at step `s`, in table order (emission order within a
/// step is insignificant per the spec).
pub fn active_events(events: &[MediaEvent], s: u32) -> Vec<&MediaEvent> {
    events.iter().filter(|e| e.is_active_at(s)).collect()
}
