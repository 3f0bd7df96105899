use serde::{Deserialize, Serialize};

/// Tone-on ("mark") and trailing silence ("space") durations for one symbol
/// slot, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkSpace {
    pub mark_ms: f32,
    pub space_ms: f32,
}

/// Profile for the first and last symbol of a message. The long mark gives
/// a receiver time to synchronize before the payload.
pub const LONG: MarkSpace = MarkSpace {
    mark_ms: 600.0,
    space_ms: 75.0,
};

/// Profile for interior symbols.
pub const SHORT: MarkSpace = MarkSpace {
    mark_ms: 250.0,
    space_ms: 75.0,
};

impl MarkSpace {
    pub fn mark_samples(&self, sample_rate: f32) -> usize {
        (self.mark_ms / 1000.0 * sample_rate).round() as usize
    }

    pub fn space_samples(&self, sample_rate: f32) -> usize {
        (self.space_ms / 1000.0 * sample_rate).round() as usize
    }

    /// Total samples in one symbol slot at the given rate.
    pub fn slot_samples(&self, sample_rate: f32) -> usize {
        self.mark_samples(sample_rate) + self.space_samples(sample_rate)
    }
}
