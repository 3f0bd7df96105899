use serde::{Deserialize, Serialize};

use crate::profile::{MarkSpace, LONG, SHORT};

/// Operational sample rate for over-the-air playback (Hz). Narrowband
/// telephony rate; DTMF needs nothing above 1633 Hz.
pub const SAMPLE_RATE_HZ: u32 = 8000;

/// Channels handed to the playback device. Both carry the same content.
pub const CHANNELS: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SynthConfig {
    pub sample_rate_hz: u32,
    pub channels: u16,
    /// Profile for the first and last symbol of a message.
    pub long: MarkSpace,
    /// Profile for interior symbols.
    pub short: MarkSpace,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: SAMPLE_RATE_HZ,
            channels: CHANNELS,
            long: LONG,
            short: SHORT,
        }
    }
}
