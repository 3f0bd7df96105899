//! Audio playback for GeoTone
//!
//! A thin, explicitly owned wrapper over the cpal output device. The
//! synthesizer hands a finished interleaved buffer plus format metadata to
//! [`PlaybackContext::play`], which schedules it and returns without
//! waiting for the audio to finish. Device failures surface here, never
//! back into the codec or synthesizer.

pub mod error;
pub mod playback;

pub use error::PlaybackError;
pub use playback::{PlaybackContext, StreamFormat};
