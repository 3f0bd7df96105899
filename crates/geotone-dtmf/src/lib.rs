//! DTMF tone synthesis for GeoTone
//!
//! Maps each of the 16 DTMF symbols to its dual-tone frequency pair and
//! renders a symbol string into a mono buffer of f32 samples: a mark (the
//! two summed sines at half amplitude each) followed by a space (silence)
//! per symbol. The first and last symbol of a message get a longer mark so
//! a receiver can lock on before the payload starts.

pub mod config;
pub mod error;
pub mod profile;
pub mod synth;
pub mod tones;

pub use config::SynthConfig;
pub use error::SynthError;
pub use profile::{MarkSpace, LONG, SHORT};
pub use synth::{generate_tone, interleave, synthesize};
pub use tones::{tone_for, TonePair, TONE_TABLE};
