//! GeoTone application wiring: coordinate-to-audio pipeline and WAV export.

pub mod pipeline;
pub mod wav;

pub use pipeline::{render, render_from_provider, RenderedMessage};
