use anyhow::Context;
use geotone_codec::{encode, EncodedMessage};
use geotone_dtmf::{interleave, synthesize, SynthConfig};
use geotone_location::LocationProvider;

/// One fully rendered send request: the symbol string plus its audio.
#[derive(Debug)]
pub struct RenderedMessage {
    pub message: EncodedMessage,
    pub mono: Vec<f32>,
    pub interleaved: Vec<f32>,
}

impl RenderedMessage {
    /// Playback time of the mono buffer at the configured rate.
    pub fn duration_secs(&self, config: &SynthConfig) -> f64 {
        self.mono.len() as f64 / config.sample_rate_hz as f64
    }
}

/// Encode a coordinate pair and synthesize it with the given config.
pub fn render(lat: f64, lon: f64, config: &SynthConfig) -> anyhow::Result<RenderedMessage> {
    let message = encode(lat, lon).context("encoding coordinate")?;
    tracing::info!(message = %message, "encoded coordinate");

    let mono = synthesize(message.as_str(), config).context("synthesizing message")?;
    let interleaved = interleave(&mono, config.channels);

    Ok(RenderedMessage {
        message,
        mono,
        interleaved,
    })
}

/// Ask the provider for the current position, then render it.
///
/// Fails with the provider's "no location" error when no fix exists yet;
/// a placeholder coordinate is never encoded.
pub async fn render_from_provider(
    provider: &dyn LocationProvider,
    config: &SynthConfig,
) -> anyhow::Result<RenderedMessage> {
    let coordinate = provider
        .request_location()
        .await
        .context("requesting location")?;
    render(coordinate.latitude, coordinate.longitude, config)
}
