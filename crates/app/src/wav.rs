use std::path::Path;

use anyhow::Context;
use geotone_audio::StreamFormat;

/// Write an interleaved f32 buffer as a WAV file.
pub fn write_wav(path: &Path, interleaved: &[f32], format: StreamFormat) -> anyhow::Result<()> {
    let spec = hound::WavSpec {
        channels: format.channels,
        sample_rate: format.sample_rate_hz,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };

    let mut writer =
        hound::WavWriter::create(path, spec).with_context(|| format!("creating {path:?}"))?;
    for &sample in interleaved {
        writer.write_sample(sample)?;
    }
    writer.finalize().context("finalizing WAV")?;

    tracing::info!(?path, frames = interleaved.len() / format.channels.max(1) as usize, "wrote WAV");
    Ok(())
}
