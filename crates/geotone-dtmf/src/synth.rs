use geotone_codec::Symbol;

use crate::config::SynthConfig;
use crate::error::SynthError;
use crate::profile::MarkSpace;
use crate::tones::{tone_for, TonePair};

/// Render one symbol slot: `mark_samples` of the two summed sines at half
/// amplitude each, then `space_samples` of silence.
///
/// No fade is applied at the mark/space boundary, so the tone stops on an
/// arbitrary phase and a narrowband receiver may hear a click there.
pub fn generate_tone(pair: TonePair, profile: MarkSpace, sample_rate: f32) -> Vec<f32> {
    let mark = profile.mark_samples(sample_rate);
    let space = profile.space_samples(sample_rate);

    let mut samples = vec![0.0f32; mark + space];
    let two_pi = 2.0 * std::f32::consts::PI;

    for (i, sample) in samples.iter_mut().take(mark).enumerate() {
        let phase = i as f32 * two_pi / sample_rate;
        *sample = 0.5 * (phase * pair.column_hz).sin() + 0.5 * (phase * pair.row_hz).sin();
    }

    samples
}

/// Render a whole symbol string into one mono sample buffer.
///
/// The first and last symbol use the long profile, interior symbols the
/// short one; a single-symbol message counts as both first and last. An
/// empty message yields an empty buffer. Any character outside the DTMF
/// alphabet fails the whole message.
pub fn synthesize(message: &str, config: &SynthConfig) -> Result<Vec<f32>, SynthError> {
    let mut pairs = Vec::with_capacity(message.len());
    for (position, symbol) in message.chars().enumerate() {
        let symbol = Symbol::from_char(symbol)
            .ok_or(SynthError::InvalidSymbol { symbol, position })?;
        pairs.push(tone_for(symbol));
    }

    let rate = config.sample_rate_hz as f32;
    let interior = pairs.len().saturating_sub(2);
    let mut buffer = Vec::with_capacity(
        pairs.len().min(2) * config.long.slot_samples(rate)
            + interior * config.short.slot_samples(rate),
    );

    let last = pairs.len().saturating_sub(1);
    for (index, pair) in pairs.iter().enumerate() {
        let profile = if index == 0 || index == last {
            config.long
        } else {
            config.short
        };
        buffer.extend_from_slice(&generate_tone(*pair, profile, rate));
    }

    tracing::debug!(
        symbols = pairs.len(),
        samples = buffer.len(),
        rate = config.sample_rate_hz,
        "synthesized DTMF message"
    );
    Ok(buffer)
}

/// Duplicate a mono buffer across `channels` interleaved channels.
pub fn interleave(mono: &[f32], channels: u16) -> Vec<f32> {
    let channels = channels.max(1) as usize;
    let mut out = Vec::with_capacity(mono.len() * channels);
    for &sample in mono {
        out.extend(std::iter::repeat(sample).take(channels));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SynthConfig;
    use crate::profile::{LONG, SHORT};

    #[test]
    fn slot_is_mark_then_silence() {
        let samples = generate_tone(tone_for(Symbol::Digit5), SHORT, 8000.0);
        assert_eq!(samples.len(), 2600);
        // sin(0) + sin(0)
        assert_eq!(samples[0], 0.0);
        assert!(samples[..2000].iter().any(|&s| s.abs() > 0.5));
        assert!(samples[2000..].iter().all(|&s| s == 0.0));
    }

    #[test]
    fn mark_stays_within_unit_amplitude() {
        for &sym in Symbol::ALL.iter() {
            let samples = generate_tone(tone_for(sym), SHORT, 8000.0);
            assert!(samples.iter().all(|&s| s.abs() <= 1.0), "{sym:?}");
        }
    }

    #[test]
    fn message_length_follows_positional_profiles() {
        let config = SynthConfig::default();
        let buffer = synthesize("*0A0#", &config).unwrap();
        let expected = 2 * LONG.slot_samples(8000.0) + 3 * SHORT.slot_samples(8000.0);
        assert_eq!(buffer.len(), expected);
    }

    #[test]
    fn single_symbol_uses_long_profile() {
        let config = SynthConfig::default();
        let buffer = synthesize("5", &config).unwrap();
        assert_eq!(buffer.len(), LONG.slot_samples(8000.0));
    }

    #[test]
    fn two_symbols_are_both_long() {
        let config = SynthConfig::default();
        let buffer = synthesize("*#", &config).unwrap();
        assert_eq!(buffer.len(), 2 * LONG.slot_samples(8000.0));
    }

    #[test]
    fn empty_message_yields_empty_buffer() {
        let buffer = synthesize("", &SynthConfig::default()).unwrap();
        assert!(buffer.is_empty());
    }

    #[test]
    fn invalid_symbol_fails_the_message() {
        let err = synthesize("*0X0#", &SynthConfig::default()).unwrap_err();
        assert_eq!(
            err,
            SynthError::InvalidSymbol {
                symbol: 'X',
                position: 2
            }
        );
    }

    #[test]
    fn synthesis_is_deterministic() {
        let config = SynthConfig::default();
        let a = synthesize("*04071277B6A17400B5974#", &config).unwrap();
        let b = synthesize("*04071277B6A17400B5974#", &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn interleave_duplicates_across_channels() {
        let stereo = interleave(&[0.1, -0.2, 0.3], 2);
        assert_eq!(stereo, vec![0.1, 0.1, -0.2, -0.2, 0.3, 0.3]);
        assert_eq!(interleave(&[], 2), Vec::<f32>::new());
        assert_eq!(interleave(&[1.0], 1), vec![1.0]);
    }
}
