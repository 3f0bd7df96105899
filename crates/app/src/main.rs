use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use geotone_app::pipeline;
use geotone_app::wav::write_wav;
use geotone_audio::{PlaybackContext, StreamFormat};
use geotone_dtmf::SynthConfig;
use geotone_location::{Coordinate, FixedLocationProvider, LocationProvider};

#[derive(Parser, Debug)]
#[command(name = "geotone", version, about = "Send your position over radio as DTMF tones")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the encoded DTMF message without synthesizing audio
    Encode(CoordinateArgs),
    /// Encode the position and play it (or write it to a WAV file)
    Send {
        #[command(flatten)]
        coords: CoordinateArgs,
        /// Write the audio here instead of playing it
        #[arg(long)]
        wav: Option<PathBuf>,
        /// Synthesis sample rate in Hz
        #[arg(long, default_value_t = 8000, value_parser = clap::value_parser!(u32).range(1..))]
        sample_rate: u32,
        /// Output channel count
        #[arg(long, default_value_t = 2)]
        channels: u16,
    },
}

#[derive(Args, Debug)]
struct CoordinateArgs {
    /// Latitude in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    lat: Option<f64>,
    /// Longitude in decimal degrees
    #[arg(long, allow_negative_numbers = true)]
    lon: Option<f64>,
}

impl CoordinateArgs {
    /// A provider with a fix when both coordinates were given, an empty one
    /// otherwise. On a device this is where a real GPS provider would go.
    fn provider(&self) -> FixedLocationProvider {
        match (self.lat, self.lon) {
            (Some(latitude), Some(longitude)) => FixedLocationProvider::new(Coordinate {
                latitude,
                longitude,
            }),
            _ => FixedLocationProvider::unavailable(),
        }
    }
}

fn init_logging() {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();
}


#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Command::Encode(coords) => {
            let provider = coords.provider();
            let coordinate = provider
                .request_location()
                .await
                .context("requesting location")?;
            let message = geotone_codec::encode(coordinate.latitude, coordinate.longitude)?;
            println!("{message}");
        }
        Command::Send {
            coords,
            wav,
            sample_rate,
            channels,
        } => {
            let provider = coords.provider();
            let config = SynthConfig {
                sample_rate_hz: sample_rate,
                channels,
                ..Default::default()
            };
            let rendered = pipeline::render_from_provider(&provider, &config).await?;
            let format = StreamFormat {
                sample_rate_hz: config.sample_rate_hz,
                channels: config.channels,
            };

            match wav {
                Some(path) => {
                    write_wav(&path, &rendered.interleaved, format)?;
                    println!("{} -> {}", rendered.message, path.display());
                }
                None => {
                    let mut playback = PlaybackContext::new()?;
                    let secs = rendered.duration_secs(&config);
                    playback.play(rendered.interleaved, format)?;
                    // play() is fire-and-forget; hold the process open until
                    // the buffer has drained
                    tokio::time::sleep(Duration::from_secs_f64(secs + 0.25)).await;
                }
            }
        }
    }

    Ok(())
}
