use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlaybackError {
    #[error("no output device available")]
    DeviceNotFound,

    #[error("build stream error: {0}")]
    BuildStream(#[from] cpal::BuildStreamError),

    #[error("play stream error: {0}")]
    PlayStream(#[from] cpal::PlayStreamError),

    #[error("stream error: {0}")]
    Stream(#[from] cpal::StreamError),
}
