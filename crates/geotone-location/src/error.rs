use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LocationError {
    /// No fix has been delivered yet. Encoding must not proceed.
    #[error("no location available")]
    Unavailable,

    /// The platform denied access to positioning.
    #[error("location permission denied")]
    PermissionDenied,

    /// Provider-specific failure.
    #[error("location provider error: {0}")]
    Provider(String),
}
