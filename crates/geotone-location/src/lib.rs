//! Location provider boundary for GeoTone
//!
//! The core only ever needs the most recent position at the moment the user
//! triggers a send, so the boundary is a single-shot request rather than a
//! continuously observed stream. A provider that has no fix yet answers
//! [`LocationError::Unavailable`]; the core never encodes a placeholder
//! coordinate in that case.

use async_trait::async_trait;

pub mod error;
pub mod types;

pub use error::LocationError;
pub use types::Coordinate;

/// Single-shot position source.
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Deliver the current position, or fail if none is available yet.
    async fn request_location(&self) -> Result<Coordinate, LocationError>;
}

/// Provider backed by a fixed coordinate. Stands in for a real GPS source
/// in tests and when the position is given on the command line.
pub struct FixedLocationProvider {
    coordinate: Option<Coordinate>,
}

impl FixedLocationProvider {
    pub fn new(coordinate: Coordinate) -> Self {
        Self {
            coordinate: Some(coordinate),
        }
    }

    /// A provider that never has a fix.
    pub fn unavailable() -> Self {
        Self { coordinate: None }
    }
}

#[async_trait]
impl LocationProvider for FixedLocationProvider {
    async fn request_location(&self) -> Result<Coordinate, LocationError> {
        match self.coordinate {
            Some(coordinate) => {
                tracing::debug!(?coordinate, "serving fixed coordinate");
                Ok(coordinate)
            }
            None => Err(LocationError::Unavailable),
        }
    }
}
