use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EncodeError {
    #[error("coordinate is not finite: latitude {latitude}, longitude {longitude}")]
    NonFinite { latitude: f64, longitude: f64 },
}
