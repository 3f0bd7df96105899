//! Coordinate encoding for GeoTone
//!
//! Turns a `(latitude, longitude)` pair into a short string over the 16
//! DTMF symbols, suitable for tone synthesis and acoustic transmission.
//! Coordinates are carried as micro-degree fixed-point integers so no
//! decimal point ever crosses the tone channel.

pub mod encoder;
pub mod error;
pub mod message;
pub mod symbol;

pub use encoder::encode;
pub use error::EncodeError;
pub use message::EncodedMessage;
pub use symbol::{Symbol, DUPLICATE_BREAK, FIELD_DELIMITER};
