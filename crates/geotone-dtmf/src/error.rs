use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SynthError {
    /// A character outside the 16-symbol DTMF alphabet. Dropping it
    /// silently would corrupt the transmitted coordinate, so synthesis
    /// fails instead.
    #[error("invalid DTMF symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
}
