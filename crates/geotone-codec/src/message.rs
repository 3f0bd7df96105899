use std::fmt;

use crate::symbol::FIELD_DELIMITER;

/// An encoded coordinate message: `*` body `#`, with the latitude and
/// longitude fields separated by a single `A`.
///
/// Only [`crate::encode`] constructs these, so a value of this type always
/// satisfies the framing and duplicate-break invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedMessage(pub(crate) String);

impl EncodedMessage {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of symbols in the message, frame markers included.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The two field bodies, latitude then longitude, without the `*`/`#`
    /// frame or the `A` delimiter.
    pub fn fields(&self) -> (&str, &str) {
        let body = self
            .0
            .strip_prefix('*')
            .and_then(|s| s.strip_suffix('#'))
            .unwrap_or(&self.0);
        match body.split_once(FIELD_DELIMITER) {
            Some((lat, lon)) => (lat, lon),
            None => (body, ""),
        }
    }
}

impl fmt::Display for EncodedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EncodedMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
