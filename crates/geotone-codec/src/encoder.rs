use crate::error::EncodeError;
use crate::message::EncodedMessage;
use crate::symbol::{DUPLICATE_BREAK, FIELD_DELIMITER};

/// Encode a coordinate pair as a DTMF symbol string.
///
/// Each coordinate becomes a sign digit (`1` for negative, `0` otherwise)
/// followed by its magnitude in micro-degrees, base 10, no padding. The two
/// fields are joined with `A`, runs of identical symbols are broken with
/// `B`, and the whole body is framed as `*`...`#`.
///
/// Rounding is half-away-from-zero (`f64::round`), so the least-significant
/// digit of e.g. `x.xxxxxx5` rounds up in magnitude. Non-finite inputs are
/// rejected; anything finite encodes.
pub fn encode(latitude: f64, longitude: f64) -> Result<EncodedMessage, EncodeError> {
    if !latitude.is_finite() || !longitude.is_finite() {
        return Err(EncodeError::NonFinite {
            latitude,
            longitude,
        });
    }

    let body = format!(
        "{}{}{}{}{}",
        sign_digit(latitude),
        micro_degrees(latitude),
        FIELD_DELIMITER,
        sign_digit(longitude),
        micro_degrees(longitude),
    );

    Ok(EncodedMessage(format!(
        "*{}#",
        insert_duplicate_breaks(&body)
    )))
}

/// `1` for strictly negative values; `-0.0` counts as positive.
fn sign_digit(value: f64) -> char {
    if value < 0.0 {
        '1'
    } else {
        '0'
    }
}

/// Magnitude in millionths of a degree. Saturates at `u64::MAX` for inputs
/// far outside the degree range (still deterministic, still encodable).
fn micro_degrees(value: f64) -> u64 {
    (value.abs() * 1e6).round() as u64
}

/// Break runs of identical symbols with a literal `B`.
///
/// Two equal adjacent symbols would merge into one long mark on a tone
/// channel that delimits symbols by mark/space transitions, so a `B` is
/// appended after the second of any pair that repeats the previous output
/// symbol. A pair already followed by a `B` is left alone, which makes the
/// pass a no-op on its own output.
pub fn insert_duplicate_breaks(body: &str) -> String {
    let chars: Vec<char> = body.chars().collect();
    let mut out = String::with_capacity(chars.len() + 4);
    let mut prev: Option<char> = None;

    for (i, &c) in chars.iter().enumerate() {
        out.push(c);
        let already_broken = chars.get(i + 1) == Some(&DUPLICATE_BREAK);
        if prev == Some(c) && c != DUPLICATE_BREAK && !already_broken {
            out.push(DUPLICATE_BREAK);
            prev = Some(DUPLICATE_BREAK);
        } else {
            prev = Some(c);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_encodes_minimally() {
        // each field is sign digit "0" + magnitude "0", so both pairs
        // pick up a break
        assert_eq!(encode(0.0, 0.0).unwrap().as_str(), "*00BA00B#");
    }

    #[test]
    fn negative_zero_counts_as_positive() {
        assert_eq!(encode(-0.0, -0.0).unwrap().as_str(), "*00BA00B#");
    }

    #[test]
    fn new_york_reference_message() {
        // lat 40.712776 -> 40712776, body "040712776" -> "04071277B6"
        // lon -74.005974 -> 74005974, body "174005974" -> "17400B5974"
        let msg = encode(40.712776, -74.005974).unwrap();
        assert_eq!(msg.as_str(), "*04071277B6A17400B5974#");
    }

    #[test]
    fn sign_digits_follow_strict_negativity() {
        let msg = encode(-1.0, 2.0).unwrap();
        assert_eq!(msg.as_str(), "*11B00B00B00BA0200B00B00B#");
        let (lat, lon) = msg.fields();
        assert!(lat.starts_with('1'));
        assert!(lon.starts_with('0'));
    }

    #[test]
    fn rounding_at_the_last_digit() {
        // just above / below half a micro-degree
        // the longitude field "11" is an adjacent pair and gets a break
        assert_eq!(
            encode(0.00000051, -0.00000051).unwrap().fields(),
            ("01", "11B")
        );
        assert_eq!(
            encode(0.00000049, 0.00000049).unwrap().fields(),
            ("00B", "00B")
        );
    }

    #[test]
    fn non_finite_inputs_are_rejected() {
        assert!(encode(f64::NAN, 0.0).is_err());
        assert!(encode(0.0, f64::INFINITY).is_err());
        assert!(encode(f64::NEG_INFINITY, f64::NAN).is_err());
    }

    #[test]
    fn break_insertion_splits_pairs() {
        assert_eq!(insert_duplicate_breaks("00"), "00B");
        assert_eq!(insert_duplicate_breaks("100234"), "100B234");
        assert_eq!(insert_duplicate_breaks("010101"), "010101");
    }

    #[test]
    fn break_insertion_on_triples() {
        // the break lands between the 2nd and 3rd of a run
        assert_eq!(insert_duplicate_breaks("777"), "77B7");
        assert_eq!(insert_duplicate_breaks("7777"), "77B77B");
        assert_eq!(insert_duplicate_breaks("77777"), "77B77B7");
    }

    #[test]
    fn break_insertion_is_idempotent() {
        for input in ["00", "777", "7777", "100234", "040712776A174005974"] {
            let once = insert_duplicate_breaks(input);
            assert_eq!(insert_duplicate_breaks(&once), once, "input {input:?}");
        }
    }

    #[test]
    fn no_unescaped_adjacent_duplicates_remain() {
        for input in ["00", "000", "0000", "11223344", "999999999"] {
            let out: Vec<char> = insert_duplicate_breaks(input).chars().collect();
            for i in 1..out.len() {
                if out[i] == out[i - 1] && out[i] != 'B' {
                    // an adjacent pair is only legal when escaped by a break
                    assert_eq!(out.get(i + 1), Some(&'B'), "input {input:?}");
                }
            }
        }
    }
}
