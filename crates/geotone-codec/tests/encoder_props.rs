use geotone_codec::{encode, Symbol};
use proptest::prelude::*;

fn assert_invariants(lat: f64, lon: f64) {
    let msg = encode(lat, lon).unwrap();
    let s = msg.as_str();

    assert!(s.starts_with('*'), "{s}");
    assert!(s.ends_with('#'), "{s}");
    assert_eq!(s.matches('A').count(), 1, "{s}");
    assert!(s.chars().all(|c| Symbol::from_char(c).is_some()), "{s}");

    // every adjacent identical pair of non-B symbols carries a break
    let chars: Vec<char> = s.chars().collect();
    for i in 1..chars.len() {
        if chars[i] == chars[i - 1] && chars[i] != 'B' {
            assert_eq!(chars.get(i + 1), Some(&'B'), "{s}");
        }
    }

    // stripping the breaks recovers sign digit + micro-degree magnitude
    let (lat_field, lon_field) = msg.fields();
    for (field, value) in [(lat_field, lat), (lon_field, lon)] {
        let plain: String = field.chars().filter(|&c| c != 'B').collect();
        let (sign, digits) = plain.split_at(1);
        assert_eq!(sign, if value < 0.0 { "1" } else { "0" });
        let expected = (value.abs() * 1e6).round() as u64;
        assert_eq!(digits.parse::<u64>().unwrap(), expected, "{s}");
    }
}

proptest! {
    #[test]
    fn invariants_hold_over_the_degree_range(
        lat in -90.0f64..=90.0,
        lon in -180.0f64..=180.0,
    ) {
        assert_invariants(lat, lon);
    }

    #[test]
    fn invariants_hold_for_any_finite_pair(
        lat in proptest::num::f64::NORMAL | proptest::num::f64::SUBNORMAL | proptest::num::f64::ZERO,
        lon in proptest::num::f64::NORMAL | proptest::num::f64::SUBNORMAL | proptest::num::f64::ZERO,
    ) {
        assert_invariants(lat, lon);
    }
}
