use roman_calc::{arabic_to_roman, is_valid_roman, parse_roman, roman_to_arabic, CalcError};

#[test]
fn test_round_trip_full_range() {
    for n in 1..=3999i64 {
        let numeral = arabic_to_roman(n).unwrap();
        assert!(is_valid_roman(&numeral), "{} rendered as non-canonical {}", n, numeral);
        assert_eq!(i64::from(roman_to_arabic(&numeral)), n, "round trip failed for {}", numeral);
    }
}

#[test]
fn test_canonical_form_is_unique() {
    // Every valid numeral of up to four symbols must be the rendering of its own value.
    let symbols = ['I', 'V', 'X', 'L', 'C', 'D', 'M'];
    let mut candidates = vec![String::new()];
    for _ in 0..4 {
        candidates = candidates
            .iter()
            .flat_map(|prefix| symbols.iter().map(move |s| format!("{}{}", prefix, s)))
            .collect();
        for candidate in candidates.iter().filter(|c| is_valid_roman(c)) {
            let value = parse_roman(candidate).unwrap();
            assert_eq!(&arabic_to_roman(i64::from(value)).unwrap(), candidate);
        }
    }
}

#[test]
fn test_validator_examples() {
    for valid in ["IV", "IX", "XL", "XC", "CD", "CM", "MMMCMXCIX"] {
        assert!(is_valid_roman(valid), "{} should be valid", valid);
    }
    for invalid in ["IIII", "VX", "MMMM", ""] {
        assert!(!is_valid_roman(invalid), "{:?} should be invalid", invalid);
    }
}

#[test]
fn test_out_of_numeral_range() {
    for value in [0, -1, 4000] {
        assert!(matches!(
            arabic_to_roman(value),
            Err(CalcError::OutOfNumeralRangeError { .. })
        ));
    }
}
