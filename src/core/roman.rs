//! Conversion between integers and Roman numerals in 1..=3999.

use crate::utils::error::{CalcError, Result};
use regex::Regex;
use std::sync::LazyLock;

pub const MIN_ROMAN: i64 = 1;
pub const MAX_ROMAN: i64 = 3999;

const NUMERALS: [(i64, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

static CANONICAL_ROMAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^M{0,3}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$")
        .expect("canonical Roman numeral pattern compiles")
});

fn symbol_value(symbol: char) -> u32 {
    match symbol {
        'I' => 1,
        'V' => 5,
        'X' => 10,
        'L' => 50,
        'C' => 100,
        'D' => 500,
        'M' => 1000,
        _ => 0,
    }
}

/// Whether `numeral` is a non-empty Roman numeral in canonical subtractive form.
pub fn is_valid_roman(numeral: &str) -> bool {
    !numeral.is_empty() && CANONICAL_ROMAN.is_match(numeral)
}

/// Converts a numeral already accepted by [`is_valid_roman`].
///
/// Characters outside the Roman alphabet count as zero; the result for
/// malformed input is meaningless and should not be relied on.
pub fn roman_to_arabic(numeral: &str) -> u32 {
    let mut total = 0u32;
    let mut previous = 0u32;

    for symbol in numeral.chars().rev() {
        let value = symbol_value(symbol);
        if value < previous {
            total -= value;
        } else {
            total += value;
        }
        previous = value;
    }

    total
}

/// Validates and converts in one step.
pub fn parse_roman(numeral: &str) -> Result<u32> {
    if !is_valid_roman(numeral) {
        return Err(CalcError::format(format!(
            "'{}' is not a well-formed Roman numeral",
            numeral
        )));
    }
    Ok(roman_to_arabic(numeral))
}

pub fn arabic_to_roman(value: i64) -> Result<String> {
    if !(MIN_ROMAN..=MAX_ROMAN).contains(&value) {
        return Err(CalcError::OutOfNumeralRangeError { value });
    }

    let mut remaining = value;
    let mut numeral = String::new();
    for &(amount, symbol) in NUMERALS.iter() {
        while remaining >= amount {
            numeral.push_str(symbol);
            remaining -= amount;
        }
    }

    Ok(numeral)
}
