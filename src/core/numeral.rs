use crate::utils::error::{CalcError, Result};

/// Canonical input numerals, index + 1 is the value.
pub const ROMAN_NUMERALS: [&str; 10] = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];
pub const ARABIC_NUMERALS: [&str; 10] = ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10"];

const ROMAN_SYMBOLS: [(i64, &str); 9] = [
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

pub const MAX_ROMAN_RESULT: i64 = 100;

pub fn is_roman(value: &str) -> bool {
    ROMAN_NUMERALS.contains(&value)
}

pub fn is_arabic(value: &str) -> bool {
    ARABIC_NUMERALS.contains(&value)
}

pub fn roman_to_arabic(value: &str) -> Result<i64> {
    ROMAN_NUMERALS
        .iter()
        .position(|numeral| *numeral == value)
        .map(|index| index as i64 + 1)
        .ok_or_else(|| CalcError::number_not_found(value))
}

pub fn arabic_to_roman(value: i64) -> Result<String> {
    if !(1..=MAX_ROMAN_RESULT).contains(&value) {
        return Err(CalcError::number_not_found(value));
    }

    let mut remaining = value;
    let mut roman = String::new();
    for (amount, symbol) in ROMAN_SYMBOLS {
        while remaining >= amount {
            remaining -= amount;
            roman.push_str(symbol);
        }
    }

    Ok(roman)
}
