//! Roman numeral tables, classification and conversion.
//!
//! Input numerals are restricted to the ten canonical forms `I`..`X`, matched
//! case-insensitively. Output goes through a greedy subtraction table that
//! reaches up to `C`, so products above ten still render.
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{NumeralSystem, Position};

/// Accepted input numerals and their values.
pub static ROMAN_TO_ARABIC: &[(&str, i64)] = &[
    ("I", 1),
    ("II", 2),
    ("III", 3),
    ("IV", 4),
    ("V", 5),
    ("VI", 6),
    ("VII", 7),
    ("VIII", 8),
    ("IX", 9),
    ("X", 10),
];

/// Greedy encoding rules, sorted by descending value.
pub static ARABIC_TO_ROMAN: &[(i64, &str)] = &[
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

fn lookup(token: &str) -> Option<i64> {
    let upper = token.to_uppercase();
    ROMAN_TO_ARABIC
        .iter()
        .find(|(numeral, _)| *numeral == upper)
        .map(|&(_, value)| value)
}

/// True if the token is one of the ten accepted Roman numerals, in any case.
pub fn is_roman(token: &str) -> bool {
    lookup(token).is_some()
}

pub fn classify(token: &str) -> NumeralSystem {
    if is_roman(token) {
        NumeralSystem::Roman
    } else {
        NumeralSystem::Arabic
    }
}

pub fn roman_to_arabic(token: &str) -> Result<i64> {
    lookup(token).ok_or_else(|| Error::UnknownRoman {
        token: token.to_string(),
    })
}

/// Encode `value` by greedy subtraction. Only the lower bound is checked.
pub fn arabic_to_roman(value: i64) -> Result<String> {
    if value < 1 {
        return Err(Error::InvalidRomanResult { value });
    }

    let mut remaining = value;
    let mut out = String::new();
    for &(step, symbol) in ARABIC_TO_ROMAN {
        while remaining >= step {
            out.push_str(symbol);
            remaining -= step;
        }
    }
    debug!("Encoded {} as {}", value, out);
    Ok(out)
}

/// Base-10 parse of an Arabic operand; a leading sign is allowed.
pub fn parse_arabic(token: &str, position: Position) -> Result<i64> {
    token.parse::<i64>().map_err(|_| Error::Parse {
        position,
        token: token.to_string(),
    })
}
