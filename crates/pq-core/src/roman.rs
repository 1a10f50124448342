//! Roman numerals for spell ranks and act captions.
//!
//! Zero renders as `"N"` (nulla) and negative values carry a leading `-`, so
//! every integer converts both ways.

use crate::error::{PqError, PqResult};

const NUMERALS: &[(i64, &str)] = &[
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

/// Render an integer as a roman numeral.
pub fn to_roman(n: i64) -> String {
    if n == 0 {
        return "N".to_string();
    }
    let mut out = String::new();
    if n < 0 {
        out.push('-');
    }
    let mut rest = n.unsigned_abs();
    for &(value, glyph) in NUMERALS {
        let value = value as u64;
        while rest >= value {
            out.push_str(glyph);
            rest -= value;
        }
    }
    out
}

/// Parse a roman numeral, accepting the output of [`to_roman`] in any case.
pub fn to_arabic(text: &str) -> PqResult<i64> {
    let trimmed = text.trim();
    let upper = trimmed.to_ascii_uppercase();
    if upper == "N" {
        return Ok(0);
    }
    let (negative, digits) = match upper.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, upper.as_str()),
    };
    if digits.is_empty() {
        return Err(PqError::InvalidRoman(text.to_string()));
    }

    let mut total = 0i64;
    let mut rest = digits;
    for &(value, glyph) in NUMERALS {
        while let Some(tail) = rest.strip_prefix(glyph) {
            total += value;
            rest = tail;
        }
    }
    if !rest.is_empty() {
        return Err(PqError::InvalidRoman(text.to_string()));
    }
    Ok(if negative { -total } else { total })
}

/// Like [`to_arabic`] but treats unparseable text as zero.
pub fn to_arabic_or_zero(text: &str) -> i64 {
    to_arabic(text).unwrap_or(0)
}
