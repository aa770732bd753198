//! Age validation functions

use crate::messages;
use crate::whitespace;

/// Lenient integer parse matching what a browser's `parseInt` accepts
///
/// Leading whitespace is skipped and an optional sign is read. A `0x`/`0X`
/// prefix switches to hexadecimal; otherwise the radix is ten. Then the
/// longest run of digits in that radix is read and anything after it is
/// ignored. Returns `None` when no digit follows. Values too large for `i64`
/// saturate.
pub fn parse_leading_int(value: &str) -> Option<i64> {
    let rest = whitespace::trim_start(value);
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };
    let (radix, rest) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let digits: Vec<i64> = rest
        .chars()
        .map_while(|c| c.to_digit(radix))
        .map(i64::from)
        .collect();
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits.into_iter().fold(0i64, |acc, d| {
        acc.saturating_mul(i64::from(radix)).saturating_add(d)
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// Validates an age field: required, numeric and at least `min`, at most `max`
pub fn validate_age(value: &str, min: i64, max: i64) -> Result<(), String> {
    if value.is_empty() {
        return Err(messages::AGE_REQUIRED.to_string());
    }

    match parse_leading_int(value) {
        Some(age) if age < min => Err(format!("You must be {} or older to register", min)),
        None => Err(format!("You must be {} or older to register", min)),
        Some(age) if age > max => Err(messages::AGE_OUT_OF_RANGE.to_string()),
        Some(_) => Ok(()),
    }
}
