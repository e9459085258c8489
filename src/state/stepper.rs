//! Up/down buttons next to the age input.

pub const MIN_AGE: u8 = 18;
pub const MAX_AGE: u8 = 99;
pub const DEFAULT_AGE: u8 = 25;

/// Leading integer of `value`, like a browser `parseInt`: optional
/// whitespace and sign, then at least one digit. Trailing junk is ignored.
fn parse_leading_int(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits: &str = match rest.find(|c: char| !c.is_ascii_digit()) {
        Some(end) => &rest[..end],
        None => rest,
    };
    if digits.is_empty() {
        return None;
    }
    // Anything too long for i64 is far outside the age range anyway.
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

fn clamp(age: i64) -> u8 {
    age.clamp(i64::from(MIN_AGE), i64::from(MAX_AGE)) as u8
}

fn current(value: &str) -> i64 {
    parse_leading_int(value).unwrap_or(i64::from(MIN_AGE))
}

pub fn increment(value: &str) -> String {
    clamp(current(value).saturating_add(1)).to_string()
}

pub fn decrement(value: &str) -> String {
    clamp(current(value).saturating_sub(1)).to_string()
}

/// The age that ends up in a booking: whatever was typed, clamped.
pub fn clamp_age(value: &str) -> u8 {
    clamp(current(value))
}
