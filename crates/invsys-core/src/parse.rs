//! Lenient parsing of raw numeric fields supplied by a host page.
//!
//! Values arrive as attribute or form strings. They are read the way a browser
//! reads an integer attribute: surrounding whitespace is ignored, an optional
//! sign is accepted, and parsing stops at the first non-digit. Nothing here
//! returns an error; unusable input maps to a fallback instead.

/// Parses the leading integer of `raw`, e.g. `" 12abc"` → `12`, `"5.9"` → `5`,
/// `"-3"` → `-3`.
///
/// Returns `None` when no digit follows the optional sign. Magnitudes beyond
/// the `i64` range saturate.
#[must_use]
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { -value } else { value })
}

/// Parses a non-negative count, saturating at `u32::MAX`. Negative values
/// yield `None`.
fn parse_count(raw: &str) -> Option<u32> {
    let value = parse_leading_int(raw)?;
    if value < 0 {
        return None;
    }
    Some(u32::try_from(value).unwrap_or(u32::MAX))
}

/// Normalizes a raw quantity field. Missing, unparsable, and negative values
/// all become `0`.
#[must_use]
pub fn parse_quantity(raw: Option<&str>) -> u32 {
    raw.and_then(parse_count).unwrap_or(0)
}

/// Normalizes a raw minimum-stock field. Missing, unparsable, and negative
/// values become `default`; an explicit `0` is kept.
#[must_use]
pub fn parse_min_stock(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(parse_count).unwrap_or(default)
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
