//! Money as fixed-point integer cents.
//!
//! Prices and costs are carried as `i64` cents so every intermediate step of
//! the aggregation is exact integer arithmetic. Conversion to a two-decimal
//! string happens only at render time.

/// Parses a decimal price string into integer cents.
///
/// Accepts an optional leading minus, an integer part, a dot, and fraction
/// digits. Fewer than two fraction digits are padded (`"7.5"` -> 750,
/// `"7"` -> 700); digits past the second are truncated (`"7.129"` -> 712).
/// Example: `"123.45"` -> 12345.
///
/// Returns `None` for anything else: empty input, non-digit characters, or
/// a bare `"-"`/`"."`. Callers treat `None` as a malformed field and skip
/// the surrounding line.
pub fn parse_price_cents(s: &str) -> Option<i64> {
    let (sign, rest) = match s.strip_prefix('-') {
        Some(rest) => (-1i64, rest),
        None => (1i64, s),
    };

    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, f),
        None => (rest, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    let mut cents: i64 = 0;
    if !int_part.is_empty() {
        if !int_part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let units: i64 = int_part.parse().ok()?;
        cents = units.checked_mul(100)?;
    }

    if !frac_part.is_empty() {
        if !frac_part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let digits = &frac_part[..frac_part.len().min(2)];
        let mut frac: i64 = digits.parse().ok()?;
        if digits.len() == 1 {
            frac *= 10;
        }
        cents = cents.checked_add(frac)?;
    }

    Some(sign * cents)
}

/// Renders integer cents as a decimal string with exactly two places.
///
/// Negative amounts keep their sign in front of the whole number:
/// -5500 -> `"-55.00"`, -7 -> `"-0.07"`.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}
