/// Format a non-negative amount of cents with two-decimal precision.
///
/// Prices are stored as integer cents; every consumer-facing surface goes
/// through this so no floating point sneaks into money handling.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}

/// Parse a decimal price from a form field into cents. Accepts `49`,
/// `49.9`, `49.90` and a comma decimal separator; rejects negatives and
/// more than two decimal places.
pub fn parse_price_to_cents(input: &str) -> Option<i64> {
    let normalized = input.trim().replace(',', ".");
    if normalized.is_empty() || normalized.starts_with('-') {
        return None;
    }

    let (whole, frac) = match normalized.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (normalized.as_str(), ""),
    };

    if frac.len() > 2 || (whole.is_empty() && frac.is_empty()) {
        return None;
    }

    let whole: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().ok()?
    };

    let frac_cents: i64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().ok()? * 10,
        _ => frac.parse().ok()?,
    };

    whole.checked_mul(100)?.checked_add(frac_cents)
}
