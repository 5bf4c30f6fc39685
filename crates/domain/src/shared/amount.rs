//! Conversions between integer minor units (cents) and the major unit
//! doubles the host app stores.

pub fn major_to_minor(amount: f64) -> i64 {
    if !amount.is_finite() {
        return 0;
    }
    (amount * 100.0).round() as i64
}

pub fn minor_to_major(amount_minor: i64) -> f64 {
    amount_minor as f64 / 100.0
}

/// Whole units, rounding half away from zero: `1950` -> `"20"`
pub fn format_whole_units(amount_minor: i64) -> String {
    let sign = if amount_minor < 0 { "-" } else { "" };
    let abs = amount_minor.unsigned_abs();
    format!("{}{}", sign, (abs + 50) / 100)
}

/// `1950` -> `"19.50"`
pub fn format_with_cents(amount_minor: i64) -> String {
    let sign = if amount_minor < 0 { "-" } else { "" };
    let abs = amount_minor.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}
