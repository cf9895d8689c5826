//! Display formatting for dates and USD amounts (en-US conventions).

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Placeholder produced for text that does not parse as a date
pub const INVALID_DATE: &str = "Invalid Date";

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d", "%b %d, %Y", "%B %d, %Y"];
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Best-effort parse of the date shapes seen in exports and statements.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(ndt.date());
        }
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
}

/// Format a date as `M/D/YYYY`.
///
/// Unparseable input yields [`INVALID_DATE`]; this is not a validator.
pub fn format_date(text: &str) -> String {
    match parse_date(text) {
        Some(date) => format_naive_date(date),
        None => INVALID_DATE.to_string(),
    }
}

pub fn format_naive_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// Format an amount as USD: `$1,234.50`, `-$5.00`.
///
/// Cents are rounded half away from zero on the shortest decimal form of the
/// input, so `1.005` becomes `$1.01`.
pub fn format_currency(amount: f64) -> String {
    let sign = if amount.is_sign_negative() && !amount.is_nan() { "-" } else { "" };
    if amount.is_nan() {
        return "$NaN".to_string();
    }
    if amount.is_infinite() {
        return format!("{sign}$∞");
    }

    let abs = amount.abs();
    let fixed = match Decimal::from_str(&abs.to_string()) {
        Ok(d) => {
            let mut rounded = d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(2);
            rounded.to_string()
        }
        // beyond Decimal's range or precision
        Err(_) => format!("{:.2}", abs),
    };

    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{sign}${}.{cents}", group_thousands(whole))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
