//! Lenient text cleanup and numeric conversion shared by import and the model.

/// Trim whitespace and byte-order marks from both ends.
///
/// Spreadsheet exports often start with U+FEFF, which `str::trim` keeps.
pub fn trim_field(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Lenient numeric conversion for the `amount` column.
///
/// Blank text counts as zero. Accepts decimal and exponent forms, signed
/// `Infinity`, and `0x`/`0o`/`0b` integer literals. Anything else is `None`.
pub fn coerce_number(raw: &str) -> Option<f64> {
    let s = trim_field(raw);
    if s.is_empty() {
        return Some(0.0);
    }

    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    if let Some(n) = parse_radix_literal(s) {
        return Some(n);
    }

    // str::parse also takes "inf"/"nan" spellings, which are not numbers here
    if !s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return None;
    }

    s.parse::<f64>().ok()
}

fn parse_radix_literal(s: &str) -> Option<f64> {
    let (radix, digits) = match s.get(..2)? {
        "0x" | "0X" => (16, &s[2..]),
        "0o" | "0O" => (8, &s[2..]),
        "0b" | "0B" => (2, &s[2..]),
        _ => return None,
    };
    // from_str_radix tolerates a leading '+'
    if !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    u128::from_str_radix(digits, radix).ok().map(|n| n as f64)
}
