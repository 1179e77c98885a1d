//! Date validation at the caller boundary; the core assumes the date
//! strings it receives are already normalized.

use eyre::{bail, Result};

/// Normalize a user-entered date to `YYYY-MM-DD`.
///
/// Trims surrounding whitespace, accepts `YYYY/MM/DD` as an alias, and
/// validates that the result is a real calendar date.
pub fn normalize_date(input: &str) -> Result<String> {
    let mut s = input.trim().to_string();
    if has_shape(&s, b'/') {
        s = s.replace('/', "-");
    }
    if !has_shape(&s, b'-') {
        bail!("use YYYY-MM-DD (example: 2026-01-30)");
    }
    if jiff::civil::Date::strptime("%Y-%m-%d", &s).is_err() {
        bail!("{s} is not a valid calendar date");
    }
    Ok(s)
}

fn has_shape(s: &str, sep: u8) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b.iter()
            .enumerate()
            .all(|(i, &c)| if i == 4 || i == 7 { c == sep } else { c.is_ascii_digit() })
}
