use jiff::Zoned;

/// Current local time at second precision, formatted `YYYY-MM-DDTHH:MM:SS`.
///
/// Persisted as a plain string: on one machine's clock these sort
/// lexicographically in chronological order, which is the ordering contract
/// every `created_at` field relies on.
pub fn now_ts() -> String {
    Zoned::now().strftime("%Y-%m-%dT%H:%M:%S").to_string()
}
