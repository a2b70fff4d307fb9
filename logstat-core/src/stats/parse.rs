use crate::stats::types::LogRecord;
use once_cell::sync::Lazy;
use regex::Regex;

/// Access-log entry for the single request line we aggregate.
///
/// Anchored at the start only; anything after the size is ignored. Every
/// digit field is ASCII `[0-9]`.
static ACCESS_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^\s*(?P<client>\S+)\s* - ",
        r"\[(?P<ts>[0-9]{2}/\w+/[0-9]{4}:[0-9]{2}:[0-9]{2}:[0-9]{2} \+[0-9]{4})\] ",
        r#""GET /projects/260 HTTP/1\.1" "#,
        r"(?P<status>[0-9]{3}) (?P<size>[0-9]+)",
    ))
    .expect("access-log pattern is valid")
});

/// Extract the status token and byte size from one raw line.
///
/// Returns `None` for anything that is not a well-formed entry.
pub fn extract_record(line: &str) -> Option<LogRecord> {
    let Some(caps) = ACCESS_LINE.captures(line) else {
        tracing::debug!(line, "line does not match access-log pattern");
        return None;
    };

    let status_code = caps["status"].to_string();
    let size = &caps["size"];

    // Only all-digit sizes reach here, so the sole failure is overflow.
    let Ok(byte_size) = size.parse::<u64>() else {
        tracing::warn!(size, "byte size does not fit in u64; dropping line");
        return None;
    };

    Some(LogRecord {
        status_code,
        byte_size,
    })
}
