use crate::stats::parse::extract_record;
use crate::stats::tests::access_line;
use crate::stats::types::LogRecord;
use pretty_assertions::assert_eq;

#[test]
fn extracts_status_and_size_from_well_formed_line() {
    let line = r#"127.0.0.1 - [02/Jan/2024:10:00:01 +0000] "GET /projects/260 HTTP/1.1" 200 512"#;

    let record = extract_record(line);

    assert_eq!(
        record,
        Some(LogRecord {
            status_code: "200".to_string(),
            byte_size: 512,
        })
    );
}

#[test]
fn accepts_any_non_whitespace_client_and_surrounding_spaces() {
    let line = r#"   host-7.example.org   - [31/December/1999:23:59:59 +0530] "GET /projects/260 HTTP/1.1" 404 0"#;

    let record = extract_record(line).expect("line should match");

    assert_eq!(record.status_code, "404");
    assert_eq!(record.byte_size, 0);
}

#[test]
fn ignores_trailing_newline_and_content() {
    let line = format!("{} trailing junk\n", access_line("301", 77));

    let record = extract_record(&line).expect("line should match");

    assert_eq!(record.byte_size, 77);
}

#[test]
fn keeps_untracked_status_tokens() {
    let record = extract_record(&access_line("999", 100)).expect("line should match");

    assert_eq!(record.status_code, "999");
    assert_eq!(record.byte_size, 100);
}

#[test]
fn rejects_other_methods() {
    let line = r#"127.0.0.1 - [02/Jan/2024:10:00:01 +0000] "POST /projects/260 HTTP/1.1" 200 512"#;

    assert_eq!(extract_record(line), None);
}

#[test]
fn rejects_other_paths_and_versions() {
    let other_path = r#"127.0.0.1 - [02/Jan/2024:10:00:01 +0000] "GET /projects/261 HTTP/1.1" 200 512"#;
    let other_version = r#"127.0.0.1 - [02/Jan/2024:10:00:01 +0000] "GET /projects/260 HTTP/2.0" 200 512"#;
    let wildcard_dot = r#"127.0.0.1 - [02/Jan/2024:10:00:01 +0000] "GET /projects/260 HTTP/1x1" 200 512"#;

    assert_eq!(extract_record(other_path), None);
    assert_eq!(extract_record(other_version), None);
    assert_eq!(extract_record(wildcard_dot), None);
}

#[test]
fn rejects_malformed_timestamps() {
    let short_day = r#"127.0.0.1 - [2/Jan/2024:10:00:01 +0000] "GET /projects/260 HTTP/1.1" 200 512"#;
    let negative_offset = r#"127.0.0.1 - [02/Jan/2024:10:00:01 -0000] "GET /projects/260 HTTP/1.1" 200 512"#;

    assert_eq!(extract_record(short_day), None);
    assert_eq!(extract_record(negative_offset), None);
}

#[test]
fn rejects_truncated_and_non_numeric_sizes() {
    let truncated = r#"127.0.0.1 - [02/Jan/2024:10:00:01 +0000] "GET /projects/260 HTTP/1.1" 200"#;
    let non_numeric = r#"127.0.0.1 - [02/Jan/2024:10:00:01 +0000] "GET /projects/260 HTTP/1.1" 200 abc"#;
    let short_status = r#"127.0.0.1 - [02/Jan/2024:10:00:01 +0000] "GET /projects/260 HTTP/1.1" 20 512"#;

    assert_eq!(extract_record(truncated), None);
    assert_eq!(extract_record(non_numeric), None);
    assert_eq!(extract_record(short_status), None);
    assert_eq!(extract_record(""), None);
}

#[test]
fn drops_sizes_that_overflow_u64() {
    let line = r#"127.0.0.1 - [02/Jan/2024:10:00:01 +0000] "GET /projects/260 HTTP/1.1" 200 99999999999999999999999"#;

    assert_eq!(extract_record(line), None);
}

#[test]
fn rejects_non_ascii_digits_in_every_numeric_field() {
    // Arabic-Indic digits in the size, then in the day.
    let size = r#"127.0.0.1 - [02/Jan/2024:10:00:01 +0000] "GET /projects/260 HTTP/1.1" 200 ٥١٢"#;
    let day = r#"127.0.0.1 - [٠٢/Jan/2024:10:00:01 +0000] "GET /projects/260 HTTP/1.1" 200 512"#;

    assert_eq!(extract_record(size), None);
    assert_eq!(extract_record(day), None);
}
