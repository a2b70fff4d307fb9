mod parse_tests;

pub(crate) fn access_line(status: &str, size: u64) -> String {
    format!(r#"127.0.0.1 - [02/Jan/2024:10:00:01 +0000] "GET /projects/260 HTTP/1.1" {status} {size}"#)
}
