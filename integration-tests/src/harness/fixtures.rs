use std::path::{Path, PathBuf};

/// Path of a log fixture under `fixtures/logs`.
pub fn fixture_path(name: &str) -> PathBuf {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("logs")
        .join(name);

    assert!(path.exists(), "log fixture does not exist: {:?}", path);

    path
}

/// A well-formed access-log line for the tracked request.
pub fn access_line(client: &str, status: &str, size: u64) -> String {
    format!(
        r#"{client} - [02/Jan/2024:10:00:01 +0000] "GET /projects/260 HTTP/1.1" {status} {size}"#
    )
}
