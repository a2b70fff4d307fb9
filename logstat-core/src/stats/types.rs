/// One access-log line reduced to the two fields that feed the aggregates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Three-digit status token exactly as captured (e.g. "200").
    pub status_code: String,
    pub byte_size: u64,
}

/// The closed set of status codes that get a histogram counter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TrackedStatus {
    Ok,
    MovedPermanently,
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    MethodNotAllowed,
    InternalServerError,
}

impl TrackedStatus {
    /// Every tracked status, in ascending lexicographic order of its token.
    pub const ALL: [TrackedStatus; 8] = [
        TrackedStatus::Ok,
        TrackedStatus::MovedPermanently,
        TrackedStatus::BadRequest,
        TrackedStatus::Unauthorized,
        TrackedStatus::Forbidden,
        TrackedStatus::NotFound,
        TrackedStatus::MethodNotAllowed,
        TrackedStatus::InternalServerError,
    ];

    /// Exact string lookup. "0200" or " 200" are not tracked.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == token)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TrackedStatus::Ok => "200",
            TrackedStatus::MovedPermanently => "301",
            TrackedStatus::BadRequest => "400",
            TrackedStatus::Unauthorized => "401",
            TrackedStatus::Forbidden => "403",
            TrackedStatus::NotFound => "404",
            TrackedStatus::MethodNotAllowed => "405",
            TrackedStatus::InternalServerError => "500",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}
