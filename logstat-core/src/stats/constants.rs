use std::num::NonZeroU64;

/// Number of consumed lines between two periodic snapshots.
pub const REPORT_EVERY: NonZeroU64 = NonZeroU64::new(10).unwrap();

/// Lines the reader thread may hold before the processing loop takes them.
/// Zero makes the input channel a rendezvous channel.
pub const READ_AHEAD: usize = 0;
