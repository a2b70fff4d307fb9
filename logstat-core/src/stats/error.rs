use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    /// Interrupted by a signal; the final snapshot was already written.
    #[error("interrupted after {lines} lines")]
    Interrupted { lines: u64 },

    /// Reading input failed; the final snapshot was already written.
    #[error("failed to read input after {lines} lines: {source}")]
    Read {
        lines: u64,
        #[source]
        source: io::Error,
    },

    #[error("failed to write snapshot: {0}")]
    Output(#[source] io::Error),

    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to install interrupt handler: {0}")]
    Signal(#[from] ctrlc::Error),
}

impl StatsError {
    pub fn is_interrupted(&self) -> bool {
        matches!(self, StatsError::Interrupted { .. })
    }
}
