use anyhow::{Context, Result};
use logstat_core::stats::{SnapshotFormat, StatsError, StatsOptions, run_stdin};
use std::num::NonZeroU64;

pub fn run(report_every: NonZeroU64, format: SnapshotFormat) -> Result<()> {
    let options = StatsOptions {
        report_every,
        format,
    };

    let summary = run_stdin(options).context("access-log stats run failed")?;

    tracing::debug!(
        lines = summary.lines,
        matched = summary.matched,
        "input exhausted"
    );
    Ok(())
}

/// True when the run stopped on Ctrl-C after writing its final snapshot.
pub fn was_interrupted(err: &anyhow::Error) -> bool {
    err.downcast_ref::<StatsError>()
        .is_some_and(StatsError::is_interrupted)
}

/// Terminate by SIGINT so the parent sees a signal death, not a plain exit.
///
/// Returns only if the signal could not be re-raised.
#[cfg(unix)]
pub fn reraise_interrupt() {
    use nix::sys::signal::{SigHandler, Signal, raise, signal};

    // SAFETY: SIG_DFL installs no handler code.
    let restored = unsafe { signal(Signal::SIGINT, SigHandler::SigDfl) };
    if let Err(e) = restored.map(|_| ()).and_then(|()| raise(Signal::SIGINT)) {
        tracing::warn!(error = %e, "failed to re-raise SIGINT");
    }
}

#[cfg(not(unix))]
pub fn reraise_interrupt() {}
