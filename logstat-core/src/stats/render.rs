use crate::stats::aggregation::StatsSnapshot;
use crate::stats::error::StatsError;
use clap::ValueEnum;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SnapshotFormat {
    /// `File size: N` followed by `<status>: <count>` lines
    #[default]
    Text,
    /// One JSON object per snapshot
    Json,
}

pub fn render_text(snapshot: &StatsSnapshot) -> Vec<String> {
    let mut lines = Vec::with_capacity(snapshot.status_codes.len() + 1);

    lines.push(format!("File size: {}", snapshot.file_size));
    for (status, count) in &snapshot.status_codes {
        lines.push(format!("{status}: {count}"));
    }

    lines
}

pub fn render_json(snapshot: &StatsSnapshot) -> Result<String, StatsError> {
    Ok(serde_json::to_string(snapshot)?)
}

/// Write a snapshot, flushing after every line so it is visible at once.
pub fn write_snapshot<W: Write>(
    out: &mut W,
    snapshot: &StatsSnapshot,
    format: SnapshotFormat,
) -> Result<(), StatsError> {
    let lines = match format {
        SnapshotFormat::Text => render_text(snapshot),
        SnapshotFormat::Json => vec![render_json(snapshot)?],
    };

    for line in lines {
        writeln!(out, "{line}").map_err(StatsError::Output)?;
        out.flush().map_err(StatsError::Output)?;
    }

    Ok(())
}
