use crate::harness::fixtures::fixture_path;
use logstat_core::stats::{
    Input, StatsError, StatsOptions, StatsSummary, input_channel, run_stats, spawn_reader,
};
use std::fs::File;
use std::io::Cursor;
use std::thread;

/// Outcome of one pipeline run with stdout captured in memory.
pub struct TestRun {
    pub result: Result<StatsSummary, StatsError>,
    pub output: String,
}

impl TestRun {
    /// Run a fixture file through the same reader thread stdin uses.
    pub fn from_fixture(name: &str, options: StatsOptions) -> Self {
        let file = File::open(fixture_path(name)).expect("failed to open log fixture");

        let (tx, rx) = input_channel();
        let reader = spawn_reader(file, tx);

        let run = Self::capture(|out| run_stats(&rx, out, options));
        reader.join().expect("reader thread panicked");
        run
    }

    /// Run raw text as if it were piped in.
    pub fn from_text(text: &str, options: StatsOptions) -> Self {
        let (tx, rx) = input_channel();
        let reader = spawn_reader(Cursor::new(text.as_bytes().to_vec()), tx);

        let run = Self::capture(|out| run_stats(&rx, out, options));
        reader.join().expect("reader thread panicked");
        run
    }

    /// Feed `lines`, then deliver an interrupt instead of end of input.
    pub fn interrupted_after(lines: Vec<String>, options: StatsOptions) -> Self {
        let (tx, rx) = input_channel();

        let feeder = thread::spawn(move || {
            for line in lines {
                if tx.send(Input::Line(line)).is_err() {
                    return;
                }
            }
            let _ = tx.send(Input::Interrupted);
        });

        let run = Self::capture(|out| run_stats(&rx, out, options));
        feeder.join().expect("feeder thread panicked");
        run
    }

    fn capture<F>(f: F) -> Self
    where
        F: FnOnce(&mut Vec<u8>) -> Result<StatsSummary, StatsError>,
    {
        let mut out = Vec::new();
        let result = f(&mut out);

        Self {
            result,
            output: String::from_utf8(out).expect("snapshot output is UTF-8"),
        }
    }

    /// Output split into snapshots, each starting at a `File size:` line.
    pub fn snapshots(&self) -> Vec<Vec<&str>> {
        let mut snapshots: Vec<Vec<&str>> = Vec::new();

        for line in self.output.lines() {
            if line.starts_with("File size: ") || snapshots.is_empty() {
                snapshots.push(Vec::new());
            }
            if let Some(current) = snapshots.last_mut() {
                current.push(line);
            }
        }

        snapshots
    }
}
