use crate::stats::aggregation::AggregateState;
use crate::stats::constants::REPORT_EVERY;
use crate::stats::error::StatsError;
use crate::stats::input::{Input, input_channel, install_interrupt_handler, spawn_reader};
use crate::stats::parse::extract_record;
use crate::stats::render::{SnapshotFormat, write_snapshot};
use std::io::{self, Write};
use std::num::NonZeroU64;
use std::sync::mpsc::Receiver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsOptions {
    pub report_every: NonZeroU64,
    pub format: SnapshotFormat,
}

impl Default for StatsOptions {
    fn default() -> Self {
        Self {
            report_every: REPORT_EVERY,
            format: SnapshotFormat::Text,
        }
    }
}

/// Counters for a run that reached the end of its input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsSummary {
    pub lines: u64,
    pub matched: u64,
    pub snapshots: u64,
}

enum Exit {
    EndOfInput,
    Interrupted,
    ReadFailed(io::Error),
}

enum RunState {
    Running,
    Draining(Exit),
    Terminated(Exit),
}

struct StatsRun<'a, W: Write> {
    out: &'a mut W,
    options: StatsOptions,
    state: AggregateState,
    summary: StatsSummary,
}

impl<W: Write> StatsRun<'_, W> {
    fn consume(&mut self, line: &str) -> Result<(), StatsError> {
        let record = extract_record(line);
        if record.is_some() {
            self.summary.matched += 1;
        }
        self.state.push(record.as_ref());

        self.summary.lines += 1;
        if self.summary.lines % self.options.report_every.get() == 0 {
            self.report()?;
        }
        Ok(())
    }

    fn report(&mut self) -> Result<(), StatsError> {
        write_snapshot(&mut *self.out, &self.state.snapshot(), self.options.format)?;
        self.summary.snapshots += 1;
        Ok(())
    }
}

/// Drive the pipeline from `inputs` until the stream ends or is interrupted.
///
/// A final snapshot is written on every exit path except an output failure.
/// Interruption and read failure are reported as errors after that snapshot.
pub fn run_stats<W: Write>(
    inputs: &Receiver<Input>,
    out: &mut W,
    options: StatsOptions,
) -> Result<StatsSummary, StatsError> {
    let mut run = StatsRun {
        out,
        options,
        state: AggregateState::new(),
        summary: StatsSummary::default(),
    };
    let mut state = RunState::Running;

    loop {
        state = match state {
            RunState::Running => match inputs.recv() {
                Ok(Input::Line(line)) => {
                    run.consume(&line)?;
                    RunState::Running
                }
                // A dropped sender means nobody can produce more input.
                Ok(Input::End) | Err(_) => RunState::Draining(Exit::EndOfInput),
                Ok(Input::Interrupted) => RunState::Draining(Exit::Interrupted),
                Ok(Input::Failed(e)) => RunState::Draining(Exit::ReadFailed(e)),
            },
            RunState::Draining(exit) => {
                run.report()?;
                RunState::Terminated(exit)
            }
            RunState::Terminated(exit) => {
                let summary = run.summary;
                tracing::info!(
                    lines = summary.lines,
                    matched = summary.matched,
                    snapshots = summary.snapshots,
                    "stats run finished"
                );

                return match exit {
                    Exit::EndOfInput => Ok(summary),
                    Exit::Interrupted => Err(StatsError::Interrupted {
                        lines: summary.lines,
                    }),
                    Exit::ReadFailed(source) => Err(StatsError::Read {
                        lines: summary.lines,
                        source,
                    }),
                };
            }
        };
    }
}

/// Aggregate stdin to stdout, with Ctrl-C triggering the final snapshot.
pub fn run_stdin(options: StatsOptions) -> Result<StatsSummary, StatsError> {
    let (tx, rx) = input_channel();

    install_interrupt_handler(tx.clone())?;
    // Not joined: on interrupt the reader may still be blocked on stdin.
    let _reader = spawn_reader(io::stdin(), tx);

    tracing::info!(
        report_every = options.report_every.get(),
        format = ?options.format,
        "reading access log from stdin"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_stats(&rx, &mut out, options)
}
