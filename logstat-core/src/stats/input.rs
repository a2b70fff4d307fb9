use crate::stats::constants::READ_AHEAD;
use crate::stats::error::StatsError;
use std::io::{self, BufRead, BufReader, Read};
use std::sync::mpsc::{self, Receiver, SyncSender};
use std::thread::{self, JoinHandle};

/// What the processing loop can receive while it waits for the next line.
#[derive(Debug)]
pub enum Input {
    Line(String),
    End,
    Interrupted,
    Failed(io::Error),
}

/// Channel between the input producers and the processing loop.
pub fn input_channel() -> (SyncSender<Input>, Receiver<Input>) {
    mpsc::sync_channel(READ_AHEAD)
}

/// Read `source` line by line on its own thread and forward each line.
///
/// Exactly one terminal message (`End` or `Failed`) is sent unless the
/// receiver goes away first.
pub fn spawn_reader<R>(source: R, tx: SyncSender<Input>) -> JoinHandle<()>
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let mut reader = BufReader::new(source);
        let mut buf = Vec::new();

        loop {
            buf.clear();

            let msg = match reader.read_until(b'\n', &mut buf) {
                Ok(0) => Input::End,
                Ok(_) => Input::Line(decode_line(&buf)),
                Err(e) => Input::Failed(e),
            };

            let terminal = !matches!(msg, Input::Line(_));

            // If receiver is gone, stop early.
            if tx.send(msg).is_err() || terminal {
                break;
            }
        }
    })
}

/// Route Ctrl-C into the input channel so a blocked loop wakes up.
pub fn install_interrupt_handler(tx: SyncSender<Input>) -> Result<(), StatsError> {
    ctrlc::set_handler(move || {
        tracing::info!("interrupt received");
        let _ = tx.send(Input::Interrupted);
    })?;
    Ok(())
}

fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}
