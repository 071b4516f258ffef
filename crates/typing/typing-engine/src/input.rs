use std::io::{BufRead, BufReader};
use std::sync::mpsc::{Receiver, channel};
use std::thread;
use std::time::Duration;

use tracing::debug;

/// Console lines pumped through a channel so reads can carry a deadline.
///
/// A dedicated thread blocks on the underlying reader and forwards each
/// line; `read_timeout` is then a plain `recv_timeout`: a bounded wait
/// with an explicit deadline rather than a sleep-poll loop. Once the
/// source hits end of input the channel disconnects and every read
/// reports no input.
pub struct InputReader {
    lines: Receiver<String>,
}

impl InputReader {
    /// Reader over the process's stdin.
    pub fn stdin() -> InputReader {
        Self::from_reader(BufReader::new(std::io::stdin()))
    }

    /// Reader over any line source; tests inject a cursor here.
    pub fn from_reader(reader: impl BufRead + Send + 'static) -> InputReader {
        let (tx, rx) = channel();
        thread::spawn(move || {
            for line in reader.lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
            debug!("input source closed");
        });
        InputReader { lines: rx }
    }

    /// Blocks for the next line with no deadline. `None` once the source
    /// is exhausted.
    pub fn read_line(&self) -> Option<String> {
        self.lines.recv().ok()
    }

    /// Waits up to `limit` for the next line.
    pub fn read_timeout(&self, limit: Duration) -> Option<String> {
        self.lines.recv_timeout(limit).ok()
    }
}
