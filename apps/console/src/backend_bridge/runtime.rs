//! Input intake: a plain thread reads lines and feeds the controller queue.
//!
//! Reading happens off the async runtime so a blocked terminal read never
//! holds up shutdown after `quit`.

use std::{io::BufRead, thread};

use tokio::sync::mpsc::Sender;
use tracing::{debug, warn};

pub const INPUT_QUEUE_CAPACITY: usize = 64;

pub fn spawn_line_reader<R>(input: R, line_tx: Sender<String>) -> thread::JoinHandle<()>
where
    R: BufRead + Send + 'static,
{
    thread::spawn(move || {
        for line in input.lines() {
            match line {
                Ok(line) => {
                    if line_tx.blocking_send(line).is_err() {
                        debug!("controller stopped; dropping remaining input");
                        break;
                    }
                }
                Err(err) => {
                    warn!(error = %err, "stopped reading input");
                    break;
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use tokio::sync::mpsc;

    use super::*;

    #[test]
    fn forwards_every_line_then_closes() {
        let (tx, mut rx) = mpsc::channel(INPUT_QUEUE_CAPACITY);
        let reader = spawn_line_reader(Cursor::new("start\ngo chat\n"), tx);

        assert_eq!(rx.blocking_recv().as_deref(), Some("start"));
        assert_eq!(rx.blocking_recv().as_deref(), Some("go chat"));
        assert_eq!(rx.blocking_recv(), None);
        reader.join().expect("reader thread");
    }

    #[test]
    fn stops_when_the_controller_is_gone() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        let reader = spawn_line_reader(Cursor::new("start\nsay hi\nquit\n"), tx);
        reader.join().expect("reader exits instead of blocking");
    }
}
