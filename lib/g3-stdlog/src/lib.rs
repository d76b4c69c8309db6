/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io::{self, IsTerminal, Write};
use std::sync::Arc;
use std::time::Duration;

use flume::{Receiver, Sender, TrySendError};
use slog::{Drain, OwnedKVList, Record};

#[macro_use]
mod macros;

mod config;
pub use config::{DEFAULT_TIME_FORMAT, StdLogConfig, StdLogEncoding, StdLogTarget};

mod format;
pub use format::{StdLogFormatter, StdLogValue};

mod stats;
pub use stats::{LogSnapshot, LogStats};

mod write;

enum StdLogMsg {
    Record(StdLogValue),
    Flush(Sender<()>),
}

/// Start the io thread and return the drain that feeds it.
///
/// The io thread exits once every clone of the drain and of its flushers is dropped.
pub fn new_async_logger(config: &StdLogConfig) -> io::Result<AsyncStdLogger> {
    let (sender, receiver) = flume::bounded::<StdLogMsg>(config.channel_capacity());

    let stats = Arc::new(LogStats::default());

    let io_thread = AsyncIoThread {
        receiver,
        stats: Arc::clone(&stats),
        encoding: config.encoding(),
        time_format: config.time_format().to_string(),
    };

    let target = config.target();
    let _detached_thread = std::thread::Builder::new()
        .name(config.thread_name().to_string())
        .spawn(move || match target {
            StdLogTarget::Stdout => io_thread.run_to_end(io::stdout()),
            StdLogTarget::Stderr => io_thread.run_to_end(io::stderr()),
        })?;

    Ok(AsyncStdLogger {
        sender,
        formatter: StdLogFormatter::new(config.append_code_position()),
        stats,
    })
}

pub struct AsyncStdLogger {
    sender: Sender<StdLogMsg>,
    formatter: StdLogFormatter,
    stats: Arc<LogStats>,
}

impl AsyncStdLogger {
    pub fn get_stats(&self) -> Arc<LogStats> {
        Arc::clone(&self.stats)
    }

    pub fn flush_handle(&self) -> StdLogFlusher {
        StdLogFlusher {
            sender: self.sender.clone(),
        }
    }
}

impl Drain for AsyncStdLogger {
    type Ok = ();
    type Err = slog::Error;

    fn log(&self, record: &Record, logger_values: &OwnedKVList) -> Result<(), slog::Error> {
        self.stats.add_total();

        match self.formatter.format_slog(record, logger_values) {
            Ok(v) => {
                match self.sender.try_send(StdLogMsg::Record(v)) {
                    Ok(_) => {}
                    Err(TrySendError::Full(_)) => self.stats.add_channel_overflow(),
                    Err(TrySendError::Disconnected(_)) => self.stats.add_channel_closed(),
                }
                Ok(())
            }
            Err(e) => {
                self.stats.add_format_failed();
                Err(e)
            }
        }
    }
}

/// Wait for the io thread to write out everything queued before.
#[derive(Clone)]
pub struct StdLogFlusher {
    sender: Sender<StdLogMsg>,
}

impl StdLogFlusher {
    /// Return false if the io thread did not confirm within `timeout`.
    pub fn flush(&self, timeout: Duration) -> bool {
        let (notifier, waiter) = flume::bounded::<()>(1);
        if self
            .sender
            .send_timeout(StdLogMsg::Flush(notifier), timeout)
            .is_err()
        {
            return false;
        }
        waiter.recv_timeout(timeout).is_ok()
    }
}

struct AsyncIoThread {
    receiver: Receiver<StdLogMsg>,
    stats: Arc<LogStats>,
    encoding: StdLogEncoding,
    time_format: String,
}

impl AsyncIoThread {
    fn run_to_end<IO: Write + IsTerminal>(self, mut io: IO) {
        let colored = self.encoding == StdLogEncoding::Console && io.is_terminal();
        let mut buf: Vec<u8> = Vec::with_capacity(1024);
        while let Ok(msg) = self.receiver.recv() {
            self.handle_msg(&mut io, &mut buf, msg, colored);

            while let Ok(msg) = self.receiver.try_recv() {
                self.handle_msg(&mut io, &mut buf, msg, colored);
            }

            let _ = io.flush();
        }
    }

    fn handle_msg<IO: Write>(&self, io: &mut IO, buf: &mut Vec<u8>, msg: StdLogMsg, colored: bool) {
        match msg {
            StdLogMsg::Record(v) => {
                buf.clear();
                let r = match self.encoding {
                    StdLogEncoding::Console if colored => {
                        write::write_console(buf, &v, &self.time_format)
                    }
                    StdLogEncoding::Console => write::write_plain(buf, &v, &self.time_format),
                    StdLogEncoding::Json => write::write_json(buf, &v, &self.time_format),
                };
                match r {
                    Ok(_) => self.write_buf(io, buf),
                    Err(_) => self.stats.add_format_failed(),
                }
            }
            StdLogMsg::Flush(notifier) => {
                let _ = io.flush();
                let _ = notifier.send(());
            }
        }
    }

    fn write_buf<IO: Write>(&self, io: &mut IO, buf: &[u8]) {
        match io.write_all(buf) {
            Ok(_) => self.stats.add_passed(buf.len()),
            Err(_) => self.stats.add_io_failed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flush_with_no_record() {
        let logger = new_async_logger(&StdLogConfig::default()).unwrap();
        let flusher = logger.flush_handle();
        assert!(flusher.flush(Duration::from_secs(5)));
    }

    #[test]
    fn flush_after_drop() {
        let mut config = StdLogConfig::default();
        config.set_thread_name("log-test".to_string());
        let logger = new_async_logger(&config).unwrap();
        let stats = logger.get_stats();
        let flusher = logger.flush_handle();
        drop(logger);
        // the flusher keeps the io thread alive
        assert!(flusher.flush(Duration::from_secs(5)));
        assert_eq!(stats.snapshot().total, 0);
    }

    #[test]
    fn invalid_time_format() {
        let mut config = StdLogConfig::default();
        config.set_time_format("%Y-%".to_string());
        let drain = new_async_logger(&config).unwrap();
        let stats = drain.get_stats();
        let flusher = drain.flush_handle();
        let logger = slog::Logger::root(drain.ignore_res(), slog::o!());

        slog::info!(logger, "never written"; "k" => 1);
        assert!(flusher.flush(Duration::from_secs(5)));

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.total, 1);
        assert_eq!(snapshot.format_failed, 1);
        assert_eq!(snapshot.passed, 0);
    }
}
