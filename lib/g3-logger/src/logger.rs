/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt::{self, Arguments, Display, Write};
use std::sync::Arc;

use crate::{Fields, Level};

pub type SharedLogger = Arc<dyn Logger>;

/// Payload of the unwinding started by [`Logger::panicf`] and [`Logger::panic`].
///
/// It can be recovered with `std::panic::catch_unwind` and
/// `downcast_ref::<LogPanic>()` on the returned error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogPanic {
    message: String,
}

impl LogPanic {
    pub fn new(message: String) -> Self {
        LogPanic { message }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for LogPanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Space separated rendering of the values given to the unformatted variants.
pub(crate) struct Joined<'a>(pub(crate) &'a [&'a dyn Display]);

impl Display for Joined<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_char(' ')?;
            }
            v.fmt(f)?;
        }
        Ok(())
    }
}

/// The leveled logging capability every backend provides.
///
/// Only [`log`](Logger::log), [`with_fields`](Logger::with_fields), [`level`](Logger::level)
/// and [`fields`](Logger::fields) are required, all the leveled variants route to `log`.
pub trait Logger: Send + Sync {
    /// Emit one record if `level` is enabled.
    fn log(&self, level: Level, args: Arguments<'_>);

    /// Derive a new logger with `fields` merged over the bound ones.
    ///
    /// The receiver is left untouched.
    fn with_fields(&self, fields: Fields) -> SharedLogger;

    /// The minimum enabled level.
    fn level(&self) -> Level;

    /// The fields bound to every record of this logger.
    fn fields(&self) -> &Fields;

    /// Block until the emitted records have reached the sink.
    fn sync(&self) {}

    fn enabled(&self, level: Level) -> bool {
        level >= self.level()
    }

    fn debugf(&self, args: Arguments<'_>) {
        self.log(Level::Debug, args)
    }

    fn debug(&self, values: &[&dyn Display]) {
        self.debugf(format_args!("{}", Joined(values)))
    }

    fn infof(&self, args: Arguments<'_>) {
        self.log(Level::Info, args)
    }

    fn info(&self, values: &[&dyn Display]) {
        self.infof(format_args!("{}", Joined(values)))
    }

    fn warnf(&self, args: Arguments<'_>) {
        self.log(Level::Warn, args)
    }

    fn warn(&self, values: &[&dyn Display]) {
        self.warnf(format_args!("{}", Joined(values)))
    }

    fn errorf(&self, args: Arguments<'_>) {
        self.log(Level::Error, args)
    }

    fn error(&self, values: &[&dyn Display]) {
        self.errorf(format_args!("{}", Joined(values)))
    }

    /// Emit at fatal level then terminate the process with exit code 1.
    fn fatalf(&self, args: Arguments<'_>) -> ! {
        self.log(Level::Fatal, args);
        self.sync();
        std::process::exit(1)
    }

    /// Emit at fatal level then terminate the process with exit code 1.
    fn fatal(&self, values: &[&dyn Display]) -> ! {
        self.fatalf(format_args!("{}", Joined(values)))
    }

    /// Emit at fatal level then unwind with a [`LogPanic`] payload.
    fn panicf(&self, args: Arguments<'_>) -> ! {
        let message = args.to_string();
        self.log(Level::Fatal, format_args!("{message}"));
        std::panic::panic_any(LogPanic::new(message))
    }

    /// Emit at fatal level then unwind with a [`LogPanic`] payload.
    fn panic(&self, values: &[&dyn Display]) -> ! {
        self.panicf(format_args!("{}", Joined(values)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{self, AssertUnwindSafe};
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        level: Level,
        fields: Fields,
        records: Mutex<Vec<(Level, String)>>,
    }

    impl Logger for Recorder {
        fn log(&self, level: Level, args: Arguments<'_>) {
            if self.enabled(level) {
                self.records.lock().unwrap().push((level, args.to_string()));
            }
        }

        fn with_fields(&self, fields: Fields) -> SharedLogger {
            Arc::new(Recorder {
                level: self.level,
                fields: self.fields.merge(&fields),
                records: Mutex::new(Vec::new()),
            })
        }

        fn level(&self) -> Level {
            self.level
        }

        fn fields(&self) -> &Fields {
            &self.fields
        }
    }

    #[test]
    fn joined() {
        let n = 3;
        let s = "apples";
        assert_eq!(Joined(&[&n, &s]).to_string(), "3 apples");
        assert_eq!(Joined(&[]).to_string(), "");
    }

    #[test]
    fn leveled_variants() {
        let logger = Recorder::default();
        logger.debugf(format_args!("hidden"));
        logger.infof(format_args!("a={}", 1));
        logger.warn(&[&"b", &2]);
        logger.errorf(format_args!("c"));

        let records = logger.records.lock().unwrap();
        assert_eq!(
            *records,
            [
                (Level::Info, "a=1".to_string()),
                (Level::Warn, "b 2".to_string()),
                (Level::Error, "c".to_string()),
            ]
        );
    }

    #[test]
    fn panic_unwinds() {
        let logger = Recorder::default();
        let r = panic::catch_unwind(AssertUnwindSafe(|| {
            logger.panicf(format_args!("bad state {}", 7));
        }));
        let payload = r.unwrap_err();
        let p = payload.downcast_ref::<LogPanic>().unwrap();
        assert_eq!(p.message(), "bad state 7");

        // the record is emitted before unwinding
        let records = logger.records.lock().unwrap();
        assert_eq!(*records, [(Level::Fatal, "bad state 7".to_string())]);
    }

    #[test]
    fn panic_values() {
        let logger = Recorder::default();
        let r = panic::catch_unwind(AssertUnwindSafe(|| {
            logger.panic(&[&"x", &1.5]);
        }));
        let payload = r.unwrap_err();
        assert_eq!(payload.downcast_ref::<LogPanic>().unwrap().message(), "x 1.5");
    }

    #[test]
    fn enabled() {
        let logger = Recorder {
            level: Level::Error,
            ..Default::default()
        };
        assert!(!logger.enabled(Level::Warn));
        assert!(logger.enabled(Level::Error));
        assert!(logger.enabled(Level::Fatal));
    }
}
