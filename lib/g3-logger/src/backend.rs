/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt::Arguments;
use std::io;
use std::panic::{RefUnwindSafe, UnwindSafe};
use std::sync::Arc;
use std::time::Duration;

use slog::{Drain, Never};

use g3_stdlog::{LogSnapshot, LogStats, StdLogFlusher};

use crate::fields::FieldsKv;
use crate::{Encoding, Fields, Level, Logger, SharedLogger, SlogLoggerConfig};

const SYNC_TIMEOUT: Duration = Duration::from_secs(5);

/// The built-in backend, a [`slog::Logger`] on top of the async std drain.
#[derive(Clone)]
pub struct SlogLogger {
    inner: slog::Logger,
    level: Level,
    encoding: Encoding,
    fields: Fields,
    flusher: Option<StdLogFlusher>,
    stats: Option<Arc<LogStats>>,
}

impl SlogLogger {
    pub fn build(config: &SlogLoggerConfig) -> io::Result<Self> {
        let drain = g3_stdlog::new_async_logger(&config.stdlog)?;
        let flusher = drain.flush_handle();
        let stats = drain.get_stats();
        let mut logger = SlogLogger::with_drain(drain.ignore_res(), config.level, config.encoding);
        logger.fields = config.initial_fields.clone();
        logger.flusher = Some(flusher);
        logger.stats = Some(stats);
        Ok(logger)
    }

    pub(crate) fn with_drain<D>(drain: D, level: Level, encoding: Encoding) -> Self
    where
        D: Drain<Ok = (), Err = Never> + Send + Sync + RefUnwindSafe + UnwindSafe + 'static,
    {
        SlogLogger {
            inner: slog::Logger::root(drain, slog::o!()),
            level,
            encoding,
            fields: Fields::new(),
            flusher: None,
            stats: None,
        }
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Counters of the async drain, shared by every logger derived from this one.
    pub fn stats(&self) -> Option<LogSnapshot> {
        self.stats.as_ref().map(|s| s.snapshot())
    }
}

impl Logger for SlogLogger {
    fn log(&self, level: Level, args: Arguments<'_>) {
        if level < self.level {
            return;
        }
        let kv = FieldsKv(&self.fields);
        // slog::log! requires a constant level, so dispatch per variant
        match level {
            Level::Debug => {
                slog::log!(self.inner, slog::Level::Debug, "", "{}", args; kv)
            }
            Level::Info => {
                slog::log!(self.inner, slog::Level::Info, "", "{}", args; kv)
            }
            Level::Warn => {
                slog::log!(self.inner, slog::Level::Warning, "", "{}", args; kv)
            }
            Level::Error => {
                slog::log!(self.inner, slog::Level::Error, "", "{}", args; kv)
            }
            Level::Fatal => {
                slog::log!(self.inner, slog::Level::Critical, "", "{}", args; kv)
            }
        }
    }

    fn with_fields(&self, fields: Fields) -> SharedLogger {
        let mut logger = self.clone();
        logger.fields = self.fields.merge(&fields);
        Arc::new(logger)
    }

    fn level(&self) -> Level {
        self.level
    }

    fn fields(&self) -> &Fields {
        &self.fields
    }

    fn sync(&self) {
        if let Some(flusher) = &self.flusher {
            let _ = flusher.flush(SYNC_TIMEOUT);
        }
    }
}
