/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt::{Arguments, Display};
use std::sync::{Arc, LazyLock, Mutex};

use arc_swap::ArcSwapOption;
use yaml_rust::Yaml;

use crate::{Fields, LoggerError, SharedLogger};

static ACTIVE_LOGGER: LazyLock<ArcSwapOption<SharedLogger>> =
    LazyLock::new(|| ArcSwapOption::new(None));
// serializes the implicit default initialization
static DEFAULT_INIT: Mutex<()> = Mutex::new(());

/// Build the logger for `driver` and make it the active one.
///
/// On error the active logger, if any, is kept.
pub fn setup(config: Option<&Yaml>, driver: &str) -> Result<(), LoggerError> {
    let logger = crate::new_logger(config, driver)?;
    set_logger(logger);
    Ok(())
}

/// Make a default slog backend the active logger.
pub fn setup_default() -> Result<(), LoggerError> {
    let logger = crate::new_default_logger()?;
    set_logger(logger);
    Ok(())
}

/// Replace the active logger, the last writer wins.
///
/// Records already being emitted through the old logger are still delivered by it.
pub fn set_logger(logger: SharedLogger) {
    ACTIVE_LOGGER.store(Some(Arc::new(logger)));
}

pub fn is_initialized() -> bool {
    ACTIVE_LOGGER.load().is_some()
}

/// Get the active logger.
///
/// If none has been set up yet, a default slog backend is installed first.
///
/// # Panics
///
/// Panics if there is no active logger and the default one can not be started.
pub fn current() -> SharedLogger {
    if let Some(logger) = ACTIVE_LOGGER.load_full() {
        return SharedLogger::clone(&logger);
    }

    let _guard = DEFAULT_INIT.lock().unwrap_or_else(|e| e.into_inner());
    if let Some(logger) = ACTIVE_LOGGER.load_full() {
        return SharedLogger::clone(&logger);
    }
    let default = match crate::new_default_logger() {
        Ok(logger) => Arc::new(logger),
        Err(e) => panic!("no logger has been set up and the default one failed: {e}"),
    };
    // set_logger does not take the guard and may have won in the meantime
    let prev = ACTIVE_LOGGER.rcu(|cur| match cur {
        Some(logger) => Some(Arc::clone(logger)),
        None => Some(Arc::clone(&default)),
    });
    match prev {
        Some(logger) => SharedLogger::clone(&logger),
        None => SharedLogger::clone(&default),
    }
}

pub fn debugf(args: Arguments<'_>) {
    current().debugf(args)
}

pub fn debug(values: &[&dyn Display]) {
    current().debug(values)
}

pub fn infof(args: Arguments<'_>) {
    current().infof(args)
}

pub fn info(values: &[&dyn Display]) {
    current().info(values)
}

pub fn warnf(args: Arguments<'_>) {
    current().warnf(args)
}

pub fn warn(values: &[&dyn Display]) {
    current().warn(values)
}

pub fn errorf(args: Arguments<'_>) {
    current().errorf(args)
}

pub fn error(values: &[&dyn Display]) {
    current().error(values)
}

/// Terminates the process after the record is written.
pub fn fatalf(args: Arguments<'_>) -> ! {
    current().fatalf(args)
}

/// Terminates the process after the record is written.
pub fn fatal(values: &[&dyn Display]) -> ! {
    current().fatal(values)
}

/// Unwinds with a [`LogPanic`](crate::LogPanic) payload after the record is emitted.
pub fn panicf(args: Arguments<'_>) -> ! {
    current().panicf(args)
}

/// Unwinds with a [`LogPanic`](crate::LogPanic) payload after the record is emitted.
pub fn panic(values: &[&dyn Display]) -> ! {
    current().panic(values)
}

pub fn with_fields(fields: Fields) -> SharedLogger {
    current().with_fields(fields)
}
