/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::sync::Arc;

use yaml_rust::Yaml;

use crate::{LoggerError, SharedLogger, SlogLogger, SlogLoggerConfig};

/// Driver name of the built-in slog backend.
pub const DRIVER_SLOG: &str = "slog";

/// Build a logger for `driver`.
///
/// For [`DRIVER_SLOG`] the config is parsed strictly and its errors are returned.
/// Any other driver name, the empty one included, silently falls back to
/// [`new_default_logger`] and the config is not looked at.
pub fn new_logger(config: Option<&Yaml>, driver: &str) -> Result<SharedLogger, LoggerError> {
    match driver {
        DRIVER_SLOG => {
            let config = SlogLoggerConfig::parse_yaml(config)?;
            let logger = SlogLogger::build(&config)?;
            Ok(Arc::new(logger))
        }
        _ => new_default_logger(),
    }
}

/// Build the slog backend with its built-in defaults.
pub fn new_default_logger() -> Result<SharedLogger, LoggerError> {
    let logger = SlogLogger::build(&SlogLoggerConfig::default())?;
    Ok(Arc::new(logger))
}
