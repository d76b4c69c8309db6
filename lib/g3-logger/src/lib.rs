/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

//! A process wide logging facade.
//!
//! The active [`Logger`] is set up once, either from a yaml config for a named driver
//! with [`setup`], or with built-in defaults with [`setup_default`]. The free functions
//! and macros of this crate then delegate to it. Code that prefers to get its logger as
//! a parameter can build one with [`new_logger`] and pass the [`SharedLogger`] around.
//!
//! ```no_run
//! use g3_logger::Logger;
//!
//! g3_logger::setup_default().unwrap();
//! g3_logger::infof!("listening on {}", 8080);
//!
//! let logger = g3_logger::with_fields(g3_logger::fields! {"user" => "alice"});
//! logger.warnf(format_args!("quota almost used"));
//! ```

mod macros;

mod level;
pub use level::{Encoding, Level};

mod fields;
pub use fields::Fields;

mod logger;
pub use logger::{LogPanic, Logger, SharedLogger};

mod error;
pub use error::LoggerError;

mod yaml;
pub use yaml::{load_config_file, load_config_str};

mod config;
pub use config::SlogLoggerConfig;

mod backend;
pub use backend::SlogLogger;

mod factory;
pub use factory::{DRIVER_SLOG, new_default_logger, new_logger};

mod facade;
pub use facade::{
    current, debug, debugf, error, errorf, fatal, fatalf, info, infof, is_initialized, panic,
    panicf, set_logger, setup, setup_default, warn, warnf, with_fields,
};
