/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("empty logger config")]
    EmptyConfig,
    #[error("no valid logger config")]
    NoValidConfig,
    #[error("invalid logger config: {0:?}")]
    InvalidConfig(anyhow::Error),
    #[error("failed to load logger config: {0:?}")]
    LoadConfig(anyhow::Error),
    #[error("failed to start logger backend: {0}")]
    Backend(#[from] io::Error),
}
