/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::fmt;
use std::str::FromStr;

pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";
const DEFAULT_CHANNEL_CAPACITY: usize = 1024;
const DEFAULT_THREAD_NAME: &str = "log-std";

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum StdLogEncoding {
    /// `TIME LEVEL key=value, ... message`, colored on a terminal.
    #[default]
    Console,
    /// One json object per line.
    Json,
}

impl StdLogEncoding {
    pub const fn as_str(&self) -> &'static str {
        match self {
            StdLogEncoding::Console => "console",
            StdLogEncoding::Json => "json",
        }
    }
}

impl fmt::Display for StdLogEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StdLogEncoding {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "console" | "text" | "plain" => Ok(StdLogEncoding::Console),
            "json" | "structured" => Ok(StdLogEncoding::Json),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum StdLogTarget {
    Stdout,
    #[default]
    Stderr,
}

impl FromStr for StdLogTarget {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stdout" => Ok(StdLogTarget::Stdout),
            "stderr" => Ok(StdLogTarget::Stderr),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct StdLogConfig {
    encoding: StdLogEncoding,
    target: StdLogTarget,
    append_code_position: bool,
    time_format: String,
    channel_capacity: usize,
    thread_name: String,
}

impl Default for StdLogConfig {
    fn default() -> Self {
        StdLogConfig {
            encoding: StdLogEncoding::default(),
            target: StdLogTarget::default(),
            append_code_position: false,
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            thread_name: DEFAULT_THREAD_NAME.to_string(),
        }
    }
}

impl StdLogConfig {
    pub fn encoding(&self) -> StdLogEncoding {
        self.encoding
    }

    pub fn set_encoding(&mut self, encoding: StdLogEncoding) {
        self.encoding = encoding;
    }

    pub fn target(&self) -> StdLogTarget {
        self.target
    }

    pub fn set_target(&mut self, target: StdLogTarget) {
        self.target = target;
    }

    pub fn append_code_position(&self) -> bool {
        self.append_code_position
    }

    pub fn set_append_code_position(&mut self, enable: bool) {
        self.append_code_position = enable;
    }

    pub fn time_format(&self) -> &str {
        &self.time_format
    }

    /// The pattern should be a valid chrono strftime one, with an invalid pattern every
    /// record is dropped and counted as format failed.
    pub fn set_time_format(&mut self, format: String) {
        self.time_format = format;
    }

    pub fn channel_capacity(&self) -> usize {
        self.channel_capacity
    }

    pub fn set_channel_capacity(&mut self, capacity: usize) {
        self.channel_capacity = capacity.max(1);
    }

    pub fn thread_name(&self) -> &str {
        &self.thread_name
    }

    pub fn set_thread_name(&mut self, name: String) {
        self.thread_name = name;
    }
}
