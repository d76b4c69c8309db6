/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::path::PathBuf;

use anyhow::Context;
use clap::{Arg, ArgAction, Command, ValueHint, value_parser};

use g3_logger::DRIVER_SLOG;

const ARGS_CONFIG_FILE: &str = "config-file";
const ARGS_DRIVER: &str = "driver";
const ARGS_DEFAULT: &str = "default";
const ARGS_FATAL: &str = "fatal";

fn build_cli_args() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .arg(
            Arg::new(ARGS_CONFIG_FILE)
                .help("Logger config file in yaml format")
                .num_args(1)
                .short('c')
                .long(ARGS_CONFIG_FILE)
                .value_hint(ValueHint::FilePath)
                .value_parser(value_parser!(PathBuf))
                .conflicts_with(ARGS_DEFAULT),
        )
        .arg(
            Arg::new(ARGS_DRIVER)
                .help("Logger driver name")
                .num_args(1)
                .short('d')
                .long(ARGS_DRIVER)
                .default_value(DRIVER_SLOG),
        )
        .arg(
            Arg::new(ARGS_DEFAULT)
                .help("Use the default logger")
                .action(ArgAction::SetTrue)
                .long(ARGS_DEFAULT),
        )
        .arg(
            Arg::new(ARGS_FATAL)
                .help("Exit with a fatal record at the end")
                .action(ArgAction::SetTrue)
                .long(ARGS_FATAL),
        )
}

fn setup_log(args: &clap::ArgMatches) -> anyhow::Result<()> {
    if args.get_flag(ARGS_DEFAULT) {
        return g3_logger::setup_default().context("failed to setup default logger");
    }

    let config = match args.get_one::<PathBuf>(ARGS_CONFIG_FILE) {
        Some(path) => g3_logger::load_config_file(path)
            .context(format!("failed to load config file {}", path.display()))?,
        None => None,
    };
    // the driver value always exists as it has a default value
    let driver = args
        .get_one::<String>(ARGS_DRIVER)
        .map(|s| s.as_str())
        .unwrap_or(DRIVER_SLOG);
    g3_logger::setup(config.as_ref(), driver).context(format!("failed to setup {driver} logger"))
}

fn main() -> anyhow::Result<()> {
    let args = build_cli_args().get_matches();
    setup_log(&args)?;

    let name = "test-log-facade";
    g3_logger::debugf!("{name} started with level {}", g3_logger::current().level());
    g3_logger::info!("started", name);
    g3_logger::warnf!("{} records are buffered at most", 1024);

    let request = g3_logger::with_fields(g3_logger::fields! {
        "request_id" => 42,
        "peer" => "127.0.0.1:1080",
    });
    request.infof(format_args!("request accepted"));
    request
        .with_fields(g3_logger::fields! {"stage" => "upstream"})
        .errorf(format_args!("connect failed: {}", "connection refused"));

    if args.get_flag(ARGS_FATAL) {
        g3_logger::fatalf!("{name} exit on request");
    }

    g3_logger::current().sync();
    Ok(())
}
