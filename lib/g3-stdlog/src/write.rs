/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025 ByteDance and/or its affiliates.
 */

use std::io::{self, Write};

use anstyle::{AnsiColor, Color, Style};
use serde_json::{Map, Value};
use slog::Level;

use crate::StdLogValue;
use crate::format::{level_name, level_name_lowercase};

const COLOR_MAGENTA: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Magenta)));
const COLOR_RED: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red)));
const COLOR_YELLOW: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow)));
const COLOR_GREEN: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green)));
const COLOR_CYAN: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan)));
const COLOR_BLUE: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue)));
const STYLE_BOLD: Style = Style::new().bold();
const STYLE_ITALIC: Style = Style::new().italic();

/// An invalid pattern gives an error, not a panic.
fn format_time(v: &StdLogValue, time_format: &str) -> io::Result<String> {
    let mut s = String::with_capacity(32);
    std::fmt::write(&mut s, format_args!("{}", v.datetime.format(time_format)))
        .map_err(|_| io::Error::other(format!("invalid time format {time_format}")))?;
    Ok(s)
}

struct ConsoleValue<'a>(&'a Value);

impl std::fmt::Display for ConsoleValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Value::String(s) => f.write_str(s),
            v => write!(f, "{v}"),
        }
    }
}

pub(crate) fn write_plain<IO: Write>(
    io: &mut IO,
    v: &StdLogValue,
    time_format: &str,
) -> io::Result<()> {
    io.write_all(format_time(v, time_format)?.as_bytes())?;
    write!(io, " {}", level_name(v.level))?;
    for (k, value) in &v.kv_pairs {
        write!(io, " {k}={},", ConsoleValue(value))?;
    }
    write!(io, " {}", v.message_str())?;
    if let Some(location) = &v.location {
        write!(io, " <{location}>")?;
    }
    writeln!(io)
}

pub(crate) fn write_console<IO: Write>(
    io: &mut IO,
    v: &StdLogValue,
    time_format: &str,
) -> io::Result<()> {
    let bold_s = STYLE_BOLD.render();
    let bold_e = STYLE_BOLD.render_reset();

    io.write_all(format_time(v, time_format)?.as_bytes())?;
    let level_color = match v.level {
        Level::Critical => COLOR_MAGENTA,
        Level::Error => COLOR_RED,
        Level::Warning => COLOR_YELLOW,
        Level::Info => COLOR_GREEN,
        Level::Debug => COLOR_CYAN,
        Level::Trace => COLOR_BLUE,
    };
    write!(
        io,
        " {}{}{}",
        level_color.render(),
        level_name(v.level),
        level_color.render_reset(),
    )?;

    for (k, value) in &v.kv_pairs {
        write!(io, " {bold_s}{k}{bold_e}={},", ConsoleValue(value))?;
    }

    write!(io, " {bold_s}{}{bold_e}", v.message_str())?;

    if let Some(location) = &v.location {
        write!(
            io,
            " <{}{location}{}>",
            STYLE_ITALIC.render(),
            STYLE_ITALIC.render_reset()
        )?;
    }
    writeln!(io)
}

pub(crate) fn write_json<IO: Write>(
    io: &mut IO,
    v: &StdLogValue,
    time_format: &str,
) -> io::Result<()> {
    let ts = format_time(v, time_format)?;
    let mut map = Map::with_capacity(v.kv_pairs.len() + 4);
    for (k, value) in &v.kv_pairs {
        map.insert(k.clone(), value.clone());
    }
    // reserved keys take precedence over bound fields
    map.insert("ts".to_string(), Value::String(ts));
    map.insert(
        "level".to_string(),
        Value::String(level_name_lowercase(v.level).to_string()),
    );
    map.insert("msg".to_string(), Value::String(v.message.clone()));
    if let Some(location) = &v.location {
        map.insert("caller".to_string(), Value::String(location.clone()));
    }
    serde_json::to_writer(&mut *io, &map)?;
    writeln!(io)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    const TIME_FORMAT: &str = "%Y-%m-%d";

    fn sample_value() -> StdLogValue {
        StdLogValue {
            datetime: Local.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap(),
            level: Level::Warning,
            message: "disk almost full".to_string(),
            kv_pairs: vec![
                ("path".to_string(), Value::from("/var")),
                ("usage".to_string(), Value::from(93)),
            ],
            location: Some("app::disk(disk.rs:12)".to_string()),
        }
    }

    #[test]
    fn plain() {
        let mut buf = Vec::new();
        write_plain(&mut buf, &sample_value(), TIME_FORMAT).unwrap();
        assert_eq!(
            std::str::from_utf8(&buf).unwrap(),
            "2024-05-06 WARN path=/var, usage=93, disk almost full <app::disk(disk.rs:12)>\n"
        );
    }

    #[test]
    fn plain_empty_message() {
        let mut v = sample_value();
        v.message.clear();
        v.kv_pairs.clear();
        v.location = None;
        let mut buf = Vec::new();
        write_plain(&mut buf, &v, TIME_FORMAT).unwrap();
        assert_eq!(std::str::from_utf8(&buf).unwrap(), "2024-05-06 WARN ()\n");
    }

    #[test]
    fn console_contains_fields() {
        let mut buf = Vec::new();
        write_console(&mut buf, &sample_value(), TIME_FORMAT).unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert!(s.starts_with("2024-05-06 "));
        assert!(s.contains("WARN"));
        assert!(s.contains("path"));
        assert!(s.contains("disk almost full"));
        assert!(s.ends_with('\n'));
    }

    #[test]
    fn json() {
        let mut buf = Vec::new();
        write_json(&mut buf, &sample_value(), TIME_FORMAT).unwrap();
        assert_eq!(buf.last(), Some(&b'\n'));

        let v: Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(v["ts"], "2024-05-06");
        assert_eq!(v["level"], "warn");
        assert_eq!(v["msg"], "disk almost full");
        assert_eq!(v["caller"], "app::disk(disk.rs:12)");
        assert_eq!(v["path"], "/var");
        assert_eq!(v["usage"], 93);
    }

    #[test]
    fn invalid_time_format() {
        let mut buf = Vec::new();
        assert!(write_plain(&mut buf, &sample_value(), "%Y-%").is_err());
        assert!(write_console(&mut buf, &sample_value(), "%Y-%").is_err());
        assert!(write_json(&mut buf, &sample_value(), "%Y-%").is_err());
        assert!(buf.is_empty());
    }

    #[test]
    fn json_reserved_keys() {
        let mut value = sample_value();
        value
            .kv_pairs
            .push(("msg".to_string(), Value::from("overwritten")));
        let mut buf = Vec::new();
        write_json(&mut buf, &value, TIME_FORMAT).unwrap();

        let v: Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(v["msg"], "disk almost full");
    }
}
