use crate::cfg::WatchConfiguration;
use clap::{ArgAction, Parser};
use std::{path::PathBuf, time::Duration};

pub const DEFAULT_SOURCE_DIR: &str = "/watchsrc";
pub const DEFAULT_DESTINATION_DIR: &str = "/watchdst";
pub const DEFAULT_SLEEP_SECS: &str = "10";

/// Watch a directory for new subdirectory creation and copy it to a destination.
#[derive(Parser, Debug)]
#[command(name = "dirwatch", version)]
pub struct Cli {
    /// Directory to watch for new subdirectories.
    #[arg(long, env = "SOURCE_DIR", default_value = DEFAULT_SOURCE_DIR)]
    pub source: PathBuf,

    /// Directory new subdirectories are copied into.
    #[arg(long, env = "DESTINATION_DIR", default_value = DEFAULT_DESTINATION_DIR)]
    pub destination: PathBuf,

    /// Watch subdirectories of the source as well as its top level.
    #[arg(
        long,
        env = "RECURSIVE",
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value = "true",
        default_missing_value = "true",
        value_parser = parse_switch
    )]
    pub recursive: bool,

    /// Log every filesystem event and copy report.
    #[arg(
        long,
        env = "DEBUG",
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value = "false",
        default_missing_value = "true",
        value_parser = parse_switch
    )]
    pub debug: bool,

    /// Seconds between wake-ups of the idle loop.
    #[arg(
        long = "sleep-time",
        env = "SLEEP_TIME",
        default_value = DEFAULT_SLEEP_SECS,
        value_parser = parse_seconds
    )]
    pub sleep_time: Duration,
}

impl Cli {
    pub fn into_config(self) -> WatchConfiguration {
        WatchConfiguration {
            source_path: self.source,
            destination_path: self.destination,
            recursive: self.recursive,
            debug: self.debug,
            poll_interval: self.sleep_time,
        }
    }
}

pub fn parse_switch(value: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(format!("expected true or false, got `{other}`")),
    }
}

pub fn parse_seconds(value: &str) -> Result<Duration, String> {
    let secs: f64 = value
        .trim()
        .parse()
        .map_err(|err| format!("invalid number of seconds `{value}`: {err}"))?;

    if !secs.is_finite() || secs <= 0.0 {
        return Err(format!("sleep time must be a positive number, got `{value}`"));
    }

    match Duration::try_from_secs_f64(secs) {
        Ok(interval) if !interval.is_zero() => Ok(interval),
        Ok(_) => Err(format!("sleep time `{value}` rounds down to zero")),
        Err(err) => Err(format!("invalid sleep time `{value}`: {err}")),
    }
}
