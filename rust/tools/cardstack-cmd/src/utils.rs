//! Common utilities for cardstack-cmd

use anyhow::Result;
use cardstack::ranges::RangeSpec;
use log::LevelFilter;

/// Maps the number of `-v` flags to a log level.
pub fn verbosity_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initializes `env_logger`. `RUST_LOG`, when set, takes precedence over `-v`.
pub fn init_logging(verbose: u8) {
    let default_level = verbosity_level(verbose).to_string().to_lowercase();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Builds a `RangeSpec` from the `range` command arguments.
pub fn range_spec(size: Option<u64>, start: Option<i64>, end: Option<i64>) -> Result<RangeSpec> {
    match (size, start, end) {
        (Some(size), None, None) => Ok(RangeSpec::Size(size)),
        (None, Some(start), Some(end)) => Ok(RangeSpec::bounds(start, end)),
        _ => anyhow::bail!("expected either SIZE or both --start and --end"),
    }
}
