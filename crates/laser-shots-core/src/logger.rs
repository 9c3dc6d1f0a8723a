//! Minimal logger for detection runs.
//!
//! Lines look like `[   0.012s DEBUG detector] 640x480 frame: ...`: uptime,
//! level, and the module that emitted the record with the crate path dropped.
//! `LASER_SHOTS_LOG` overrides the level passed to `init_with_level`.

use std::fmt;
use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record};

#[cfg(feature = "tracing")]
use tracing_subscriber::fmt::format::FmtSpan;
#[cfg(feature = "tracing")]
use tracing_subscriber::util::SubscriberInitExt;
#[cfg(feature = "tracing")]
use tracing_subscriber::{fmt as tfmt, EnvFilter};

/// Environment variable holding a level filter such as `debug`.
pub const LOG_ENV_VAR: &str = "LASER_SHOTS_LOG";

struct StderrLogger {
    level: LevelFilter,
    started: Instant,
}

/// Last path segment of a record target (`laser_shots_detector::detector` -> `detector`).
fn module_tag(target: &str) -> &str {
    target.rsplit("::").next().unwrap_or(target)
}

fn format_line(
    elapsed_secs: f64,
    level: log::Level,
    target: &str,
    args: fmt::Arguments<'_>,
) -> String {
    format!(
        "[{:8.3}s {:>5} {}] {}",
        elapsed_secs,
        level,
        module_tag(target),
        args
    )
}

fn parse_level(raw: &str) -> Option<LevelFilter> {
    raw.trim().parse().ok()
}

/// Level from `LASER_SHOTS_LOG`, if set and valid.
pub fn level_from_env() -> Option<LevelFilter> {
    std::env::var(LOG_ENV_VAR).ok().as_deref().and_then(parse_level)
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_line(
            self.started.elapsed().as_secs_f64(),
            record.level(),
            record.target(),
            *record.args(),
        );
        let _ = writeln!(std::io::stderr().lock(), "{line}");
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

/// Install the stderr logger. `LASER_SHOTS_LOG` takes precedence over `level`.
///
/// Calling this more than once is a no-op after the first successful
/// initialization.
pub fn init_with_level(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    if LOGGER.get().is_none() {
        let level = level_from_env().unwrap_or(level);
        let logger = LOGGER.get_or_init(|| StderrLogger {
            level,
            started: Instant::now(),
        });
        log::set_logger(logger)?;
        log::set_max_level(level);
    }
    Ok(())
}

/// Install a `tracing` subscriber filtered by `RUST_LOG` (default `info`).
#[cfg(feature = "tracing")]
pub fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tfmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE);
    if json {
        let _ = builder.json().flatten_event(true).finish().try_init();
    } else {
        let _ = builder
            .with_timer(tfmt::time::Uptime::default())
            .finish()
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_tag_drops_crate_path() {
        assert_eq!(module_tag("laser_shots_detector::detector"), "detector");
        assert_eq!(module_tag("laser_shots"), "laser_shots");
    }

    #[test]
    fn line_carries_uptime_level_and_module() {
        let line = format_line(
            1.5,
            log::Level::Debug,
            "laser_shots_detector::detector",
            format_args!("{} shots", 2),
        );
        assert_eq!(line, "[   1.500s DEBUG detector] 2 shots");
    }

    #[test]
    fn level_strings_parse_case_insensitively() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level(" TRACE "), Some(LevelFilter::Trace));
        assert_eq!(parse_level("loud"), None);
    }
}
