//! Logger setup for the rover executables
//!
//! Everything is logged to stdout and to the session's log file. At `INFO`
//! the rover executable reports its setup (obstacles, heading fallback), the
//! outcome of every command and the final status line. Rejected commands are
//! reported at `WARN`. `DEBUG` adds the TC-to-outcome mapping for each
//! command, and `TRACE` the bounds and obstacle checks made for every
//! candidate cell.
//!
//! The candidate checks are very chatty, so targets can be given their own
//! level with [`TargetLevel`], for example to trace only `rov_lib::nav`.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External imports
use colored::{ColoredString, Colorize};
use fern::{Dispatch, FormatCallback};
use log::{info, Record};
use std::fmt::Arguments;
use thiserror::Error;

// Internal imports
use crate::session;

// Re-exports
pub use log::LevelFilter;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Log target of the rover's navigation module, which emits the per-candidate
/// move checks.
pub const NAV_TARGET: &str = "rov_lib::nav";

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A log level override for a single target (module path prefix).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetLevel {
    pub target: &'static str,
    pub level: LevelFilter
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Errors associated with initialising the logger.
#[derive(Debug, Error)]
pub enum LoggerInitError {
    #[error("Command outcomes are logged at INFO, so the log level can't be `{0}`")]
    LevelHidesOutcomes(LevelFilter),

    #[error("Cannot open the session log file: {0}")]
    LogFile(std::io::Error),

    #[error("A logger has already been set: {0}")]
    AlreadySet(log::SetLoggerError)
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Initialise logging for this session.
///
/// `overrides` raise or lower the level of individual targets relative to
/// `min_level`. Only the first call in a process can succeed.
pub fn logger_init(
    min_level: LevelFilter,
    overrides: &[TargetLevel],
    session: &session::Session
) -> Result<(), LoggerInitError> {

    check_level(min_level)?;

    let log_file = fern::log_file(&session.log_file_path)
        .map_err(LoggerInitError::LogFile)?;

    let dispatch = overrides.iter().fold(
        Dispatch::new().format(format_record).level(min_level),
        |d, o| d.level_for(o.target, o.level)
    );

    dispatch
        .chain(std::io::stdout())
        .chain(log_file)
        .apply()
        .map_err(LoggerInitError::AlreadySet)?;

    info!("Logging to {:?} at {:?}", session.log_file_path, min_level);
    if let Ok(epoch) = session::get_epoch() {
        info!("    Session epoch: {}", epoch);
    }
    for o in overrides {
        info!("    {} at {:?}", o.target, o.level);
    }

    Ok(())
}

/// Check the level still shows the rover's command outcomes.
pub fn check_level(min_level: LevelFilter) -> Result<(), LoggerInitError> {
    if min_level < LevelFilter::Info {
        Err(LoggerInitError::LevelHidesOutcomes(min_level))
    }
    else {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

/// Format one line as `[elapsed_s LVL] message`, adding the target for
/// debug and trace records so the nav checks can be told apart.
fn format_record(out: FormatCallback, message: &Arguments, record: &Record) {
    let elapsed = session::get_elapsed_seconds();
    let tag = level_tag(record.level());

    if record.level() > log::Level::Info {
        out.finish(format_args!("[{:10.6} {}] {}: {}", elapsed, tag, record.target(), message))
    }
    else {
        out.finish(format_args!("[{:10.6} {}] {}", elapsed, tag, message))
    }
}

/// Three letter, coloured tag for a level. Rejected commands come through as
/// warnings so they stand out in yellow.
fn level_tag(level: log::Level) -> ColoredString {
    let tag = match level {
        log::Level::Trace => "TRC",
        log::Level::Debug => "DBG",
        log::Level::Info => "INF",
        log::Level::Warn => "WRN",
        log::Level::Error => "ERR"
    };

    match level {
        log::Level::Trace | log::Level::Debug => tag.dimmed(),
        log::Level::Info => tag.normal(),
        log::Level::Warn => tag.yellow(),
        log::Level::Error => tag.red().bold()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_check_level() {
        assert!(check_level(LevelFilter::Info).is_ok());
        assert!(check_level(LevelFilter::Trace).is_ok());
        assert!(matches!(
            check_level(LevelFilter::Warn),
            Err(LoggerInitError::LevelHidesOutcomes(LevelFilter::Warn))
        ));
        assert!(matches!(
            check_level(LevelFilter::Off),
            Err(LoggerInitError::LevelHidesOutcomes(LevelFilter::Off))
        ));
    }

    #[test]
    fn test_level_tag() {
        colored::control::set_override(false);

        assert_eq!(level_tag(log::Level::Info).to_string(), "INF");
        assert_eq!(level_tag(log::Level::Warn).to_string(), "WRN");
        assert_eq!(level_tag(log::Level::Trace).to_string(), "TRC");
    }
}
