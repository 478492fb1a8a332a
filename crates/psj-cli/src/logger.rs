use crate::error::{CliError, Result as CliErrorResult};

use std::panic::Location;
use std::time::SystemTime;

use error_location::ErrorLocation;
use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use psj_config::LogLevel;

/// Initialize logger with fern.
///
/// Log lines go to stderr so command output stays clean for scripting.
/// Colored output is used for TTYs only.
#[track_caller]
pub fn initialize(log_level: LogLevel, colored: bool) -> CliErrorResult<()> {
    let level_filter = log_level.0;

    let base_dispatch = Dispatch::new().level(level_filter);

    let dispatch = if colored {
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);

        Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {message}",
                    date = humantime::format_rfc3339(SystemTime::now()),
                    level = colors.color(record.level()),
                    message = message,
                ))
            })
            .chain(std::io::stderr())
    } else {
        Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {message}",
                    date = humantime::format_rfc3339(SystemTime::now()),
                    level = record.level(),
                    message = message,
                ))
            })
            .chain(std::io::stderr())
    };

    base_dispatch
        .chain(dispatch)
        .apply()
        .map_err(|e| CliError::Logger {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
}
