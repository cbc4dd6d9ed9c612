use log::{Record, Level, Metadata, LevelFilter, SetLoggerError};
use std::time::{SystemTime, UNIX_EPOCH};
use std::fmt::Write as FmtWrite;


/// Writes colored, timestamped lines to stderr; stdout carries the report.
pub struct SimpleLogger;

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", format_line(record.level(), &get_formatted_time(), &record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: SimpleLogger = SimpleLogger;

pub fn init_logger(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)
        .map(|()| log::set_max_level(level))
}

/// Map a `-v` count to a level; warnings are always shown.
pub fn level_from_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn format_line(level: Level, timestamp: &str, message: &str) -> String {
    let (color_code, reset_code) = get_color_codes(level);
    format!("{}{} - {} - {}{}", color_code, timestamp, level, message, reset_code)
}

fn get_formatted_time() -> String {
    let duration = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();

    let hours = (secs % 86400) / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;

    let mut output = String::new();
    let _ = write!(output, "{:02}:{:02}:{:02}.{:03}", hours, minutes, seconds, millis);
    output
}

fn get_color_codes(level: Level) -> (&'static str, &'static str) {
    match level {
        Level::Error => ("\x1b[31m", "\x1b[0m"),   // Red
        Level::Warn => ("\x1b[33m", "\x1b[0m"),    // Yellow
        Level::Info => ("\x1b[32m", "\x1b[0m"),    // Green
        Level::Debug => ("\x1b[36m", "\x1b[0m"),   // Cyan
        Level::Trace => ("\x1b[35m", "\x1b[0m"),   // Magenta
    }
}
