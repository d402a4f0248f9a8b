// Formatting and console logging helpers.
use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

pub const FULLY_CHARGED: &str = "fully charged";

pub fn format_time(hours: u32, minutes: u32) -> String {
    if hours == 0 {
        format!("{} min left", minutes)
    } else if minutes == 0 {
        format!("{} hr left", hours)
    } else {
        format!("{} hr {} min left", hours, minutes)
    }
}

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let msg = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&msg),
            Level::Warn => web_sys::console::warn_1(&msg),
            Level::Info => web_sys::console::info_1(&msg),
            Level::Debug => web_sys::console::debug_1(&msg),
            Level::Trace => web_sys::console::log_1(&msg),
        }
    }

    fn flush(&self) {}
}

pub fn default_log_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Installs the console logger. A second call keeps the first logger.
pub fn init_logging(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutes_only() {
        assert_eq!(format_time(0, 3), "3 min left");
        assert_eq!(format_time(0, 45), "45 min left");
    }

    #[test]
    fn hours_only() {
        assert_eq!(format_time(1, 0), "1 hr left");
        assert_eq!(format_time(5, 0), "5 hr left");
    }

    #[test]
    fn hours_and_minutes() {
        assert_eq!(format_time(2, 33), "2 hr 33 min left");
    }
}
