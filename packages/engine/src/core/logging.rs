//! `log` backend for the engine.
//!
//! On wasm32 records go to `console.error/warn/log/debug`; natively they go to
//! stderr. `debugMode` in the engine config raises the max level to `Debug`.

use log::{Level, LevelFilter, Log, Metadata, Record};

pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        write_line(record.level(), &record.args().to_string());
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    let msg = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&msg),
        Level::Warn => web_sys::console::warn_1(&msg),
        Level::Info => web_sys::console::log_1(&msg),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(level: Level, line: &str) {
    eprintln!("{:<5} {}", level, line);
}

/// Install the console logger. A logger installed earlier by the host keeps
/// receiving records; only the level filter is updated.
pub fn init(debug: bool) {
    if log::set_logger(&LOGGER).is_err() {
        log::debug!("[LOGGER] another logger is already installed");
    }
    set_debug(debug);
}

/// Startup banner level; passes the default filter.
pub const BANNER_LEVEL: Level = Level::Warn;

pub fn level_filter(debug: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

pub fn set_debug(debug: bool) {
    log::set_max_level(level_filter(debug));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_passes_both_filters() {
        assert!(BANNER_LEVEL <= level_filter(false));
        assert!(BANNER_LEVEL <= level_filter(true));
        assert!(Level::Info > level_filter(false));
        assert!(Level::Debug <= level_filter(true));
    }
}
