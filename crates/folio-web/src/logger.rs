//! `log` backend for the browser console.
//!
//! Records go to the console method matching their level so the browser's
//! own filtering works. Messages are prefixed with the record target.

use folio_core::{Error, Result};
use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;
use web_sys::console;

/// Writes log records to `console.*`.
#[derive(Debug, Default)]
pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Install the console logger as the global `log` backend.
///
/// Fails if another logger was installed first.
pub fn init(level: LevelFilter) -> Result<()> {
    log::set_logger(&LOGGER).map_err(|err| Error::config(format!("Logger setup failed: {err}")))?;
    log::set_max_level(level);
    Ok(())
}

/// Text written to the console for `record`.
pub fn format_record(record: &Record<'_>) -> String {
    format!("[{}] {}", record.target(), record.args())
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format_record(record));
        match record.level() {
            Level::Error => console::error_1(&line),
            Level::Warn => console::warn_1(&line),
            Level::Info => console::info_1(&line),
            Level::Debug | Level::Trace => console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}
