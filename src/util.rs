// Formatting and console logging helpers

use log::{Level, LevelFilter, Log, Metadata, Record};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::JsValue;

/// Remaining round time as `MM:SS`, seconds rounded up.
pub fn format_time(ms: i64) -> String {
    let s = ((ms + 999).div_euclid(1000)).max(0);
    format!("{:02}:{:02}", s / 60, s % 60)
}

/// Browser only: seeds from `Math.random`.
pub fn browser_rng() -> SmallRng {
    SmallRng::seed_from_u64((js_sys::Math::random() * u64::MAX as f64) as u64)
}

/// Forwards `log` records to the browser console.
struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let msg = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&msg),
            Level::Warn => web_sys::console::warn_1(&msg),
            Level::Info => web_sys::console::info_1(&msg),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&msg),
        }
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Installs the console logger; later calls are ignored.
pub fn init_logging(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
