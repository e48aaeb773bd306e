//! Minimal `log` backend for plugin processes.
//!
//! Lines are written to stderr as `[context] message`, where the context is
//! the log target (the emitting module by default). The host application
//! captures plugin stderr into its own log files.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::io::Write;

struct PluginLogger {
    level: LevelFilter,
}

impl Log for PluginLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level(), record.target(), &record.args().to_string());
        let _ = writeln!(std::io::stderr().lock(), "{line}");
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn format_line(level: Level, context: &str, message: &str) -> String {
    match level {
        Level::Error | Level::Warn => format!("[{context}] {level}: {message}"),
        _ => format!("[{context}] {message}"),
    }
}

/// Installs the logger. `verbose` enables debug output.
///
/// Returns false if another logger was already installed.
pub fn init(verbose: bool) -> bool {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let installed = log::set_boxed_logger(Box::new(PluginLogger { level })).is_ok();
    if installed {
        log::set_max_level(level);
    }
    installed
}
