//! Structured console logging for the widgets.
//!
//! Swallowed failures (storage writes, missing anchors) surface here and
//! nowhere else: the logger is observability, not an error channel. Lines
//! go to the browser console on `wasm32` and to stderr elsewhere.

use std::fmt;

/// Log level for widget logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// Console logger with a widget tag and a minimum-level filter.
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    widget: Option<String>,
    min_level: LogLevel,
}

impl ConsoleLogger {
    /// Create a logger with the default (`Info`) level filter.
    pub fn new() -> Self {
        Self {
            widget: None,
            min_level: LogLevel::Info,
        }
    }

    /// Set the widget name prepended to every line.
    pub fn with_widget(mut self, widget: impl Into<String>) -> Self {
        self.widget = Some(widget.into());
        self
    }

    /// Set the minimum log level.
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Log at debug level.
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    /// Log at info level.
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    /// Log at warn level.
    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message);
    }

    /// Log at error level.
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }

    fn log(&self, level: LogLevel, message: &str) {
        if level < self.min_level {
            return;
        }
        emit(level, &self.format_line(level, message));
    }

    fn format_line(&self, level: LogLevel, message: &str) -> String {
        match &self.widget {
            Some(widget) => format!("[{level}] {widget}: {message}"),
            None => format!("[{level}] {message}"),
        }
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: LogLevel, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        LogLevel::Warn => web_sys::console::warn_1(&value),
        LogLevel::Error => web_sys::console::error_1(&value),
        _ => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: LogLevel, line: &str) {
    eprintln!("{line}");
}
