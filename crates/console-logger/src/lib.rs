//! Console Logger
//!
//! `tracing` subscriber for browser apps. Each event is formatted by
//! `tracing_subscriber::fmt`, buffered, and handed to the matching
//! `console.*` method when the writer is dropped. Off wasm32 the lines go
//! to stderr so native test runs still show them.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;

/// Parse a level name from configuration, falling back to `INFO`.
pub fn parse_level(value: &str) -> Level {
    match value.trim().to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Install the global subscriber.
///
/// Calling it twice returns the error from `try_init` instead of panicking.
pub fn init(app_name: &str, level: Level) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_timer(LocalTime)
        .with_max_level(level)
        .with_target(true)
        .with_writer(MakeConsoleWriter)
        .try_init()?;

    tracing::info!(target: "console_logger", "{} logging at {}", app_name, level);
    Ok(())
}

/// Local wall-clock timestamps, `HH:MM:SS.mmm`.
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%H:%M:%S%.3f"))
    }
}

/// Hands out one `ConsoleWriter` per event.
#[derive(Clone, Copy, Debug, Default)]
pub struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers a single formatted event and flushes it on drop.
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    pub fn new(level: Level) -> Self {
        Self { level, buf: Vec::new() }
    }

    /// Buffered text without the trailing newline `fmt` appends.
    pub fn line(&self) -> String {
        String::from_utf8_lossy(&self.buf).trim_end().to_string()
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        emit(self.level, &self.line());
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    if level == Level::ERROR {
        web_sys::console::error_1(&value);
    } else if level == Level::WARN {
        web_sys::console::warn_1(&value);
    } else if level == Level::INFO {
        web_sys::console::info_1(&value);
    } else if level == Level::DEBUG {
        web_sys::console::debug_1(&value);
    } else {
        web_sys::console::log_1(&value);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Level::DEBUG);
        assert_eq!(parse_level(" WARN "), Level::WARN);
        assert_eq!(parse_level("warning"), Level::WARN);
        assert_eq!(parse_level("error"), Level::ERROR);
        assert_eq!(parse_level("trace"), Level::TRACE);
    }

    #[test]
    fn test_parse_level_defaults_to_info() {
        assert_eq!(parse_level(""), Level::INFO);
        assert_eq!(parse_level("verbose"), Level::INFO);
    }

    #[test]
    fn test_writer_buffers_one_event() {
        let mut writer = ConsoleWriter::new(Level::WARN);
        write!(writer, "12:00:00.000  WARN app: ").unwrap();
        writeln!(writer, "booking failed").unwrap();
        assert_eq!(writer.line(), "12:00:00.000  WARN app: booking failed");
    }

    #[test]
    fn test_make_writer_uses_event_level() {
        let make = MakeConsoleWriter;
        let writer = make.make_writer();
        assert_eq!(writer.level, Level::INFO);
        assert!(writer.line().is_empty());
    }

    #[test]
    fn test_init_twice_is_an_error() {
        let _ = init("test", Level::DEBUG);
        assert!(init("test", Level::DEBUG).is_err());
    }
}
