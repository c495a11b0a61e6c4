//! Browser Logging
//!
//! Routes `tracing` output to the devtools console, one console call per
//! event, picking the console method from the event level.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wasm_bindgen::JsValue;

/// Install the global subscriber
pub fn init() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            option_env!("RUST_LOG").unwrap_or("info,checkout_core=debug"),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .without_time()
                .with_writer(ConsoleMakeWriter),
        )
        .init();
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ConsoleMethod {
    Debug,
    Log,
    Warn,
    Error,
}

impl ConsoleMethod {
    fn for_level(level: Level) -> Self {
        if level == Level::ERROR {
            Self::Error
        } else if level == Level::WARN {
            Self::Warn
        } else if level == Level::INFO {
            Self::Log
        } else {
            Self::Debug
        }
    }

    fn emit(self, message: &str) {
        let value = JsValue::from_str(message);
        match self {
            Self::Debug => web_sys::console::debug_1(&value),
            Self::Log => web_sys::console::log_1(&value),
            Self::Warn => web_sys::console::warn_1(&value),
            Self::Error => web_sys::console::error_1(&value),
        }
    }
}

/// Formatted event text, `None` if there is nothing to print
fn console_text(buf: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(buf);
    let text = text.trim_end();
    (!text.is_empty()).then(|| text.to_string())
}

/// Buffers one formatted event and prints it when dropped
pub struct ConsoleWriter {
    method: ConsoleMethod,
    buf: Vec<u8>,
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
        if let Some(text) = console_text(&self.buf) {
            self.method.emit(&text);
        }
    }
}

pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            method: ConsoleMethod::Log,
            buf: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            method: ConsoleMethod::for_level(*meta.level()),
            buf: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_method_per_level() {
        assert_eq!(ConsoleMethod::for_level(Level::ERROR), ConsoleMethod::Error);
        assert_eq!(ConsoleMethod::for_level(Level::WARN), ConsoleMethod::Warn);
        assert_eq!(ConsoleMethod::for_level(Level::INFO), ConsoleMethod::Log);
        assert_eq!(ConsoleMethod::for_level(Level::DEBUG), ConsoleMethod::Debug);
        assert_eq!(ConsoleMethod::for_level(Level::TRACE), ConsoleMethod::Debug);
    }

    #[test]
    fn test_console_text_trims_newline() {
        assert_eq!(
            console_text(b" WARN checkout_core: Checkout failed\n").as_deref(),
            Some(" WARN checkout_core: Checkout failed")
        );
        assert_eq!(console_text(b"\n"), None);
    }
}
