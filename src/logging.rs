//! Send `tracing` output to the browser console, one console call per event.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;
use wasm_bindgen::JsValue;
use web_sys::console;

pub fn init() {
    let directives = if cfg!(debug_assertions) {
        "info,score_roster=debug"
    } else {
        "info"
    };

    // The wasm target has no system clock, so events carry no timestamp.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directives))
        .with_writer(ConsoleMakeWriter)
        .without_time()
        .with_target(false)
        .try_init();
}

struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and hands it to the console method matching
/// its level when dropped.
struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buffer);
        let message = JsValue::from_str(line.trim_end());

        if self.level == Level::ERROR {
            console::error_1(&message);
        } else if self.level == Level::WARN {
            console::warn_1(&message);
        } else if self.level == Level::INFO {
            console::info_1(&message);
        } else {
            console::debug_1(&message);
        }
    }
}
