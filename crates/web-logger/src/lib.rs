//! Web Logger
//!
//! `tracing-subscriber` setup for the browser. A fmt layer writes each line to
//! the devtools console on wasm32 (stderr on other targets) and a rolling
//! layer keeps the most recent lines for the in-page log panel. `log` records
//! from library crates are bridged in by `try_init`.

use std::collections::VecDeque;
use std::fmt::{self, Write as _};
use std::io;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Metadata, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Number of lines kept by the rolling layer
pub const DEFAULT_CAPACITY: usize = 200;

const TIME_FORMAT: &str = "%H:%M:%S%.3f";

/// Fixed-size buffer that drops its oldest line when full
#[derive(Debug, Clone)]
pub struct RollingBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RollingBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: String) {
        if self.capacity == 0 {
            return;
        }
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Read side of the rolling buffer, handed to the UI
#[derive(Debug, Clone)]
pub struct LogHandle {
    buffer: Arc<Mutex<RollingBuffer>>,
}

impl LogHandle {
    /// Retained lines, oldest first
    pub fn recent_lines(&self) -> Vec<String> {
        self.buffer
            .lock()
            .map(|buffer| buffer.lines())
            .unwrap_or_default()
    }
}

/// Layer that copies every event into a `RollingBuffer`
pub struct RollingLayer {
    buffer: Arc<Mutex<RollingBuffer>>,
}

impl RollingLayer {
    pub fn new(capacity: usize) -> (Self, LogHandle) {
        let buffer = Arc::new(Mutex::new(RollingBuffer::new(capacity)));
        let handle = LogHandle {
            buffer: Arc::clone(&buffer),
        };
        (Self { buffer }, handle)
    }
}

impl<S: Subscriber> Layer<S> for RollingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);

        let metadata = event.metadata();
        // Bridged `log` records carry their real target in a field
        let target = visitor.log_target.as_deref().unwrap_or(metadata.target());
        let line = format!(
            "[{}] {:<5} {}: {}{}",
            chrono::Local::now().format(TIME_FORMAT),
            metadata.level().to_string(),
            target,
            visitor.message,
            visitor.fields
        );

        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(line);
        }
    }
}

#[derive(Default)]
struct LineVisitor {
    message: String,
    /// ` key=value` pairs, appended after the message
    fields: String,
    log_target: Option<String>,
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message.push_str(value),
            "log.target" => self.log_target = Some(value.to_string()),
            name if name.starts_with("log.") => {}
            name => {
                let _ = write!(self.fields, " {}={}", name, value);
            }
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "message" => {
                let _ = write!(self.message, "{:?}", value);
            }
            name if name.starts_with("log.") => {}
            name => {
                let _ = write!(self.fields, " {}={:?}", name, value);
            }
        }
    }
}

/// `MakeWriter` sending each formatted line to the console method for its level
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

/// Collects one formatted line and emits it on drop
pub struct ConsoleWriter {
    level: Level,
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
        if self.buf.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buf);
        write_line(self.level, line.trim_end());
    }
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            level: Level::INFO,
            buf: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            level: *meta.level(),
            buf: Vec::new(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    let value = line.into();
    if level == Level::ERROR {
        web_sys::console::error_1(&value);
    } else if level == Level::WARN {
        web_sys::console::warn_1(&value);
    } else if level == Level::INFO {
        web_sys::console::info_1(&value);
    } else {
        web_sys::console::debug_1(&value);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}

fn to_level_filter(level: log::LevelFilter) -> LevelFilter {
    match level {
        log::LevelFilter::Off => LevelFilter::OFF,
        log::LevelFilter::Error => LevelFilter::ERROR,
        log::LevelFilter::Warn => LevelFilter::WARN,
        log::LevelFilter::Info => LevelFilter::INFO,
        log::LevelFilter::Debug => LevelFilter::DEBUG,
        log::LevelFilter::Trace => LevelFilter::TRACE,
    }
}

/// Install the global subscriber and the `log` bridge.
/// Fails if a subscriber or logger is already installed.
pub fn init_logger(level: log::LevelFilter) -> Result<LogHandle, TryInitError> {
    let (rolling, handle) = RollingLayer::new(DEFAULT_CAPACITY);
    let console = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_timer(ChronoLocal::new(TIME_FORMAT.to_string()))
        .with_writer(ConsoleMakeWriter);

    tracing_subscriber::registry()
        .with(to_level_filter(level))
        .with(console)
        .with(rolling)
        .try_init()?;

    Ok(handle)
}
