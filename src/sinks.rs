use std::io::{IsTerminal, Stderr, StderrLock, Stdout, StdoutLock, Write};
use std::sync::{Arc, Mutex};

/// Destination of a route.
///
/// Implementations must be thread-safe; a line handed to `write_line` must
/// end up contiguously in the output, even if other threads write at the same time.
pub trait Sink: Sync + Send {
    /// Writes out a complete log line, including its line terminator.
    ///
    /// # Errors
    ///
    /// Whatever the underlying output reports.
    fn write_line(&self, line: &[u8]) -> std::io::Result<()>;

    /// Flushes any buffered output.
    ///
    /// # Errors
    ///
    /// Whatever the underlying output reports.
    fn flush(&self) -> std::io::Result<()>;

    /// Is the sink connected to a terminal?
    ///
    /// Only asked while a configuration is applied.
    fn is_terminal(&self) -> bool;
}

/// Abstraction over stdout and stderr.
pub enum StdStream {
    /// The standard output stream.
    Out(Stdout),
    /// The standard error stream.
    Err(Stderr),
}
impl StdStream {
    /// Standard output.
    #[must_use]
    pub fn stdout() -> Self {
        StdStream::Out(std::io::stdout())
    }

    /// Standard error.
    #[must_use]
    pub fn stderr() -> Self {
        StdStream::Err(std::io::stderr())
    }

    fn lock(&self) -> StdStreamLock<'_> {
        match self {
            StdStream::Out(s) => StdStreamLock::Out(s.lock()),
            StdStream::Err(s) => StdStreamLock::Err(s.lock()),
        }
    }
}
impl Sink for StdStream {
    fn write_line(&self, line: &[u8]) -> std::io::Result<()> {
        let mut w = self.lock();
        w.write_all(line)?;
        w.flush()
    }

    fn flush(&self) -> std::io::Result<()> {
        self.lock().flush()
    }

    fn is_terminal(&self) -> bool {
        match self {
            StdStream::Out(s) => s.is_terminal(),
            StdStream::Err(s) => s.is_terminal(),
        }
    }
}

enum StdStreamLock<'a> {
    Out(StdoutLock<'a>),
    Err(StderrLock<'a>),
}
impl Write for StdStreamLock<'_> {
    fn write(&mut self, buffer: &[u8]) -> std::io::Result<usize> {
        match self {
            StdStreamLock::Out(l) => l.write(buffer),
            StdStreamLock::Err(l) => l.write(buffer),
        }
    }
    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            StdStreamLock::Out(l) => l.flush(),
            StdStreamLock::Err(l) => l.flush(),
        }
    }
}

/// A sink that keeps all lines in memory.
///
/// Clones share the same buffer, so one clone can be handed to a
/// [`Configuration`](crate::Configuration) and the other one used for inspecting
/// what was written.
///
/// Whether it pretends to be a terminal is chosen at construction.
#[derive(Clone, Default)]
pub struct BufferSink {
    buffer: Arc<Mutex<Vec<u8>>>,
    terminal: bool,
}
impl BufferSink {
    /// Creates a sink that is not considered a terminal, like a redirected stream.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sink that is considered a terminal.
    #[must_use]
    pub fn terminal() -> Self {
        Self {
            terminal: true,
            ..Self::default()
        }
    }

    /// Everything written so far.
    #[must_use]
    pub fn contents(&self) -> String {
        match self.buffer.lock() {
            Ok(buffer) => String::from_utf8_lossy(&buffer).into_owned(),
            Err(poisoned) => String::from_utf8_lossy(&poisoned.into_inner()).into_owned(),
        }
    }

    /// The lines written so far, without line terminators.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(ToString::to_string).collect()
    }

    /// Discards everything written so far.
    pub fn clear(&self) {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.clear();
        }
    }

    /// Compares the written lines with the expected ones and asserts that both are equal.
    ///
    /// This function is not meant for productive code, only for tests.
    ///
    /// # Panics
    ///
    /// If the written lines differ from `expected`.
    #[doc(hidden)]
    pub fn validate_lines(&self, expected: &[&str]) {
        let lines = self.lines();
        assert_eq!(
            lines, expected,
            "written lines differ from expected ones"
        );
    }
}
impl Sink for BufferSink {
    fn write_line(&self, line: &[u8]) -> std::io::Result<()> {
        let mut buffer = self
            .buffer
            .lock()
            .map_err(|_| crate::error_info::poison_err("BufferSink"))?;
        buffer.extend_from_slice(line);
        Ok(())
    }

    fn flush(&self) -> std::io::Result<()> {
        Ok(())
    }

    fn is_terminal(&self) -> bool {
        self.terminal
    }
}
