use crate::{
    formats::LineFormat,
    route::{Route, Routing, StreamKind},
    Severity, Sink, StdStream,
};
use std::{path::Path, sync::Arc};

/// The options for [`configure`](crate::configure).
///
/// The defaults are: no debug output, no program name, colors enabled, no targets,
/// `DEBUG`/`INFO` to stdout and `WARNING`/`ERROR`/`CRITICAL` to stderr.
///
/// ```rust
/// use cli_logging::Configuration;
///
/// let _handle = cli_logging::configure(
///     &Configuration::new()
///         .debug(true)
///         .program_name_from_args()
///         .color(false),
/// )
/// .unwrap();
/// ```
#[derive(Clone)]
pub struct Configuration {
    debug: bool,
    program_name: Option<String>,
    color: bool,
    with_target: bool,
    stdout: Arc<dyn Sink>,
    stderr: Arc<dyn Sink>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            debug: false,
            program_name: None,
            color: true,
            with_target: false,
            stdout: Arc::new(StdStream::stdout()),
            stderr: Arc::new(StdStream::stderr()),
        }
    }
}

impl Configuration {
    /// Creates a configuration with the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables `DEBUG` lines; otherwise only `INFO` and above are written.
    #[must_use]
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Prefixes every line with `"<program_name>: "`.
    ///
    /// An empty name is the same as no name.
    #[must_use]
    pub fn program_name<S: Into<String>>(mut self, program_name: S) -> Self {
        let program_name = program_name.into();
        self.program_name = if program_name.is_empty() {
            None
        } else {
            Some(program_name)
        };
        self
    }

    /// Uses the file name of the executable (from `argv[0]`) as program name.
    ///
    /// If it cannot be determined, no program name is used.
    #[must_use]
    pub fn program_name_from_args(mut self) -> Self {
        self.program_name = std::env::args_os()
            .next()
            .and_then(|argv0| program_name_of(Path::new(&argv0)));
        self
    }

    /// Switches coloring of the level labels on or off.
    ///
    /// Even if switched on, a stream only gets colors if it is a terminal.
    #[must_use]
    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Adds the target of a record (by default its module path) after the program name.
    #[must_use]
    pub fn with_target(mut self, with_target: bool) -> Self {
        self.with_target = with_target;
        self
    }

    /// Replaces stdout as destination of `DEBUG` and `INFO` lines.
    #[must_use]
    pub fn stdout_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.stdout = sink;
        self
    }

    /// Replaces stderr as destination of `WARNING`, `ERROR` and `CRITICAL` lines.
    #[must_use]
    pub fn stderr_sink(mut self, sink: Arc<dyn Sink>) -> Self {
        self.stderr = sink;
        self
    }

    /// The lowest severity that is written.
    #[must_use]
    pub fn threshold(&self) -> Severity {
        if self.debug {
            Severity::Debug
        } else {
            Severity::Info
        }
    }

    /// The configured program name, if any.
    #[must_use]
    pub fn get_program_name(&self) -> Option<&str> {
        self.program_name.as_deref()
    }

    // The terminal checks happen here, once per configuration.
    pub(crate) fn build_routing(&self) -> Routing {
        let threshold = self.threshold();
        Routing::new(
            LineFormat::new(self.program_name.as_deref(), self.with_target),
            threshold,
            Route::new(
                StreamKind::Stdout,
                threshold,
                Severity::Info,
                self.color,
                Arc::clone(&self.stdout),
            ),
            Route::new(
                StreamKind::Stderr,
                Severity::Warning,
                Severity::Critical,
                self.color,
                Arc::clone(&self.stderr),
            ),
        )
    }
}

fn program_name_of(argv0: &Path) -> Option<String> {
    argv0
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
}
