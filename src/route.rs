use crate::{error_info, formats::LineFormat, Severity, Sink};
use log::Record;
use std::{fmt, io::Write, sync::Arc};

/// The stream a route writes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamKind {
    /// Standard output, for `DEBUG` and `INFO`.
    Stdout,
    /// Standard error, for `WARNING`, `ERROR` and `CRITICAL`.
    Stderr,
}

/// Binds a range of severities to a sink.
pub struct Route {
    stream: StreamKind,
    lowest: Severity,
    highest: Severity,
    colored: bool,
    sink: Arc<dyn Sink>,
}
impl Route {
    /// Creates a route for the severities `lowest..=highest`.
    ///
    /// `colored` is the global color switch; the route is only colored if additionally
    /// the sink is a terminal right now.
    #[must_use]
    pub fn new(
        stream: StreamKind,
        lowest: Severity,
        highest: Severity,
        colored: bool,
        sink: Arc<dyn Sink>,
    ) -> Self {
        let colored = colored && cfg!(feature = "colors") && sink.is_terminal() && ansi_support();
        Self {
            stream,
            lowest,
            highest,
            colored,
            sink,
        }
    }

    /// Does this route take records of the given severity?
    #[must_use]
    pub fn accepts(&self, severity: Severity) -> bool {
        self.lowest <= severity && severity <= self.highest
    }

    /// Is the level label colored on this route?
    #[must_use]
    pub fn is_colored(&self) -> bool {
        self.colored
    }

    /// A description of this route.
    #[must_use]
    pub fn info(&self) -> RouteInfo {
        RouteInfo {
            stream: self.stream,
            lowest: self.lowest,
            highest: self.highest,
            colored: self.colored,
        }
    }

    pub(crate) fn write(
        &self,
        format: &LineFormat,
        severity: Severity,
        record: &Record,
    ) -> std::io::Result<()> {
        let mut buffer = Vec::<u8>::with_capacity(200);
        format.write(
            &mut buffer,
            severity,
            record.target(),
            record.args(),
            self.colored,
        )?;
        buffer.write_all(b"\n")?;
        self.sink.write_line(&buffer)
    }

    pub(crate) fn flush(&self) -> std::io::Result<()> {
        self.sink.flush()
    }
}
impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(&self.info(), f)
    }
}

/// Describes an installed route, see [`LoggerHandle::routes`](crate::LoggerHandle::routes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteInfo {
    /// The stream the route writes to.
    pub stream: StreamKind,
    /// The lowest severity the route accepts.
    pub lowest: Severity,
    /// The highest severity the route accepts.
    pub highest: Severity,
    /// Whether the level label is colored.
    pub colored: bool,
}

// The complete routing of one configuration: the line format, the threshold,
// and the two routes that partition `threshold..=Critical`.
#[derive(Debug)]
pub(crate) struct Routing {
    format: LineFormat,
    threshold: Severity,
    routes: [Route; 2],
}
impl Routing {
    pub(crate) fn new(format: LineFormat, threshold: Severity, low: Route, high: Route) -> Self {
        debug_assert!(low.lowest == threshold && low.highest < high.lowest);
        Self {
            format,
            threshold,
            routes: [low, high],
        }
    }

    pub(crate) fn threshold(&self) -> Severity {
        self.threshold
    }

    pub(crate) fn route_for(&self, severity: Severity) -> Option<&Route> {
        self.routes.iter().find(|route| route.accepts(severity))
    }

    pub(crate) fn write(&self, record: &Record) {
        let severity = Severity::of(record);
        if let Some(route) = self.route_for(severity) {
            route
                .write(&self.format, severity, record)
                .unwrap_or_else(|e| {
                    error_info::eprint_err(
                        error_info::ErrorCode::Write,
                        "writing log line failed",
                        &e,
                    );
                });
        }
    }

    pub(crate) fn flush(&self) {
        for route in &self.routes {
            route.flush().unwrap_or_else(|e| {
                error_info::eprint_err(error_info::ErrorCode::Flush, "flushing failed", &e);
            });
        }
    }

    pub(crate) fn infos(&self) -> Vec<RouteInfo> {
        self.routes.iter().map(Route::info).collect()
    }
}

#[cfg(all(windows, feature = "colors"))]
fn ansi_support() -> bool {
    nu_ansi_term::enable_ansi_support().is_ok()
}
#[cfg(not(all(windows, feature = "colors")))]
fn ansi_support() -> bool {
    true
}

#[cfg(test)]
mod test {
    use super::{Route, Routing, StreamKind};
    use crate::{formats::LineFormat, BufferSink, Severity};
    use log::{Level, Record};
    use std::sync::Arc;

    fn make_routing(threshold: Severity, out: &BufferSink, err: &BufferSink) -> Routing {
        Routing::new(
            LineFormat::new(Some("app"), false),
            threshold,
            Route::new(
                StreamKind::Stdout,
                threshold,
                Severity::Info,
                false,
                Arc::new(out.clone()),
            ),
            Route::new(
                StreamKind::Stderr,
                Severity::Warning,
                Severity::Critical,
                false,
                Arc::new(err.clone()),
            ),
        )
    }

    #[test]
    fn routes_partition_the_enabled_severities() {
        let (out, err) = (BufferSink::new(), BufferSink::new());
        for threshold in [Severity::Debug, Severity::Info] {
            let routing = make_routing(threshold, &out, &err);
            for severity in Severity::ALL {
                let accepting = routing
                    .routes
                    .iter()
                    .filter(|route| route.accepts(severity))
                    .count();
                let expected = usize::from(severity >= threshold);
                assert_eq!(accepting, expected, "{severity} with threshold {threshold}");
            }
        }
    }

    #[test]
    fn low_severities_go_to_stdout() {
        let (out, err) = (BufferSink::new(), BufferSink::new());
        let routing = make_routing(Severity::Debug, &out, &err);
        assert_eq!(
            routing.route_for(Severity::Debug).map(|r| r.info().stream),
            Some(StreamKind::Stdout)
        );
        assert_eq!(
            routing.route_for(Severity::Critical).map(|r| r.info().stream),
            Some(StreamKind::Stderr)
        );

        routing.write(
            &Record::builder()
                .level(Level::Info)
                .args(format_args!("Info message"))
                .build(),
        );
        routing.write(
            &Record::builder()
                .level(Level::Error)
                .args(format_args!("Error message"))
                .build(),
        );
        out.validate_lines(&["app: INFO: Info message"]);
        err.validate_lines(&["app: ERROR: Error message"]);
    }

    #[test]
    fn color_needs_a_terminal() {
        let plain = Route::new(
            StreamKind::Stdout,
            Severity::Debug,
            Severity::Info,
            true,
            Arc::new(BufferSink::new()),
        );
        assert!(!plain.is_colored());

        let switched_off = Route::new(
            StreamKind::Stdout,
            Severity::Debug,
            Severity::Info,
            false,
            Arc::new(BufferSink::terminal()),
        );
        assert!(!switched_off.is_colored());

        let colored = Route::new(
            StreamKind::Stdout,
            Severity::Debug,
            Severity::Info,
            true,
            Arc::new(BufferSink::terminal()),
        );
        assert_eq!(colored.is_colored(), cfg!(feature = "colors"));
    }
}
