use crate::{route::Routing, CliLoggingError, Configuration, RouteInfo, Severity};
use std::sync::{Arc, RwLock};

/// Gives access to the installed logging setup.
///
/// A `LoggerHandle` is returned from [`configure`](crate::configure).
/// Dropping it has no effect; the setup stays active for the lifetime of the process.
///
/// ```rust
/// use cli_logging::{Configuration, LoggerHandle};
///
/// let handle: LoggerHandle = cli_logging::configure(&Configuration::new()).unwrap();
/// // ...
/// // after the command line is parsed:
/// handle.reconfigure(&Configuration::new().debug(true)).unwrap();
/// ```
#[derive(Clone)]
pub struct LoggerHandle {
    am_routing: Arc<RwLock<Routing>>,
}
impl LoggerHandle {
    pub(crate) fn new(am_routing: Arc<RwLock<Routing>>) -> Self {
        Self { am_routing }
    }

    /// Replaces the current setup, same as calling [`configure`](crate::configure) again.
    ///
    /// # Errors
    ///
    /// See [`configure`](crate::configure).
    pub fn reconfigure(&self, config: &Configuration) -> Result<LoggerHandle, CliLoggingError> {
        crate::configure(config)
    }

    /// Flushes both streams.
    pub fn flush(&self) {
        if let Ok(routing) = self.am_routing.read() {
            routing.flush();
        }
    }

    /// Describes the installed routes: the stdout route first, then the stderr route.
    ///
    /// # Errors
    ///
    /// `CliLoggingError::Poison` if a thread panicked while the routing was being replaced.
    pub fn routes(&self) -> Result<Vec<RouteInfo>, CliLoggingError> {
        Ok(self
            .am_routing
            .read()
            .map_err(|_| CliLoggingError::Poison)?
            .infos())
    }

    /// The lowest severity that is currently written.
    ///
    /// # Errors
    ///
    /// `CliLoggingError::Poison` if a thread panicked while the routing was being replaced.
    pub fn threshold(&self) -> Result<Severity, CliLoggingError> {
        Ok(self
            .am_routing
            .read()
            .map_err(|_| CliLoggingError::Poison)?
            .threshold())
    }
}
