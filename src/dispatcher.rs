use crate::{
    error_info::{eprint_msg, ErrorCode},
    route::Routing,
    CliLoggingError, Configuration, LoggerHandle,
};
use std::sync::{Arc, Mutex, OnceLock, RwLock};

// The `log` facade accepts a logger only once per process, so the dispatcher is
// installed with the first configuration and later configurations only exchange
// its routing.
static ROUTING: OnceLock<Arc<RwLock<Routing>>> = OnceLock::new();
static INSTALL: Mutex<()> = Mutex::new(());

/// Configures logging for the whole process.
///
/// * `DEBUG` (only if [`Configuration::debug`] is set) and `INFO` lines go to stdout,
/// * `WARNING`, `ERROR` and `CRITICAL` lines go to stderr,
/// * each stream gets colored level labels if colors are enabled and it is a terminal.
///
/// Calling it again replaces the previous configuration completely; lines are never
/// written twice.
///
/// # Errors
///
/// `CliLoggingError::Log` if a different logger was already installed for the `log` facade.
///
/// `CliLoggingError::Poison` if a thread panicked while the routing was being replaced.
pub fn configure(config: &Configuration) -> Result<LoggerHandle, CliLoggingError> {
    let routing = config.build_routing();
    let max_level = routing.threshold().level_filter();

    let _guard = INSTALL.lock().map_err(|_| CliLoggingError::Poison)?;
    let am_routing = if let Some(am_routing) = ROUTING.get() {
        *am_routing.write().map_err(|_| CliLoggingError::Poison)? = routing;
        Arc::clone(am_routing)
    } else {
        let am_routing = Arc::new(RwLock::new(routing));
        log::set_boxed_logger(Box::new(Dispatcher {
            am_routing: Arc::clone(&am_routing),
        }))?;
        // cannot fail, we hold the install lock
        ROUTING.set(Arc::clone(&am_routing)).ok();
        am_routing
    };
    log::set_max_level(max_level);

    Ok(LoggerHandle::new(am_routing))
}

/// Configures logging with the common command line options.
///
/// Shortcut for
///
/// ```rust
/// # let (debug, program_name, use_color) = (false, Some("myapp"), true);
/// # use cli_logging::{configure, Configuration};
/// configure(
///     &Configuration::new()
///         .debug(debug)
///         .program_name(program_name.unwrap_or_default())
///         .color(use_color),
/// )
/// # .unwrap();
/// ```
///
/// # Errors
///
/// See [`configure`].
pub fn setup_cli_logging(
    debug: bool,
    program_name: Option<&str>,
    use_color: bool,
) -> Result<LoggerHandle, CliLoggingError> {
    configure(
        &Configuration::new()
            .debug(debug)
            .program_name(program_name.unwrap_or_default())
            .color(use_color),
    )
}

// The `log::Log` implementation; hands each record to the currently installed routing.
struct Dispatcher {
    am_routing: Arc<RwLock<Routing>>,
}

impl log::Log for Dispatcher {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        match self.am_routing.read() {
            Ok(routing) => metadata.level() <= routing.threshold().level_filter(),
            Err(_) => false,
        }
    }

    fn log(&self, record: &log::Record) {
        match self.am_routing.read() {
            Ok(routing) => {
                if record.level() <= routing.threshold().level_filter() {
                    routing.write(record);
                }
            }
            Err(_) => eprint_msg(ErrorCode::Poison, "routing is poisoned, log line dropped"),
        }
    }

    fn flush(&self) {
        if let Ok(routing) = self.am_routing.read() {
            routing.flush();
        }
    }
}
