// only enables the `doc_cfg` feature when the `docsrs` configuration attribute is defined
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::unused_self)]
//! Logging setup for command line programs.
//!
//! A single call configures the [`log`] facade so that
//!
//! * `debug!` and `info!` lines are written to stdout,
//! * `warn!`, `error!` and [`critical!`] lines are written to stderr,
//! * the level label of a line is colored, separately for each stream,
//!   if coloring is enabled and the stream is a terminal,
//! * every line can be prefixed with the program name.
//!
//! ```rust
//! use log::{info, warn};
//!
//! cli_logging::setup_cli_logging(false, Some("myapp"), true).unwrap();
//!
//! info!("written to stdout as `myapp: INFO: ...`");
//! warn!("written to stderr as `myapp: WARNING: ...`");
//! cli_logging::critical!("written to stderr as `myapp: CRITICAL: ...`");
//! ```
//!
//! For more control, build a [`Configuration`] and pass it to [`configure`].
//!
//! Calling [`configure`] again replaces the previous setup completely.
//!
//! By default, i.e. if feature `colors` is not switched off, labels are colored with the
//! fixed palette documented at [`Palette`].

mod cli_logging_error;
mod configuration;
mod dispatcher;
mod error_info;
mod formats;
mod logger_handle;
mod route;
mod severity;
mod sinks;

pub use crate::cli_logging_error::CliLoggingError;
pub use crate::configuration::Configuration;
pub use crate::dispatcher::{configure, setup_cli_logging};
pub use crate::formats::{LineFormat, Palette, RESET};
pub use crate::logger_handle::LoggerHandle;
pub use crate::route::{Route, RouteInfo, StreamKind};
pub use crate::severity::{Severity, CRITICAL_KEY};
pub use crate::sinks::{BufferSink, Sink, StdStream};

/// Re-export of the log crate, used by [`critical!`].
pub use log;

/// Logs a message with severity [`Severity::Critical`].
///
/// The `log` facade has no level above `Error`, so the record is emitted with
/// `log::Level::Error` and the key-value pair `critical = true`.
///
/// ```rust
/// cli_logging::critical!("disk {} is gone", "/dev/sda");
/// cli_logging::critical!(target: "storage", "disk {} is gone", "/dev/sda");
/// ```
#[macro_export]
macro_rules! critical {
    (target: $target:expr, $($arg:tt)+) => {
        $crate::log::error!(target: $target, critical = true; $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log::error!(critical = true; $($arg)+)
    };
}
