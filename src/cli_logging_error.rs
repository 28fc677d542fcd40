use thiserror::Error;

/// Describes errors in the setup of `cli_logging`.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CliLoggingError {
    /// Another logger is already installed for the `log` facade.
    #[error("Logger initialization failed")]
    Log(#[from] log::SetLoggerError),

    /// The routing lock is poisoned, because a thread panicked while it held the lock.
    #[error("The routing lock is poisoned")]
    Poison,
}
