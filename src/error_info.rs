//! Diagnostics for problems that occur while log lines are written.
//!
//! The `log::Log` interface cannot return errors, so such problems are reported on stderr,
//! with one of the following error codes:
//!
//! ## `Write`
//!
//! Writing the log line to its stream failed, e.g. because stdout was closed
//! by the consumer of a pipe.
//!
//! ```text
//! [cli_logging][ERRCODE::Write] writing log line failed, caused by Broken pipe (os error 32)
//! ```
//!
//! ## `Flush`
//!
//! Explicit flushing of a stream failed.
//!
//! ## `Poison`
//!
//! Log lines can be written by all threads of a program, so the routing lives in a lock.
//! If a thread panics while holding it, e.g. in a `Display` implementation of a logged
//! object, the lock is considered "poisoned" and the affected log lines are dropped.
use std::io::Write;

#[derive(Copy, Clone, Debug)]
pub(crate) enum ErrorCode {
    Write,
    Flush,
    Poison,
}
impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::Write => "Write",
            Self::Flush => "Flush",
            Self::Poison => "Poison",
        }
    }
}

// Best effort: if stderr itself is broken there is nobody left to tell.
pub(crate) fn eprint_err(error_code: ErrorCode, msg: &str, err: &dyn std::error::Error) {
    writeln!(
        std::io::stderr(),
        "[cli_logging][ERRCODE::{}] {msg}, caused by {err}",
        error_code.as_str()
    )
    .ok();
}

pub(crate) fn eprint_msg(error_code: ErrorCode, msg: &str) {
    writeln!(
        std::io::stderr(),
        "[cli_logging][ERRCODE::{}] {msg}",
        error_code.as_str()
    )
    .ok();
}

pub(crate) fn poison_err(what: &'static str) -> std::io::Error {
    std::io::Error::other(format!("{what} is poisoned"))
}
