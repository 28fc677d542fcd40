use log::kv::{Key, Source};
use log::{Level, LevelFilter, Record};
use std::fmt;

/// Key of the key-value pair that marks an `Error` record as [`Severity::Critical`].
///
/// See [`critical!`](crate::critical).
pub const CRITICAL_KEY: &str = "critical";

/// Importance of a log line.
///
/// Ordered from `Debug` (least important) to `Critical` (most important).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Diagnostic output, only shown in debug mode.
    Debug,
    /// Regular progress information.
    Info,
    /// Something unexpected, but the program continues normally.
    Warning,
    /// An operation failed.
    Error,
    /// The program is unlikely to continue.
    Critical,
}

impl Severity {
    /// All severities, in ascending order.
    pub const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
    ];

    /// The label that is written into a log line, e.g. `WARNING`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }

    /// Maps a level of the `log` facade.
    ///
    /// `Trace` is folded into `Debug`, because there is nothing below `Debug` here.
    /// `critical` only matters for `Level::Error`.
    #[must_use]
    pub const fn from_level(level: Level, critical: bool) -> Self {
        match level {
            Level::Trace | Level::Debug => Severity::Debug,
            Level::Info => Severity::Info,
            Level::Warn => Severity::Warning,
            Level::Error if critical => Severity::Critical,
            Level::Error => Severity::Error,
        }
    }

    /// Determines the severity of a record.
    #[must_use]
    pub fn of(record: &Record) -> Self {
        let critical = record.level() == Level::Error
            && Source::get(record.key_values(), Key::from_str(CRITICAL_KEY))
                .and_then(|value| value.to_bool())
                .unwrap_or(false);
        Self::from_level(record.level(), critical)
    }

    /// The `log` level filter that lets records of this severity (and above) pass.
    #[must_use]
    pub const fn level_filter(self) -> LevelFilter {
        match self {
            Severity::Debug => LevelFilter::Debug,
            Severity::Info => LevelFilter::Info,
            Severity::Warning => LevelFilter::Warn,
            Severity::Error | Severity::Critical => LevelFilter::Error,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod test {
    use super::{Severity, CRITICAL_KEY};
    use log::kv::Source;
    use log::{Level, LevelFilter, Record};

    #[test]
    fn severities_are_ordered() {
        assert!(Severity::ALL.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(Severity::ALL.first(), Some(&Severity::Debug));
        assert_eq!(Severity::ALL.last(), Some(&Severity::Critical));
    }

    #[test]
    fn labels() {
        let labels: Vec<_> = Severity::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(labels, ["DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"]);
    }

    #[test]
    fn mapping_from_log_levels() {
        assert_eq!(Severity::from_level(Level::Trace, false), Severity::Debug);
        assert_eq!(Severity::from_level(Level::Debug, false), Severity::Debug);
        assert_eq!(Severity::from_level(Level::Info, false), Severity::Info);
        assert_eq!(Severity::from_level(Level::Warn, false), Severity::Warning);
        assert_eq!(Severity::from_level(Level::Error, false), Severity::Error);
        assert_eq!(Severity::from_level(Level::Error, true), Severity::Critical);
        // the marker is ignored below Error
        assert_eq!(Severity::from_level(Level::Warn, true), Severity::Warning);
    }

    fn severity_of(level: Level, kvs: &dyn Source) -> Severity {
        Severity::of(
            &Record::builder()
                .level(level)
                .key_values(kvs)
                .args(format_args!("some message"))
                .build(),
        )
    }

    #[test]
    fn critical_marker_on_records() {
        let none: [(&str, bool); 0] = [];
        assert_eq!(severity_of(Level::Error, &none), Severity::Error);
        assert_eq!(
            severity_of(Level::Error, &[(CRITICAL_KEY, true)]),
            Severity::Critical
        );
        assert_eq!(
            severity_of(Level::Error, &[(CRITICAL_KEY, false)]),
            Severity::Error
        );
        assert_eq!(
            severity_of(Level::Info, &[(CRITICAL_KEY, true)]),
            Severity::Info
        );
    }

    #[test]
    fn level_filters() {
        assert_eq!(Severity::Debug.level_filter(), LevelFilter::Debug);
        assert_eq!(Severity::Info.level_filter(), LevelFilter::Info);
        assert_eq!(Severity::Critical.level_filter(), LevelFilter::Error);
    }
}
