use crate::Severity;
#[cfg(feature = "colors")]
use nu_ansi_term::{Color, Style};
use std::{fmt, io::Write};

/// Escape sequence that ends any coloring.
pub const RESET: &str = "\x1b[0m";

/// The fixed color palette for level labels.
///
/// | Severity | Color          | Sequence   |
/// |----------|----------------|------------|
/// | DEBUG    | cyan           | `ESC[36m`  |
/// | INFO     | green          | `ESC[32m`  |
/// | WARNING  | yellow         | `ESC[33m`  |
/// | ERROR    | red            | `ESC[31m`  |
/// | CRITICAL | red background | `ESC[41m`  |
///
/// Labels are looked up by name; unknown labels get [`RESET`] instead of a color.
pub struct Palette;

impl Palette {
    /// The style of a label, or `None` if the label is not a known severity.
    #[cfg(feature = "colors")]
    #[must_use]
    pub fn style(label: &str) -> Option<Style> {
        match label {
            "DEBUG" => Some(Color::Cyan.normal()),
            "INFO" => Some(Color::Green.normal()),
            "WARNING" => Some(Color::Yellow.normal()),
            "ERROR" => Some(Color::Red.normal()),
            "CRITICAL" => Some(Style::new().on(Color::Red)),
            _ => None,
        }
    }

    /// The escape sequence that starts the color of a label.
    ///
    /// Falls back to [`RESET`] for labels that are not in the palette,
    /// and if feature `colors` is switched off.
    #[must_use]
    pub fn color_token(label: &str) -> String {
        #[cfg(feature = "colors")]
        {
            if let Some(style) = Self::style(label) {
                return style.prefix().to_string();
            }
        }
        #[cfg(not(feature = "colors"))]
        let _ = label;
        RESET.to_string()
    }

    /// Writes `<color><label><reset>`.
    ///
    /// # Errors
    ///
    /// Only the errors of the given writer.
    pub fn write_colored(w: &mut dyn Write, label: &str) -> std::io::Result<()> {
        #[cfg(feature = "colors")]
        {
            if let Some(style) = Self::style(label) {
                return write!(w, "{}", style.paint(label));
            }
        }
        write!(w, "{RESET}{label}{RESET}")
    }
}

/// The layout of a log line: `[<program name>: ][<target>: ]<LABEL>: <message>`.
///
/// The same `LineFormat` is shared by both routes; whether the label is colored
/// is decided per route.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineFormat {
    prefix: Option<String>,
    with_target: bool,
}

impl LineFormat {
    /// Creates a line format.
    ///
    /// An empty program name is treated like no program name.
    #[must_use]
    pub fn new(program_name: Option<&str>, with_target: bool) -> Self {
        Self {
            prefix: program_name
                .filter(|name| !name.is_empty())
                .map(|name| format!("{name}: ")),
            with_target,
        }
    }

    /// The prefix that every line starts with, if any.
    #[must_use]
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Writes one line, without the trailing newline.
    ///
    /// # Errors
    ///
    /// Only the errors of the given writer.
    pub fn write(
        &self,
        w: &mut dyn Write,
        severity: Severity,
        target: &str,
        message: &fmt::Arguments,
        colored: bool,
    ) -> std::io::Result<()> {
        if let Some(ref prefix) = self.prefix {
            w.write_all(prefix.as_bytes())?;
        }
        if self.with_target {
            write!(w, "{target}: ")?;
        }
        if colored {
            Palette::write_colored(w, severity.label())?;
        } else {
            w.write_all(severity.label().as_bytes())?;
        }
        write!(w, ": {message}")
    }

    /// Renders one line into a `String`, without the trailing newline.
    #[must_use]
    pub fn render(
        &self,
        severity: Severity,
        target: &str,
        message: &fmt::Arguments,
        colored: bool,
    ) -> String {
        let mut buffer = Vec::<u8>::with_capacity(200);
        // writing into a Vec cannot fail
        self.write(&mut buffer, severity, target, message, colored)
            .ok();
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

#[cfg(test)]
mod test {
    use super::{LineFormat, Palette, RESET};
    use crate::Severity;

    #[test]
    fn plain_line() {
        let format = LineFormat::new(None, false);
        assert_eq!(
            format.render(Severity::Info, "tgt", &format_args!("Info message"), false),
            "INFO: Info message"
        );
        assert_eq!(
            format.render(Severity::Warning, "tgt", &format_args!("careful"), false),
            "WARNING: careful"
        );
    }

    #[test]
    fn program_name_prefix() {
        let format = LineFormat::new(Some("myapp"), false);
        assert_eq!(format.prefix(), Some("myapp: "));
        assert_eq!(
            format.render(Severity::Error, "tgt", &format_args!("Error {}", 42), false),
            "myapp: ERROR: Error 42"
        );
    }

    #[test]
    fn empty_program_name_gives_no_prefix() {
        let format = LineFormat::new(Some(""), false);
        assert_eq!(format.prefix(), None);
        assert_eq!(
            format.render(Severity::Debug, "tgt", &format_args!("x"), false),
            "DEBUG: x"
        );
    }

    #[test]
    fn target_after_program_name() {
        let format = LineFormat::new(Some("app"), true);
        assert_eq!(
            format.render(Severity::Info, "my_mod", &format_args!("hello"), false),
            "app: my_mod: INFO: hello"
        );
    }

    #[cfg(feature = "colors")]
    #[test]
    fn colored_labels() {
        let format = LineFormat::new(Some("app"), false);
        for (severity, token) in [
            (Severity::Debug, "\x1b[36m"),
            (Severity::Info, "\x1b[32m"),
            (Severity::Warning, "\x1b[33m"),
            (Severity::Error, "\x1b[31m"),
            (Severity::Critical, "\x1b[41m"),
        ] {
            assert_eq!(Palette::color_token(severity.label()), token);
            assert_eq!(
                format.render(severity, "tgt", &format_args!("msg"), true),
                format!("app: {token}{}{RESET}: msg", severity.label())
            );
        }
    }

    #[test]
    fn unknown_label_falls_back_to_reset() {
        assert_eq!(Palette::color_token("NOTICE"), RESET);
        let mut buffer = Vec::new();
        Palette::write_colored(&mut buffer, "NOTICE").unwrap();
        assert_eq!(buffer, format!("{RESET}NOTICE{RESET}").as_bytes());
    }

    #[test]
    fn uncolored_lines_have_no_escapes() {
        let format = LineFormat::new(Some("app"), true);
        for severity in Severity::ALL {
            assert!(!format
                .render(severity, "tgt", &format_args!("msg"), false)
                .contains('\x1b'));
        }
    }
}
