//! crates/lvlog/src/format.rs
//! Line layout: severity tag, caller location, and message.
//!
//! Every emitted line has the shape
//!
//! ```text
//! [<tag>] <path, right-aligned to 30>:<line, left-aligned to 3> <message>
//! ```
//!
//! Paths longer than [`PATH_WIDTH`] characters keep their rightmost
//! characters and gain a leading [`ELLIPSIS`].

use std::borrow::Cow;
use std::fmt::{self, Write as _};
use std::panic::Location;

use crate::severity::Severity;

/// Maximum number of path characters printed.
pub const PATH_WIDTH: usize = 30;

/// Minimum width of the line number column.
pub const LINE_WIDTH: usize = 3;

/// Marker printed in front of a truncated path.
pub const ELLIPSIS: &str = "…";

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Source location a message is attributed to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CallSite<'a> {
    file: &'a str,
    line: u32,
}

impl<'a> CallSite<'a> {
    /// Creates a call site from explicit parts.
    #[must_use]
    pub const fn new(file: &'a str, line: u32) -> Self {
        Self { file, line }
    }

    /// Source file path.
    #[must_use]
    pub const fn file(&self) -> &'a str {
        self.file
    }

    /// One-based line number.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }
}

impl CallSite<'static> {
    /// Location of the caller of the enclosing `#[track_caller]` function.
    #[track_caller]
    #[must_use]
    pub fn caller() -> Self {
        Location::caller().into()
    }
}

impl From<&'static Location<'static>> for CallSite<'static> {
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }
}

/// Shortens `path` to its last [`PATH_WIDTH`] characters.
///
/// Paths that already fit are returned unchanged and without the ellipsis.
///
/// # Examples
///
/// ```
/// use lvlog::format::truncate_path;
///
/// assert_eq!(truncate_path("src/main.rs"), "src/main.rs");
/// assert_eq!(
///     truncate_path("/home/build/project/crates/server/src/main.rs"),
///     "…ject/crates/server/src/main.rs"
/// );
/// ```
#[must_use]
pub fn truncate_path(path: &str) -> Cow<'_, str> {
    let count = path.chars().count();
    if count <= PATH_WIDTH {
        return Cow::Borrowed(path);
    }

    let start = path
        .char_indices()
        .nth(count - PATH_WIDTH)
        .map_or(0, |(index, _)| index);
    Cow::Owned(format!("{ELLIPSIS}{}", &path[start..]))
}

/// One line worth of data, borrowed for the duration of a single emit.
#[derive(Clone, Copy)]
pub struct LogRecord<'a> {
    severity: Severity,
    colours: bool,
    site: CallSite<'a>,
    message: &'a dyn fmt::Display,
}

impl<'a> LogRecord<'a> {
    /// Bundles the parts of a line.
    pub fn new(
        severity: Severity,
        colours: bool,
        site: CallSite<'a>,
        message: &'a dyn fmt::Display,
    ) -> Self {
        Self {
            severity,
            colours,
            site,
            message,
        }
    }

    /// Renders the record into an owned line without a terminator.
    ///
    /// Unlike `to_string`, a failing `Display` implementation inside the
    /// message is reported instead of panicking.
    pub fn render(&self) -> Result<String, fmt::Error> {
        let mut line = String::with_capacity(64);
        write!(line, "{self}")?;
        Ok(line)
    }

    fn write_tag(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = self.severity.tag();
        if self.colours {
            write!(
                f,
                "{BOLD}\x1b[{}m{tag}{RESET}",
                self.severity.colour_code()
            )
        } else {
            f.write_str(tag)
        }
    }
}

impl fmt::Display for LogRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        self.write_tag(f)?;
        write!(
            f,
            "] {:>path$}:{:<line$} ",
            truncate_path(self.site.file),
            self.site.line,
            path = PATH_WIDTH,
            line = LINE_WIDTH,
        )?;
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for LogRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogRecord")
            .field("severity", &self.severity)
            .field("colours", &self.colours)
            .field("site", &self.site)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;

    impl fmt::Display for Failing {
        fn fmt(&self, _: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    fn render(severity: Severity, colours: bool, file: &str, line: u32, msg: &str) -> String {
        LogRecord::new(severity, colours, CallSite::new(file, line), &msg)
            .render()
            .expect("plain strings always format")
    }

    #[test]
    fn short_path_is_padded_not_truncated() {
        let line = render(Severity::Info, false, "src/main.rs", 7, "ready");
        assert_eq!(line, format!("[INF] {:>30}:7   ready", "src/main.rs"));
        assert!(!line.contains(ELLIPSIS));
    }

    #[test]
    fn path_of_exactly_thirty_chars_is_verbatim() {
        let path = "a".repeat(PATH_WIDTH);
        assert_eq!(truncate_path(&path), path.as_str());
    }

    #[test]
    fn long_path_keeps_last_thirty_chars() {
        let path = format!("/very/long/prefix/{}", "b".repeat(PATH_WIDTH));
        let truncated = truncate_path(&path);
        assert_eq!(truncated, format!("{ELLIPSIS}{}", "b".repeat(PATH_WIDTH)));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let path = format!("ü{}", "é".repeat(PATH_WIDTH));
        let truncated = truncate_path(&path);
        assert_eq!(truncated.chars().count(), PATH_WIDTH + 1);
        assert!(truncated.ends_with('é'));
    }

    #[test]
    fn wide_line_numbers_are_not_cut() {
        let line = render(Severity::Debug, false, "x.rs", 12345, "m");
        assert!(line.ends_with(":12345 m"));
    }

    #[test]
    fn colours_wrap_only_the_tag() {
        let line = render(Severity::Error, true, "x.rs", 1, "boom");
        assert!(line.starts_with("[\x1b[1m\x1b[91mERR\x1b[0m] "));
        assert!(line.ends_with(" boom"));
    }

    #[test]
    fn message_braces_are_not_interpreted() {
        let line = render(Severity::Warning, false, "x.rs", 1, "100% {done}");
        assert!(line.ends_with(" 100% {done}"));
    }

    #[test]
    fn template_arguments_are_substituted() {
        let line = LogRecord::new(
            Severity::Info,
            false,
            CallSite::new("x.rs", 1),
            &format_args!("{} + {} = {}", 1, 2, 3),
        )
        .render()
        .expect("integers format");
        assert!(line.ends_with(" 1 + 2 = 3"));
    }

    #[test]
    fn failing_display_surfaces_error() {
        let record = LogRecord::new(Severity::Info, false, CallSite::new("x.rs", 1), &Failing);
        assert!(record.render().is_err());
    }

    #[test]
    fn caller_reports_this_file() {
        let site = CallSite::caller();
        assert_eq!(site.file(), file!());
        assert_eq!(site.line(), line!() - 2);
    }
}
