use crate::TIMESTAMP_FORMAT;

use std::fmt::{self, Display};

use chrono::{DateTime, Local};

/// Source location shown in the line header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite<'a> {
    pub file: &'a str,
    pub line: u32,
}

impl<'a> CallSite<'a> {
    /// Keeps only the file name; an unknown file renders as `???`, an unknown
    /// line as 1.
    pub fn new(file: Option<&'a str>, line: Option<u32>) -> Self {
        match file {
            Some(path) => Self {
                file: path.rsplit(['/', '\\']).next().unwrap_or(path),
                line: line.unwrap_or(1),
            },
            None => Self {
                file: "???",
                line: 1,
            },
        }
    }
}

/// Render one complete line, trailing newline included.
pub fn format_line(
    level: impl Display,
    now: &DateTime<Local>,
    site: &CallSite<'_>,
    args: fmt::Arguments<'_>,
) -> String {
    format!(
        "[{level}][{time}][file:{file} line:{line}] {args}\n",
        time = now.format(TIMESTAMP_FORMAT),
        file = site.file,
        line = site.line,
    )
}
