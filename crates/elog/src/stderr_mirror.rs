use crate::CallSite;
use crate::header::format_line;

use std::fmt;
use std::io::Write;

use chrono::{DateTime, Local};
use fern::colors::{Color, ColoredLevelConfig};
use log::Level;

/// Secondary copy of every written line on standard error.
#[derive(Clone)]
pub struct StderrMirror {
    colors: Option<ColoredLevelConfig>,
}

impl StderrMirror {
    pub fn plain() -> Self {
        Self { colors: None }
    }

    /// Level tag colored for a TTY.
    pub fn colored() -> Self {
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);

        Self {
            colors: Some(colors),
        }
    }

    pub fn is_colored(&self) -> bool {
        self.colors.is_some()
    }

    pub fn render(
        &self,
        level: Level,
        now: &DateTime<Local>,
        site: &CallSite<'_>,
        args: fmt::Arguments<'_>,
    ) -> String {
        match self.colors {
            Some(ref colors) => format_line(colors.color(level), now, site, args),
            None => format_line(level, now, site, args),
        }
    }

    /// Best effort; a failing stderr has nowhere left to report to.
    pub fn write(
        &self,
        level: Level,
        now: &DateTime<Local>,
        site: &CallSite<'_>,
        args: fmt::Arguments<'_>,
    ) {
        let line = self.render(level, now, site, args);
        let _ = std::io::stderr().lock().write_all(line.as_bytes());
    }
}
