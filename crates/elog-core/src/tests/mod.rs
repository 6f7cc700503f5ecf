mod rotating_file_sink;

use crate::{ManualClock, RotatingFileSink, RotationSettings};

use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;

pub(crate) const PROGRAM: &str = "app";

pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub(crate) fn settings(max_file_size_bytes: u64, max_backup_count: usize) -> RotationSettings {
    RotationSettings {
        max_file_size_bytes,
        max_backup_count,
        buffer_size_bytes: 4096,
    }
}

/// File sink in `dir` whose date is driven by the returned clock.
pub(crate) fn sink_with_clock(
    dir: &Path,
    settings: RotationSettings,
    today: NaiveDate,
) -> (RotatingFileSink, ManualClock) {
    let clock = ManualClock::new(today);
    let sink = RotatingFileSink::new(dir, PROGRAM, settings).with_clock(Arc::new(clock.clone()));
    (sink, clock)
}

pub(crate) fn read_string(path: &Path) -> String {
    String::from_utf8(std::fs::read(path).unwrap()).unwrap()
}

pub(crate) fn file_len(path: &Path) -> u64 {
    std::fs::metadata(path).unwrap().len()
}
