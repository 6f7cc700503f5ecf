use crate::tests::{date, file_len, read_string, settings, sink_with_clock};
use crate::{LogSink, RotatingFileSink, RotationSettings, SinkError};

use std::fs;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};
use tempfile::TempDir;

// =========================================================================
// Open and Write
// =========================================================================

#[test]
fn given_new_sink_when_nothing_written_then_no_file_open() {
    // Given
    let temp = TempDir::new().unwrap();

    // When
    let (sink, _clock) = sink_with_clock(temp.path(), settings(100, 3), date(2026, 10, 19));

    // Then
    assert_that!(sink.is_open(), eq(false));
    assert_that!(sink.active_date(), eq(None));
    assert_that!(fs::read_dir(temp.path()).unwrap().count(), eq(0));
}

#[test]
fn given_first_write_when_written_then_live_file_opened_for_today() {
    // Given
    let temp = TempDir::new().unwrap();
    let day = date(2026, 10, 19);
    let (mut sink, _clock) = sink_with_clock(temp.path(), settings(100, 3), day);

    // When
    let written = sink.write(b"hello\n").unwrap();
    sink.flush().unwrap();

    // Then
    assert_that!(written, eq(6));
    assert_that!(sink.active_date(), eq(Some(day)));
    assert_that!(sink.bytes_written(), eq(6));
    assert_that!(
        read_string(&temp.path().join("app-2026-10-19.log")),
        eq("hello\n")
    );
}

#[test]
fn given_buffered_write_when_not_flushed_then_file_still_empty() {
    // Given
    let temp = TempDir::new().unwrap();
    let (mut sink, _clock) = sink_with_clock(temp.path(), settings(100, 3), date(2026, 10, 19));

    // When
    sink.write(b"pending\n").unwrap();

    // Then
    let live = sink.active_path().unwrap().to_path_buf();
    assert_that!(file_len(&live), eq(0));
    sink.flush().unwrap();
    assert_that!(read_string(&live), eq("pending\n"));
}

#[test]
fn given_existing_file_when_opened_then_appends() {
    // Given
    let temp = TempDir::new().unwrap();
    let live = temp.path().join("app-2026-10-19.log");
    fs::write(&live, "earlier\n").unwrap();
    let (mut sink, _clock) = sink_with_clock(temp.path(), settings(100, 3), date(2026, 10, 19));

    // When
    sink.write(b"later\n").unwrap();
    sink.flush().unwrap();

    // Then
    assert_that!(read_string(&live), eq("earlier\nlater\n"));
    assert_that!(sink.bytes_written(), eq(6));
}

#[test]
fn given_buffer_smaller_than_payload_when_written_then_reaches_file_without_flush() {
    // Given
    let temp = TempDir::new().unwrap();
    let settings = RotationSettings {
        max_file_size_bytes: 1000,
        max_backup_count: 3,
        buffer_size_bytes: 8,
    };
    let (mut sink, _clock) = sink_with_clock(temp.path(), settings, date(2026, 10, 19));

    // When
    sink.write(b"longer than eight bytes\n").unwrap();

    // Then
    let live = sink.active_path().unwrap().to_path_buf();
    assert_that!(read_string(&live), eq("longer than eight bytes\n"));
}

// =========================================================================
// Flush
// =========================================================================

#[test]
fn given_no_open_file_when_flush_then_ok() {
    let temp = TempDir::new().unwrap();
    let (mut sink, _clock) = sink_with_clock(temp.path(), settings(100, 3), date(2026, 10, 19));

    assert_that!(sink.flush(), ok(anything()));
    assert_that!(sink.is_open(), eq(false));
}

#[test]
fn given_flushed_sink_when_flushed_again_then_content_unchanged() {
    // Given
    let temp = TempDir::new().unwrap();
    let (mut sink, _clock) = sink_with_clock(temp.path(), settings(100, 3), date(2026, 10, 19));
    sink.write(b"once\n").unwrap();
    sink.flush().unwrap();
    let live = sink.active_path().unwrap().to_path_buf();
    let after_first = read_string(&live);

    // When
    sink.flush().unwrap();

    // Then
    assert_that!(read_string(&live), eq(&after_first));
    assert_that!(after_first, eq("once\n"));
}

#[test]
fn given_unflushed_writes_when_sink_dropped_then_bytes_reach_file() {
    // Given
    let temp = TempDir::new().unwrap();
    let (mut sink, _clock) = sink_with_clock(temp.path(), settings(100, 3), date(2026, 10, 19));
    sink.write(b"last words\n").unwrap();

    // When
    drop(sink);

    // Then
    assert_that!(
        read_string(&temp.path().join("app-2026-10-19.log")),
        eq("last words\n")
    );
}

// =========================================================================
// Date Rollover
// =========================================================================

#[test]
fn given_writes_on_two_days_when_date_changes_then_one_live_file_per_day() {
    // Given
    let temp = TempDir::new().unwrap();
    let (mut sink, clock) = sink_with_clock(temp.path(), settings(100, 3), date(2026, 10, 19));
    sink.write(b"monday\n").unwrap();

    // When
    clock.advance_days(1);
    sink.write(b"tuesday\n").unwrap();

    // Then: the old day was flushed on close, before any explicit flush
    assert_that!(
        read_string(&temp.path().join("app-2026-10-19.log")),
        eq("monday\n")
    );
    sink.flush().unwrap();
    assert_that!(
        read_string(&temp.path().join("app-2026-10-20.log")),
        eq("tuesday\n")
    );
    assert_that!(sink.active_date(), eq(Some(date(2026, 10, 20))));
}

#[test]
fn given_large_day_when_date_changes_then_size_counter_restarts_without_rotation() {
    // Given
    let temp = TempDir::new().unwrap();
    let (mut sink, clock) = sink_with_clock(temp.path(), settings(10, 3), date(2026, 10, 19));
    sink.write(b"more than ten bytes\n").unwrap();

    // When
    clock.advance_days(1);
    sink.write(b"next\n").unwrap();
    sink.flush().unwrap();

    // Then
    assert_that!(sink.bytes_written(), eq(5));
    assert_that!(temp.path().join("app-2026-10-20.log.1").exists(), eq(false));
    assert_that!(temp.path().join("app-2026-10-19.log.1").exists(), eq(false));
}

// =========================================================================
// Size Rollover
// =========================================================================

#[test]
fn given_threshold_100_and_three_40_byte_writes_when_next_write_then_rotates_120_bytes() {
    // Given
    let temp = TempDir::new().unwrap();
    let day = date(2026, 10, 19);
    let (mut sink, _clock) = sink_with_clock(temp.path(), settings(100, 10), day);
    let payload = [b'x'; 40];

    // When: three writes stay in the live file, 120 bytes in total
    for _ in 0..3 {
        sink.write(&payload).unwrap();
    }
    assert_that!(sink.bytes_written(), eq(120));
    assert_that!(sink.chain().existing(day).len(), eq(1));

    // When: the fourth write sees 120 > 100
    sink.write(b"fresh\n").unwrap();

    // Then
    let backup = temp.path().join("app-2026-10-19.log.1");
    let live = temp.path().join("app-2026-10-19.log");
    assert_that!(file_len(&backup), eq(120));
    assert_that!(file_len(&live), eq(0));
    sink.flush().unwrap();
    assert_that!(read_string(&live), eq("fresh\n"));
    assert_that!(sink.bytes_written(), eq(6));
}

#[test]
fn given_threshold_exceeded_once_when_rotated_then_exactly_two_files() {
    // Given
    let temp = TempDir::new().unwrap();
    let day = date(2026, 10, 19);
    let (mut sink, _clock) = sink_with_clock(temp.path(), settings(10, 10), day);
    sink.write(b"before rotation\n").unwrap();

    // When
    sink.write(b"after\n").unwrap();
    sink.flush().unwrap();

    // Then
    let existing = sink.chain().existing(day);
    assert_that!(existing.len(), eq(2));
    assert_that!(read_string(&existing[1]), eq("before rotation\n"));
    assert_that!(read_string(&existing[0]), eq("after\n"));
}

#[test]
fn given_depth_two_when_five_rotations_then_only_live_and_first_backup_remain() {
    // Given
    let temp = TempDir::new().unwrap();
    let day = date(2026, 10, 19);
    let (mut sink, _clock) = sink_with_clock(temp.path(), settings(10, 2), day);

    // When: every write after the first triggers a size rotation
    for n in 0..6 {
        sink.write(format!("write number {n}\n").as_bytes()).unwrap();
    }
    sink.flush().unwrap();

    // Then
    let existing = sink.chain().existing(day);
    assert_that!(existing.len(), eq(2));
    assert_that!(temp.path().join("app-2026-10-19.log.2").exists(), eq(false));
    assert_that!(read_string(&existing[1]), eq("write number 4\n"));
    assert_that!(read_string(&existing[0]), eq("write number 5\n"));
}

#[test]
fn given_bytes_at_threshold_when_written_then_no_rotation() {
    // Given
    let temp = TempDir::new().unwrap();
    let day = date(2026, 10, 19);
    let (mut sink, _clock) = sink_with_clock(temp.path(), settings(10, 3), day);
    sink.write(&[b'a'; 10]).unwrap();

    // When
    sink.write(b"b").unwrap();

    // Then
    assert_that!(sink.chain().existing(day).len(), eq(1));
    assert_that!(sink.bytes_written(), eq(11));
}

// =========================================================================
// Failures
// =========================================================================

#[test]
fn given_missing_directory_when_write_then_open_error_and_retry_later_succeeds() {
    // Given
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("not-yet");
    let (mut sink, _clock) = sink_with_clock(&dir, settings(100, 3), date(2026, 10, 19));

    // When
    let result = sink.write(b"dropped\n");

    // Then
    assert_that!(result, err(anything()));
    assert_that!(
        matches!(result.unwrap_err(), SinkError::Open { .. }),
        eq(true)
    );
    assert_that!(sink.is_open(), eq(false));

    // When: the directory appears, the next write opens the file
    fs::create_dir(&dir).unwrap();
    sink.write(b"kept\n").unwrap();
    sink.flush().unwrap();

    // Then
    assert_that!(read_string(&dir.join("app-2026-10-19.log")), eq("kept\n"));
}

#[test]
fn given_blocked_backup_slot_when_size_rollover_then_write_rejected_and_no_file_open() {
    // Given
    let temp = TempDir::new().unwrap();
    let day = date(2026, 10, 19);
    let (mut sink, _clock) = sink_with_clock(temp.path(), settings(5, 2), day);
    sink.write(b"first write\n").unwrap();
    let blocker = temp.path().join("app-2026-10-19.log.1");
    fs::create_dir(&blocker).unwrap();
    fs::write(blocker.join("keep"), "x").unwrap();

    // When
    let result = sink.write(b"second\n");

    // Then
    assert_that!(result, err(anything()));
    assert_that!(result.unwrap_err().is_rotation(), eq(true));
    assert_that!(sink.is_open(), eq(false));
    assert_that!(
        read_string(&temp.path().join("app-2026-10-19.log")),
        eq("first write\n")
    );
}

#[test]
fn given_blocked_backup_slot_cleared_when_next_write_then_rotation_completes() {
    // Given
    let temp = TempDir::new().unwrap();
    let day = date(2026, 10, 19);
    let (mut sink, _clock) = sink_with_clock(temp.path(), settings(5, 2), day);
    sink.write(b"first write\n").unwrap();
    let blocker = temp.path().join("app-2026-10-19.log.1");
    fs::create_dir(&blocker).unwrap();
    fs::write(blocker.join("keep"), "x").unwrap();
    let _ = sink.write(b"rejected\n");

    // When
    fs::remove_dir_all(&blocker).unwrap();
    sink.write(b"third\n").unwrap();
    sink.flush().unwrap();

    // Then
    assert_that!(read_string(&blocker), eq("first write\n"));
    assert_that!(
        read_string(&temp.path().join("app-2026-10-19.log")),
        eq("third\n")
    );
}

#[cfg(target_os = "linux")]
#[test]
fn given_full_device_when_write_then_write_error_and_next_write_reopens() {
    // Given
    let temp = TempDir::new().unwrap();
    let live = temp.path().join("app-2026-10-19.log");
    std::os::unix::fs::symlink("/dev/full", &live).unwrap();
    let mut small_buffer = settings(100, 3);
    small_buffer.buffer_size_bytes = 1;
    let (mut sink, _clock) = sink_with_clock(temp.path(), small_buffer, date(2026, 10, 19));

    // When
    let result = sink.write(b"lost\n");

    // Then
    assert_that!(
        matches!(result, Err(SinkError::Write { .. })),
        eq(true)
    );
    assert_that!(sink.bytes_written(), eq(0));
    assert_that!(sink.is_open(), eq(false));

    // When: the link is replaced by a regular file, the next write reopens it
    fs::remove_file(&live).unwrap();
    sink.write(b"kept\n").unwrap();
    sink.flush().unwrap();

    // Then
    assert_that!(sink.bytes_written(), eq(5));
    assert_that!(read_string(&live), eq("kept\n"));
}

#[test]
fn given_default_settings_when_created_then_uses_documented_thresholds() {
    let sink = RotatingFileSink::new("/tmp", "svc", RotationSettings::default());

    assert_that!(sink.settings().max_file_size_bytes, eq(1024 * 1024 * 1024));
    assert_that!(sink.settings().max_backup_count, eq(10));
    assert_that!(sink.settings().buffer_size_bytes, eq(1024 * 1024));
    assert_that!(sink.chain().program(), eq("svc"));
}
