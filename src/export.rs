//! CSV export of the current event log.
//!
//! Mirrors the device web UI's download: fixed `Timestamp,Touch_Pad,User`
//! column order, every field quoted, filename stamped with the current local
//! date. Exporting an empty log is a user error, not a crash.

use crate::error::{Result, TouchdashError};
use crate::model::TouchEvent;
use chrono::{Local, NaiveDate};
use csv::{QuoteStyle, WriterBuilder};
use std::path::{Path, PathBuf};

/// Filename for an export performed on the given date.
pub fn export_filename(date: NaiveDate) -> String {
    format!("touch_logs_{}.csv", date.format("%Y-%m-%d"))
}

/// Serialize the event log to `<dir>/touch_logs_<YYYY-MM-DD>.csv`.
///
/// Fails with [`TouchdashError::NoData`] when the log is empty; no file is
/// created in that case. Returns the path of the written file on success.
pub fn export_csv(events: &[TouchEvent], dir: &Path) -> Result<PathBuf> {
    if events.is_empty() {
        return Err(TouchdashError::NoData);
    }

    let path = dir.join(export_filename(Local::now().date_naive()));
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_path(&path)?;

    writer.write_record(["Timestamp", "Touch_Pad", "User"])?;
    for event in events {
        writer.write_record([&event.timestamp, &event.pad, &event.user])?;
    }
    writer
        .flush()
        .map_err(|e| TouchdashError::export(e.to_string()))?;

    Ok(path)
}
