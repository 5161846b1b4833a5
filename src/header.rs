// src/header.rs
//! ページ見出しに使う日時表記とファイル名

use std::fs::Metadata;
use std::path::Path;

use chrono::{DateTime, Datelike, Local, NaiveDateTime, Timelike};

/// 各ページ上部に出す入力ごとの情報
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageHeader {
    pub file_name: String,
    pub timestamp: String,
}

impl PageHeader {
    #[must_use]
    pub fn new(file_name: impl Into<String>, modified: NaiveDateTime) -> Self {
        Self {
            file_name: file_name.into(),
            timestamp: format_timestamp(modified),
        }
    }
}

/// `Tuesday  5 March 2024 at 03:04:05 PM` 形式
///
/// ちょうど 0 時と 12 時は `Monday 1 January 2024 at 12 midnight` のように書く。
#[must_use]
pub fn format_timestamp(dt: NaiveDateTime) -> String {
    let weekday = dt.format("%A");
    let month = dt.format("%B");
    if dt.minute() == 0 && dt.second() == 0 && (dt.hour() == 0 || dt.hour() == 12) {
        let noon = if dt.hour() == 0 { "12 midnight" } else { "12 noon" };
        return format!("{weekday} {} {month} {:04} at {noon}", dt.day(), dt.year());
    }
    let (pm, hour) = dt.hour12();
    format!(
        "{weekday}  {} {month} {:04} at {hour:02}:{:02}:{:02} {}",
        dt.day(),
        dt.year(),
        dt.minute(),
        dt.second(),
        if pm { "PM" } else { "AM" }
    )
}

/// プロローグの `%%CreationDate` 用 (`Tuesday March 5 15:04:05 2024`)
#[must_use]
pub fn creation_date(dt: NaiveDateTime) -> String {
    dt.format("%A %B %-d %H:%M:%S %Y").to_string()
}

/// ファイルの更新日時 (取れなければ現在時刻)
#[must_use]
pub fn modified_time(meta: Option<&Metadata>) -> NaiveDateTime {
    meta.and_then(|m| m.modified().ok())
        .map_or_else(Local::now, DateTime::<Local>::from)
        .naive_local()
}

/// 見出しに出すファイル名 (可能なら絶対パス)
#[must_use]
pub fn display_name(path: &Path) -> String {
    std::fs::canonicalize(path)
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .and_then(|date| date.and_hms_opt(h, mi, s))
            .unwrap()
    }

    #[test]
    fn test_afternoon() {
        assert_eq!(
            format_timestamp(at(2024, 3, 5, 15, 4, 5)),
            "Tuesday  5 March 2024 at 03:04:05 PM"
        );
    }

    #[test]
    fn test_just_after_midnight_is_twelve_am() {
        assert_eq!(
            format_timestamp(at(2024, 3, 5, 0, 0, 1)),
            "Tuesday  5 March 2024 at 12:00:01 AM"
        );
    }

    #[test]
    fn test_midnight_and_noon() {
        assert_eq!(
            format_timestamp(at(2024, 1, 1, 0, 0, 0)),
            "Monday 1 January 2024 at 12 midnight"
        );
        assert_eq!(
            format_timestamp(at(2024, 1, 1, 12, 0, 0)),
            "Monday 1 January 2024 at 12 noon"
        );
        assert_eq!(
            format_timestamp(at(2024, 1, 1, 12, 30, 0)),
            "Monday  1 January 2024 at 12:30:00 PM"
        );
    }

    #[test]
    fn test_creation_date() {
        assert_eq!(creation_date(at(2024, 3, 5, 15, 4, 5)), "Tuesday March 5 15:04:05 2024");
    }
}
