//! カレンダーの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - MediaEntry: カタログの1件（ファイル名・撮影日・種別）
//! - YearMonth: 表示中の年月（カーソル）
//! - CalendarCell: 月グリッドの1マス

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 月名（英語表記）
pub const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// 動画として扱う拡張子
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "wmv"];

/// メディア種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Image,
    Video,
}

impl MediaKind {
    /// 拡張子から種別を推定する
    pub fn from_filename(filename: &str) -> Self {
        let ext = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }

    /// セル左上に出す種別アイコン
    pub fn icon(&self) -> &'static str {
        match self {
            MediaKind::Image => "🖼️",
            MediaKind::Video => "🎬",
        }
    }
}

impl std::str::FromStr for MediaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "image" => Ok(MediaKind::Image),
            "video" => Ok(MediaKind::Video),
            _ => Err(format!("Unknown media type: {}. Use image or video", s)),
        }
    }
}

/// 撮影日
///
/// `new` を通したものは必ず実在する日付（先発グレゴリオ暦）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MediaDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl MediaDate {
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(|_| Self { year, month, day })
    }

    pub fn is_valid(&self) -> bool {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day).is_some()
    }

    pub fn year_month(&self) -> YearMonth {
        YearMonth { year: self.year, month: self.month }
    }
}

impl From<NaiveDate> for MediaDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl fmt::Display for MediaDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// カタログの1件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaEntry {
    pub filename: String,
    pub date: MediaDate,
    #[serde(rename = "type")]
    pub kind: MediaKind,
}

impl MediaEntry {
    pub fn new(filename: impl Into<String>, date: MediaDate, kind: MediaKind) -> Self {
        Self {
            filename: filename.into(),
            date,
            kind,
        }
    }
}

/// 年月（表示中のカーソル、表示範囲の境界）
///
/// フィールド順により `Ord` は時系列順になる
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// 月初日
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// 西暦0年1月からの通算月数（月の繰り上がり計算用）
    pub(crate) fn ordinal(&self) -> i64 {
        self.year as i64 * 12 + (self.month as i64 - 1)
    }

    pub(crate) fn from_ordinal(ordinal: i64) -> Option<Self> {
        let year = i32::try_from(ordinal.div_euclid(12)).ok()?;
        let month = ordinal.rem_euclid(12) as u32 + 1;
        Some(Self { year, month })
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES
            .get(self.month.wrapping_sub(1) as usize)
            .copied()
            .unwrap_or("")
    }

    /// 表示用ラベル（例: "December 2024"）
    pub fn label(&self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }
}

impl From<NaiveDate> for YearMonth {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl std::str::FromStr for YearMonth {
    type Err = String;

    /// "YYYY-MM" 形式
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| format!("Invalid year-month: {}. Use YYYY-MM", s))?;
        let year: i32 = year
            .parse()
            .map_err(|_| format!("Invalid year: {}", year))?;
        let month: u32 = month
            .parse()
            .map_err(|_| format!("Invalid month: {}", month))?;
        YearMonth::new(year, month).ok_or_else(|| format!("Month out of range: {}", month))
    }
}

/// 月グリッドの1マス
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarCell {
    /// 月初より前の空白
    Blank,
    /// 日付セル（その日のファイル名をカタログ順で保持）
    Day { day: u32, filenames: Vec<String> },
}

impl CalendarCell {
    pub fn is_blank(&self) -> bool {
        matches!(self, CalendarCell::Blank)
    }

    pub fn day(&self) -> Option<u32> {
        match self {
            CalendarCell::Blank => None,
            CalendarCell::Day { day, .. } => Some(*day),
        }
    }

    pub fn filenames(&self) -> &[String] {
        match self {
            CalendarCell::Blank => &[],
            CalendarCell::Day { filenames, .. } => filenames,
        }
    }

    /// サムネイルに使うファイル（その日の先頭）
    pub fn thumbnail(&self) -> Option<&str> {
        self.filenames().first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_kind_from_filename() {
        assert_eq!(MediaKind::from_filename("20241208_012209.jpg"), MediaKind::Image);
        assert_eq!(MediaKind::from_filename("clip.MP4"), MediaKind::Video);
        assert_eq!(MediaKind::from_filename("clip.mov"), MediaKind::Video);
        assert_eq!(MediaKind::from_filename("noext"), MediaKind::Image);
    }

    #[test]
    fn test_media_kind_serialize() {
        let json = serde_json::to_string(&MediaKind::Video).expect("シリアライズ失敗");
        assert_eq!(json, "\"video\"");
        assert_eq!("Image".parse::<MediaKind>(), Ok(MediaKind::Image));
        assert!("audio".parse::<MediaKind>().is_err());
    }

    #[test]
    fn test_media_date_validation() {
        assert!(MediaDate::new(2024, 2, 29).is_some());
        assert!(MediaDate::new(2025, 2, 29).is_none());
        assert!(MediaDate::new(2024, 13, 1).is_none());
        assert!(MediaDate::new(2024, 4, 31).is_none());
    }

    #[test]
    fn test_media_entry_serialize() {
        let entry = MediaEntry::new(
            "20241208_012209.jpg",
            MediaDate::new(2024, 12, 8).unwrap(),
            MediaKind::Image,
        );
        let json = serde_json::to_string(&entry).expect("シリアライズ失敗");
        assert!(json.contains("\"filename\":\"20241208_012209.jpg\""));
        assert!(json.contains("\"type\":\"image\""));
        assert!(json.contains("\"month\":12"));
    }

    #[test]
    fn test_year_month_ordering() {
        let may = YearMonth::new(2024, 5).unwrap();
        let dec = YearMonth::new(2024, 12).unwrap();
        let jan = YearMonth::new(2025, 1).unwrap();
        assert!(may < dec);
        assert!(dec < jan);
    }

    #[test]
    fn test_year_month_ordinal_roundtrip_across_year() {
        let dec = YearMonth::new(2024, 12).unwrap();
        assert_eq!(YearMonth::from_ordinal(dec.ordinal() + 1), YearMonth::new(2025, 1));
        let jan = YearMonth::new(2025, 1).unwrap();
        assert_eq!(YearMonth::from_ordinal(jan.ordinal() - 1), YearMonth::new(2024, 12));
    }

    #[test]
    fn test_year_month_label_and_parse() {
        let ym: YearMonth = "2024-12".parse().expect("パース失敗");
        assert_eq!(ym.label(), "December 2024");
        assert_eq!(ym.to_string(), "2024-12");
        assert!("2024-13".parse::<YearMonth>().is_err());
        assert!("202412".parse::<YearMonth>().is_err());
    }

    #[test]
    fn test_calendar_cell_accessors() {
        let cell = CalendarCell::Day {
            day: 8,
            filenames: vec!["a.jpg".to_string(), "b.jpg".to_string()],
        };
        assert_eq!(cell.day(), Some(8));
        assert_eq!(cell.thumbnail(), Some("a.jpg"));
        assert!(!cell.is_blank());

        assert!(CalendarCell::Blank.filenames().is_empty());
        assert_eq!(CalendarCell::Blank.thumbnail(), None);
    }
}
