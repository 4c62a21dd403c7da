//! 旧メタデータダンプの読み込み
//!
//! 以下の形式のテキストからカタログを作る:
//!
//! ```text
//! === Metadata for 20241208_012209.jpg ===
//! Make                 |samsung
//! Date and Time        |2024:12:08 01:22:09
//! ```

use crate::catalog::MediaCatalog;
use crate::types::{MediaDate, MediaEntry, MediaKind};

const HEADER_PREFIX: &str = "=== Metadata for";
const DATE_LABEL: &str = "Date and Time";

/// ダンプの1ファイル分
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyRecord {
    pub filename: String,
    pub date: Option<MediaDate>,
}

/// ダンプ全体をパース
///
/// 日付行が複数あれば最後のものを採用する
pub fn parse_metadata_dump(content: &str) -> Vec<LegacyRecord> {
    let mut records = Vec::new();
    let mut current: Option<LegacyRecord> = None;

    for line in content.lines() {
        if line.starts_with(HEADER_PREFIX) {
            if let Some(record) = current.take() {
                records.push(record);
            }
            current = Some(LegacyRecord {
                filename: parse_header(line),
                date: None,
            });
        } else if line.contains(DATE_LABEL) {
            if let (Some(record), Some(date)) = (current.as_mut(), parse_date_line(line)) {
                record.date = Some(date);
            }
        }
    }

    if let Some(record) = current {
        records.push(record);
    }
    records
}

/// レコードをカタログに変換（日付なし・不正はスキップ）
pub fn to_catalog(records: &[LegacyRecord]) -> MediaCatalog {
    let entries = records.iter().filter_map(|r| {
        let date = r.date?;
        Some(MediaEntry::new(r.filename.clone(), date, MediaKind::from_filename(&r.filename)))
    });
    MediaCatalog::from_entries(entries.collect::<Vec<_>>())
}

fn parse_header(line: &str) -> String {
    line.trim()
        .trim_start_matches("===")
        .trim_end_matches("===")
        .trim()
        .trim_start_matches("Metadata for")
        .trim()
        .to_string()
}

/// `Date and Time    |YYYY:MM:DD ...` から日付を取り出す
fn parse_date_line(line: &str) -> Option<MediaDate> {
    let start = line.find(DATE_LABEL)? + DATE_LABEL.len();
    let rest = &line[start..];

    // ラベルと `|` の間は1文字以上の空白のみ
    let value = rest.trim_start();
    if value.len() == rest.len() {
        return None;
    }
    let value = value.strip_prefix('|')?;

    let date_str = value.get(..10)?;
    let mut parts = date_str.split(':');
    let year = parts.next()?;
    let month = parts.next()?;
    let day = parts.next()?;
    if year.len() != 4 || month.len() != 2 || day.len() != 2 {
        return None;
    }
    MediaDate::new(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}
