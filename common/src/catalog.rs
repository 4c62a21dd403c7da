//! メディアカタログ
//!
//! 起動時に一度だけ読み込み、以降は読み取り専用。
//! 旧形式（imageMetadata: type無し）と新形式（mediaMetadata: type有り）の
//! どちらもここで MediaEntry の列に正規化する。

use crate::error::{Error, Result};
use crate::query;
use crate::types::{MediaDate, MediaEntry, MediaKind, YearMonth};
use serde::Deserialize;
use serde_json::Value;
use std::collections::{BTreeSet, HashSet};

/// 読み込み時の生データ（欠損を許容）
#[derive(Debug, Deserialize)]
struct RawEntry {
    filename: Option<String>,
    date: Option<RawDate>,
    #[serde(rename = "type")]
    kind: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawDate {
    year: Option<i64>,
    month: Option<i64>,
    day: Option<i64>,
}

impl RawDate {
    fn normalize(&self) -> Option<MediaDate> {
        let year = i32::try_from(self.year?).ok()?;
        let month = u32::try_from(self.month?).ok()?;
        let day = u32::try_from(self.day?).ok()?;
        MediaDate::new(year, month, day)
    }
}

/// メディアカタログ（カタログ順を保持）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaCatalog {
    entries: Vec<MediaEntry>,
}

impl MediaCatalog {
    /// エントリ列から構築
    ///
    /// 日付が不正なもの、ファイル名が空のもの、重複したファイル名はスキップする
    pub fn from_entries(entries: impl IntoIterator<Item = MediaEntry>) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::new();

        for entry in entries {
            if entry.filename.trim().is_empty() || !entry.date.is_valid() {
                tracing::warn!(filename = %entry.filename, "skipping catalog entry with invalid date");
                continue;
            }
            if !seen.insert(entry.filename.clone()) {
                tracing::warn!(filename = %entry.filename, "skipping duplicate catalog entry");
                continue;
            }
            kept.push(entry);
        }

        Self { entries: kept }
    }

    /// JSON値の配列から構築（不正なエントリはスキップ）
    pub fn from_values(values: &[Value]) -> Self {
        let entries = values.iter().enumerate().filter_map(|(index, value)| {
            let entry = normalize_value(value);
            if entry.is_none() {
                tracing::warn!(index, "skipping malformed catalog entry");
            }
            entry
        });
        Self::from_entries(entries.collect::<Vec<_>>())
    }

    /// 文字列から読み込み
    ///
    /// 受け付ける形式:
    /// 1. JSON配列 `[...]`
    /// 2. `{"mediaMetadata": [...], "imageMetadata": [...]}`（mediaMetadataが空でなければ優先）
    /// 3. JSファイル `const imageMetadata = [...];`
    pub fn from_json_str(content: &str) -> Result<Self> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        let value: Value = if trimmed.starts_with('[') || trimmed.starts_with('{') {
            serde_json::from_str(trimmed)?
        } else {
            serde_json::from_str(extract_array(trimmed)?)?
        };

        match value {
            Value::Array(items) => Ok(Self::from_values(&items)),
            Value::Object(map) => {
                let pick = |key: &str| match map.get(key) {
                    Some(Value::Array(items)) if !items.is_empty() => Some(items),
                    _ => None,
                };
                let items = pick("mediaMetadata").or_else(|| pick("imageMetadata"));
                Ok(items.map(|items| Self::from_values(items)).unwrap_or_default())
            }
            _ => Err(Error::Parse("カタログは配列またはオブジェクトである必要があります".into())),
        }
    }

    /// 正規形（type付き配列）でJSON出力
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }

    pub fn entries(&self) -> &[MediaEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MediaEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, filename: &str) -> Option<&MediaEntry> {
        self.entries.iter().find(|e| e.filename == filename)
    }

    /// 指定日のファイル名一覧（カタログ順）
    pub fn for_date(&self, year: i32, month: u32, day: u32) -> Vec<String> {
        query::for_date(year, month, day, self)
    }

    /// メディアが存在する年月の一覧（昇順）
    pub fn months_with_media(&self) -> Vec<YearMonth> {
        self.entries
            .iter()
            .map(|e| e.date.year_month())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// 種別ごとの件数 (画像, 動画)
    pub fn count_by_kind(&self) -> (usize, usize) {
        let videos = self.entries.iter().filter(|e| e.kind == MediaKind::Video).count();
        (self.entries.len() - videos, videos)
    }
}

impl<'a> IntoIterator for &'a MediaCatalog {
    type Item = &'a MediaEntry;
    type IntoIter = std::slice::Iter<'a, MediaEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn normalize_value(value: &Value) -> Option<MediaEntry> {
    let raw: RawEntry = serde_json::from_value(value.clone()).ok()?;
    let filename = raw.filename.filter(|f| !f.trim().is_empty())?;
    let date = raw.date?.normalize()?;
    let kind = match raw.kind {
        Some(kind) => kind.parse().ok()?,
        None => MediaKind::Image,
    };
    Some(MediaEntry { filename, date, kind })
}

/// JSファイルから配列リテラル部分を抽出
fn extract_array(content: &str) -> Result<&str> {
    if let Some(start) = content.find('[') {
        if let Some(end) = content.rfind(']') {
            if end >= start {
                return Ok(&content[start..=end]);
            }
        }
    }
    Err(Error::Parse("配列が見つかりません".into()))
}
