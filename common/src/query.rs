//! 日付によるメディア検索

use crate::catalog::MediaCatalog;

/// 指定日に一致するファイル名をカタログ順で返す
///
/// 一致なしは空のVec（エラーではない）
pub fn for_date(year: i32, month: u32, day: u32, catalog: &MediaCatalog) -> Vec<String> {
    catalog
        .iter()
        .filter(|e| e.date.year == year && e.date.month == month && e.date.day == day)
        .map(|e| e.filename.clone())
        .collect()
}

/// 指定日のサムネイル（カタログ順で最初の1件）
pub fn first_for_date(year: i32, month: u32, day: u32, catalog: &MediaCatalog) -> Option<&str> {
    catalog
        .iter()
        .find(|e| e.date.year == year && e.date.month == month && e.date.day == day)
        .map(|e| e.filename.as_str())
}
