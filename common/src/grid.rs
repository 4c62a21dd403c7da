//! 月グリッド生成
//!
//! 月初の曜日（日曜=0）だけ空白セルを並べ、その後に1日〜月末の日付セルを並べる。
//! 7列への折り返しは表示側で行う（`rows` はその補助）。

use crate::catalog::MediaCatalog;
use crate::query;
use crate::types::{CalendarCell, YearMonth};
use chrono::{Datelike, NaiveDate};

/// 1週間の列数
pub const GRID_COLUMNS: usize = 7;

/// 曜日ヘッダー（日曜始まり）
pub const WEEKDAY_LABELS: [&str; GRID_COLUMNS] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// 月の日数（翌月1日の前日 = 翌月の「0日」）
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let ym = YearMonth::new(year, month)?;
    let next = YearMonth::from_ordinal(ym.ordinal() + 1)?;
    let next_first = NaiveDate::from_ymd_opt(next.year, next.month, 1)?;
    next_first.pred_opt().map(|last| last.day())
}

/// 月初より前の空白セル数（日曜=0）
pub fn leading_blanks(year: i32, month: u32) -> Option<usize> {
    let first = YearMonth::new(year, month)?.first_day()?;
    Some(first.weekday().num_days_from_sunday() as usize)
}

/// 月グリッドを生成
///
/// 長さは `leading_blanks + days_in_month`。不正な月は空のグリッド。
/// chrono の `NaiveDate` が扱えない年（およそ ±262143 の外）も空になる。
pub fn build(year: i32, month: u32, catalog: &MediaCatalog) -> Vec<CalendarCell> {
    let (Some(blanks), Some(days)) = (leading_blanks(year, month), days_in_month(year, month)) else {
        return Vec::new();
    };

    let mut cells = Vec::with_capacity(blanks + days as usize);
    cells.extend(std::iter::repeat(CalendarCell::Blank).take(blanks));
    cells.extend((1..=days).map(|day| CalendarCell::Day {
        day,
        filenames: query::for_date(year, month, day, catalog),
    }));
    cells
}

/// 7列ごとの週に分割（最終週は空白で埋める）
pub fn rows(cells: &[CalendarCell]) -> Vec<Vec<CalendarCell>> {
    cells
        .chunks(GRID_COLUMNS)
        .map(|week| {
            let mut week = week.to_vec();
            week.resize(GRID_COLUMNS, CalendarCell::Blank);
            week
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MediaDate, MediaEntry, MediaKind};

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2025, 2), Some(28));
        assert_eq!(days_in_month(1900, 2), Some(28));
        assert_eq!(days_in_month(2000, 2), Some(29));
        assert_eq!(days_in_month(2024, 4), Some(30));
        assert_eq!(days_in_month(2024, 12), Some(31));
        assert_eq!(days_in_month(2024, 13), None);
    }

    #[test]
    fn test_year_outside_chrono_range_gives_empty_grid() {
        let catalog = MediaCatalog::default();
        assert_eq!(days_in_month(300_000, 1), None);
        assert_eq!(leading_blanks(-300_000, 6), None);
        assert!(build(300_000, 1, &catalog).is_empty());
        assert!(build(-300_000, 6, &catalog).is_empty());
    }

    #[test]
    fn test_leading_blanks() {
        // 2024-12-01 は日曜
        assert_eq!(leading_blanks(2024, 12), Some(0));
        // 2025-01-01 は水曜
        assert_eq!(leading_blanks(2025, 1), Some(3));
        // 2024-06-01 は土曜
        assert_eq!(leading_blanks(2024, 6), Some(6));
    }

    #[test]
    fn test_grid_length_for_all_months() {
        let catalog = MediaCatalog::default();
        for year in [1900, 2000, 2023, 2024, 2025, 2100] {
            for month in 1..=12 {
                let cells = build(year, month, &catalog);
                let expected = leading_blanks(year, month).unwrap() + days_in_month(year, month).unwrap() as usize;
                assert_eq!(cells.len(), expected, "{}-{}", year, month);
                assert!(cells.iter().take_while(|c| c.is_blank()).count() == leading_blanks(year, month).unwrap());
            }
        }
    }

    #[test]
    fn test_build_december_2024() {
        let catalog = MediaCatalog::from_entries(vec![MediaEntry::new(
            "20241208_012209.jpg",
            MediaDate::new(2024, 12, 8).unwrap(),
            MediaKind::Image,
        )]);

        let cells = build(2024, 12, &catalog);
        for cell in &cells {
            match cell {
                CalendarCell::Day { day: 8, filenames } => {
                    assert_eq!(filenames, &vec!["20241208_012209.jpg".to_string()]);
                }
                CalendarCell::Day { filenames, .. } => assert!(filenames.is_empty()),
                CalendarCell::Blank => {}
            }
        }
        assert_eq!(cells.iter().filter(|c| !c.is_blank()).count(), 31);
    }

    #[test]
    fn test_build_is_deterministic() {
        let catalog = MediaCatalog::from_entries(vec![
            MediaEntry::new("a.jpg", MediaDate::new(2025, 3, 3).unwrap(), MediaKind::Image),
            MediaEntry::new("b.mp4", MediaDate::new(2025, 3, 3).unwrap(), MediaKind::Video),
        ]);
        assert_eq!(build(2025, 3, &catalog), build(2025, 3, &catalog));
    }

    #[test]
    fn test_build_invalid_month_is_empty() {
        assert!(build(2024, 0, &MediaCatalog::default()).is_empty());
        assert!(build(2024, 13, &MediaCatalog::default()).is_empty());
    }

    #[test]
    fn test_rows_pads_last_week() {
        // 2025-01: 空白3 + 31日 = 34 → 5週
        let cells = build(2025, 1, &MediaCatalog::default());
        let weeks = rows(&cells);
        assert_eq!(weeks.len(), 5);
        assert!(weeks.iter().all(|w| w.len() == GRID_COLUMNS));
        assert_eq!(weeks[4][5].day(), Some(31));
        assert_eq!(weeks[4][6], CalendarCell::Blank);
        assert_eq!(weeks[0][3].day(), Some(1));
    }
}
