//! 表示可能な年月の範囲

use crate::error::{Error, Result};
use crate::types::YearMonth;
use serde::{Deserialize, Serialize};

/// 表示範囲（両端を含む）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub min: YearMonth,
    pub max: YearMonth,
}

impl DateRange {
    pub fn new(min: YearMonth, max: YearMonth) -> Result<Self> {
        if !(1..=12).contains(&min.month) || !(1..=12).contains(&max.month) {
            return Err(Error::Config(format!("月は1〜12で指定してください: {} / {}", min, max)));
        }
        if min > max {
            return Err(Error::Config(format!("表示範囲の開始が終了より後です: {} > {}", min, max)));
        }
        Ok(Self { min, max })
    }

    /// (year, month) が範囲内か
    pub fn in_range(&self, year: i32, month: u32) -> bool {
        match YearMonth::new(year, month) {
            Some(ym) => self.contains(ym),
            None => false,
        }
    }

    pub fn contains(&self, ym: YearMonth) -> bool {
        self.min <= ym && ym <= self.max
    }

    /// 範囲の下限
    pub fn clamp_to_min(&self) -> YearMonth {
        self.min
    }

    /// 初期表示月: 今月が範囲内ならそのまま、範囲外なら下限
    pub fn initial_cursor(&self, today: YearMonth) -> YearMonth {
        if self.contains(today) {
            today
        } else {
            self.clamp_to_min()
        }
    }
}

impl Default for DateRange {
    /// 2024年5月〜2025年5月
    fn default() -> Self {
        Self {
            min: YearMonth { year: 2024, month: 5 },
            max: YearMonth { year: 2025, month: 5 },
        }
    }
}
