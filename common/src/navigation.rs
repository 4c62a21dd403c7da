//! 月送り
//!
//! 候補の年月を計算して表示範囲内なら返す。範囲外なら None を返し、
//! 呼び出し側はカーソルを変更しない（ボタンは無効表示）。

use crate::range::DateRange;
use crate::types::YearMonth;

/// カーソルを `delta` か月動かした年月（年の繰り上がり・繰り下がり込み）
pub fn step_month(cursor: YearMonth, delta: i32, range: &DateRange) -> Option<YearMonth> {
    let candidate = YearMonth::from_ordinal(cursor.ordinal() + delta as i64)?;
    range.contains(candidate).then_some(candidate)
}

/// 前月/翌月ボタンの有効状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavControls {
    pub can_go_prev: bool,
    pub can_go_next: bool,
}

impl NavControls {
    /// 両方向を試算する（カーソルは変更しない）
    pub fn probe(cursor: YearMonth, range: &DateRange) -> Self {
        Self {
            can_go_prev: step_month(cursor, -1, range).is_some(),
            can_go_next: step_month(cursor, 1, range).is_some(),
        }
    }
}
