//! 端末向けの月カレンダー表示
//!
//! セル表記:
//! - `  8+3` 読み込み済み（3件）
//! - `  8?3` 読み込み中・未確認
//! - `  8! ` 読み込み失敗
//! - `  8  ` メディアなし

use photo_calendar_common::{
    grid, CalendarCell, CalendarState, LoadStatus, Thumbnail, WEEKDAY_LABELS,
};
use std::fmt::Write;

const CELL_WIDTH: usize = 6;

/// 月カレンダーを文字列で描画
pub fn render_month<H>(state: &CalendarState<H>) -> String {
    let mut out = String::new();
    let controls = state.controls();
    let width = CELL_WIDTH * WEEKDAY_LABELS.len();

    let title = format!(
        "{} {} {}",
        if controls.can_go_prev { "◀" } else { " " },
        state.month_label(),
        if controls.can_go_next { "▶" } else { " " },
    );
    let _ = writeln!(out, "{:^width$}", title, width = width);

    for label in WEEKDAY_LABELS {
        let _ = write!(out, "{:>width$}", label, width = CELL_WIDTH - 1);
        out.push(' ');
    }
    out.push('\n');

    let cells = state.grid();
    for week in grid::rows(&cells) {
        for cell in &week {
            out.push_str(&render_cell(state, cell));
        }
        out.push('\n');
    }

    let banners = state.visible_banners();
    if !banners.is_empty() {
        out.push('\n');
        for banner in banners {
            match banner.day {
                Some(day) => {
                    let _ = writeln!(out, "  [{}日] {}", day, banner.text);
                }
                None => {
                    let _ = writeln!(out, "  [月] {}", banner.text);
                }
            }
        }
    }

    out
}

fn render_cell<H>(state: &CalendarState<H>, cell: &CalendarCell) -> String {
    let Some(day) = cell.day() else {
        return " ".repeat(CELL_WIDTH);
    };

    let marker = match state.thumbnail(cell) {
        Thumbnail::Empty => "  ".to_string(),
        Thumbnail::Ready { count, .. } => format!("+{}", count_label(count)),
        Thumbnail::Placeholder { status: Some(LoadStatus::Failed), .. } => "! ".to_string(),
        Thumbnail::Placeholder { count, .. } => format!("?{}", count_label(count)),
    };
    format!("{:>3}{} ", day, marker)
}

/// 件数は1桁に丸める（10件以上は `*`）
fn count_label(count: usize) -> String {
    if count < 10 {
        count.to_string()
    } else {
        "*".to_string()
    }
}

/// メディアのある日の一覧
pub fn render_day_list<H>(state: &CalendarState<H>) -> String {
    let mut out = String::new();
    for cell in state.grid() {
        let (Some(day), false) = (cell.day(), cell.filenames().is_empty()) else {
            continue;
        };
        let _ = writeln!(out, "  {:>2}日: {}件 ({})", day, cell.filenames().len(), cell.filenames().join(", "));
    }
    out
}
