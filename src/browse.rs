//! 対話的なカレンダー閲覧

use crate::error::{CalendarError, Result};
use crate::loader::AssetHandle;
use crate::render;
use dialoguer::Input;
use photo_calendar_common::{CalendarState, LoadStatus, ViewerCommand, YearMonth};

/// 月表示での操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseAction {
    Previous,
    Next,
    /// 日付を開く
    Open(u32),
    /// 指定年月へ移動
    Jump(YearMonth),
    Quit,
    Unknown(String),
}

/// 入力文字列から月表示の操作へ
pub fn parse_browse_input(input: &str) -> BrowseAction {
    let trimmed = input.trim();
    match trimmed {
        "p" | "<" => BrowseAction::Previous,
        "n" | ">" => BrowseAction::Next,
        "q" | "Q" => BrowseAction::Quit,
        _ => {
            if let Ok(day) = trimmed.parse::<u32>() {
                BrowseAction::Open(day)
            } else if let Ok(target) = trimmed.parse::<YearMonth>() {
                BrowseAction::Jump(target)
            } else {
                BrowseAction::Unknown(trimmed.to_string())
            }
        }
    }
}

/// 入力文字列からビューア操作へ（空入力は次へ）
pub fn parse_viewer_input(input: &str) -> Option<ViewerCommand> {
    match input.trim() {
        "" | "n" | ">" => Some(ViewerCommand::Next),
        "p" | "<" => Some(ViewerCommand::Previous),
        "f" | "F" => Some(ViewerCommand::ToggleFullscreen),
        "q" | "Q" | "x" => Some(ViewerCommand::Close),
        _ => None,
    }
}

/// 閲覧ループ（q で終了）
pub fn run_interactive_browse(state: &mut CalendarState<AssetHandle>) -> Result<()> {
    loop {
        println!("\n{}", render::render_month(state));
        print!("{}", render::render_day_list(state));

        let controls = state.controls();
        let mut hints = Vec::new();
        if controls.can_go_prev {
            hints.push("p:前月");
        }
        if controls.can_go_next {
            hints.push("n:次月");
        }
        hints.push("日付:開く");
        hints.push("YYYY-MM:移動");
        hints.push("q:終了");

        let input = prompt(&hints.join(" "))?;
        match parse_browse_input(&input) {
            BrowseAction::Previous => {
                if !state.step(-1) {
                    println!("⚠ これより前の月は表示できません");
                }
            }
            BrowseAction::Next => {
                if !state.step(1) {
                    println!("⚠ これより先の月は表示できません");
                }
            }
            BrowseAction::Jump(target) => {
                if !state.jump_to(target) {
                    println!("⚠ 範囲外です: {} ({}〜{})", target, state.range().min, state.range().max);
                }
            }
            BrowseAction::Open(day) => {
                if state.activate_day(day) {
                    run_viewer(state)?;
                } else {
                    println!("⚠ {}日にはメディアがありません", day);
                }
            }
            BrowseAction::Quit => return Ok(()),
            BrowseAction::Unknown(s) => println!("⚠ 不明な入力: {}", s),
        }
    }
}

fn run_viewer(state: &mut CalendarState<AssetHandle>) -> Result<()> {
    while let Some(viewer) = state.viewer() {
        let current = viewer.current().to_string();
        let mut line = format!("🖼  [{}] {}", viewer.position_label(), current);
        if viewer.is_fullscreen() {
            line.push_str(" (全画面)");
        }
        println!("{}", line);
        println!("    {}", describe_load_state(state, &current));

        let hint = if viewer.can_navigate() {
            "n:次 p:前 f:全画面 q:閉じる"
        } else {
            "f:全画面 q:閉じる"
        };
        let input = prompt(hint)?;
        match parse_viewer_input(&input) {
            Some(command) => state.viewer_command(command),
            None => println!("⚠ 不明な入力: {}", input.trim()),
        }
    }
    Ok(())
}

fn describe_load_state(state: &CalendarState<AssetHandle>, filename: &str) -> String {
    match state.loader().status(filename) {
        Some(s) => match (s.status, &s.handle, s.dimensions) {
            (LoadStatus::Loaded, Some(path), Some((w, h))) => format!("{} ({}x{})", path.display(), w, h),
            (LoadStatus::Loaded, Some(path), None) => path.display().to_string(),
            (LoadStatus::Failed, _, _) => "読み込み失敗".to_string(),
            _ => "読み込み中".to_string(),
        },
        None => "未読み込み".to_string(),
    }
}

fn prompt(text: &str) -> Result<String> {
    Input::new()
        .with_prompt(text)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| CalendarError::Prompt(e.to_string()))
}
