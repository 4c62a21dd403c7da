//! カレンダー全体の状態
//!
//! 表示中の年月、カタログ、読み込み状態、ビューアの選択をまとめて保持する。
//! 表示側（Web/CLI）はこの構造体を一つ持ち、ユーザー操作をメソッド呼び出しに変換する。

use crate::banner::{banners_for, Banner};
use crate::catalog::MediaCatalog;
use crate::grid;
use crate::loader::{LoadOutcome, LoadRequest, LoadState, LoadStatus, MediaLoadCoordinator};
use crate::navigation::{step_month, NavControls};
use crate::range::DateRange;
use crate::types::{CalendarCell, YearMonth};
use crate::viewer::{ViewerCommand, ViewerSelection};

/// セルに表示するサムネイル
#[derive(Debug, PartialEq)]
pub enum Thumbnail<'a, H> {
    /// メディアなし
    Empty,
    /// 読み込み済み
    Ready {
        filename: &'a str,
        state: &'a LoadState<H>,
        count: usize,
    },
    /// 読み込み中・失敗・未要求（プレースホルダーを表示）
    Placeholder {
        filename: &'a str,
        status: Option<LoadStatus>,
        count: usize,
    },
}

/// カレンダーの状態
#[derive(Debug, Clone)]
pub struct CalendarState<H> {
    catalog: MediaCatalog,
    range: DateRange,
    cursor: YearMonth,
    loader: MediaLoadCoordinator<H>,
    viewer: Option<ViewerSelection>,
    banners: Vec<Banner>,
}

impl<H> CalendarState<H> {
    /// 今月（範囲外なら範囲の下限）から表示を始める
    pub fn new(catalog: MediaCatalog, range: DateRange, today: YearMonth) -> Self {
        Self {
            catalog,
            cursor: range.initial_cursor(today),
            range,
            loader: MediaLoadCoordinator::new(),
            viewer: None,
            banners: Vec::new(),
        }
    }

    pub fn with_banners(mut self, banners: Vec<Banner>) -> Self {
        self.banners = banners;
        self
    }

    pub fn catalog(&self) -> &MediaCatalog {
        &self.catalog
    }

    pub fn range(&self) -> &DateRange {
        &self.range
    }

    pub fn cursor(&self) -> YearMonth {
        self.cursor
    }

    pub fn loader(&self) -> &MediaLoadCoordinator<H> {
        &self.loader
    }

    pub fn month_label(&self) -> String {
        self.cursor.label()
    }

    // =============================================
    // 読み込み
    // =============================================

    /// 全メディアの読み込み要求を発行（2回目以降は空）
    pub fn begin_loading(&mut self) -> Vec<LoadRequest> {
        self.loader.begin_load_all(&self.catalog)
    }

    /// 読み込み結果を反映（`round` は要求に付いていたもの）
    pub fn settle(&mut self, round: u64, filename: &str, outcome: LoadOutcome<H>) -> bool {
        self.loader.on_settled(round, filename, outcome)
    }

    // =============================================
    // 月送り
    // =============================================

    /// 月を移動。範囲外ならカーソルはそのままで false
    pub fn step(&mut self, delta: i32) -> bool {
        match step_month(self.cursor, delta, &self.range) {
            Some(next) => {
                tracing::debug!(from = %self.cursor, to = %next, "month changed");
                self.cursor = next;
                true
            }
            None => false,
        }
    }

    /// 指定の年月へ移動。範囲外なら false
    pub fn jump_to(&mut self, target: YearMonth) -> bool {
        if self.range.contains(target) {
            self.cursor = target;
            true
        } else {
            false
        }
    }

    pub fn controls(&self) -> NavControls {
        NavControls::probe(self.cursor, &self.range)
    }

    /// 表示中の月のグリッド（呼ぶたびに新しく生成）
    pub fn grid(&self) -> Vec<CalendarCell> {
        grid::build(self.cursor.year, self.cursor.month, &self.catalog)
    }

    pub fn visible_banners(&self) -> Vec<&Banner> {
        banners_for(&self.banners, self.cursor.year, self.cursor.month)
    }

    /// セルのサムネイル（読み込み済みの場合のみ実体を表示）
    pub fn thumbnail<'a>(&'a self, cell: &'a CalendarCell) -> Thumbnail<'a, H> {
        let Some(filename) = cell.thumbnail() else {
            return Thumbnail::Empty;
        };
        let count = cell.filenames().len();

        match self.loader.status(filename) {
            Some(state) if state.is_loaded() => Thumbnail::Ready { filename, state, count },
            other => Thumbnail::Placeholder {
                filename,
                status: other.map(|s| s.status),
                count,
            },
        }
    }

    // =============================================
    // ビューア
    // =============================================

    /// 日付をクリック: メディアがあればその日の先頭からビューアを開く
    pub fn activate_day(&mut self, day: u32) -> bool {
        let items = self.catalog.for_date(self.cursor.year, self.cursor.month, day);
        let Some(first) = items.first().cloned() else {
            return false;
        };

        self.viewer = ViewerSelection::open(items, &first);
        tracing::debug!(day, file = %first, "viewer opened");
        self.viewer.is_some()
    }

    pub fn viewer(&self) -> Option<&ViewerSelection> {
        self.viewer.as_ref()
    }

    pub fn viewer_mut(&mut self) -> Option<&mut ViewerSelection> {
        self.viewer.as_mut()
    }

    /// ビューアへの操作。Close なら選択を破棄
    pub fn viewer_command(&mut self, command: ViewerCommand) {
        if let Some(viewer) = self.viewer.as_mut() {
            if !viewer.apply(command) {
                self.close_viewer();
            }
        }
    }

    pub fn close_viewer(&mut self) {
        self.viewer = None;
    }
}
