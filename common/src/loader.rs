//! メディア読み込み状態の管理
//!
//! 読み込み要求の発行と、完了通知（成功/失敗）の受け付けを一か所で行う。
//! - 状態遷移は Pending→Loaded / Pending→Failed の一度だけ
//! - 完了通知の順序は不定。同じファイルへの2回目の通知は無視する
//! - 要求にはラウンド番号が付く。前のラウンドの通知は遅れて届いても無視する
//! - タイムアウト・再試行・キャンセルはしない（止まった読み込みは Pending のまま）
//!
//! 実際の読み込み（ブラウザの画像要素、ファイル確認など）は呼び出し側が行い、
//! 結果を `on_settled` に渡す。`H` はその呼び出し側のハンドル型。

use crate::catalog::MediaCatalog;
use crate::types::MediaKind;
use serde::Serialize;
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// 読み込み状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadStatus {
    #[default]
    Pending,
    Loaded,
    Failed,
}

impl LoadStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadStatus::Pending => "pending",
            LoadStatus::Loaded => "loaded",
            LoadStatus::Failed => "failed",
        }
    }
}

/// ファイルごとの読み込み状態
#[derive(Debug, Clone, PartialEq)]
pub struct LoadState<H> {
    pub kind: MediaKind,
    pub status: LoadStatus,
    /// 読み込み済みの要素（Loaded のときのみ）
    pub handle: Option<H>,
    /// 元画像・動画のサイズ (幅, 高さ)
    pub dimensions: Option<(u32, u32)>,
}

impl<H> LoadState<H> {
    fn pending(kind: MediaKind) -> Self {
        Self {
            kind,
            status: LoadStatus::Pending,
            handle: None,
            dimensions: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == LoadStatus::Pending
    }

    pub fn is_loaded(&self) -> bool {
        self.status == LoadStatus::Loaded
    }

    pub fn is_failed(&self) -> bool {
        self.status == LoadStatus::Failed
    }
}

/// 全体の進捗
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LoadProgress {
    pub total: usize,
    pub loaded: usize,
    pub failed: usize,
}

impl LoadProgress {
    /// 完了（成功+失敗）件数
    pub fn settled(&self) -> usize {
        self.loaded + self.failed
    }

    pub fn pending(&self) -> usize {
        self.total.saturating_sub(self.settled())
    }

    pub fn is_complete(&self) -> bool {
        self.settled() >= self.total
    }

    /// 進捗率 0.0〜1.0（対象なしは完了扱いで1.0）
    pub fn fraction(&self) -> f32 {
        if self.total == 0 {
            1.0
        } else {
            self.settled() as f32 / self.total as f32
        }
    }
}

/// 呼び出し側が発行すべき読み込み要求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub filename: String,
    pub kind: MediaKind,
    /// 発行したラウンド（完了通知でそのまま返す）
    pub round: u64,
}

/// 読み込み結果
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome<H> {
    Loaded {
        handle: H,
        dimensions: Option<(u32, u32)>,
    },
    Failed,
}

impl<H> LoadOutcome<H> {
    pub fn loaded(handle: H) -> Self {
        LoadOutcome::Loaded {
            handle,
            dimensions: None,
        }
    }

    pub fn loaded_with_size(handle: H, width: u32, height: u32) -> Self {
        LoadOutcome::Loaded {
            handle,
            dimensions: Some((width, height)),
        }
    }
}

/// 読み込みコーディネータ
#[derive(Debug, Clone)]
pub struct MediaLoadCoordinator<H> {
    states: HashMap<String, LoadState<H>>,
    progress: LoadProgress,
    /// 現在のラウンドを開始したカタログの指紋
    fingerprint: Option<u64>,
    /// 現在のラウンド番号（未開始は0）
    round: u64,
}

impl<H> Default for MediaLoadCoordinator<H> {
    fn default() -> Self {
        Self {
            states: HashMap::new(),
            progress: LoadProgress::default(),
            fingerprint: None,
            round: 0,
        }
    }
}

impl<H> MediaLoadCoordinator<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 全エントリの読み込みを開始
    ///
    /// 同じカタログで再度呼ばれた場合は何もせず空のVecを返す（件数を二重に数えない）。
    /// 別のカタログが渡された場合は状態を破棄して新しいラウンドを始める。
    pub fn begin_load_all(&mut self, catalog: &MediaCatalog) -> Vec<LoadRequest> {
        let fingerprint = catalog_fingerprint(catalog);
        if self.fingerprint == Some(fingerprint) {
            tracing::debug!("load already started for this catalog");
            return Vec::new();
        }

        self.states.clear();
        self.progress = LoadProgress::default();
        self.fingerprint = Some(fingerprint);
        self.round += 1;

        let mut requests = Vec::with_capacity(catalog.len());
        for entry in catalog {
            if self.states.contains_key(&entry.filename) {
                continue;
            }
            self.states
                .insert(entry.filename.clone(), LoadState::pending(entry.kind));
            requests.push(LoadRequest {
                filename: entry.filename.clone(),
                kind: entry.kind,
                round: self.round,
            });
        }
        self.progress.total = requests.len();

        if requests.is_empty() {
            tracing::info!("no media to load");
        } else {
            tracing::info!(total = requests.len(), round = self.round, "loading media");
        }
        requests
    }

    /// 読み込み完了通知（唯一の状態遷移点）
    ///
    /// 遷移した場合のみ true。古いラウンドの通知、未知のファイル、処理済みのファイルは無視する。
    pub fn on_settled(&mut self, round: u64, filename: &str, outcome: LoadOutcome<H>) -> bool {
        if round != self.round {
            tracing::debug!(filename, round, current = self.round, "stale settlement ignored");
            return false;
        }
        let Some(state) = self.states.get_mut(filename) else {
            tracing::warn!(filename, "settlement for unknown media ignored");
            return false;
        };
        if !state.is_pending() {
            tracing::warn!(filename, status = state.status.as_str(), "duplicate settlement ignored");
            return false;
        }

        match outcome {
            LoadOutcome::Loaded { handle, dimensions } => {
                state.status = LoadStatus::Loaded;
                state.handle = Some(handle);
                state.dimensions = dimensions;
                self.progress.loaded += 1;
                tracing::debug!(
                    filename,
                    kind = state.kind.as_str(),
                    loaded = self.progress.loaded,
                    total = self.progress.total,
                    "media loaded"
                );
            }
            LoadOutcome::Failed => {
                state.status = LoadStatus::Failed;
                self.progress.failed += 1;
                tracing::warn!(filename, kind = state.kind.as_str(), "failed to load media");
            }
        }

        if self.progress.is_complete() {
            tracing::info!(
                loaded = self.progress.loaded,
                failed = self.progress.failed,
                "all media processed"
            );
        }
        true
    }

    /// ファイルの読み込み状態（要求していなければ None）
    pub fn status(&self, filename: &str) -> Option<&LoadState<H>> {
        self.states.get(filename)
    }

    pub fn progress(&self) -> LoadProgress {
        self.progress
    }

    /// 現在のラウンド番号（読み込み未開始なら0）
    pub fn round(&self) -> u64 {
        self.round
    }

    /// 読み込みが一度も始まっていない場合も完了扱いにはしない
    pub fn is_complete(&self) -> bool {
        self.fingerprint.is_some() && self.progress.is_complete()
    }

    /// 読み込み済みの件数 (画像, 動画)
    pub fn loaded_by_kind(&self) -> (usize, usize) {
        self.states
            .values()
            .filter(|s| s.is_loaded())
            .fold((0, 0), |(images, videos), s| match s.kind {
                MediaKind::Image => (images + 1, videos),
                MediaKind::Video => (images, videos + 1),
            })
    }

    /// 状態ごとのファイル名一覧（名前順）
    pub fn filenames_with_status(&self, status: LoadStatus) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .states
            .iter()
            .filter(|(_, s)| s.status == status)
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }
}

fn catalog_fingerprint(catalog: &MediaCatalog) -> u64 {
    let mut hasher = DefaultHasher::new();
    catalog.len().hash(&mut hasher);
    for entry in catalog {
        entry.filename.hash(&mut hasher);
        entry.kind.hash(&mut hasher);
    }
    hasher.finish()
}
