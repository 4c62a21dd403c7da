//! メディアフォルダからの読み込み
//!
//! ファイルごとにタスクを起動して存在・画像サイズを確認し、
//! 結果を (ラウンド, ファイル名, 結果) のメッセージとしてチャネルに送る。
//! 受信側は一つのループだけで、そこで状態遷移を行う。

use indicatif::{ProgressBar, ProgressStyle};
use photo_calendar_common::{CalendarState, LoadOutcome, LoadProgress, LoadRequest, MediaKind};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;

/// 読み込み済みメディアのハンドル（実ファイルのパス）
pub type AssetHandle = PathBuf;

const CHANNEL_CAPACITY: usize = 64;

/// 1ファイルを確認する
///
/// 画像は実際にヘッダーを読んでサイズを取得する。動画は存在確認のみ。
pub fn probe_asset(path: &Path, kind: MediaKind) -> LoadOutcome<AssetHandle> {
    if !path.is_file() {
        return LoadOutcome::Failed;
    }

    match kind {
        MediaKind::Image => match image::image_dimensions(path) {
            Ok((width, height)) => LoadOutcome::loaded_with_size(path.to_path_buf(), width, height),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "image decode failed");
                LoadOutcome::Failed
            }
        },
        MediaKind::Video => LoadOutcome::loaded(path.to_path_buf()),
    }
}

/// カタログの全メディアを読み込み、完了まで待つ
///
/// 2回目以降の呼び出しは要求が空なので即座に戻る
pub async fn load_all(
    state: &mut CalendarState<AssetHandle>,
    media_dir: &Path,
    show_progress: bool,
) -> LoadProgress {
    let requests = state.begin_loading();

    let pb = if show_progress {
        let pb = ProgressBar::new(requests.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{bar:40}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let (tx, mut rx) = mpsc::channel::<(u64, String, LoadOutcome<AssetHandle>)>(CHANNEL_CAPACITY);

    for LoadRequest { filename, kind, round } in requests {
        let tx = tx.clone();
        let path = media_dir.join(&filename);
        tokio::spawn(async move {
            let outcome = tokio::task::spawn_blocking(move || probe_asset(&path, kind))
                .await
                .unwrap_or(LoadOutcome::Failed);
            // 受信側が閉じていれば結果は捨てる
            let _ = tx.send((round, filename, outcome)).await;
        });
    }
    drop(tx);

    while let Some((round, filename, outcome)) = rx.recv().await {
        if state.settle(round, &filename, outcome) {
            let progress = state.loader().progress();
            pb.set_position(progress.settled() as u64);
            if progress.failed > 0 {
                pb.set_message(format!("{} errors", progress.failed));
            }
        }
    }

    pb.finish_and_clear();
    state.loader().progress()
}
