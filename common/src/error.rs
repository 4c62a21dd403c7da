//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("ファイル読み込みエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("カタログJSONの解析に失敗: {0}")]
    Json(#[from] serde_json::Error),

    #[error("表示範囲の設定が不正です: {0}")]
    Config(String),

    #[error("カタログ形式エラー: {0}")]
    Parse(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
