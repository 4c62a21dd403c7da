use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("日付付きのメディアが見つかりません: {0}")]
    NoMediaFound(String),

    #[error("表示範囲外の年月です: {0}")]
    OutOfRange(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("カタログエラー: {0}")]
    Catalog(#[from] photo_calendar_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CalendarError>;
