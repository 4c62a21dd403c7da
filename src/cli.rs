use clap::{Parser, Subcommand};
use photo_calendar_common::YearMonth;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "photo-calendar")]
#[command(about = "写真・動画カレンダーのカタログ生成・確認ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 写真フォルダをスキャンしてカタログJSONを出力
    Scan {
        /// 写真フォルダのパス
        #[arg(required = true)]
        folder: PathBuf,

        /// 出力JSONファイル
        #[arg(short, long, default_value = "mediaMetadata.json")]
        output: PathBuf,

        /// サブフォルダも再帰的にスキャン
        #[arg(short = 'r', long)]
        recursive: bool,
    },

    /// 旧メタデータダンプ（metadata.txt）からカタログJSONを生成
    Import {
        /// メタデータダンプ
        #[arg(required = true)]
        input: PathBuf,

        /// 出力JSONファイル
        #[arg(short, long, default_value = "mediaMetadata.json")]
        output: PathBuf,
    },

    /// 月カレンダーを表示
    Show {
        /// カタログファイル（JSON または imageMetadata.js）
        #[arg(required = true)]
        catalog: PathBuf,

        /// 表示する年月 (YYYY-MM)。省略時は今月（範囲外なら範囲の先頭）
        #[arg(short, long)]
        month: Option<YearMonth>,

        /// メディアフォルダ（指定時は読み込み状態も表示）
        #[arg(long)]
        media_dir: Option<PathBuf>,
    },

    /// 全メディアを読み込んで結果を集計
    Check {
        /// カタログファイル
        #[arg(required = true)]
        catalog: PathBuf,

        /// メディアフォルダ（省略時は設定値）
        #[arg(long)]
        media_dir: Option<PathBuf>,
    },

    /// 対話的にカレンダーを閲覧
    Browse {
        /// カタログファイル
        #[arg(required = true)]
        catalog: PathBuf,

        /// メディアフォルダ（省略時は設定値）
        #[arg(long)]
        media_dir: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// 表示範囲の開始 (YYYY-MM)
        #[arg(long)]
        min: Option<YearMonth>,

        /// 表示範囲の終了 (YYYY-MM)
        #[arg(long)]
        max: Option<YearMonth>,

        /// メディアフォルダ
        #[arg(long)]
        media_dir: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
