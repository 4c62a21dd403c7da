//! Photo Calendar Common Library
//!
//! CLIとWeb(WASM)で共有されるカレンダーの中核ロジック
//! - カタログ（ファイル名→日付・種別）
//! - 月グリッド生成と表示範囲チェック
//! - メディア読み込み状態の管理
//! - ビューア（モーダル）のナビゲーション

pub mod types;
pub mod error;
pub mod catalog;
pub mod query;
pub mod range;
pub mod grid;
pub mod navigation;
pub mod loader;
pub mod viewer;
pub mod banner;
pub mod assets;
pub mod legacy;
pub mod state;

pub use types::{CalendarCell, MediaDate, MediaEntry, MediaKind, YearMonth};
pub use error::{Error, Result};
pub use catalog::MediaCatalog;
pub use query::{first_for_date, for_date};
pub use range::DateRange;
pub use grid::{build, days_in_month, leading_blanks, rows, WEEKDAY_LABELS};
pub use navigation::{step_month, NavControls};
pub use loader::{LoadOutcome, LoadProgress, LoadRequest, LoadState, LoadStatus, MediaLoadCoordinator};
pub use viewer::{ViewerCommand, ViewerSelection};
pub use banner::{banners_for, Banner, BannerKind, BannerPosition};
pub use assets::AssetLayout;
pub use state::{CalendarState, Thumbnail};
