//! 状態から表示用データへの変換
//!
//! コンポーネントはここで作った値だけを描画する

use crate::media::MediaUrl;
use photo_calendar_common::{
    AssetLayout, Banner, CalendarCell, CalendarState, LoadStatus, MediaKind, Thumbnail,
};

/// 日付セル
#[derive(Debug, Clone, PartialEq)]
pub struct DayCellView {
    pub day: u32,
    pub media: Option<CellMedia>,
    pub banners: Vec<BannerView>,
}

/// セルのサムネイル
#[derive(Debug, Clone, PartialEq)]
pub struct CellMedia {
    pub filename: String,
    pub kind: MediaKind,
    pub count: usize,
    /// 読み込み済みなら表示用のURL
    pub src: Option<String>,
    pub failed: bool,
}

impl CellMedia {
    pub fn css_class(&self) -> &'static str {
        match (&self.src, self.failed) {
            (Some(_), _) => "thumbnail loaded",
            (None, true) => "thumbnail placeholder failed",
            (None, false) => "thumbnail placeholder",
        }
    }
}

/// バナーの表示用データ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerView {
    pub text: String,
    pub class: String,
    pub style: String,
}

impl From<&Banner> for BannerView {
    fn from(banner: &Banner) -> Self {
        let (background, color) = banner.kind.colors();
        let position = match banner.position {
            photo_calendar_common::BannerPosition::Top => "top",
            photo_calendar_common::BannerPosition::Middle => "middle",
            photo_calendar_common::BannerPosition::Bottom => "bottom",
        };
        Self {
            text: banner.text.clone(),
            class: format!("banner {} banner-{}", banner.kind.css_class(), position),
            style: format!(
                "background-color: {}; color: {}; height: {}px;",
                background, color, banner.height
            ),
        }
    }
}

/// 表示中の月のセル一覧（空白セルは None）
pub fn day_cells(state: &CalendarState<MediaUrl>, layout: &AssetLayout) -> Vec<Option<DayCellView>> {
    let banners = state.visible_banners();
    state
        .grid()
        .iter()
        .map(|cell| {
            let day = cell.day()?;
            Some(DayCellView {
                day,
                media: cell_media(state, cell, layout),
                banners: banners
                    .iter()
                    .filter(|b| b.day == Some(day))
                    .map(|b| BannerView::from(*b))
                    .collect(),
            })
        })
        .collect()
}

/// 月全体のバナー（日付指定なし）
pub fn month_banners(state: &CalendarState<MediaUrl>) -> Vec<BannerView> {
    state
        .visible_banners()
        .into_iter()
        .filter(|b| !b.is_day_banner())
        .map(BannerView::from)
        .collect()
}

fn cell_media(
    state: &CalendarState<MediaUrl>,
    cell: &CalendarCell,
    layout: &AssetLayout,
) -> Option<CellMedia> {
    let kind_of = |filename: &str| {
        state
            .catalog()
            .get(filename)
            .map(|e| e.kind)
            .unwrap_or_default()
    };

    match state.thumbnail(cell) {
        Thumbnail::Empty => None,
        Thumbnail::Ready { filename, state: load, count } => {
            let kind = load.kind;
            // 動画のサムネイルはポスター画像
            let src = match kind {
                MediaKind::Image => load.handle.clone(),
                MediaKind::Video => Some(layout.thumbnail_for(filename, kind)),
            };
            Some(CellMedia { filename: filename.to_string(), kind, count, src, failed: false })
        }
        Thumbnail::Placeholder { filename, status, count } => Some(CellMedia {
            filename: filename.to_string(),
            kind: kind_of(filename),
            count,
            src: None,
            failed: status == Some(LoadStatus::Failed),
        }),
    }
}

/// ビューアに表示する1件
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerItem {
    pub filename: String,
    pub kind: MediaKind,
    pub src: String,
    pub poster: Option<String>,
    pub position: String,
    pub can_navigate: bool,
    pub fullscreen: bool,
}

pub fn viewer_item(state: &CalendarState<MediaUrl>, layout: &AssetLayout) -> Option<ViewerItem> {
    let viewer = state.viewer()?;
    let filename = viewer.current();
    let kind = state.catalog().get(filename).map(|e| e.kind).unwrap_or_default();
    Some(ViewerItem {
        filename: filename.to_string(),
        kind,
        src: layout.path_for(filename),
        poster: match kind {
            MediaKind::Video => layout.poster_for(filename),
            MediaKind::Image => None,
        },
        position: viewer.position_label(),
        can_navigate: viewer.can_navigate(),
        fullscreen: viewer.is_fullscreen(),
    })
}
