//! メディア読み込みの統合テスト

use photo_calendar::loader::{self, AssetHandle};
use photo_calendar::render;
use photo_calendar_common::{
    CalendarState, DateRange, LoadStatus, MediaCatalog, MediaDate, MediaEntry, MediaKind, YearMonth,
};
use tempfile::tempdir;

fn december_catalog() -> MediaCatalog {
    let date = MediaDate::new(2024, 12, 8).unwrap();
    MediaCatalog::from_entries(vec![
        MediaEntry::new("20241208_012209.png", date, MediaKind::Image),
        MediaEntry::new("20241208_012403.mp4", date, MediaKind::Video),
        MediaEntry::new("20241223_070705.jpg", MediaDate::new(2024, 12, 23).unwrap(), MediaKind::Image),
    ])
}

fn new_state() -> CalendarState<AssetHandle> {
    CalendarState::new(december_catalog(), DateRange::default(), YearMonth::new(2024, 12).unwrap())
}

#[tokio::test]
async fn test_load_all_settles_every_item() {
    let dir = tempdir().expect("Failed to create temp dir");
    image::RgbImage::new(4, 3)
        .save(dir.path().join("20241208_012209.png"))
        .expect("画像の保存失敗");
    std::fs::write(dir.path().join("20241208_012403.mp4"), b"video").expect("書き込み失敗");
    // 20241223_070705.jpg は置かない

    let mut state = new_state();
    let progress = loader::load_all(&mut state, dir.path(), false).await;

    assert_eq!(progress.total, 3);
    assert_eq!(progress.loaded, 2);
    assert_eq!(progress.failed, 1);
    assert!(progress.is_complete());
    assert!(state.loader().is_complete());
    assert_eq!(state.loader().loaded_by_kind(), (1, 1));

    let image = state.loader().status("20241208_012209.png").expect("状態がない");
    assert_eq!(image.status, LoadStatus::Loaded);
    assert_eq!(image.dimensions, Some((4, 3)));

    assert_eq!(
        state.loader().filenames_with_status(LoadStatus::Failed),
        vec!["20241223_070705.jpg"]
    );
}

#[tokio::test]
async fn test_load_all_twice_is_noop() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut state = new_state();

    let first = loader::load_all(&mut state, dir.path(), false).await;
    assert_eq!(first.failed, 3);

    let second = loader::load_all(&mut state, dir.path(), false).await;
    assert_eq!(second, first);
}

#[tokio::test]
async fn test_rendered_grid_reflects_load_results() {
    let dir = tempdir().expect("Failed to create temp dir");
    image::RgbImage::new(2, 2)
        .save(dir.path().join("20241208_012209.png"))
        .expect("画像の保存失敗");

    let mut state = new_state();
    loader::load_all(&mut state, dir.path(), false).await;

    let text = render::render_month(&state);
    assert!(text.contains("  8+2 "));
    assert!(text.contains(" 23!  "));
}

#[tokio::test]
async fn test_empty_catalog_completes_immediately() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut state: CalendarState<AssetHandle> =
        CalendarState::new(MediaCatalog::default(), DateRange::default(), YearMonth::new(2024, 12).unwrap());

    let progress = loader::load_all(&mut state, dir.path(), false).await;
    assert_eq!(progress.total, 0);
    assert_eq!(progress.fraction(), 1.0);
}
