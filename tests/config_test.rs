//! 設定ファイルの保存・読み込み

use photo_calendar::config::Config;
use photo_calendar_common::{Banner, BannerKind, BannerPosition, DateRange, YearMonth};
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("config.json");

    let config = Config {
        range: DateRange::new(YearMonth::new(2023, 1).unwrap(), YearMonth::new(2023, 12).unwrap())
            .expect("範囲作成失敗"),
        media_dir: PathBuf::from("/srv/photos"),
        banners: vec![Banner {
            kind: BannerKind::Celebration,
            month: Some(12),
            day: Some(25),
            text: "Christmas".into(),
            position: BannerPosition::Top,
            ..Default::default()
        }],
    };
    config.save_to(&path).expect("保存失敗");

    let loaded = Config::load_from(&path).expect("読み込み失敗");
    assert_eq!(loaded, config);

    let raw = std::fs::read_to_string(&path).expect("読み込み失敗");
    assert!(raw.contains(r#""mediaDir""#));
    assert!(raw.contains(r#""CELEBRATION""#));
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempdir().expect("Failed to create temp dir");
    let loaded = Config::load_from(&dir.path().join("none.json")).expect("読み込み失敗");
    assert_eq!(loaded, Config::default());
}
