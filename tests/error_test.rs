//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use photo_calendar::config::Config;
use photo_calendar::error::CalendarError;
use photo_calendar::scanner;
use photo_calendar_common::MediaCatalog;
use std::path::Path;
use tempfile::tempdir;

/// 存在しないフォルダをスキャンした場合
#[test]
fn test_scan_nonexistent_folder() {
    let result = scanner::scan_folder(Path::new("/nonexistent/path/12345"), false);
    assert!(result.is_err());

    let err = result.unwrap_err();
    assert!(matches!(err, CalendarError::FolderNotFound(_)));
}

/// 空のフォルダをスキャンした場合
#[test]
fn test_scan_empty_folder() {
    let dir = tempdir().expect("Failed to create temp dir");
    let report = scanner::scan_folder(dir.path(), false).expect("スキャン失敗");
    assert!(report.dated.is_empty());
    assert!(report.undated.is_empty());
    assert!(report.to_catalog().is_empty());
}

/// 壊れたカタログJSON
#[test]
fn test_invalid_catalog_json() {
    let result = MediaCatalog::from_json_str("{ invalid json }");
    assert!(result.is_err());

    let err: CalendarError = result.unwrap_err().into();
    assert!(matches!(err, CalendarError::Catalog(_)));
    assert!(err.to_string().starts_with("カタログエラー"));
}

/// 配列でもメタデータオブジェクトでもないJSON
#[test]
fn test_catalog_wrong_shape() {
    assert!(MediaCatalog::from_json_str("42").is_err());
    assert!(MediaCatalog::from_json_str(r#""just a string""#).is_err());
}

/// 範囲の逆転した設定ファイルは読み込みで弾く
#[test]
fn test_config_with_inverted_range() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{"range": {"min": {"year": 2025, "month": 5}, "max": {"year": 2024, "month": 5}}}"#,
    )
    .expect("書き込み失敗");

    let result = Config::load_from(&path);
    assert!(matches!(result, Err(CalendarError::Catalog(_))));
}

/// 設定ファイルのJSONが壊れている場合
#[test]
fn test_config_broken_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "not json").expect("書き込み失敗");

    let result = Config::load_from(&path);
    assert!(matches!(result, Err(CalendarError::JsonParse(_))));
}

/// エラーメッセージの表示
#[test]
fn test_error_display() {
    let err = CalendarError::FolderNotFound("/photos".into());
    assert_eq!(err.to_string(), "フォルダが見つかりません: /photos");

    let err = CalendarError::OutOfRange("2030-01".into());
    assert_eq!(err.to_string(), "表示範囲外の年月です: 2030-01");
}
