//! スキャン・取り込みの統合テスト

use photo_calendar::scanner;
use photo_calendar_common::{legacy, MediaCatalog, MediaDate, MediaKind};
use tempfile::tempdir;

#[test]
fn test_scan_uses_file_name_dates() {
    let dir = tempdir().expect("Failed to create temp dir");
    for name in ["20241208_012209.jpg", "20241208_012403.mp4", "IMG_20250101_000000.JPG", "random.jpg", "notes.txt"] {
        std::fs::write(dir.path().join(name), b"dummy").expect("書き込み失敗");
    }

    let report = scanner::scan_folder(dir.path(), false).expect("スキャン失敗");
    assert_eq!(report.dated.len(), 3);
    assert_eq!(report.undated.len(), 1);
    assert_eq!(report.undated[0].file_name, "random.jpg");

    let catalog = report.to_catalog();
    assert_eq!(catalog.len(), 3);
    let video = catalog.get("20241208_012403.mp4").expect("動画が見つからない");
    assert_eq!(video.kind, MediaKind::Video);
    assert_eq!(video.date, MediaDate::new(2024, 12, 8).unwrap());
    assert_eq!(catalog.for_date(2024, 12, 8).len(), 2);
}

#[test]
fn test_scan_recursive() {
    let dir = tempdir().expect("Failed to create temp dir");
    let sub = dir.path().join("2024");
    std::fs::create_dir_all(&sub).expect("フォルダ作成失敗");
    std::fs::write(dir.path().join("20241223_070705.jpg"), b"dummy").unwrap();
    std::fs::write(sub.join("20240601_120000.jpg"), b"dummy").unwrap();

    let flat = scanner::scan_folder(dir.path(), false).expect("スキャン失敗");
    assert_eq!(flat.dated.len(), 1);

    let deep = scanner::scan_folder(dir.path(), true).expect("スキャン失敗");
    assert_eq!(deep.dated.len(), 2);
    // ファイル名順
    assert_eq!(deep.dated[0].file_name, "20240601_120000.jpg");
}

#[test]
fn test_scanned_catalog_round_trips_through_json() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("20250303_053912.jpg"), b"dummy").unwrap();

    let catalog = scanner::scan_folder(dir.path(), false).expect("スキャン失敗").to_catalog();
    let json = catalog.to_json_pretty().expect("シリアライズ失敗");
    assert!(json.contains(r#""type": "image""#));

    let reloaded = MediaCatalog::from_json_str(&json).expect("再読み込み失敗");
    assert_eq!(reloaded, catalog);
}

#[test]
fn test_import_legacy_dump() {
    let dump = "\
=== Metadata for 20241208_012209.jpg ===
Make                 |samsung
Date and Time        |2024:12:08 01:22:09

=== Metadata for 20241208_012403.mp4 ===
Date and Time        |2024:12:08 01:24:03

=== Metadata for broken.jpg ===
Make                 |unknown
";
    let records = legacy::parse_metadata_dump(dump);
    assert_eq!(records.len(), 3);

    let catalog = legacy::to_catalog(&records);
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.count_by_kind(), (1, 1));
    assert_eq!(catalog.for_date(2024, 12, 8), vec!["20241208_012209.jpg", "20241208_012403.mp4"]);
}
