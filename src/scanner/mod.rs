mod exif;
pub mod filename;

use crate::error::{CalendarError, Result};
use photo_calendar_common::{MediaCatalog, MediaDate, MediaEntry, MediaKind};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct MediaInfo {
    pub path: PathBuf,
    pub file_name: String,
    pub kind: MediaKind,
    pub date: Option<MediaDate>,
}

/// スキャン結果
#[derive(Debug, Default)]
pub struct ScanReport {
    /// 撮影日が取れたもの（ファイル名順）
    pub dated: Vec<MediaInfo>,
    /// 撮影日が取れなかったもの
    pub undated: Vec<MediaInfo>,
}

impl ScanReport {
    pub fn to_catalog(&self) -> MediaCatalog {
        let entries = self
            .dated
            .iter()
            .filter_map(|m| Some(MediaEntry::new(m.file_name.clone(), m.date?, m.kind)));
        MediaCatalog::from_entries(entries.collect::<Vec<_>>())
    }
}

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "heic", "webp", "gif"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "wmv"];

pub fn scan_folder(folder: &Path, recursive: bool) -> Result<ScanReport> {
    if !folder.exists() {
        return Err(CalendarError::FolderNotFound(folder.display().to_string()));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let candidates: Vec<(PathBuf, MediaKind)> = WalkDir::new(folder)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| {
            let kind = media_kind(e.path())?;
            Some((e.into_path(), kind))
        })
        .collect();

    tracing::debug!(count = candidates.len(), folder = %folder.display(), "media files found");

    // EXIF読み込みは並列で
    let mut media: Vec<MediaInfo> = candidates
        .into_par_iter()
        .map(|(path, kind)| {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            let date = extract_date(&path, &file_name, kind);
            MediaInfo { path, file_name, kind, date }
        })
        .collect();

    // ファイル名でソート
    media.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    let (dated, undated): (Vec<_>, Vec<_>) = media.into_iter().partition(|m| m.date.is_some());
    Ok(ScanReport { dated, undated })
}

/// EXIF → ファイル名 の順で撮影日を取得
fn extract_date(path: &Path, file_name: &str, kind: MediaKind) -> Option<MediaDate> {
    if kind == MediaKind::Image {
        match exif::extract_date(path) {
            Ok(date) => return Some(date),
            Err(e) => tracing::debug!(file = file_name, error = %e, "no EXIF date, falling back to file name"),
        }
    }
    filename::guess_date(file_name)
}

/// 対応拡張子なら種別を返す（大文字小文字は区別しない）
fn media_kind(path: &Path) -> Option<MediaKind> {
    let ext = path.extension()?.to_string_lossy().to_ascii_lowercase();
    if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        Some(MediaKind::Image)
    } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
        Some(MediaKind::Video)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_kind() {
        assert_eq!(media_kind(Path::new("a.JPG")), Some(MediaKind::Image));
        assert_eq!(media_kind(Path::new("a.heic")), Some(MediaKind::Image));
        assert_eq!(media_kind(Path::new("clip.MOV")), Some(MediaKind::Video));
        assert_eq!(media_kind(Path::new("notes.txt")), None);
        assert_eq!(media_kind(Path::new("noext")), None);
    }
}
