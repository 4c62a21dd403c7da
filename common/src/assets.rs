//! メディアファイルの配置

use crate::types::MediaKind;
use serde::{Deserialize, Serialize};

/// 動画のポスター画像に置き換える拡張子
const POSTER_SOURCE_EXTENSIONS: &[&str] = &["mp4", "mov"];

/// メディアファイルの置き場所
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetLayout {
    pub base_dir: String,
}

impl Default for AssetLayout {
    fn default() -> Self {
        Self {
            base_dir: "jpegs".to_string(),
        }
    }
}

impl AssetLayout {
    pub fn new(base_dir: impl Into<String>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// ファイル名 → 取得パス
    pub fn path_for(&self, filename: &str) -> String {
        let base = self.base_dir.trim_end_matches('/');
        if base.is_empty() {
            filename.to_string()
        } else {
            format!("{}/{}", base, filename)
        }
    }

    /// 動画のポスター画像パス（同名の .jpg）。対象外なら None
    pub fn poster_for(&self, filename: &str) -> Option<String> {
        let (stem, ext) = filename.rsplit_once('.')?;
        let ext = ext.to_ascii_lowercase();
        POSTER_SOURCE_EXTENSIONS
            .contains(&ext.as_str())
            .then(|| self.path_for(&format!("{}.jpg", stem)))
    }

    /// 種別に応じた表示用パス（動画はポスター、なければ本体）
    pub fn thumbnail_for(&self, filename: &str, kind: MediaKind) -> String {
        match kind {
            MediaKind::Image => self.path_for(filename),
            MediaKind::Video => self
                .poster_for(filename)
                .unwrap_or_else(|| self.path_for(filename)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_for_default_layout() {
        let layout = AssetLayout::default();
        assert_eq!(layout.path_for("20241208_012209.jpg"), "jpegs/20241208_012209.jpg");
    }

    #[test]
    fn test_path_for_trailing_slash_and_empty_base() {
        assert_eq!(AssetLayout::new("media/").path_for("a.jpg"), "media/a.jpg");
        assert_eq!(AssetLayout::new("").path_for("a.jpg"), "a.jpg");
    }

    #[test]
    fn test_poster_for_video() {
        let layout = AssetLayout::default();
        assert_eq!(layout.poster_for("clip.MOV"), Some("jpegs/clip.jpg".to_string()));
        assert_eq!(layout.poster_for("clip.mp4"), Some("jpegs/clip.jpg".to_string()));
        assert_eq!(layout.poster_for("clip.avi"), None);
        assert_eq!(layout.poster_for("photo.jpg"), None);
    }

    #[test]
    fn test_thumbnail_for() {
        let layout = AssetLayout::default();
        assert_eq!(layout.thumbnail_for("clip.mp4", MediaKind::Video), "jpegs/clip.jpg");
        assert_eq!(layout.thumbnail_for("clip.wmv", MediaKind::Video), "jpegs/clip.wmv");
        assert_eq!(layout.thumbnail_for("a.jpg", MediaKind::Image), "jpegs/a.jpg");
    }
}
