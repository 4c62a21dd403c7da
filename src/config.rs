use crate::error::{CalendarError, Result};
use photo_calendar_common::{Banner, DateRange};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// 表示可能な年月の範囲
    pub range: DateRange,
    /// メディアファイルの置き場所
    pub media_dir: PathBuf,
    /// カレンダーに重ねて表示するバナー
    pub banners: Vec<Banner>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CalendarError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("photo-calendar").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            range: DateRange::default(), // 2024年5月〜2025年5月
            media_dir: PathBuf::from("jpegs"),
            banners: Vec::new(),
        }
    }

    /// 範囲の整合性チェック（手編集されたファイル対策）
    fn validate(&self) -> Result<()> {
        DateRange::new(self.range.min, self.range.max)?;
        Ok(())
    }
}
