//! バナー（月・日への注記）
//!
//! year / month が None のバナーは全ての年・月に表示する。
//! day が指定されていればその日のセルに、なければ月全体に表示する。

use serde::{Deserialize, Serialize};

/// バナー種別（色分け）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BannerKind {
    #[default]
    Standard,
    Important,
    Info,
    Celebration,
    Warning,
}

impl BannerKind {
    /// (背景色, 文字色)
    pub fn colors(&self) -> (&'static str, &'static str) {
        match self {
            BannerKind::Standard => ("rgba(65, 105, 225, 0.7)", "#000"),
            BannerKind::Important => ("rgba(220, 20, 60, 0.7)", "#000"),
            BannerKind::Info => ("rgba(46, 139, 87, 0.7)", "#000"),
            BannerKind::Celebration => ("rgba(255, 165, 0, 0.7)", "#000"),
            BannerKind::Warning => ("rgba(255, 69, 0, 0.7)", "#000"),
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            BannerKind::Standard => "banner-standard",
            BannerKind::Important => "banner-important",
            BannerKind::Info => "banner-info",
            BannerKind::Celebration => "banner-celebration",
            BannerKind::Warning => "banner-warning",
        }
    }
}

/// セル内の表示位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerPosition {
    Top,
    #[default]
    Middle,
    Bottom,
}

/// バナー
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Banner {
    #[serde(rename = "type")]
    pub kind: BannerKind,
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub text: String,
    pub position: BannerPosition,
    /// 高さ(px)
    pub height: u32,
}

impl Default for Banner {
    fn default() -> Self {
        Self {
            kind: BannerKind::Standard,
            year: None,
            month: None,
            day: None,
            text: "Banner text".to_string(),
            position: BannerPosition::Middle,
            height: 20,
        }
    }
}

impl Banner {
    /// 指定の年月に表示するか
    pub fn applies_to(&self, year: i32, month: u32) -> bool {
        self.year.map_or(true, |y| y == year) && self.month.map_or(true, |m| m == month)
    }

    /// 日付セル用のバナーか（false なら月全体）
    pub fn is_day_banner(&self) -> bool {
        self.day.is_some()
    }
}

/// 指定の年月に表示するバナー
pub fn banners_for(banners: &[Banner], year: i32, month: u32) -> Vec<&Banner> {
    banners.iter().filter(|b| b.applies_to(year, month)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_wildcards() {
        let every_month = Banner::default();
        assert!(every_month.applies_to(2024, 5));
        assert!(every_month.applies_to(2025, 1));

        let september = Banner {
            year: Some(2024),
            month: Some(9),
            ..Default::default()
        };
        assert!(september.applies_to(2024, 9));
        assert!(!september.applies_to(2025, 9));
        assert!(!september.applies_to(2024, 10));
    }

    #[test]
    fn test_banners_for_filters_month() {
        let banners = vec![
            Banner { kind: BannerKind::Warning, year: Some(2024), month: Some(9), day: Some(14), text: "引っ越し".into(), ..Default::default() },
            Banner { kind: BannerKind::Info, month: Some(12), text: "年末".into(), ..Default::default() },
        ];

        let visible = banners_for(&banners, 2024, 9);
        assert_eq!(visible.len(), 1);
        assert!(visible[0].is_day_banner());

        let visible = banners_for(&banners, 2025, 12);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].text, "年末");
    }

    #[test]
    fn test_banner_deserialize_with_defaults() {
        let json = r#"{"type": "CELEBRATION", "month": 1, "text": "New Year", "position": "top"}"#;
        let banner: Banner = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(banner.kind, BannerKind::Celebration);
        assert_eq!(banner.position, BannerPosition::Top);
        assert_eq!(banner.height, 20);
        assert_eq!(banner.year, None);
        assert_eq!(banner.kind.colors().0, "rgba(255, 165, 0, 0.7)");
    }
}
