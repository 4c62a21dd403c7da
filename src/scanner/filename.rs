//! ファイル名からの撮影日推定
//!
//! スマートフォン・カメラの一般的な命名規則に対応:
//! - `20241208_012209.jpg`, `IMG_20241208_012209.jpg`
//! - `Screenshot_20190919-053857.png`
//! - `2024-12-08 01.22.09.jpg`, `signal-2020-10-26-163832.jpg`
//! - `2016_01_30_11_49_15.mp4`

use photo_calendar_common::MediaDate;
use regex::Regex;
use std::path::Path;

/// ファイル名から日付を推定
pub fn guess_date(filename: &str) -> Option<MediaDate> {
    lazy_static::lazy_static! {
        static ref COMPACT_RE: Regex =
            Regex::new(r"(?P<y>(?:19|20)\d{2})(?P<m>0[1-9]|1[0-2])(?P<d>[0-3]\d)[_-]?\d{6}").unwrap();
        static ref SEPARATED_RE: Regex =
            Regex::new(r"(?P<y>(?:19|20)\d{2})[-_](?P<m>0[1-9]|1[0-2])[-_](?P<d>[0-3]\d)").unwrap();
    }

    let basename = Path::new(filename)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(filename);

    [&*COMPACT_RE, &*SEPARATED_RE].iter().find_map(|re| {
        let caps = re.captures(basename)?;
        MediaDate::new(caps["y"].parse().ok()?, caps["m"].parse().ok()?, caps["d"].parse().ok()?)
    })
}
