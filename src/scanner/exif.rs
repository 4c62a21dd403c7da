use anyhow::{anyhow, Result};
use photo_calendar_common::MediaDate;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// EXIFの撮影日を取得（DateTimeOriginal → DateTime の順）
pub fn extract_date(path: &Path) -> Result<MediaDate> {
    let file = File::open(path)?;
    let mut bufreader = BufReader::new(file);
    let exif_reader = exif::Reader::new();
    let exif = exif_reader.read_from_container(&mut bufreader)?;

    for tag in [exif::Tag::DateTimeOriginal, exif::Tag::DateTime] {
        let Some(field) = exif.get_field(tag, exif::In::PRIMARY) else {
            continue;
        };
        if let exif::Value::Ascii(ref values) = field.value {
            if let Some(raw) = values.first() {
                let dt = exif::DateTime::from_ascii(raw)?;
                return MediaDate::new(dt.year as i32, dt.month as u32, dt.day as u32)
                    .ok_or_else(|| anyhow!("invalid EXIF date: {}", field.display_value()));
            }
        }
    }

    Err(anyhow!("No date found in EXIF"))
}
