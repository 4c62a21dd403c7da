//! カタログ・バナーの取得
//!
//! ページ側のスクリプトが `window.mediaMetadata`（旧形式は `window.imageMetadata`）を
//! 定義していればそれを使い、なければ `mediaMetadata.json` を取得する。

use photo_calendar_common::{Banner, MediaCatalog};
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

const CATALOG_URL: &str = "mediaMetadata.json";
const CATALOG_GLOBALS: [&str; 2] = ["mediaMetadata", "imageMetadata"];
const BANNER_GLOBAL: &str = "bannerData";

/// カタログを読み込む
pub async fn load_catalog() -> Result<MediaCatalog, JsValue> {
    if let Some(catalog) = read_global_catalog() {
        return Ok(catalog);
    }
    fetch_catalog(CATALOG_URL).await
}

/// `window.bannerData` のバナー（未定義・不正なら空）
pub fn read_banners() -> Vec<Banner> {
    let Some(value) = read_global(BANNER_GLOBAL) else {
        return Vec::new();
    };
    match serde_json::from_value(value) {
        Ok(banners) => banners,
        Err(e) => {
            warn(&format!("バナーを読み込めません: {}", e));
            Vec::new()
        }
    }
}

fn read_global_catalog() -> Option<MediaCatalog> {
    CATALOG_GLOBALS.iter().find_map(|name| match read_global(name)? {
        Value::Array(items) if !items.is_empty() => Some(MediaCatalog::from_values(&items)),
        _ => None,
    })
}

fn read_global(name: &str) -> Option<Value> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(name)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    match serde_wasm_bindgen::from_value(value) {
        Ok(v) => Some(v),
        Err(e) => {
            warn(&format!("{} を読み込めません: {}", name, e));
            None
        }
    }
}

async fn fetch_catalog(url: &str) -> Result<MediaCatalog, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts)?;
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window がありません"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("{} の取得に失敗: {}", url, resp.status())));
    }

    let text = JsFuture::from(resp.text()?)
        .await?
        .as_string()
        .unwrap_or_default();
    MediaCatalog::from_json_str(&text).map_err(|e| JsValue::from_str(&e.to_string()))
}

pub fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}

pub fn log(message: &str) {
    web_sys::console::log_1(&JsValue::from_str(message));
}
