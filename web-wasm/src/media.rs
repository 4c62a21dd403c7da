//! ブラウザでのメディア読み込み
//!
//! 要求ごとに画像・動画要素を作り、load / error イベントで結果を通知する。
//! 結果の反映（状態遷移）は呼び出し側のコールバックが一箇所で行う。
//! コールバックには要求のラウンド番号をそのまま返す。

use photo_calendar_common::{AssetLayout, LoadOutcome, LoadRequest, MediaKind};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlImageElement, HtmlVideoElement};

/// 読み込み済みメディアのハンドル（要素に設定したURL）
pub type MediaUrl = String;

/// 1件の読み込みを開始する
pub fn dispatch<F>(request: LoadRequest, layout: &AssetLayout, on_settled: F)
where
    F: Fn(u64, String, LoadOutcome<MediaUrl>) + 'static + Clone,
{
    let round = request.round;
    let on_settled = move |filename: String, outcome: LoadOutcome<MediaUrl>| {
        on_settled(round, filename, outcome)
    };
    let url = layout.path_for(&request.filename);
    let result = match request.kind {
        MediaKind::Image => load_image(request.filename.clone(), url, on_settled.clone()),
        MediaKind::Video => load_video(request.filename.clone(), url, on_settled.clone()),
    };

    // 要素を作れなかった場合も必ず失敗として確定させる
    if let Err(e) = result {
        crate::source::warn(&format!("{} の読み込みを開始できません: {:?}", request.filename, e));
        on_settled(request.filename, LoadOutcome::Failed);
    }
}

fn load_image<F>(filename: String, url: String, on_settled: F) -> Result<(), JsValue>
where
    F: Fn(String, LoadOutcome<MediaUrl>) + 'static + Clone,
{
    let img = HtmlImageElement::new()?;

    let onload = {
        let img = img.clone();
        let filename = filename.clone();
        let url = url.clone();
        let on_settled = on_settled.clone();
        Closure::wrap(Box::new(move |_: web_sys::Event| {
            let outcome = LoadOutcome::loaded_with_size(url.clone(), img.natural_width(), img.natural_height());
            on_settled(filename.clone(), outcome);
        }) as Box<dyn FnMut(_)>)
    };
    let onerror = error_closure(filename, on_settled);

    img.set_onload(Some(onload.as_ref().unchecked_ref()));
    img.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onload.forget();
    onerror.forget();

    img.set_src(&url);
    Ok(())
}

fn load_video<F>(filename: String, url: String, on_settled: F) -> Result<(), JsValue>
where
    F: Fn(String, LoadOutcome<MediaUrl>) + 'static + Clone,
{
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document がありません"))?;
    let video: HtmlVideoElement = document.create_element("video")?.dyn_into()?;

    let onloaded = {
        let video = video.clone();
        let filename = filename.clone();
        let url = url.clone();
        let on_settled = on_settled.clone();
        Closure::wrap(Box::new(move |_: web_sys::Event| {
            let outcome = LoadOutcome::loaded_with_size(url.clone(), video.video_width(), video.video_height());
            on_settled(filename.clone(), outcome);
        }) as Box<dyn FnMut(_)>)
    };
    let onerror = error_closure(filename, on_settled);

    video.set_onloadeddata(Some(onloaded.as_ref().unchecked_ref()));
    video.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onloaded.forget();
    onerror.forget();

    video.set_preload("auto");
    video.set_muted(true);
    video.set_src(&url);
    Ok(())
}

fn error_closure<F>(filename: String, on_settled: F) -> Closure<dyn FnMut(web_sys::Event)>
where
    F: Fn(String, LoadOutcome<MediaUrl>) + 'static,
{
    Closure::wrap(Box::new(move |_: web_sys::Event| {
        on_settled(filename.clone(), LoadOutcome::Failed);
    }) as Box<dyn FnMut(_)>)
}
