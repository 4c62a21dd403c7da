//! メディアビューア（モーダル）コンポーネント

use crate::view_model::ViewerItem;
use leptos::prelude::*;
use photo_calendar_common::{MediaKind, ViewerCommand};

pub const VIEWER_ELEMENT_ID: &str = "media-viewer";

#[component]
pub fn MediaViewer<F>(item: Signal<Option<ViewerItem>>, on_command: F) -> impl IntoView
where
    F: Fn(ViewerCommand) + 'static + Send + Sync,
{
    // 全画面表示は要素側の状態と同期させる
    Effect::new(move |_| {
        let fullscreen = item.with(|i| i.as_ref().map(|i| i.fullscreen).unwrap_or(false));
        sync_fullscreen(fullscreen);
    });

    let on_command = Callback::new(move |cmd: ViewerCommand| on_command(cmd));
    let command = move |cmd: ViewerCommand| {
        move |ev: leptos::ev::MouseEvent| {
            ev.stop_propagation();
            on_command.run(cmd);
        }
    };

    view! {
        <Show when=move || item.with(|i| i.is_some())>
            <div
                id=VIEWER_ELEMENT_ID
                class="modal"
                class:fullscreen=move || item.with(|i| i.as_ref().map(|i| i.fullscreen).unwrap_or(false))
                on:click=command(ViewerCommand::Close)
            >
                <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                    {move || item.get().map(|item| view! { <ViewerBody item=item /> })}
                </div>
                <Show when=move || item.with(|i| i.as_ref().is_some_and(|i| i.can_navigate))>
                    <button class="modal-nav prev" on:click=command(ViewerCommand::Previous)>"‹"</button>
                    <button class="modal-nav next" on:click=command(ViewerCommand::Next)>"›"</button>
                </Show>
                <button class="modal-fullscreen" on:click=command(ViewerCommand::ToggleFullscreen)>"⛶"</button>
                <button class="modal-close" on:click=command(ViewerCommand::Close)>"×"</button>
                <p class="modal-position">
                    {move || item.with(|i| i.as_ref().map(|i| i.position.clone()).unwrap_or_default())}
                </p>
            </div>
        </Show>
    }
}

#[component]
fn ViewerBody(item: ViewerItem) -> impl IntoView {
    match item.kind {
        MediaKind::Image => view! {
            <img class="modal-media" src=item.src alt=item.filename />
        }
        .into_any(),
        MediaKind::Video => view! {
            <video
                class="modal-media"
                src=item.src
                poster=item.poster.unwrap_or_default()
                controls=true
                autoplay=true
            />
        }
        .into_any(),
    }
}

fn sync_fullscreen(fullscreen: bool) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let active = document.fullscreen_element().is_some();

    if fullscreen && !active {
        if let Some(element) = document.get_element_by_id(VIEWER_ELEMENT_ID) {
            if let Err(e) = element.request_fullscreen() {
                crate::source::warn(&format!("全画面表示に切り替えられません: {:?}", e));
            }
        }
    } else if !fullscreen && active {
        document.exit_fullscreen();
    }
}
