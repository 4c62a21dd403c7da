//! メインアプリケーションコンポーネント

use crate::components::{
    calendar_grid::CalendarGrid,
    header::Header,
    banner::MonthBanners,
    media_viewer::MediaViewer,
    progress_bar::ProgressBar,
};
use crate::media::{self, MediaUrl};
use crate::source;
use crate::view_model;
use leptos::prelude::*;
use photo_calendar_common::{
    AssetLayout, CalendarState, DateRange, LoadOutcome, MediaCatalog, ViewerCommand, YearMonth,
};

/// アプリケーションの状態
pub type AppState = RwSignal<CalendarState<MediaUrl>>;

/// ブラウザの現在年月
fn today() -> YearMonth {
    let now = js_sys::Date::new_0();
    YearMonth::new(now.get_full_year() as i32, now.get_month() + 1)
        .unwrap_or(DateRange::default().min)
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let layout = AssetLayout::default();
    let state: AppState = RwSignal::new(CalendarState::new(
        MediaCatalog::default(),
        DateRange::default(),
        today(),
    ));
    let (is_loaded, set_is_loaded) = signal(false);

    // カタログ読み込み → 全メディアの読み込み開始
    {
        let layout = layout.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let catalog = match source::load_catalog().await {
                Ok(catalog) => catalog,
                Err(e) => {
                    source::warn(&format!("カタログを読み込めません: {:?}", e));
                    MediaCatalog::default()
                }
            };
            let (images, videos) = catalog.count_by_kind();
            source::log(&format!("カタログ: 画像 {} / 動画 {}", images, videos));

            let mut next = CalendarState::new(catalog, DateRange::default(), today())
                .with_banners(source::read_banners());
            let requests = next.begin_loading();
            state.set(next);
            set_is_loaded.set(true);

            let on_settled = move |round: u64, filename: String, outcome: LoadOutcome<MediaUrl>| {
                state.update(|s| {
                    s.settle(round, &filename, outcome);
                });
            };
            for request in requests {
                media::dispatch(request, &layout, on_settled);
            }
        });
    }

    // キーボード操作（ビューア表示中のみ）
    let keydown = window_event_listener(leptos::ev::keydown, move |ev| {
        let Some(command) = ViewerCommand::from_key(&ev.key()) else {
            return;
        };
        if state.with_untracked(|s| s.viewer().is_some()) {
            ev.prevent_default();
            state.update(|s| s.viewer_command(command));
        }
    });
    on_cleanup(move || keydown.remove());

    let label = Signal::derive(move || state.with(|s| s.month_label()));
    let can_go_prev = Signal::derive(move || state.with(|s| s.controls().can_go_prev));
    let can_go_next = Signal::derive(move || state.with(|s| s.controls().can_go_next));
    let progress = Signal::derive(move || state.with(|s| s.loader().progress()));
    let counts = Signal::derive(move || state.with(|s| s.loader().loaded_by_kind()));
    let is_complete = move || is_loaded.get() && state.with(|s| s.loader().is_complete());

    let cells = {
        let layout = layout.clone();
        Signal::derive(move || state.with(|s| view_model::day_cells(s, &layout)))
    };
    let month_banners = Signal::derive(move || state.with(view_model::month_banners));
    let viewer_item = {
        let layout = layout.clone();
        Signal::derive(move || state.with(|s| view_model::viewer_item(s, &layout)))
    };

    let on_step = move |delta: i32| {
        state.update(|s| {
            s.step(delta);
        });
    };
    let on_day = move |day: u32| {
        state.update(|s| {
            s.activate_day(day);
        });
    };
    let on_command = move |command: ViewerCommand| {
        state.update(|s| s.viewer_command(command));
    };

    view! {
        <div class="container">
            <Show
                when=is_complete
                fallback=move || view! { <ProgressBar progress=progress counts=counts /> }
            >
                <Header
                    label=label
                    can_go_prev=can_go_prev
                    can_go_next=can_go_next
                    on_step=on_step
                />
                <MonthBanners banners=month_banners />
                <CalendarGrid cells=cells on_day=on_day />
            </Show>

            <MediaViewer item=viewer_item on_command=on_command />
        </div>
    }
}
