//! カレンダーグリッドコンポーネント

use crate::components::banner::BannerStrip;
use crate::view_model::{CellMedia, DayCellView};
use leptos::prelude::*;
use photo_calendar_common::{MediaKind, WEEKDAY_LABELS};

#[component]
pub fn CalendarGrid<F>(cells: Signal<Vec<Option<DayCellView>>>, on_day: F) -> impl IntoView
where
    F: Fn(u32) + 'static + Clone + Send,
{
    view! {
        <div class="calendar">
            <div class="weekdays">
                {WEEKDAY_LABELS
                    .iter()
                    .map(|label| view! { <div class="weekday">{*label}</div> })
                    .collect_view()}
            </div>
            <div class="days">
                {move || {
                    let on_day = on_day.clone();
                    cells
                        .get()
                        .into_iter()
                        .map(|cell| match cell {
                            Some(cell) => view! { <DayCell cell=cell on_day=on_day.clone() /> }.into_any(),
                            None => view! { <div class="day blank"></div> }.into_any(),
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn DayCell<F>(cell: DayCellView, on_day: F) -> impl IntoView
where
    F: Fn(u32) + 'static + Clone + Send,
{
    let day = cell.day;
    let has_media = cell.media.is_some();
    let on_click = move |_| {
        if has_media {
            on_day(day);
        }
    };

    view! {
        <div class="day" class:has-media=has_media on:click=on_click>
            <span class="day-number">{day}</span>
            {cell.media.map(|media| view! { <Thumbnail media=media /> })}
            {cell
                .banners
                .into_iter()
                .map(|banner| view! { <BannerStrip banner=banner /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn Thumbnail(media: CellMedia) -> impl IntoView {
    let class = media.css_class();
    let badge = (media.count > 1).then(|| view! { <span class="media-count">{media.count}</span> });
    let video_icon = (media.kind == MediaKind::Video).then(|| view! { <span class="video-icon">"▶"</span> });

    let body = match media.src {
        Some(src) => view! { <img src=src alt=media.filename.clone() /> }.into_any(),
        None if media.failed => view! { <span class="placeholder-icon">"⚠"</span> }.into_any(),
        None => view! { <span class="placeholder-icon">{media.kind.icon()}</span> }.into_any(),
    };

    view! {
        <div class=class title=media.filename>
            {body}
            {video_icon}
            {badge}
        </div>
    }
}
