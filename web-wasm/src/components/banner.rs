//! バナーコンポーネント

use crate::view_model::BannerView;
use leptos::prelude::*;

#[component]
pub fn BannerStrip(banner: BannerView) -> impl IntoView {
    view! {
        <div class=banner.class style=banner.style>
            {banner.text}
        </div>
    }
}

/// 月全体のバナー一覧
#[component]
pub fn MonthBanners(banners: Signal<Vec<BannerView>>) -> impl IntoView {
    view! {
        <div class="month-banners">
            {move || {
                banners
                    .get()
                    .into_iter()
                    .map(|banner| view! { <BannerStrip banner=banner /> })
                    .collect_view()
            }}
        </div>
    }
}
