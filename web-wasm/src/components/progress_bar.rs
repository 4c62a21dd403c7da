//! 読み込み画面コンポーネント

use leptos::prelude::*;
use photo_calendar_common::LoadProgress;

#[component]
pub fn ProgressBar(
    progress: Signal<LoadProgress>,
    /// 読み込み済み (画像, 動画)
    counts: Signal<(usize, usize)>,
) -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="progress-container">
                <div class="progress-bar">
                    <div
                        class="progress-fill"
                        style=move || format!("width: {:.0}%", progress.get().fraction() * 100.0)
                    />
                </div>
                <p class="progress-text">
                    {move || {
                        let p = progress.get();
                        format!("読み込み中... {}/{} ({:.0}%)", p.settled(), p.total, p.fraction() * 100.0)
                    }}
                </p>
                <p class="progress-detail">
                    {move || {
                        let (images, videos) = counts.get();
                        format!("画像 {} / 動画 {}", images, videos)
                    }}
                </p>
                <Show when=move || { progress.get().failed > 0 }>
                    <p class="progress-error">
                        {move || format!("{}件のファイルを読み込めませんでした", progress.get().failed)}
                    </p>
                </Show>
            </div>
        </div>
    }
}
