//! ヘッダーコンポーネント（年月表示と月送り）

use leptos::prelude::*;

#[component]
pub fn Header<F>(
    label: Signal<String>,
    can_go_prev: Signal<bool>,
    can_go_next: Signal<bool>,
    on_step: F,
) -> impl IntoView
where
    F: Fn(i32) + 'static + Clone + Send,
{
    let on_prev = {
        let on_step = on_step.clone();
        move |_| on_step(-1)
    };
    let on_next = move |_| on_step(1);

    view! {
        <header class="header">
            <button
                class="nav-button prev"
                disabled=move || !can_go_prev.get()
                on:click=on_prev
            >
                "‹"
            </button>
            <h1 class="month-label">{move || label.get()}</h1>
            <button
                class="nav-button next"
                disabled=move || !can_go_next.get()
                on:click=on_next
            >
                "›"
            </button>
        </header>
    }
}
