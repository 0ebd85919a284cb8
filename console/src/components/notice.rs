//! Inline error / success banners shared by the data screens.

use leptos::prelude::*;

/// Renders `error` and `notice` when set. Either may be dismissed.
#[component]
pub fn Notices(
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] notice: Signal<Option<String>>,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    let dismiss = move |_| {
        if let Some(cb) = on_dismiss {
            cb.run(());
        }
    };
    view! {
        <Show when=move || error.get().is_some()>
            <div class="notice notice--error" role="alert">
                <span>{move || error.get().unwrap_or_default()}</span>
                <button class="notice__close" on:click=dismiss>"×"</button>
            </div>
        </Show>
        <Show when=move || notice.get().is_some()>
            <div class="notice notice--success" role="status">
                <span>{move || notice.get().unwrap_or_default()}</span>
                <button class="notice__close" on:click=dismiss>"×"</button>
            </div>
        </Show>
    }
}
