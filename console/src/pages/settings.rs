//! Account preferences. Entries are navigation placeholders only.

use leptos::prelude::*;

pub const PREFERENCE_ITEMS: [&str; 4] = ["Account preferences", "Notification", "Privacy", "Two-Step Authentication"];

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! {
        <div class="settings-page">
            <h2 class="page-title">"Settings"</h2>
            <nav class="settings-nav">
                {PREFERENCE_ITEMS
                    .into_iter()
                    .map(|label| view! { <div class="settings-nav__item">{label}</div> })
                    .collect::<Vec<_>>()}
            </nav>
        </div>
    }
}
