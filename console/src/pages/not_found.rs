use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h2 class="page-title">"Page not found."</h2>
            <A href=routes::DASHBOARD attr:class="btn">"Back to dashboard"</A>
        </div>
    }
}
