//! Landing page after sign-in.

use leptos::prelude::*;

use crate::components::metrics::{SalesMetrics, ShippedRanking};
use crate::state::auth::AuthState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="dashboard-page">
            <h2 class="page-title">{move || format!("Welcome back, {}", auth.get().display_name())}</h2>
            <div class="dashboard-grid">
                <div class="dashboard-grid__column">
                    <ShippedRanking/>
                </div>
                <div class="dashboard-grid__column">
                    <SalesMetrics/>
                </div>
            </div>
        </div>
    }
}
