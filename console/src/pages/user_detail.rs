//! Read-only view of one user record.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::net::api::ApiClient;
use crate::net::types::User;
use crate::routes;
use crate::util::format::format_optional_date;

#[component]
pub fn UserDetailPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let params = use_params_map();
    let user_id = Memo::new(move |_| params.with(|p| p.get("user_id").unwrap_or_default()));

    let user = RwSignal::new(None::<User>);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let id = user_id.get();
        if id.is_empty() {
            return;
        }
        let api = api.clone();
        loading.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            match api.get_user(&id).await {
                Ok(found) => user.set(Some(found)),
                Err(e) => {
                    user.set(None);
                    error.set(Some(e.user_message()));
                }
            }
            loading.set(false);
        });
    });

    let detail = move || {
        user.get().map(|u| {
            let status = if u.is_active { "Active" } else { "Inactive" };
            view! {
                <dl class="detail-list">
                    <dt>"ID"</dt>
                    <dd>{u.user_id.clone()}</dd>
                    <dt>"Name"</dt>
                    <dd>{u.display_name()}</dd>
                    <dt>"Email"</dt>
                    <dd>{u.email.clone()}</dd>
                    <dt>"Role"</dt>
                    <dd>{u.role.clone()}</dd>
                    <dt>"Status"</dt>
                    <dd>{status}</dd>
                    <dt>"Phone"</dt>
                    <dd>{u.phone.clone().unwrap_or_else(|| "N/A".to_owned())}</dd>
                    <dt>"Created"</dt>
                    <dd>{format_optional_date(u.created_at.as_deref())}</dd>
                    <dt>"Last Login"</dt>
                    <dd>{format_optional_date(u.last_login.as_deref())}</dd>
                </dl>
                <A href=routes::user_files(&u.user_id) attr:class="btn">"View Files"</A>
            }
        })
    };

    view! {
        <div class="user-detail-page">
            <h2 class="page-title">"User Detail"</h2>
            <Show when=move || loading.get()>
                <p class="loading">"Loading user..."</p>
            </Show>
            <Show when=move || error.get().is_some()>
                <p class="notice notice--error" role="alert">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() && error.get().is_none() && user.with(Option::is_none)>
                <p class="notice notice--error">"User not found."</p>
            </Show>
            {detail}
            <A href=routes::USERS attr:class="btn btn--primary">"Back to Users"</A>
        </div>
    }
}
