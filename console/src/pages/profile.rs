//! Signed-in administrator's own profile.
//!
//! The record is fetched by the id stored with the session, edited locally,
//! and written back with a single `PUT /users/{id}`.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::components::notice::Notices;
use crate::net::api::ApiClient;
use crate::net::types::ProfileUpdate;
use crate::state::auth::AuthState;

pub const NO_PROFILE_USER: &str = "No signed-in user to load.";
pub const PROFILE_SAVED: &str = "Profile updated successfully!";

/// Heading for the profile card: full name when known, else the email.
pub fn profile_heading(form: &ProfileUpdate) -> String {
    let name = format!("{} {}", form.first_name.trim(), form.last_name.trim());
    let name = name.trim();
    if name.is_empty() { form.email.clone() } else { name.to_owned() }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let user_id = Memo::new(move |_| {
        auth.with(|a| a.user.as_ref().and_then(|u| u.id.clone()))
            .filter(|id| !id.is_empty())
    });

    let form = RwSignal::new(ProfileUpdate::default());
    let editing = RwSignal::new(false);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);

    let load_api = api.clone();
    Effect::new(move || {
        let Some(id) = user_id.get() else {
            error.set(Some(NO_PROFILE_USER.to_owned()));
            return;
        };
        let api = load_api.clone();
        loading.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            match api.get_user(&id).await {
                Ok(user) => form.set(ProfileUpdate::from_user(&user)),
                Err(e) => error.set(Some(e.user_message())),
            }
            loading.set(false);
        });
    });

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = user_id.get_untracked() else {
            error.set(Some(NO_PROFILE_USER.to_owned()));
            return;
        };
        let update = form.get_untracked();
        let api = api.clone();
        loading.set(true);
        error.set(None);
        notice.set(None);
        leptos::task::spawn_local(async move {
            match api.update_profile(&id, &update).await {
                Ok(()) => {
                    notice.set(Some(PROFILE_SAVED.to_owned()));
                    editing.set(false);
                }
                Err(e) => {
                    log::warn!("profile save failed: {e}");
                    error.set(Some(e.user_message()));
                }
            }
            loading.set(false);
        });
    };

    let text_field = move |label: &'static str, get: fn(&ProfileUpdate) -> String, set: fn(&mut ProfileUpdate, String)| {
        view! {
            <label class="form-field">
                <span class="form-field__label">{label}</span>
                <input
                    class="input"
                    prop:value=move || form.with(get)
                    disabled=move || !editing.get()
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </label>
        }
    };

    view! {
        <div class="profile-page">
            <div class="page-header">
                <h2 class="page-title">{move || form.with(profile_heading)}</h2>
                <button class="btn" on:click=move |_| editing.update(|e| *e = !*e)>
                    {move || if editing.get() { "Cancel" } else { "Edit" }}
                </button>
            </div>

            <Notices
                error=error
                notice=notice
                on_dismiss=Callback::new(move |()| {
                    error.set(None);
                    notice.set(None);
                })
            />

            <form class="form-card" on:submit=on_save>
                <h3>"Contact Information"</h3>
                {text_field("First Name", |f| f.first_name.clone(), |f, v| f.first_name = v)}
                {text_field("Last Name", |f| f.last_name.clone(), |f, v| f.last_name = v)}
                {text_field("Email", |f| f.email.clone(), |f, v| f.email = v)}
                {text_field("Phone", |f| f.phone.clone(), |f, v| f.phone = v)}
                {text_field("Bio", |f| f.bio.clone(), |f, v| f.bio = v)}
                <h3>"Social Links"</h3>
                {text_field("Facebook", |f| f.social_links.facebook.clone(), |f, v| f.social_links.facebook = v)}
                {text_field("Twitter", |f| f.social_links.twitter.clone(), |f, v| f.social_links.twitter = v)}
                {text_field("LinkedIn", |f| f.social_links.linkedin.clone(), |f, v| f.social_links.linkedin = v)}
                {text_field("Instagram", |f| f.social_links.instagram.clone(), |f, v| f.social_links.instagram = v)}
                <Show when=move || editing.get()>
                    <button class="btn btn--primary" type="submit" disabled=move || loading.get()>
                        "Save Changes"
                    </button>
                </Show>
            </form>
        </div>
    }
}
