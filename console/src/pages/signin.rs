//! Email + password sign-in page.

#[cfg(test)]
#[path = "signin_test.rs"]
mod signin_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::routes;
use crate::state::auth::AuthState;

pub const MISSING_CREDENTIALS: &str = "Please enter both email and password.";

/// Trimmed email and untouched password, or the message to show.
///
/// # Errors
///
/// Returns [`MISSING_CREDENTIALS`] when either field is blank.
pub fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) = match validate_credentials(&email.get_untracked(), &password.get_untracked()) {
            Ok(creds) => creds,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api.sign_in(&email_value, &password_value).await {
                Ok(_) => {
                    auth.update(|a| a.sync(api.session().as_ref()));
                    navigate(routes::DASHBOARD, NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("sign-in failed: {e}");
                    error.set(Some(e.user_message()));
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="signin-page">
            <div class="signin-card">
                <h1>"Sign In"</h1>
                <p class="signin-card__subtitle">"Enter your email and password to sign in!"</p>
                <form class="signin-form" on:submit=on_submit>
                    <label class="signin-label">
                        "Email"
                        <input
                            class="signin-input"
                            type="email"
                            name="email"
                            placeholder="info@gmail.com"
                            autocomplete="username"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="signin-label">
                        "Password"
                        <span class="signin-password">
                            <input
                                class="signin-input"
                                type=move || if show_password.get() { "text" } else { "password" }
                                name="password"
                                placeholder="Enter your password"
                                autocomplete="current-password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <button
                                class="signin-password__toggle"
                                type="button"
                                on:click=move |_| show_password.update(|s| *s = !*s)
                            >
                                {move || if show_password.get() { "Hide" } else { "Show" }}
                            </button>
                        </span>
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="signin-error" role="alert">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary signin-submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
