//! User management: filtered, paged list with create, edit, activate /
//! deactivate, and delete.
//!
//! DATA FLOW
//! =========
//! The list is refetched whenever the derived `UserListQuery` changes (page
//! or filters) and whenever a mutation succeeds. Mutations share one
//! settle path so their notices and errors look the same.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::notice::Notices;
use crate::config::NOTICE_TIMEOUT;
use crate::net::api::{ApiClient, ApiError};
use crate::net::types::{CreateUserRequest, UpdateUserRequest, User};
use crate::routes;
use crate::state::users::{
    UserFilters, UsersState, created_notice, delete_prompt, deleted_notice, toggled_notice, updated_notice,
};
use crate::util::dom::{after, confirm};
use crate::util::format::format_optional_date;

pub const ROLE_OPTIONS: [(&str, &str); 3] = [("admin", "Admin"), ("moderator", "Moderator"), ("user", "User")];
pub const MISSING_CREATE_FIELDS: &str = "Email and password are required.";

pub fn role_badge_class(role: &str) -> &'static str {
    match role {
        "admin" => "badge badge--red",
        "moderator" => "badge badge--yellow",
        _ => "badge badge--blue",
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateForm {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

impl Default for CreateForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            role: "user".to_owned(),
        }
    }
}

impl CreateForm {
    /// # Errors
    ///
    /// Returns [`MISSING_CREATE_FIELDS`] when email or password is blank.
    pub fn to_request(&self) -> Result<CreateUserRequest, &'static str> {
        let email = non_blank(&self.email).ok_or(MISSING_CREATE_FIELDS)?;
        if self.password.is_empty() {
            return Err(MISSING_CREATE_FIELDS);
        }
        Ok(CreateUserRequest {
            email,
            password: self.password.clone(),
            first_name: non_blank(&self.first_name),
            last_name: non_blank(&self.last_name),
            role: non_blank(&self.role),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
    pub is_active: bool,
}

impl EditForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone().unwrap_or_default(),
            last_name: user.last_name.clone().unwrap_or_default(),
            email: user.email.clone(),
            role: user.role.clone(),
            is_active: user.is_active,
        }
    }

    pub fn to_request(&self) -> UpdateUserRequest {
        UpdateUserRequest {
            first_name: non_blank(&self.first_name),
            last_name: non_blank(&self.last_name),
            email: non_blank(&self.email),
            password: None,
            role: non_blank(&self.role),
            is_active: Some(self.is_active),
        }
    }

    /// Name used in the "updated" notice.
    pub fn display_name(&self) -> String {
        User {
            email: self.email.trim().to_owned(),
            first_name: non_blank(&self.first_name),
            last_name: non_blank(&self.last_name),
            ..User::default()
        }
        .display_name()
    }
}

fn settle(state: RwSignal<UsersState>, reload: RwSignal<u32>, result: Result<(), ApiError>, notice: String) {
    match result {
        Ok(()) => {
            let shown = notice.clone();
            state.update(|s| s.succeeded(notice));
            reload.update(|n| *n = n.wrapping_add(1));
            after(NOTICE_TIMEOUT, move || {
                let _ = state.try_update(|s| s.expire_notice(&shown));
            });
        }
        Err(e) => {
            log::warn!("user action failed: {e}");
            state.update(|s| s.failed(e.user_message()));
        }
    }
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let state = RwSignal::new(UsersState::default());
    let reload = RwSignal::new(0_u32);
    let query = Memo::new(move |_| state.with(UsersState::query));
    let items = Memo::new(move |_| state.with(|s| s.items.clone()));

    let show_create = RwSignal::new(false);
    let create_form = RwSignal::new(CreateForm::default());
    let editing_id = RwSignal::new(None::<String>);
    let edit_form = RwSignal::new(EditForm::default());

    let fetch_api = api.clone();
    Effect::new(move || {
        reload.track();
        let query = query.get();
        let api = fetch_api.clone();
        state.update(UsersState::refreshing);
        leptos::task::spawn_local(async move {
            match api.list_users(&query).await {
                Ok(data) => state.update(|s| s.loaded(data)),
                Err(e) => state.update(|s| s.failed(e.user_message())),
            }
        });
    });

    let create_api = api.clone();
    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match create_form.with_untracked(CreateForm::to_request) {
            Ok(request) => request,
            Err(message) => {
                state.update(|s| s.failed(message.to_owned()));
                return;
            }
        };
        state.update(UsersState::begin);
        let api = create_api.clone();
        leptos::task::spawn_local(async move {
            let result = api.create_user(&request).await;
            if result.is_ok() {
                create_form.set(CreateForm::default());
                show_create.set(false);
            }
            settle(state, reload, result, created_notice(&request.email));
        });
    };

    let save_api = api.clone();
    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(user_id) = editing_id.get_untracked() else {
            return;
        };
        let form = edit_form.get_untracked();
        state.update(UsersState::begin);
        let api = save_api.clone();
        leptos::task::spawn_local(async move {
            let result = api.update_user(&user_id, &form.to_request()).await;
            if result.is_ok() {
                editing_id.set(None);
            }
            settle(state, reload, result, updated_notice(&form.display_name()));
        });
    };

    let on_edit = Callback::new(move |user: User| {
        edit_form.set(EditForm::from_user(&user));
        editing_id.set(Some(user.user_id));
    });

    let toggle_api = api.clone();
    let on_toggle = Callback::new(move |user: User| {
        let now_active = !user.is_active;
        let request = UpdateUserRequest { is_active: Some(now_active), ..UpdateUserRequest::default() };
        state.update(UsersState::begin);
        let api = toggle_api.clone();
        leptos::task::spawn_local(async move {
            let result = api.update_user(&user.user_id, &request).await;
            settle(state, reload, result, toggled_notice(&user.display_name(), now_active));
        });
    });

    let delete_api = api;
    let on_delete = Callback::new(move |user_id: String| {
        let (prompt, name) = state.with_untracked(|s| {
            let user = s.find(&user_id);
            (delete_prompt(user), user.map(User::display_name).unwrap_or_default())
        });
        if !confirm(&prompt) {
            return;
        }
        state.update(UsersState::begin);
        let api = delete_api.clone();
        leptos::task::spawn_local(async move {
            let result = api.delete_user(&user_id).await;
            settle(state, reload, result, deleted_notice(&name));
        });
    });

    let set_role_filter = move |ev: leptos::ev::Event| {
        let role = event_target_value(&ev);
        state.update(|s| {
            let filters = UserFilters { role, ..s.filters.clone() };
            s.set_filters(filters);
        });
    };
    let set_active_filter = move |ev: leptos::ev::Event| {
        let is_active = event_target_value(&ev);
        state.update(|s| {
            let filters = UserFilters { is_active, ..s.filters.clone() };
            s.set_filters(filters);
        });
    };

    view! {
        <div class="users-page">
            <div class="page-header">
                <h2 class="page-title">"User Management"</h2>
                <button class="btn btn--primary" on:click=move |_| show_create.update(|s| *s = !*s)>
                    {move || if show_create.get() { "Cancel" } else { "Add User" }}
                </button>
            </div>

            <Notices
                error=Signal::derive(move || state.with(|s| s.error.clone()))
                notice=Signal::derive(move || state.with(|s| s.notice.clone()))
                on_dismiss=Callback::new(move |()| state.update(UsersState::dismiss))
            />

            <div class="filters">
                <label class="filters__field">
                    "Role"
                    <select
                        prop:value=move || state.with(|s| s.filters.role.clone())
                        on:change=set_role_filter
                    >
                        <option value="">"All Roles"</option>
                        {ROLE_OPTIONS
                            .into_iter()
                            .map(|(value, label)| view! { <option value=value>{label}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="filters__field">
                    "Status"
                    <select
                        prop:value=move || state.with(|s| s.filters.is_active.clone())
                        on:change=set_active_filter
                    >
                        <option value="">"All Status"</option>
                        <option value="true">"Active"</option>
                        <option value="false">"Inactive"</option>
                    </select>
                </label>
            </div>

            <Show when=move || show_create.get()>
                <form class="form-card" on:submit=on_create.clone()>
                    <h3>"Create New User"</h3>
                    <input
                        class="input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || create_form.with(|f| f.email.clone())
                        on:input=move |ev| create_form.update(|f| f.email = event_target_value(&ev))
                    />
                    <input
                        class="input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || create_form.with(|f| f.password.clone())
                        on:input=move |ev| create_form.update(|f| f.password = event_target_value(&ev))
                    />
                    <input
                        class="input"
                        placeholder="First name"
                        prop:value=move || create_form.with(|f| f.first_name.clone())
                        on:input=move |ev| create_form.update(|f| f.first_name = event_target_value(&ev))
                    />
                    <input
                        class="input"
                        placeholder="Last name"
                        prop:value=move || create_form.with(|f| f.last_name.clone())
                        on:input=move |ev| create_form.update(|f| f.last_name = event_target_value(&ev))
                    />
                    <select
                        prop:value=move || create_form.with(|f| f.role.clone())
                        on:change=move |ev| create_form.update(|f| f.role = event_target_value(&ev))
                    >
                        {ROLE_OPTIONS
                            .into_iter()
                            .map(|(value, label)| view! { <option value=value>{label}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <button class="btn btn--primary" type="submit" disabled=move || state.with(|s| s.loading)>
                        "Create User"
                    </button>
                </form>
            </Show>

            <Show when=move || editing_id.with(Option::is_some)>
                <form class="form-card" on:submit=on_save.clone()>
                    <h3>"Edit User"</h3>
                    <input
                        class="input"
                        placeholder="First name"
                        prop:value=move || edit_form.with(|f| f.first_name.clone())
                        on:input=move |ev| edit_form.update(|f| f.first_name = event_target_value(&ev))
                    />
                    <input
                        class="input"
                        placeholder="Last name"
                        prop:value=move || edit_form.with(|f| f.last_name.clone())
                        on:input=move |ev| edit_form.update(|f| f.last_name = event_target_value(&ev))
                    />
                    <input
                        class="input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || edit_form.with(|f| f.email.clone())
                        on:input=move |ev| edit_form.update(|f| f.email = event_target_value(&ev))
                    />
                    <select
                        prop:value=move || edit_form.with(|f| f.role.clone())
                        on:change=move |ev| edit_form.update(|f| f.role = event_target_value(&ev))
                    >
                        {ROLE_OPTIONS
                            .into_iter()
                            .map(|(value, label)| view! { <option value=value>{label}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <label class="checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || edit_form.with(|f| f.is_active)
                            on:change=move |ev| edit_form.update(|f| f.is_active = event_target_checked(&ev))
                        />
                        "Active"
                    </label>
                    <div class="form-card__actions">
                        <button class="btn btn--primary" type="submit" disabled=move || state.with(|s| s.loading)>
                            "Save"
                        </button>
                        <button class="btn" type="button" on:click=move |_| editing_id.set(None)>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </Show>

            <Show when=move || state.with(|s| s.loading)>
                <p class="loading">"Loading users..."</p>
            </Show>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Role"</th>
                        <th>"Status"</th>
                        <th>"Last Login"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        items
                            .get()
                            .into_iter()
                            .map(|user| view! { <UserRow user=user on_edit=on_edit on_toggle=on_toggle on_delete=on_delete/> })
                            .collect_view()
                    }}
                </tbody>
            </table>

            <div class="pager">
                <button
                    class="btn"
                    disabled=move || !state.with(|s| s.pagination.has_previous())
                    on:click=move |_| {
                        state.update(|s| {
                            let page = s.pagination.page.saturating_sub(1);
                            s.go_to_page(page);
                        });
                    }
                >
                    "Previous"
                </button>
                <span class="pager__status">
                    {move || {
                        state.with(|s| {
                            format!(
                                "Page {} of {} ({} users)",
                                s.pagination.page,
                                s.pagination.total_pages.max(1),
                                s.pagination.total,
                            )
                        })
                    }}
                </span>
                <button
                    class="btn"
                    disabled=move || !state.with(|s| s.pagination.has_next())
                    on:click=move |_| {
                        state.update(|s| {
                            let page = s.pagination.page.saturating_add(1);
                            s.go_to_page(page);
                        });
                    }
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}

#[component]
fn UserRow(
    user: User,
    on_edit: Callback<User>,
    on_toggle: Callback<User>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let edit_user = user.clone();
    let toggle_user = user.clone();
    let delete_id = user.user_id.clone();
    let toggle_label = if user.is_active { "Deactivate" } else { "Activate" };
    let status = if user.is_active { "Active" } else { "Inactive" };
    let detail_href = routes::user_detail(&user.user_id);
    let files_href = routes::user_files(&user.user_id);
    let display_name = user.display_name();

    view! {
        <tr>
            <td>
                <A href=detail_href>{display_name}</A>
            </td>
            <td>{user.email.clone()}</td>
            <td>
                <span class=role_badge_class(&user.role)>{user.role.clone()}</span>
            </td>
            <td>{status}</td>
            <td>{format_optional_date(user.last_login.as_deref())}</td>
            <td class="data-table__actions">
                <button class="btn btn--small" on:click=move |_| on_edit.run(edit_user.clone())>"Edit"</button>
                <button class="btn btn--small" on:click=move |_| on_toggle.run(toggle_user.clone())>
                    {toggle_label}
                </button>
                <A href=files_href attr:class="btn btn--small">"Files"</A>
                <button class="btn btn--small btn--danger" on:click=move |_| on_delete.run(delete_id.clone())>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
