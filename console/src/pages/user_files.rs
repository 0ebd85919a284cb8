//! Files uploaded by one user, with processing status and delete.

#[cfg(test)]
#[path = "user_files_test.rs"]
mod user_files_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::notice::Notices;
use crate::config::NOTICE_TIMEOUT;
use crate::net::api::ApiClient;
use crate::net::types::FileItem;
use crate::routes;
use crate::state::files::{FilesState, MISSING_USER_ERROR};
use crate::util::dom::{after, confirm};
use crate::util::format::{format_file_size, format_optional_date};

pub const DELETE_FILE_PROMPT: &str = "Are you sure you want to delete this file?";
pub const FILE_DELETED_NOTICE: &str = "File deleted successfully!";

/// Icon for a file, matched on extension first and then MIME type.
pub fn file_icon(extension: &str, mime_type: &str) -> &'static str {
    let ext = extension.trim().trim_start_matches('.').to_ascii_lowercase();
    let mime = mime_type.to_ascii_lowercase();
    let ext_is = |candidates: &[&str]| candidates.contains(&ext.as_str());
    let mime_has = |needles: &[&str]| needles.iter().any(|n| mime.contains(n));

    if ext_is(&["pdf"]) || mime_has(&["pdf"]) {
        "📄"
    } else if mime_has(&["image"]) {
        "🖼️"
    } else if mime_has(&["video"]) {
        "🎥"
    } else if mime_has(&["audio"]) {
        "🎵"
    } else if ext_is(&["doc", "docx"]) || mime_has(&["word"]) {
        "📝"
    } else if ext_is(&["xls", "xlsx"]) || mime_has(&["excel", "sheet"]) {
        "📊"
    } else if ext_is(&["ppt", "pptx"]) || mime_has(&["powerpoint", "presentation"]) {
        "📽️"
    } else if ext_is(&["zip", "rar"]) || mime_has(&["zip", "rar"]) {
        "🗜️"
    } else if ext_is(&["txt"]) || mime_has(&["text"]) {
        "📃"
    } else {
        "📁"
    }
}

/// Badge text and modifier class for a processing status.
pub fn processing_status_label(status: &str, success_rate: f64) -> (String, &'static str) {
    match status.to_ascii_lowercase().as_str() {
        "completed" => (format!("✅ Completed ({success_rate}%)"), "badge badge--green"),
        "processing" => ("⏳ Processing".to_owned(), "badge badge--yellow"),
        "failed" => ("❌ Failed".to_owned(), "badge badge--red"),
        _ => (status.to_owned(), "badge badge--gray"),
    }
}

#[component]
pub fn UserFilesPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let params = use_params_map();
    let user_id = Memo::new(move |_| params.with(|p| p.get("user_id").unwrap_or_default()));
    let state = RwSignal::new(FilesState::default());
    let reload = RwSignal::new(0_u32);

    let fetch_api = api.clone();
    Effect::new(move || {
        reload.track();
        let id = user_id.get();
        if id.trim().is_empty() {
            state.update(|s| s.failed(MISSING_USER_ERROR.to_owned()));
            return;
        }
        let api = fetch_api.clone();
        state.update(FilesState::refreshing);
        leptos::task::spawn_local(async move {
            match api.list_user_files(&id).await {
                Ok(items) => state.update(|s| s.loaded(items)),
                Err(e) => state.update(|s| s.failed(e.user_message())),
            }
        });
    });

    let on_delete = Callback::new(move |file_id: String| {
        if !confirm(DELETE_FILE_PROMPT) {
            return;
        }
        state.update(FilesState::begin);
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.delete_file(&file_id).await {
                Ok(()) => {
                    state.update(|s| s.succeeded(FILE_DELETED_NOTICE));
                    reload.update(|n| *n = n.wrapping_add(1));
                    after(NOTICE_TIMEOUT, move || {
                        let _ = state.try_update(|s| s.expire_notice(FILE_DELETED_NOTICE));
                    });
                }
                Err(e) => {
                    log::warn!("delete file {file_id} failed: {e}");
                    state.update(|s| s.failed(e.user_message()));
                }
            }
        });
    });

    let items = Memo::new(move |_| state.with(|s| s.items.clone()));

    view! {
        <div class="user-files-page">
            <div class="page-header">
                <h2 class="page-title">"User Files"</h2>
                <A href=move || routes::user_detail(&user_id.get()) attr:class="btn">"Back to User"</A>
            </div>

            <Notices
                error=Signal::derive(move || state.with(|s| s.error.clone()))
                notice=Signal::derive(move || state.with(|s| s.notice.clone()))
                on_dismiss=Callback::new(move |()| state.update(FilesState::dismiss))
            />

            <Show when=move || state.with(|s| s.loading)>
                <p class="loading">"Loading files..."</p>
            </Show>

            <p class="user-files-page__summary">
                {move || {
                    state.with(|s| format!("{} files, {}", s.items.len(), format_file_size(s.total_bytes())))
                }}
            </p>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"File"</th>
                        <th>"Size"</th>
                        <th>"Status"</th>
                        <th>"Chunks"</th>
                        <th>"Uploaded"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        items
                            .get()
                            .into_iter()
                            .map(|file| view! { <FileRow file=file on_delete=on_delete/> })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn FileRow(file: FileItem, on_delete: Callback<String>) -> impl IntoView {
    let (status_label, status_class) = processing_status_label(&file.processing_status, file.processing_success_rate);
    let delete_id = file.file_id.clone();
    let name = file.file_name.clone();
    let link = file.public_url.clone().filter(|u| !u.is_empty());

    view! {
        <tr>
            <td class="file-cell">
                <span class="file-cell__icon">{file_icon(&file.file_extension, &file.mime_type)}</span>
                {match link {
                    Some(href) => view! { <a href=href target="_blank" rel="noopener">{name}</a> }.into_any(),
                    None => view! { <span>{name}</span> }.into_any(),
                }}
            </td>
            <td>{format_file_size(file.file_size)}</td>
            <td>
                <span class=status_class>{status_label}</span>
            </td>
            <td>{format!("{}/{}", file.successful_chunks, file.total_chunks)}</td>
            <td>{format_optional_date(file.created_at.as_deref())}</td>
            <td>
                <button class="btn btn--small btn--danger" on:click=move |_| on_delete.run(delete_id.clone())>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
