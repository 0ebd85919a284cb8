//! REST client for the user/file management backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): requests fail with `ApiError::Unavailable`, since every
//! endpoint needs the browser-held bearer token.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses, `success: false` envelopes, and
//! undecodable bodies each map to one `ApiError` variant. Screens render
//! `ApiError::user_message` inline; nothing here retries or re-authenticates.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
    CreateUserRequest, Envelope, FileItem, ProfileUpdate, SignInData, SignInRequest, UpdateUserRequest, User,
    UserListData, UserListQuery,
};
use crate::config::ApiConfig;
use crate::session::types::parse_expiry;
use crate::session::{Session, SharedSessionStore};

pub const GENERIC_FAILURE: &str = "API request failed";
pub const NETWORK_FAILURE: &str = "Network error. Please check your connection and try again.";
pub const SIGN_IN_FAILURE: &str = "Sign-in failed. Please try again.";
const DECODE_FAILURE: &str = "Unexpected response from server.";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed ({status}): {message}")]
    Status { status: u16, message: String },
    #[error("request rejected: {message}")]
    Rejected { message: String },
    #[error("response decode failed: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Text suitable for an inline error banner.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) | Self::Unavailable => NETWORK_FAILURE.to_owned(),
            Self::Status { message, .. } | Self::Rejected { message } => message.clone(),
            Self::Decode(_) => DECODE_FAILURE.to_owned(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Per-request overrides merged over the client defaults.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl RequestOptions {
    /// # Errors
    ///
    /// Returns `ApiError::Decode` if `body` cannot be serialized to JSON.
    pub fn json<B: Serialize>(body: &B) -> Result<Self, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(Self { headers: Vec::new(), body: Some(body) })
    }
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Turn a raw status + body into a decoded envelope.
///
/// # Errors
///
/// Non-2xx statuses yield `ApiError::Status` with the body's `message` (or
/// the generic failure text); bodies that are not a valid envelope yield
/// `ApiError::Decode`.
pub fn interpret_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<Envelope<T>, ApiError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| GENERIC_FAILURE.to_owned());
        return Err(ApiError::Status { status, message });
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Bearer-authenticated JSON client bound to one API root.
#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    session: SharedSessionStore,
}

impl ApiClient {
    pub fn new(config: ApiConfig, session: SharedSessionStore) -> Self {
        Self { config, session }
    }

    pub fn session(&self) -> &SharedSessionStore {
        &self.session
    }

    /// Absolute URL for an endpoint path such as `/users`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_root(), path)
    }

    /// Default headers overlaid with `overrides` (header names compare
    /// case-insensitively). The bearer token is read from the store on every
    /// call and omitted when none is stored.
    pub fn headers(&self, overrides: &[(String, String)]) -> Vec<(String, String)> {
        let mut headers = vec![("Content-Type".to_owned(), "application/json".to_owned())];
        if let Some(token) = self.session.token() {
            headers.push(("Authorization".to_owned(), format!("Bearer {token}")));
        }
        for (name, value) in overrides {
            headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(name));
            headers.push((name.clone(), value.clone()));
        }
        headers
    }

    /// Issue a request and return the raw status and body.
    ///
    /// # Errors
    ///
    /// Transport failures yield `ApiError::Network`; off-browser every call
    /// yields `ApiError::Unavailable`.
    pub async fn send(&self, method: Method, path: &str, options: RequestOptions) -> Result<(u16, String), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let url = self.url(path);
            let mut builder = match method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
                Method::Delete => Request::delete(&url),
            };
            for (name, value) in self.headers(&options.headers) {
                builder = builder.header(&name, &value);
            }
            let request = match options.body {
                Some(body) => builder.body(body.to_string()),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            let resp = request.send().await.map_err(|e| {
                log::warn!("{method:?} {path} failed: {e}");
                ApiError::Network(e.to_string())
            })?;
            let status = resp.status();
            let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
            Ok((status, body))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (method, path, options);
            Err(ApiError::Unavailable)
        }
    }

    /// Issue a request and decode the envelope.
    ///
    /// # Errors
    ///
    /// See [`interpret_response`] and [`ApiClient::send`].
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<Envelope<T>, ApiError> {
        let (status, body) = self.send(method, path, options).await?;
        let result = interpret_response(status, &body);
        if let Err(e) = &result {
            log::warn!("{method:?} {path}: {e}");
        }
        result
    }

    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Envelope<T>, ApiError> {
        self.request(Method::Get, path, RequestOptions::default()).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<Envelope<T>, ApiError> {
        self.request(Method::Post, path, RequestOptions::json(body)?).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn put<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<Envelope<T>, ApiError> {
        self.request(Method::Put, path, RequestOptions::json(body)?).await
    }

    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<Envelope<T>, ApiError> {
        self.request(Method::Delete, path, RequestOptions::default()).await
    }

    // =============================================================
    // Endpoints
    // =============================================================

    /// Exchange credentials for a session and persist it.
    ///
    /// # Errors
    ///
    /// See [`interpret_sign_in`]; `ApiError::Decode` also when the session
    /// cannot be stored.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let request = SignInRequest { email: email.to_owned(), password: password.to_owned() };
        let (status, body) = self.send(Method::Post, SIGN_IN_PATH, RequestOptions::json(&request)?).await?;
        let session = interpret_sign_in(status, &body)?;
        self.session.set(&session).map_err(|e| ApiError::Decode(e.to_string()))?;
        log::debug!("session stored for {}", session.user.display_name());
        Ok(session)
    }

    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn list_users(&self, query: &UserListQuery) -> Result<UserListData, ApiError> {
        self.get::<UserListData>(&users_path(query))
            .await?
            .into_data("Failed to fetch users")
    }

    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get_user(&self, user_id: &str) -> Result<User, ApiError> {
        self.get::<User>(&user_path(user_id))
            .await?
            .into_data("Failed to fetch user data")
    }

    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn create_user(&self, request: &CreateUserRequest) -> Result<(), ApiError> {
        self.post::<serde_json::Value, _>(USERS_PATH, request)
            .await?
            .into_unit("Failed to create user")
    }

    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn update_user(&self, user_id: &str, request: &UpdateUserRequest) -> Result<(), ApiError> {
        self.put::<serde_json::Value, _>(&user_path(user_id), request)
            .await?
            .into_unit("Failed to update user")
    }

    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn update_profile(&self, user_id: &str, update: &ProfileUpdate) -> Result<(), ApiError> {
        self.put::<serde_json::Value, _>(&user_path(user_id), update)
            .await?
            .into_unit("Failed to save profile")
    }

    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn delete_user(&self, user_id: &str) -> Result<(), ApiError> {
        self.delete::<serde_json::Value>(&user_path(user_id))
            .await?
            .into_unit("Failed to delete user")
    }

    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn list_user_files(&self, user_id: &str) -> Result<Vec<FileItem>, ApiError> {
        let envelope = self.get::<Vec<FileItem>>(&user_files_path(user_id)).await?;
        if envelope.success {
            return Ok(envelope.data.unwrap_or_default());
        }
        envelope.into_unit("Failed to fetch user files").map(|()| Vec::new())
    }

    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn delete_file(&self, file_id: &str) -> Result<(), ApiError> {
        self.delete::<serde_json::Value>(&file_path(file_id))
            .await?
            .into_unit("Failed to delete file")
    }
}

// =============================================================
// Paths
// =============================================================

const SIGN_IN_PATH: &str = "/auth/signin";
const USERS_PATH: &str = "/users";

/// Percent-encode one path segment so `/`, `?` and `#` stay inside it.
fn segment(raw: &str) -> String {
    url::form_urlencoded::byte_serialize(raw.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

fn users_path(query: &UserListQuery) -> String {
    format!("{USERS_PATH}?{}", query.to_query_string())
}

fn user_path(user_id: &str) -> String {
    format!("{USERS_PATH}/{}", segment(user_id))
}

fn user_files_path(user_id: &str) -> String {
    format!("{USERS_PATH}/{}/files", segment(user_id))
}

fn file_path(file_id: &str) -> String {
    format!("/files/{}", segment(file_id))
}

/// Interpret a raw sign-in reply.
///
/// Failures always surface the server's `message` or [`SIGN_IN_FAILURE`]:
/// the outcome is read from `success`/`status` before `data` is decoded, so
/// a rejection with an empty or partial `data` still reports its message.
///
/// # Errors
///
/// `ApiError::Rejected` for non-2xx statuses and for envelopes without
/// `success && status == 1`; `ApiError::Decode` for an accepted reply whose
/// body or payload is unusable.
pub fn interpret_sign_in(status: u16, body: &str) -> Result<Session, ApiError> {
    let value = serde_json::from_str::<serde_json::Value>(body).ok();
    let message = value
        .as_ref()
        .and_then(|v| v.get("message"))
        .and_then(serde_json::Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map_or_else(|| SIGN_IN_FAILURE.to_owned(), str::to_owned);

    if !(200..300).contains(&status) {
        log::warn!("sign-in rejected with status {status}");
        return Err(ApiError::Rejected { message });
    }
    let Some(value) = value else {
        return Err(ApiError::Decode("sign-in response is not JSON".to_owned()));
    };
    let success = value.get("success").and_then(serde_json::Value::as_bool).unwrap_or(false);
    let code = value.get("status").and_then(serde_json::Value::as_i64).unwrap_or(0);
    if !success || code != 1 {
        return Err(ApiError::Rejected { message });
    }
    let envelope: Envelope<SignInData> = serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))?;
    session_from_sign_in(envelope)
}

/// Validate a sign-in envelope and build the session it describes.
fn session_from_sign_in(envelope: Envelope<SignInData>) -> Result<Session, ApiError> {
    if envelope.status != 1 {
        return Err(ApiError::Rejected {
            message: envelope
                .message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| SIGN_IN_FAILURE.to_owned()),
        });
    }
    let data = envelope.into_data(SIGN_IN_FAILURE)?;
    if data.token.is_empty() {
        return Err(ApiError::Decode("sign-in response has no token".to_owned()));
    }
    let expires_at = parse_expiry(&data.expires_at)
        .ok_or_else(|| ApiError::Decode(format!("invalid expiresAt: {}", data.expires_at)))?;
    Ok(Session { token: data.token, user: data.user, expires_at })
}
