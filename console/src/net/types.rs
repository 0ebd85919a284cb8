//! Wire DTOs for the user/file management REST API.
//!
//! DESIGN
//! ======
//! Every endpoint wraps its payload in the same envelope. Resource records use
//! the backend's PascalCase field names; request bodies use camelCase. Fields
//! the backend may omit are defaulted so partial records still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use super::api::ApiError;
use crate::session::UserSummary;

/// `{ success, status, message, data }` response wrapper.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub status: i64,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    fn rejection(&self, fallback: &str) -> ApiError {
        ApiError::Rejected {
            message: self
                .message
                .clone()
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| fallback.to_owned()),
        }
    }

    /// Unwrap `data` from a successful envelope.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Rejected` with the server message (or `fallback`)
    /// when `success` is false or `data` is absent.
    pub fn into_data(self, fallback: &str) -> Result<T, ApiError> {
        if !self.success {
            return Err(self.rejection(fallback));
        }
        let err = self.rejection(fallback);
        self.data.ok_or(err)
    }

    /// Check `success` for endpoints whose `data` carries nothing useful.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Rejected` when `success` is false.
    pub fn into_unit(self, fallback: &str) -> Result<(), ApiError> {
        if self.success { Ok(()) } else { Err(self.rejection(fallback)) }
    }
}

// =============================================================
// Auth
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Payload of a sign-in envelope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInData {
    pub user: UserSummary,
    pub token: String,
    #[serde(rename = "expiresAt")]
    pub expires_at: String,
}

// =============================================================
// Users
// =============================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub facebook: String,
    #[serde(default)]
    pub twitter: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub instagram: String,
}

/// A user record as returned by `/users` endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    pub user_id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub last_login: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub social_links: Option<SocialLinks>,
}

impl User {
    /// "First Last" when both names are set, otherwise the email.
    pub fn display_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) if !first.is_empty() && !last.is_empty() => format!("{first} {last}"),
            _ => self.email.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { page: 1, limit: 10, total: 0, total_pages: 0 }
    }
}

impl Pagination {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserListData {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub pagination: Pagination,
}

/// Filters and paging for `GET /users`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserListQuery {
    pub page: u32,
    pub limit: u32,
    pub role: Option<String>,
    pub is_active: Option<bool>,
}

impl Default for UserListQuery {
    fn default() -> Self {
        Self { page: 1, limit: 10, role: None, is_active: None }
    }
}

impl UserListQuery {
    /// `page=..&limit=..[&role=..][&isActive=..]`, form-encoded.
    pub fn to_query_string(&self) -> String {
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        query.append_pair("page", &self.page.to_string());
        query.append_pair("limit", &self.limit.to_string());
        if let Some(role) = self.role.as_deref().filter(|r| !r.is_empty()) {
            query.append_pair("role", role);
        }
        if let Some(active) = self.is_active {
            query.append_pair("isActive", if active { "true" } else { "false" });
        }
        query.finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Partial update; unset fields are left untouched by the backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl UpdateUserRequest {
    /// Seed an edit form from an existing record.
    pub fn from_user(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: Some(user.email.clone()),
            password: None,
            role: Some(user.role.clone()),
            is_active: Some(user.is_active),
        }
    }
}

/// Profile edit payload sent by the profile card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    pub social_links: SocialLinks,
}

impl ProfileUpdate {
    pub fn from_user(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone().unwrap_or_default(),
            last_name: user.last_name.clone().unwrap_or_default(),
            email: user.email.clone(),
            phone: user.phone.clone().unwrap_or_default(),
            bio: user.bio.clone().unwrap_or_default(),
            social_links: user.social_links.clone().unwrap_or_default(),
        }
    }
}

// =============================================================
// Files
// =============================================================

/// A stored file belonging to a user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FileItem {
    pub file_id: String,
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub file_size: u64,
    #[serde(default)]
    pub file_extension: String,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub public_url: Option<String>,
    #[serde(default)]
    pub processing_status: String,
    #[serde(default)]
    pub processing_success_rate: f64,
    #[serde(default)]
    pub successful_chunks: u32,
    #[serde(default)]
    pub total_chunks: u32,
    #[serde(default)]
    pub collection: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}
