//! File listing state for a single user.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

use crate::net::types::FileItem;

pub const NO_FILES_NOTICE: &str = "No files found for this user.";
pub const MISSING_USER_ERROR: &str = "User ID is required to fetch files";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilesState {
    pub items: Vec<FileItem>,
    pub loading: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl FilesState {
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
        self.notice = None;
    }

    /// Reload after an action without dropping its notice.
    pub fn refreshing(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Drop `notice` if it is still the one shown; a newer notice stays.
    pub fn expire_notice(&mut self, notice: &str) {
        if self.notice.as_deref() == Some(notice) {
            self.notice = None;
        }
    }

    pub fn dismiss(&mut self) {
        self.error = None;
        self.notice = None;
    }

    /// Store the listing; an empty one gets an explanatory notice.
    pub fn loaded(&mut self, items: Vec<FileItem>) {
        if items.is_empty() {
            self.notice = Some(NO_FILES_NOTICE.to_owned());
        }
        self.items = items;
        self.loading = false;
    }

    pub fn failed(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
    }

    pub fn succeeded(&mut self, notice: &str) {
        self.notice = Some(notice.to_owned());
        self.loading = false;
    }

    pub fn total_bytes(&self) -> u64 {
        self.items.iter().map(|f| f.file_size).sum()
    }
}
