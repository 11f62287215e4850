use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::document::Category;

pub const SUPPORTED_EXTENSIONS: [&str; 6] = ["pdf", "doc", "docx", "txt", "xls", "xlsx"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadStatus {
    Uploading,
    Success,
    Error,
}

impl UploadStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, UploadStatus::Uploading)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileUpload {
    pub id: Uuid,
    pub file_name: String,
    pub size_bytes: u64,
    pub title: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub status: UploadStatus,
    pub progress: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileUpload {
    pub fn new(file_name: String, size_bytes: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title_from_file_name(&file_name),
            file_name,
            size_bytes,
            category: Category::Manual,
            tags: Vec::new(),
            status: UploadStatus::Uploading,
            progress: 0,
            error: None,
        }
    }

    /// Moves the upload forward by `step` percent. Returns false once the
    /// upload is terminal and nothing changed.
    pub fn advance(&mut self, step: u8) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        self.progress = self.progress.saturating_add(step).min(100);
        if self.progress == 100 {
            self.status = UploadStatus::Success;
        }
        true
    }

    pub fn fail(&mut self, reason: impl Into<String>) {
        self.status = UploadStatus::Error;
        self.error = Some(reason.into());
    }

    pub fn is_editable(&self) -> bool {
        self.status == UploadStatus::Success
    }

    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn remove_tag(&mut self, index: usize) {
        if index < self.tags.len() {
            self.tags.remove(index);
        }
    }
}

/// Strips the last extension: `manual.v2.pdf` becomes `manual.v2`.
pub fn title_from_file_name(file_name: &str) -> String {
    match file_name.rfind('.') {
        Some(dot) if dot > 0 && dot + 1 < file_name.len() => file_name[..dot].to_string(),
        _ => file_name.to_string(),
    }
}

pub fn extension_of(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}
