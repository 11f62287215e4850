use std::time::Duration;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::document::{Category, Document};
use crate::domain::upload::{extension_of, FileUpload, UploadStatus, SUPPORTED_EXTENSIONS};
use crate::infra::store::Store;
use crate::jobs::upload_progress::{self, ProgressTasks};

#[derive(Debug, Clone)]
pub struct IncomingFile {
    pub file_name: String,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Default)]
pub struct MetadataUpdate {
    pub title: Option<String>,
    pub category: Option<Category>,
}

#[derive(Debug)]
pub enum UpdateOutcome {
    Updated(FileUpload),
    NotFound,
    /// Metadata only opens up once the upload has succeeded.
    NotEditable(UploadStatus),
}

#[derive(Clone)]
pub struct UploadService {
    store: Store,
    tasks: ProgressTasks,
    tick: Duration,
    step: u8,
    max_bytes: u64,
}

impl UploadService {
    pub fn new(store: Store, tasks: ProgressTasks, tick: Duration, step: u8, max_bytes: u64) -> Self {
        Self {
            store,
            tasks,
            tick,
            step,
            max_bytes,
        }
    }

    /// Registers the files and schedules a progress job for each accepted
    /// one. Oversized or unsupported files are stored already failed.
    pub fn register(&self, files: Vec<IncomingFile>) -> Vec<FileUpload> {
        let mut registered = Vec::with_capacity(files.len());
        for file in files {
            let mut upload = FileUpload::new(file.file_name, file.size_bytes);
            if let Some(reason) = self.rejection(&upload) {
                tracing::warn!(upload_id = %upload.id, file_name = %upload.file_name, reason = %reason, "upload rejected");
                upload.fail(reason);
            }
            registered.push(upload);
        }

        self.store.write().uploads.extend(registered.iter().cloned());

        for upload in registered.iter().filter(|upload| !upload.status.is_terminal()) {
            let handle = upload_progress::spawn(self.store.clone(), upload.id, self.tick, self.step);
            self.tasks.track(upload.id, handle);
        }

        registered
    }

    pub fn list(&self) -> Vec<FileUpload> {
        self.store.read().uploads.clone()
    }

    pub fn get(&self, id: Uuid) -> Option<FileUpload> {
        self.store.read().uploads.iter().find(|upload| upload.id == id).cloned()
    }

    pub fn update_metadata(&self, id: Uuid, update: MetadataUpdate) -> UpdateOutcome {
        self.edit(id, |upload| {
            if let Some(title) = update.title {
                upload.title = title;
            }
            if let Some(category) = update.category {
                upload.category = category;
            }
        })
    }

    pub fn add_tag(&self, id: Uuid, tag: &str) -> UpdateOutcome {
        self.edit(id, |upload| {
            upload.add_tag(tag);
        })
    }

    pub fn remove_tag(&self, id: Uuid, index: usize) -> UpdateOutcome {
        self.edit(id, |upload| upload.remove_tag(index))
    }

    /// Drops the upload and cancels its progress job if one is running.
    pub fn remove(&self, id: Uuid) -> bool {
        let removed = {
            let mut tables = self.store.write();
            let before = tables.uploads.len();
            tables.uploads.retain(|upload| upload.id != id);
            tables.uploads.len() != before
        };
        if self.tasks.cancel(id) {
            tracing::debug!(upload_id = %id, "cancelled upload progress");
        }
        removed
    }

    /// Turns every successful upload into a document owned by `uploaded_by`
    /// and clears those uploads. Uploads still in flight or failed stay.
    pub fn save_all(&self, uploaded_by: &str) -> Vec<Document> {
        let today = OffsetDateTime::now_utc().date();
        let mut tables = self.store.write();

        let (ready, pending): (Vec<_>, Vec<_>) = tables
            .uploads
            .drain(..)
            .partition(|upload| upload.status == UploadStatus::Success);
        tables.uploads = pending;

        let highest_present = tables
            .documents
            .iter()
            .filter_map(|doc| doc.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        let mut next_id = tables.last_document_id.max(highest_present);

        let mut saved = Vec::with_capacity(ready.len());
        for upload in ready {
            self.tasks.cancel(upload.id);
            next_id += 1;
            let document = Document {
                id: next_id.to_string(),
                title: upload.title,
                content: format!("{} uploaded from {}", upload.category.display_name(), upload.file_name),
                category: upload.category,
                tags: upload.tags,
                uploaded_by: uploaded_by.to_string(),
                uploaded_at: today,
                last_modified: today,
                version: "1.0".to_string(),
                file_url: None,
            };
            tables.documents.push(document.clone());
            saved.push(document);
        }
        tables.last_document_id = next_id;

        if !saved.is_empty() {
            tracing::info!(count = saved.len(), uploaded_by, "saved uploaded documents");
        }
        saved
    }

    fn rejection(&self, upload: &FileUpload) -> Option<String> {
        if upload.size_bytes > self.max_bytes {
            return Some(format!("file exceeds the {} byte limit", self.max_bytes));
        }
        match extension_of(&upload.file_name) {
            Some(ext) if SUPPORTED_EXTENSIONS.contains(&ext.as_str()) => None,
            _ => Some("unsupported file type".to_string()),
        }
    }

    fn edit(&self, id: Uuid, apply: impl FnOnce(&mut FileUpload)) -> UpdateOutcome {
        let mut tables = self.store.write();
        let Some(upload) = tables.uploads.iter_mut().find(|upload| upload.id == id) else {
            return UpdateOutcome::NotFound;
        };
        if !upload.is_editable() {
            return UpdateOutcome::NotEditable(upload.status);
        }
        apply(upload);
        UpdateOutcome::Updated(upload.clone())
    }
}
