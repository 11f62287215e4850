use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::AbortHandle;
use tracing::{debug, info};
use uuid::Uuid;

use crate::infra::store::Store;

const MIN_TICK: Duration = Duration::from_millis(1);

enum TickOutcome {
    Advanced(u8),
    Finished,
    Gone,
}

/// Handles of running progress jobs, so they can be cancelled when their
/// upload is removed or the service stops.
#[derive(Clone, Default)]
pub struct ProgressTasks {
    handles: Arc<Mutex<HashMap<Uuid, AbortHandle>>>,
}

impl ProgressTasks {
    pub fn track(&self, upload_id: Uuid, handle: AbortHandle) {
        if let Some(previous) = self.handles.lock().insert(upload_id, handle) {
            previous.abort();
        }
    }

    pub fn cancel(&self, upload_id: Uuid) -> bool {
        match self.handles.lock().remove(&upload_id) {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    /// Aborts every tracked job. Returns how many were still running.
    pub fn cancel_all(&self) -> usize {
        let drained: Vec<_> = self.handles.lock().drain().collect();
        let mut running = 0;
        for (_, handle) in drained {
            if !handle.is_finished() {
                running += 1;
            }
            handle.abort();
        }
        running
    }
}

pub fn spawn(store: Store, upload_id: Uuid, tick: Duration, step: u8) -> AbortHandle {
    tokio::spawn(run(store, upload_id, tick, step)).abort_handle()
}

/// Advances one upload by `step` percent per `tick` until it is terminal or
/// no longer stored.
pub async fn run(store: Store, upload_id: Uuid, tick: Duration, step: u8) {
    debug!(%upload_id, "upload progress started");
    let mut interval = tokio::time::interval(tick.max(MIN_TICK));
    // The first tick completes immediately.
    interval.tick().await;

    loop {
        interval.tick().await;
        match advance(&store, upload_id, step) {
            TickOutcome::Advanced(progress) => {
                debug!(%upload_id, progress, "upload progressed");
            }
            TickOutcome::Finished => {
                info!(%upload_id, "upload finished");
                break;
            }
            TickOutcome::Gone => {
                debug!(%upload_id, "upload removed, stopping progress");
                break;
            }
        }
    }
}

fn advance(store: &Store, upload_id: Uuid, step: u8) -> TickOutcome {
    let mut tables = store.write();
    let Some(upload) = tables.uploads.iter_mut().find(|upload| upload.id == upload_id) else {
        return TickOutcome::Gone;
    };

    if !upload.advance(step) || upload.status.is_terminal() {
        return TickOutcome::Finished;
    }
    TickOutcome::Advanced(upload.progress)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::upload::{FileUpload, UploadStatus};
    use crate::infra::store::Tables;

    fn store_with(upload: FileUpload) -> Store {
        Store::new(Tables {
            uploads: vec![upload],
            ..Tables::default()
        })
    }

    #[tokio::test(start_paused = true)]
    async fn progress_reaches_success() {
        let upload = FileUpload::new("sop.pdf".into(), 2048);
        let id = upload.id;
        let store = store_with(upload);

        run(store.clone(), id, Duration::from_millis(200), 10).await;

        let tables = store.read();
        assert_eq!(tables.uploads[0].progress, 100);
        assert_eq!(tables.uploads[0].status, UploadStatus::Success);
    }

    #[tokio::test(start_paused = true)]
    async fn progress_stops_when_upload_disappears() {
        let upload = FileUpload::new("sop.pdf".into(), 2048);
        let id = upload.id;
        let store = store_with(upload);

        let handle = tokio::spawn(run(store.clone(), id, Duration::from_millis(200), 10));
        tokio::time::sleep(Duration::from_millis(450)).await;
        store.write().uploads.clear();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn cancelled_job_leaves_progress_where_it_was() {
        let upload = FileUpload::new("sop.pdf".into(), 2048);
        let id = upload.id;
        let store = store_with(upload);
        let tasks = ProgressTasks::default();

        tasks.track(id, spawn(store.clone(), id, Duration::from_millis(200), 10));
        tokio::time::sleep(Duration::from_millis(450)).await;
        assert!(tasks.cancel(id));
        assert!(!tasks.cancel(id));

        let frozen = store.read().uploads[0].progress;
        assert!(frozen < 100);
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(store.read().uploads[0].progress, frozen);
        assert_eq!(store.read().uploads[0].status, UploadStatus::Uploading);
    }
}
