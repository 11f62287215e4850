pub mod app;
pub mod config;
pub mod domain;
pub mod http;
pub mod infra;
pub mod jobs;

use std::time::Duration;

use crate::app::auth::SessionContext;
use crate::config::AppConfig;
use crate::infra::{storage::LocalStorage, store::Store};
use crate::jobs::upload_progress::ProgressTasks;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub storage: LocalStorage,
    pub session: SessionContext,
    pub upload_tasks: ProgressTasks,
    pub simulated_latency: Duration,
    pub upload_tick: Duration,
    pub upload_progress_step: u8,
    pub upload_max_bytes: u64,
}

impl AppState {
    /// Fresh seeded store and an empty session; call
    /// [`app::auth::AuthService::restore`] to pick up a persisted user.
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            store: Store::seeded(),
            storage: LocalStorage::new(config),
            session: SessionContext::default(),
            upload_tasks: ProgressTasks::default(),
            simulated_latency: config.simulated_latency,
            upload_tick: config.upload_tick,
            upload_progress_step: config.upload_progress_step,
            upload_max_bytes: config.upload_max_bytes,
        }
    }
}
