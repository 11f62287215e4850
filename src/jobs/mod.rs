pub mod upload_progress;
