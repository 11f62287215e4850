use anyhow::{anyhow, Result};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub http_addr: String,
    pub storage_path: PathBuf,
    pub simulated_latency: Duration,
    pub upload_tick: Duration,
    pub upload_progress_step: u8,
    pub upload_max_bytes: u64,
    pub cors_allow_any_origin: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let http_addr = env_or("HTTP_ADDR", "0.0.0.0:8080");
        let _parsed_http_addr = SocketAddr::from_str(&http_addr)
            .map_err(|err| anyhow!("invalid HTTP_ADDR: {}", err))?;

        let upload_progress_step: u8 = env_or_parse("UPLOAD_PROGRESS_STEP", "10")?;
        if !(1..=100).contains(&upload_progress_step) {
            return Err(anyhow!("invalid UPLOAD_PROGRESS_STEP: must be between 1 and 100"));
        }

        let upload_tick_ms: u64 = env_or_parse("UPLOAD_TICK_MS", "200")?;
        if upload_tick_ms == 0 {
            return Err(anyhow!("invalid UPLOAD_TICK_MS: must be greater than 0"));
        }

        Ok(Self {
            http_addr,
            storage_path: PathBuf::from(env_or("KMS_STORAGE_PATH", "kms_storage.json")),
            simulated_latency: Duration::from_millis(env_or_parse("SIMULATED_LATENCY_MS", "1000")?),
            upload_tick: Duration::from_millis(upload_tick_ms),
            upload_progress_step,
            upload_max_bytes: env_or_parse("UPLOAD_MAX_BYTES", "10485760")?,
            cors_allow_any_origin: env_or_parse("CORS_ALLOW_ANY_ORIGIN", "true")?,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_or_parse<T>(key: &str, default: &str) -> Result<T>
where
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    let value = std::env::var(key).unwrap_or_else(|_| default.to_string());
    value
        .parse::<T>()
        .map_err(|err| anyhow!("invalid {}: {}", key, err))
}
