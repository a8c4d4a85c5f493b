use crate::config::ConfigError;
use crate::telemetry::TelemetryError;

/// Failures surfaced by the binary entrypoints (startup, binding, serving).
/// Request-level failures use `hiring::router::ApiError` instead.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("server error: {0}")]
    Server(#[from] axum::Error),
    #[error("seed error: {0}")]
    Seed(#[from] crate::hiring::HiringError),
}
