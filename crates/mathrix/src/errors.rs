//! Shared error types and utilities for the mathrix project.
#[cfg(not(target_arch = "wasm32"))]
pub use color_eyre::Report;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[cfg(not(target_arch = "wasm32"))]
    #[error("Failed to install color_eyre")]
    ColorEyre(#[from] color_eyre::Report),
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to write {key} to storage: {reason}")]
    Write { key: String, reason: String },
    #[error("Failed to serialize stored value: {0}")]
    Serialize(#[from] serde_json::Error),
}
