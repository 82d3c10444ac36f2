//! Domain errors for the prediction gate

use thiserror::Error;

/// Failures surfaced by the prediction trigger.
///
/// The two unavailability kinds are checked before any vector is assembled;
/// no partial prediction is attempted with a missing resource.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// The model artifact was missing or unreadable at startup
    #[error("sales model is unavailable; cannot predict")]
    ModelUnavailable,

    /// The store reference table was missing or unreadable at startup
    #[error("store reference table is unavailable; cannot predict")]
    StoresUnavailable,

    /// The loaded model failed at inference time
    #[error("inference failed: {0}")]
    Inference(#[from] anyhow::Error),
}
