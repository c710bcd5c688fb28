//! Error types shared across the dashboard pipeline.

use thiserror::Error;

/// Everything that can terminate a dashboard build.
///
/// All variants are terminal for the current invocation: there is no retry
/// and no partial result. The UI catches the error and renders it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    /// The provider returned no usable rows, or the network call failed.
    #[error("data unavailable: {0}")]
    DataUnavailable(String),

    /// Not enough rows for the requested computation.
    #[error("insufficient data: need at least {required} observations, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// The forecasting model could not be fit on the given series.
    #[error("model fit failed: {0}")]
    ModelFit(String),
}

pub type DashResult<T> = Result<T, DashboardError>;

impl DashboardError {
    pub fn data_unavailable(msg: impl Into<String>) -> Self {
        Self::DataUnavailable(msg.into())
    }

    pub fn model_fit(msg: impl Into<String>) -> Self {
        Self::ModelFit(msg.into())
    }
}
