//! Error types for metrics providers.

use thiserror::Error;

/// Result type for metrics-provider operations.
pub type Result<T> = std::result::Result<T, MetricsError>;

/// Errors raised when building display metrics from configured values.
///
/// The conversions themselves are infallible; these only occur at the edge
/// where user configuration meets OS-reported data.
#[derive(Error, Debug)]
pub enum MetricsError {
    /// Configured font scale is not a finite positive number.
    #[error("invalid font scale {0}: must be finite and > 0")]
    InvalidFontScale(f32),

    /// Configured density override is not a finite positive number.
    #[error("invalid density override {0}: must be finite and > 0")]
    InvalidDensityOverride(f32),
}
