//! dimen-core: display-metrics types and pixel/dp/sp unit conversions.
//!
//! Responsibilities:
//! - Hold a screen's density and scaled-density factors (`DisplayMetrics`).
//! - Expose the metrics capability as a trait so any platform provider can
//!   feed the conversions (`MetricsSource`).
//! - Convert between physical pixels, density-independent units (dp), and
//!   scale-independent units (sp).

mod convert;
pub mod error;
mod metrics;

pub use convert::{dp_to_px, px_to_dp, px_to_sp, sp_to_px, snap_to_device};
pub use error::MetricsError;
pub use metrics::{sanitize_scale, DisplayMetrics, MetricsSource};
