//! Pixel/dp/sp conversions.
//!
//! Each function reads one scale factor from the source and applies a linear
//! transform plus a `+0.5` offset, so that callers truncating the result get
//! round-to-nearest for positive values. The offset is asymmetric for
//! negative inputs and conversions are not round-trip exact; both behaviors
//! are intentional and covered by tests.
//!
//! Scale factors are read as-is. A zero density yields an infinite result
//! rather than an error; sources built from OS data are expected to have
//! sanitized their factors already (see [`crate::sanitize_scale`]).

use crate::metrics::MetricsSource;

/// Convert physical pixels to density-independent units.
#[inline]
pub fn px_to_dp<S: MetricsSource>(source: &S, px: f32) -> f32 {
    px / source.density() + 0.5
}

/// Convert density-independent units to physical pixels.
#[inline]
pub fn dp_to_px<S: MetricsSource>(source: &S, dp: f32) -> f32 {
    dp * source.density() + 0.5
}

/// Convert physical pixels to scale-independent units (text sizing).
#[inline]
pub fn px_to_sp<S: MetricsSource>(source: &S, px: f32) -> f32 {
    px / source.scaled_density() + 0.5
}

/// Convert scale-independent units to physical pixels.
#[inline]
pub fn sp_to_px<S: MetricsSource>(source: &S, sp: f32) -> f32 {
    sp * source.scaled_density() + 0.5
}

/// Snap a logical coordinate to the nearest device pixel for crisp edges.
#[inline]
pub fn snap_to_device(v: f32, density: f32) -> f32 {
    let d = crate::sanitize_scale(density);
    (v * d).round() / d
}
