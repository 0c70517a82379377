//! Display metrics: the two scale factors the unit conversions read.

/// A screen's scale factors, as reported by the host platform.
///
/// `density` is the physical-pixel-per-dp ratio (the OS scale factor).
/// `scaled_density` is the physical-pixel-per-sp ratio: density multiplied by
/// the user's font-size preference, so text-sized values track that setting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMetrics {
    pub density: f32,
    pub scaled_density: f32,
}

impl DisplayMetrics {
    /// Metrics with no font-size preference applied (`scaled_density == density`).
    pub fn uniform(density: f32) -> Self {
        Self { density, scaled_density: density }
    }

    /// Metrics for a given density and user font-scale multiplier.
    pub fn with_font_scale(density: f32, font_scale: f32) -> Self {
        Self { density, scaled_density: density * font_scale }
    }
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self::uniform(1.0)
    }
}

/// Capability of supplying a screen's density and scaled density.
///
/// The conversions only ever read through this trait; they never store or
/// mutate the source.
pub trait MetricsSource {
    /// Pixel-per-dp ratio.
    fn density(&self) -> f32;
    /// Pixel-per-sp ratio (affected by the user font-size preference).
    fn scaled_density(&self) -> f32;
}

impl MetricsSource for DisplayMetrics {
    fn density(&self) -> f32 {
        self.density
    }

    fn scaled_density(&self) -> f32 {
        self.scaled_density
    }
}

impl<T: MetricsSource + ?Sized> MetricsSource for &T {
    fn density(&self) -> f32 {
        (**self).density()
    }

    fn scaled_density(&self) -> f32 {
        (**self).scaled_density()
    }
}

/// Fall back to 1.0 for non-finite or non-positive scale factors.
///
/// Used by provider layers when building metrics from OS-reported data; the
/// conversion functions themselves pass their input through untouched.
#[inline]
pub fn sanitize_scale(scale: f32) -> f32 {
    if scale.is_finite() && scale > 0.0 { scale } else { 1.0 }
}
