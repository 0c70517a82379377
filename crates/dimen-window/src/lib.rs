//! dimen-window: winit-backed display-metrics provider.
//!
//! Responsibilities:
//! - Derive `DisplayMetrics` from a live window's OS scale factor plus the
//!   configured font scale.
//! - Refresh the metrics on `ScaleFactorChanged` or monitor moves.
//! - Expose the metrics through `MetricsSource` so the conversions in
//!   dimen-core can take this provider directly.

use dimen_config::DisplayConfig;
use dimen_core::error::Result;
use dimen_core::{sanitize_scale, DisplayMetrics, MetricsError, MetricsSource};
use winit::window::Window;

/// Maintains display metrics for one window and updates them when the OS
/// changes scale.
#[derive(Debug, Clone)]
pub struct WindowMetrics {
    metrics: DisplayMetrics,
    font_scale: f32,
    density_override: Option<f32>,
}

impl WindowMetrics {
    /// Create from a live window and display configuration.
    pub fn new(window: &Window, config: &DisplayConfig) -> Result<Self> {
        Self::from_scale_factor(window.scale_factor(), config)
    }

    /// Create from a raw platform scale factor, for callers without a window
    /// (offscreen rendering, tests).
    pub fn from_scale_factor(scale_factor: f64, config: &DisplayConfig) -> Result<Self> {
        let font_scale = config.font_scale_or_default();
        if !font_scale.is_finite() || font_scale <= 0.0 {
            return Err(MetricsError::InvalidFontScale(font_scale));
        }
        if let Some(density) = config.density_override {
            if !density.is_finite() || density <= 0.0 {
                return Err(MetricsError::InvalidDensityOverride(density));
            }
        }

        let mut state = Self {
            metrics: DisplayMetrics::default(),
            font_scale,
            density_override: config.density_override,
        };
        state.rebuild(scale_factor);
        Ok(state)
    }

    /// Refresh from the window, after a resize or monitor move.
    pub fn update(&mut self, window: &Window) {
        self.rebuild(window.scale_factor());
    }

    /// Feed a `WindowEvent::ScaleFactorChanged` value directly.
    pub fn scale_factor_changed(&mut self, new_scale: f64) {
        self.rebuild(new_scale);
    }

    /// Current metrics snapshot.
    pub fn metrics(&self) -> DisplayMetrics {
        self.metrics
    }

    fn rebuild(&mut self, os_scale: f64) {
        let density = match self.density_override {
            Some(density) => density,
            None => sanitize_scale(os_scale as f32),
        };
        let next = DisplayMetrics::with_font_scale(density, self.font_scale);
        if next != self.metrics {
            tracing::debug!(
                density = next.density,
                scaled_density = next.scaled_density,
                "display metrics changed"
            );
        }
        self.metrics = next;
    }
}

impl MetricsSource for WindowMetrics {
    fn density(&self) -> f32 {
        self.metrics.density
    }

    fn scaled_density(&self) -> f32 {
        self.metrics.scaled_density
    }
}
