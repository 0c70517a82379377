use anyhow::Result;
use dimen_core::{dp_to_px, px_to_dp, px_to_sp, sp_to_px, DisplayMetrics, MetricsSource};

/// A provider that models a platform handing out metrics per call, to make
/// sure the conversions stay generic over the capability rather than tied to
/// the concrete metrics struct.
struct FixedProvider {
    density: f32,
    font_scale: f32,
}

impl MetricsSource for FixedProvider {
    fn density(&self) -> f32 {
        self.density
    }

    fn scaled_density(&self) -> f32 {
        self.density * self.font_scale
    }
}

#[test]
fn conversions_accept_any_source() -> Result<()> {
    let provider = FixedProvider { density: 2.0, font_scale: 1.5 };

    assert_eq!(dp_to_px(&provider, 10.0), 20.5);
    assert_eq!(px_to_dp(&provider, 10.0), 5.5);
    assert_eq!(sp_to_px(&provider, 10.0), 30.5);
    assert_eq!(px_to_sp(&provider, 30.0), 10.5);

    Ok(())
}

#[test]
fn density_and_scaled_density_are_independent_axes() -> Result<()> {
    // A larger font scale moves sp results but leaves dp results alone.
    let normal = DisplayMetrics::with_font_scale(2.0, 1.0);
    let large_text = DisplayMetrics::with_font_scale(2.0, 1.3);

    assert_eq!(dp_to_px(&normal, 24.0), dp_to_px(&large_text, 24.0));
    assert!(sp_to_px(&large_text, 24.0) > sp_to_px(&normal, 24.0));

    Ok(())
}

#[test]
fn truncated_results_round_to_nearest_for_positive_values() -> Result<()> {
    // The +0.5 offset exists so that truncating the f32 result rounds
    // positive values to the nearest integer.
    let m = DisplayMetrics::uniform(1.5);

    // 10 dp at 1.5x is 15.0 px; 7 dp is 10.5 px.
    assert_eq!(dp_to_px(&m, 10.0) as i32, 15);
    assert_eq!(dp_to_px(&m, 7.0) as i32, 11);
    // 16 px at 1.5x is 10.666 dp, which should truncate to 11.
    assert_eq!(px_to_dp(&m, 16.0) as i32, 11);

    Ok(())
}
