use palette::{Hsl, IntoColor, Srgb};
use plotters::style::RGBColor;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Hue of the first generated colour (blue), so a pair reads blue/orange.
const BASE_HUE: f32 = 210.0;

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<RGBColor> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (BASE_HUE + (i as f32 / n as f32) * 360.0) % 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.45);
            let rgb: Srgb = hsl.into_color();
            RGBColor(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Colours for the (experiment, theory) series of one chart.
pub fn series_colors() -> (RGBColor, RGBColor) {
    let palette = generate_palette(2);
    (palette[0], palette[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_length() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(5).len(), 5);
    }

    #[test]
    fn series_colors_are_distinct() {
        let (experiment, theory) = series_colors();
        assert_ne!(experiment, theory);
        // Blue-ish experiment line.
        assert!(experiment.2 > experiment.0);
        // Orange-ish theory line.
        assert!(theory.0 > theory.2);
    }
}
