//! One-time display configuration for chart rendering
//!
//! Built once before report generation and passed down to every renderer;
//! there is no process-global plot state.

use plotters::style::RGBColor;

/// Muted categorical palette (seaborn "muted" order).
pub const PALETTE: [RGBColor; 10] = [
    RGBColor(72, 120, 208),
    RGBColor(238, 133, 74),
    RGBColor(106, 204, 100),
    RGBColor(214, 95, 95),
    RGBColor(149, 108, 180),
    RGBColor(140, 97, 60),
    RGBColor(220, 126, 192),
    RGBColor(121, 121, 121),
    RGBColor(213, 187, 103),
    RGBColor(130, 198, 226),
];

/// Diverging endpoint for correlation -1.0 (cool blue).
pub const HEAT_LOW: RGBColor = RGBColor(59, 76, 192);
/// Diverging endpoint for correlation +1.0 (warm red).
pub const HEAT_HIGH: RGBColor = RGBColor(180, 4, 38);

/// Figure size and font setup shared by all chart jobs.
#[derive(Debug, Clone)]
pub struct Theme {
    pub width: u32,
    pub height: u32,
}

impl Theme {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Palette color for a category index, cycling past the palette end.
    pub fn color(&self, index: usize) -> RGBColor {
        PALETTE[index % PALETTE.len()]
    }

    pub fn caption_font(&self) -> (&'static str, u32) {
        ("sans-serif", 30)
    }

    pub fn label_font(&self) -> (&'static str, u32) {
        ("sans-serif", 18)
    }

    /// Interpolated diverging color for a correlation in [-1, 1],
    /// passing through white at zero.
    pub fn heat_color(&self, correlation: f64) -> RGBColor {
        let t = correlation.clamp(-1.0, 1.0);
        let (from, frac) = if t < 0.0 {
            (HEAT_LOW, -t)
        } else {
            (HEAT_HIGH, t)
        };
        let blend = |c: u8| -> u8 {
            let white = 255.0;
            (white + (c as f64 - white) * frac).round() as u8
        };
        RGBColor(blend(from.0), blend(from.1), blend(from.2))
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(1200, 800)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles() {
        let theme = Theme::default();
        assert_eq!(theme.color(0), theme.color(PALETTE.len()));
    }

    #[test]
    fn test_heat_color_endpoints() {
        let theme = Theme::default();
        assert_eq!(theme.heat_color(0.0), RGBColor(255, 255, 255));
        assert_eq!(theme.heat_color(1.0), HEAT_HIGH);
        assert_eq!(theme.heat_color(-1.0), HEAT_LOW);
    }
}
