use indexmap::IndexMap;
use tracing::debug;

use crate::core::Variation;
use crate::error::ChartResult;
use crate::render::Color;

/// Palette applied by variation position.
pub const DEFAULT_PALETTE_HEX: [&str; 5] =
    ["#FF5733", "#FFC300", "#8E44AD", "#3A86FF", "#28A745"];

const OVERFLOW_BASE_HUE_DEG: f64 = 180.0;
const GOLDEN_ANGLE_DEG: f64 = 137.508;
const OVERFLOW_SATURATION: f64 = 0.65;
const OVERFLOW_LIGHTNESS: f64 = 0.5;

/// Variation key to display color, in variation order.
pub type ColorMap = IndexMap<String, Color>;

/// Positional color assignment with procedural overflow.
///
/// Positions past the palette walk the hue circle by the golden angle, so the
/// result depends only on the palette and the variation order.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorAssigner {
    palette: Vec<Color>,
}

impl Default for ColorAssigner {
    fn default() -> Self {
        Self {
            palette: vec![
                Color::from_rgb8(0xFF, 0x57, 0x33),
                Color::from_rgb8(0xFF, 0xC3, 0x00),
                Color::from_rgb8(0x8E, 0x44, 0xAD),
                Color::from_rgb8(0x3A, 0x86, 0xFF),
                Color::from_rgb8(0x28, 0xA7, 0x45),
            ],
        }
    }
}

impl ColorAssigner {
    pub fn new(palette: Vec<Color>) -> ChartResult<Self> {
        for color in &palette {
            color.validate()?;
        }
        Ok(Self { palette })
    }

    pub fn from_hex_palette<S: AsRef<str>>(palette: &[S]) -> ChartResult<Self> {
        let colors = palette
            .iter()
            .map(|hex| Color::from_hex(hex.as_ref()))
            .collect::<ChartResult<Vec<_>>>()?;
        Self::new(colors)
    }

    #[must_use]
    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    #[must_use]
    pub fn color_at(&self, position: usize) -> Color {
        if let Some(color) = self.palette.get(position) {
            return *color;
        }
        let overflow_slot = (position - self.palette.len()) as f64;
        Color::from_hsl(
            OVERFLOW_BASE_HUE_DEG + overflow_slot * GOLDEN_ANGLE_DEG,
            OVERFLOW_SATURATION,
            OVERFLOW_LIGHTNESS,
        )
    }

    #[must_use]
    pub fn assign(&self, variations: &[Variation]) -> ColorMap {
        if variations.len() > self.palette.len() {
            debug!(
                variations = variations.len(),
                palette = self.palette.len(),
                "palette exhausted, generating overflow colors"
            );
        }
        variations
            .iter()
            .enumerate()
            .map(|(position, variation)| (variation.key(), self.color_at(position)))
            .collect()
    }
}
