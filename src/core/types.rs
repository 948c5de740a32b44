use serde::{Deserialize, Serialize};

/// Pixel size of the chart plotting area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1300, 320)
    }
}

/// One experiment arm.
///
/// `id` is the identity; `key()` is the string form used by counters and rates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variation {
    pub id: i64,
    pub name: String,
}

impl Variation {
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> String {
        self.id.to_string()
    }
}

/// Rendering mode picked in the style control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Linear,
    Bump,
    Area,
}

impl LineStyle {
    pub const ALL: [LineStyle; 3] = [LineStyle::Linear, LineStyle::Bump, LineStyle::Area];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Bump => "bump",
            Self::Area => "area",
        }
    }

    /// Label shown in the style picker.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::Bump => "Bump",
            Self::Area => "Area",
        }
    }

    #[must_use]
    pub fn is_area(self) -> bool {
        matches!(self, Self::Area)
    }
}

impl std::fmt::Display for LineStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LineStyle {
    type Err = crate::error::ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                crate::error::ChartError::InvalidData(format!(
                    "unknown line style `{s}` (expected linear, bump or area)"
                ))
            })
    }
}
