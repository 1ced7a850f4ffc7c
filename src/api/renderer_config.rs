use serde::{Deserialize, Serialize};

use crate::core::TextMetrics;
use crate::error::{ChartError, ChartResult};

/// Qualitative six-color palette cycled across series.
pub const DEFAULT_COLORS: [&str; 6] = [
    "#e41a1c", "#377eb8", "#4daf4a", "#984ea3", "#ff7f00", "#ffff33",
];

/// Immutable per-renderer settings.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format. Every field is optional in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRendererConfig {
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_padding")]
    pub padding: f64,
    #[serde(default = "default_colors")]
    pub colors: Vec<String>,
    #[serde(default = "default_ui_color")]
    pub ui_color: String,
    /// Outline color separating adjacent shapes.
    #[serde(default = "default_contrast_color")]
    pub contrast_color: String,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default = "default_char_width")]
    pub char_width: f64,
    #[serde(default = "default_char_padding")]
    pub char_padding: f64,
    /// Bottom margin reserved for category labels.
    #[serde(default = "default_label_row_height")]
    pub label_row_height: f64,
    #[serde(default = "default_legend_row_height")]
    pub legend_row_height: f64,
}

impl Default for ChartRendererConfig {
    fn default() -> Self {
        Self {
            height: default_height(),
            width: default_width(),
            padding: default_padding(),
            colors: default_colors(),
            ui_color: default_ui_color(),
            contrast_color: default_contrast_color(),
            font_size: default_font_size(),
            font_family: default_font_family(),
            char_width: default_char_width(),
            char_padding: default_char_padding(),
            label_row_height: default_label_row_height(),
            legend_row_height: default_legend_row_height(),
        }
    }
}

impl ChartRendererConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the plotting canvas size.
    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Replaces the series palette.
    #[must_use]
    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the axis, label and legend outline color.
    #[must_use]
    pub fn with_ui_color(mut self, color: impl Into<String>) -> Self {
        self.ui_color = color.into();
        self
    }

    #[must_use]
    pub fn with_contrast_color(mut self, color: impl Into<String>) -> Self {
        self.contrast_color = color.into();
        self
    }

    #[must_use]
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    #[must_use]
    pub fn with_font_family(mut self, font_family: impl Into<String>) -> Self {
        self.font_family = font_family.into();
        self
    }

    /// Sets the per-character text width estimate and swatch padding.
    #[must_use]
    pub fn with_text_metrics(mut self, char_width: f64, char_padding: f64) -> Self {
        self.char_width = char_width;
        self.char_padding = char_padding;
        self
    }

    #[must_use]
    pub fn text_metrics(&self) -> TextMetrics {
        TextMetrics::new(self.char_width, self.char_padding)
    }

    /// Left margin reserved for value-axis labels: room for five characters.
    #[must_use]
    pub fn value_label_width(&self) -> f64 {
        self.char_width * 5.0
    }

    /// Palette color for series `index`, cycling when series outnumber colors.
    ///
    /// An empty palette falls back to [`DEFAULT_COLORS`].
    #[must_use]
    pub fn color(&self, index: usize) -> &str {
        if self.colors.is_empty() {
            return DEFAULT_COLORS[index % DEFAULT_COLORS.len()];
        }
        &self.colors[index % self.colors.len()]
    }

    pub fn validate(&self) -> ChartResult<()> {
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "`{name}` must be finite and > 0"
                )));
            }
        }
        for (name, value) in [
            ("padding", self.padding),
            ("font_size", self.font_size),
            ("char_width", self.char_width),
            ("char_padding", self.char_padding),
            ("label_row_height", self.label_row_height),
            ("legend_row_height", self.legend_row_height),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }
        if self.colors.is_empty() {
            return Err(ChartError::InvalidConfig(
                "color palette must not be empty".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Parses and validates a JSON config; missing fields take their defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config json: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_height() -> f64 {
    480.0
}

fn default_width() -> f64 {
    640.0
}

fn default_padding() -> f64 {
    5.0
}

fn default_colors() -> Vec<String> {
    DEFAULT_COLORS.iter().map(|&color| color.to_owned()).collect()
}

fn default_ui_color() -> String {
    "#333".to_owned()
}

fn default_contrast_color() -> String {
    "white".to_owned()
}

fn default_font_size() -> f64 {
    16.0
}

fn default_font_family() -> String {
    "sans-serif".to_owned()
}

fn default_char_width() -> f64 {
    10.0
}

fn default_char_padding() -> f64 {
    4.0
}

fn default_label_row_height() -> f64 {
    20.0
}

fn default_legend_row_height() -> f64 {
    20.0
}
