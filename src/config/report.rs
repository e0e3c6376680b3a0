//! Report presentation configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::report::ChartStyle;

/// How results are presented. None of these settings alter a score.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Bar fill colour (`#rgb` or `#rrggbb`)
    #[serde(default = "default_bar_fill")]
    pub bar_fill: String,

    /// Cells in a full-length text bar
    #[serde(default = "default_text_width")]
    pub text_width: usize,

    /// Decimal places shown next to each bar
    #[serde(default = "default_score_precision")]
    pub score_precision: usize,
}

impl ReportConfig {
    /// Chart style for the report module
    pub fn chart_style(&self) -> ChartStyle {
        ChartStyle {
            bar_fill: self.bar_fill.clone(),
            score_precision: self.score_precision,
        }
    }

    /// Validate report configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_hex_colour(&self.bar_fill) {
            return Err(ValidationError::InvalidBarFill(self.bar_fill.clone()));
        }
        if !(10..=200).contains(&self.text_width) {
            return Err(ValidationError::InvalidTextWidth);
        }
        if self.score_precision > 4 {
            return Err(ValidationError::InvalidScorePrecision);
        }
        Ok(())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            bar_fill: default_bar_fill(),
            text_width: default_text_width(),
            score_precision: default_score_precision(),
        }
    }
}

fn is_hex_colour(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => {
            matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}

fn default_bar_fill() -> String {
    "#2563eb".to_string()
}

fn default_text_width() -> usize {
    40
}

fn default_score_precision() -> usize {
    2
}
