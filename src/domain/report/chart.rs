//! Bar chart model - one horizontal bar per capability on a fixed 1-5 axis.

use serde::Serialize;

use crate::domain::assessment::CapabilityResult;
use crate::domain::foundation::MaturityLevel;
use crate::domain::questionnaire::Section;

/// Presentation settings that do not change any computed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartStyle {
    /// CSS-style colour for the bar fill.
    pub bar_fill: String,
    /// Decimal places for `display_value`.
    pub score_precision: usize,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            bar_fill: "#2563eb".to_string(),
            score_precision: 2,
        }
    }
}

/// A labelled tick on the maturity axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AxisTick {
    pub value: u8,
    pub label: &'static str,
}

/// The x-axis: always the full maturity scale, regardless of the data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct XAxis {
    pub min: u8,
    pub max: u8,
    pub ticks: Vec<AxisTick>,
}

impl XAxis {
    /// Axis spanning `MaturityLevel::MIN..=MAX` with one tick per level.
    pub fn maturity_scale() -> Self {
        let ticks = MaturityLevel::ALL
            .iter()
            .filter_map(|level| {
                MaturityLevel::tick_label(level.value()).map(|label| AxisTick {
                    value: level.value(),
                    label,
                })
            })
            .collect();
        Self {
            min: MaturityLevel::MIN.value(),
            max: MaturityLevel::MAX.value(),
            ticks,
        }
    }

    /// Fraction of the axis covered by `value`, clamped to [0, 1].
    pub fn fraction(&self, value: f64) -> f64 {
        let span = f64::from(self.max - self.min);
        ((value - f64::from(self.min)) / span).clamp(0.0, 1.0)
    }
}

/// One capability's bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bar {
    pub capability: String,
    pub section: Section,
    /// Unrounded mean; this is what the bar length encodes.
    pub value: f64,
    /// `value` rounded for labels only.
    pub display_value: f64,
}

/// Horizontal bar chart of capability averages.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChart {
    pub bars: Vec<Bar>,
    pub x_axis: XAxis,
    pub bar_fill: String,
    pub score_precision: usize,
}

impl BarChart {
    /// Builds bars in the order the results are given.
    pub fn from_results(results: &[CapabilityResult], style: &ChartStyle) -> Self {
        let bars = results
            .iter()
            .map(|r| Bar {
                capability: r.capability.clone(),
                section: r.section,
                value: r.average,
                display_value: round_to(r.average, style.score_precision),
            })
            .collect();

        Self {
            bars,
            x_axis: XAxis::maturity_scale(),
            bar_fill: style.bar_fill.clone(),
            score_precision: style.score_precision,
        }
    }
}

fn round_to(value: f64, places: usize) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
