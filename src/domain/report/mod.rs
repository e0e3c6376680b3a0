//! Report module - chart data and summary for a submitted assessment.
//!
//! Everything here is derived from `CapabilityResult`s; nothing is stored.

mod chart;
mod text;

pub use chart::{AxisTick, Bar, BarChart, ChartStyle, XAxis};
pub use text::render_text;

use serde::Serialize;

use super::assessment::{CapabilityResult, Recommendation};

/// The results view handed to the UI layer after submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    pub chart: BarChart,
    pub recommendation: Option<Recommendation>,
    /// The recommendation as a single sentence.
    pub recommendation_message: Option<String>,
    pub results: Vec<CapabilityResult>,
}

impl AssessmentReport {
    /// Builds the chart and recommendation from completed results.
    pub fn build(results: Vec<CapabilityResult>, style: &ChartStyle) -> Self {
        let chart = BarChart::from_results(&results, style);
        let recommendation = Recommendation::from_results(&results);
        let recommendation_message = recommendation.as_ref().map(Recommendation::message);
        Self {
            chart,
            recommendation,
            recommendation_message,
            results,
        }
    }

    /// Plain-text rendering: chart, legend, then the recommendation.
    pub fn to_text(&self, width: usize) -> String {
        let mut out = render_text(&self.chart, width);
        if let Some(message) = &self.recommendation_message {
            out.push('\n');
            out.push_str(message);
            out.push('\n');
        }
        out
    }
}
