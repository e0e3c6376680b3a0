//! Plain-text rendering of the bar chart.

use super::BarChart;

/// Renders the chart as aligned rows of `█`/`░` followed by a tick legend.
///
/// `width` is the number of cells a bar at the axis maximum occupies.
pub fn render_text(chart: &BarChart, width: usize) -> String {
    let label_width = chart
        .bars
        .iter()
        .map(|b| b.capability.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for bar in &chart.bars {
        let fraction = chart.x_axis.fraction(bar.value);
        out.push_str(&format!(
            "{:<label_width$}  {} {:.precision$}\n",
            bar.capability,
            render_bar(fraction, width),
            bar.display_value,
            label_width = label_width,
            precision = chart.score_precision,
        ));
    }

    let legend: Vec<String> = chart
        .x_axis
        .ticks
        .iter()
        .map(|t| format!("{} = {}", t.value, t.label))
        .collect();
    out.push_str(&format!("\nScale: {}\n", legend.join(", ")));
    out
}

fn render_bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction * width as f64).round() as usize).min(width);
    let empty = width.saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::CapabilityResult;
    use crate::domain::questionnaire::Section;
    use crate::domain::report::ChartStyle;

    fn chart(values: &[(&str, f64)]) -> BarChart {
        let results: Vec<_> = values
            .iter()
            .map(|(name, average)| CapabilityResult {
                capability: name.to_string(),
                section: Section::Contextual,
                average: *average,
            })
            .collect();
        BarChart::from_results(&results, &ChartStyle::default())
    }

    #[test]
    fn bar_length_is_proportional_to_distance_from_minimum() {
        let text = render_text(&chart(&[("Low", 1.0), ("Mid", 3.0), ("High", 5.0)]), 8);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Low   ░░░░░░░░ 1.00");
        assert_eq!(lines[1], "Mid   ████░░░░ 3.00");
        assert_eq!(lines[2], "High  ████████ 5.00");
    }

    #[test]
    fn legend_lists_every_tick() {
        let text = render_text(&chart(&[("A", 2.0)]), 4);
        assert!(text.contains(
            "Scale: 1 = Ad-hoc, 2 = Emerging, 3 = Developing, 4 = Integrated, 5 = Optimized"
        ));
    }

    #[test]
    fn zero_width_renders_no_cells() {
        assert_eq!(render_bar(0.75, 0), "");
        assert_eq!(render_bar(1.0, 3), "███");
    }
}
