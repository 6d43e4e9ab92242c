//! Bar chart of label counts.

use crate::style::{
    parse_color, BACKGROUND, BAR_SIZE, FONT_FAMILY, LABEL_FONT_SIZE, TITLE_FONT_SIZE,
};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use sentiview_common::{ChartSeries, Result};
use std::path::Path;
use tracing::debug;

/// Upper bound of the y axis: leaves headroom above the tallest bar for its count.
pub fn y_axis_max(series: &ChartSeries) -> u64 {
    let max = series.counts.iter().copied().max().unwrap_or(0);
    max + (max / 10).max(1)
}

/// Draws the bar chart to `path`. All labels are shown, zero counts included.
pub fn draw(series: &ChartSeries, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, BAR_SIZE).into_drawing_area();
    root.fill(&BACKGROUND)?;

    let bars = series.labels.len() as u32;
    let mut chart = ChartBuilder::on(&root)
        .caption("Sentiment Counts", (FONT_FAMILY, TITLE_FONT_SIZE))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(55)
        .build_cartesian_2d((0..bars).into_segmented(), 0u64..y_axis_max(series))?;

    let labels = &series.labels;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Sentiment")
        .y_desc("Number of Sentences")
        .x_label_formatter(&|value| match value {
            SegmentValue::CenterOf(i) => labels.get(*i as usize).cloned().unwrap_or_default(),
            _ => String::new(),
        })
        .label_style((FONT_FAMILY, LABEL_FONT_SIZE))
        .draw()?;

    for (i, (count, color)) in series.counts.iter().zip(&series.colors).enumerate() {
        let i = i as u32;
        let mut bar = Rectangle::new(
            [(SegmentValue::Exact(i), 0), (SegmentValue::Exact(i + 1), *count)],
            parse_color(color).filled(),
        );
        bar.set_margin(0, 0, 20, 20);
        chart.draw_series(std::iter::once(bar))?;

        chart.draw_series(std::iter::once(Text::new(
            count.to_string(),
            (SegmentValue::CenterOf(i), *count),
            (FONT_FAMILY, LABEL_FONT_SIZE)
                .into_font()
                .color(&BLACK)
                .pos(Pos::new(HPos::Center, VPos::Bottom)),
        )))?;
    }

    root.present()?;
    debug!(bars, path = %path.display(), "bar chart drawn");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(counts: [u64; 3]) -> ChartSeries {
        ChartSeries {
            labels: vec!["Positive".into(), "Negative".into(), "Neutral".into()],
            counts: counts.to_vec(),
            colors: vec!["#4CAF50".into(), "#F44336".into(), "#2196F3".into()],
        }
    }

    #[test]
    fn test_y_axis_headroom() {
        assert_eq!(y_axis_max(&series([1, 1, 1])), 2);
        assert_eq!(y_axis_max(&series([0, 40, 3])), 44);
        assert_eq!(y_axis_max(&series([0, 0, 0])), 1);
    }
}
