//! Pie chart of label shares.
//!
//! Slices run counter-clockwise from 12 o'clock in series order. Wedges and
//! rim labels come from the plotters [`Pie`] element; each slice also gets a
//! `"<pct>% (<count>)"` annotation inside.

use crate::style::{parse_color, BACKGROUND, FONT_FAMILY, LABEL_FONT_SIZE, PIE_SIZE};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use sentiview_common::{ChartSeries, Result};
use std::f64::consts::PI;
use std::path::Path;
use tracing::debug;

const START_ANGLE_DEG: f64 = 90.0;

/// Geometry and annotation of one non-empty slice.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    /// Label name.
    pub label: String,
    /// Lines with this label.
    pub count: u64,
    /// Fill color.
    pub color: RGBColor,
    /// Angle where the slice begins, in degrees counter-clockwise from 3 o'clock.
    pub start_deg: f64,
    /// Angular width in degrees.
    pub sweep_deg: f64,
    /// Share of the total, 0-100.
    pub percent: f64,
}

impl Slice {
    /// Angle through the middle of the slice.
    pub fn mid_deg(&self) -> f64 {
        self.start_deg + self.sweep_deg / 2.0
    }

    /// Text drawn inside the slice.
    pub fn annotation(&self) -> String {
        format!("{:.1}% ({})", self.percent, self.count)
    }
}

/// Computes slices for every label with a non-zero count.
pub fn slices(series: &ChartSeries) -> Vec<Slice> {
    let total = series.total();
    if total == 0 {
        return Vec::new();
    }

    let mut angle = START_ANGLE_DEG;
    series
        .labels
        .iter()
        .zip(&series.counts)
        .zip(&series.colors)
        .filter(|((_, count), _)| **count > 0)
        .map(|((label, count), color)| {
            let fraction = *count as f64 / total as f64;
            let slice = Slice {
                label: label.clone(),
                count: *count,
                color: parse_color(color),
                start_deg: angle,
                sweep_deg: fraction * 360.0,
                percent: fraction * 100.0,
            };
            angle += slice.sweep_deg;
            slice
        })
        .collect()
}

/// Pixel position at `radius` along `angle_deg` around `center`. Screen y grows downwards.
fn polar(center: (i32, i32), radius: f64, angle_deg: f64) -> (i32, i32) {
    let theta = angle_deg * PI / 180.0;
    (
        center.0 + (radius * theta.cos()).round() as i32,
        center.1 - (radius * theta.sin()).round() as i32,
    )
}

/// Draws the pie chart to `path`.
pub fn draw(series: &ChartSeries, path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, PIE_SIZE).into_drawing_area();
    root.fill(&BACKGROUND)?;

    let (width, height) = root.dim_in_pixel();
    let center = (width as i32 / 2, height as i32 / 2);
    let radius = f64::from(width.min(height)) * 0.35;

    let slices = slices(series);

    // Pie sweeps clockwise on screen. Fed in reverse from 12 o'clock, the
    // slices come out counter-clockwise.
    let sizes: Vec<f64> = slices.iter().rev().map(|s| s.count as f64).collect();
    let colors: Vec<RGBColor> = slices.iter().rev().map(|s| s.color).collect();
    let labels: Vec<String> = slices.iter().rev().map(|s| s.label.clone()).collect();

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(-START_ANGLE_DEG);
    pie.label_style((FONT_FAMILY, LABEL_FONT_SIZE).into_font());
    pie.label_offset(radius * 0.1);
    root.draw(&pie)?;

    let annotation_style = TextStyle::from((FONT_FAMILY, LABEL_FONT_SIZE - 2).into_font())
        .pos(Pos::new(HPos::Center, VPos::Center));
    for slice in &slices {
        root.draw(&Text::new(
            slice.annotation(),
            polar(center, radius * 0.6, slice.mid_deg()),
            annotation_style.clone(),
        ))?;
    }

    root.present()?;
    debug!(slices = slices.len(), path = %path.display(), "pie chart drawn");
    Ok(())
}
