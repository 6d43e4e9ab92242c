//! Chart emitter trait and the plotters-backed implementation.

use crate::{bar, pie};
use sentiview_common::{ChartSeries, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes chart images for a tally.
///
/// Rendering is blocking; async callers should run it on a blocking thread.
pub trait ChartEmitter: Send + Sync {
    /// Writes the pie chart and returns its path, or `None` when the series is empty.
    fn render_pie(&self, series: &ChartSeries) -> Result<Option<PathBuf>>;

    /// Writes the bar chart and returns its path, or `None` when the series is empty.
    fn render_bar(&self, series: &ChartSeries) -> Result<Option<PathBuf>>;
}

/// Renders PNG charts into fixed files under a static directory.
///
/// Every call overwrites the previous image; the last writer wins.
#[derive(Debug, Clone)]
pub struct PlottersChartEmitter {
    static_dir: PathBuf,
    pie_file: String,
    bar_file: String,
}

impl PlottersChartEmitter {
    /// Creates an emitter writing `pie_file` and `bar_file` inside `static_dir`.
    pub fn new(
        static_dir: impl Into<PathBuf>,
        pie_file: impl Into<String>,
        bar_file: impl Into<String>,
    ) -> Self {
        Self {
            static_dir: static_dir.into(),
            pie_file: pie_file.into(),
            bar_file: bar_file.into(),
        }
    }

    /// Directory the images are written to.
    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }

    fn target(&self, file: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.static_dir)?;
        Ok(self.static_dir.join(file))
    }
}

impl ChartEmitter for PlottersChartEmitter {
    fn render_pie(&self, series: &ChartSeries) -> Result<Option<PathBuf>> {
        if series.is_empty() {
            return Ok(None);
        }
        let path = self.target(&self.pie_file)?;
        pie::draw(series, &path)?;
        info!(path = %path.display(), total = series.total(), "pie chart written");
        Ok(Some(path))
    }

    fn render_bar(&self, series: &ChartSeries) -> Result<Option<PathBuf>> {
        if series.is_empty() {
            return Ok(None);
        }
        let path = self.target(&self.bar_file)?;
        bar::draw(series, &path)?;
        info!(path = %path.display(), total = series.total(), "bar chart written");
        Ok(Some(path))
    }
}
