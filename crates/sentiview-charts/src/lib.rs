//! # SentiView Charts
//!
//! Renders the per-submission sentiment tally as a pie chart and a bar chart
//! using plotters.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod bar;
pub mod emitter;
pub mod pie;
pub mod style;

pub use emitter::{ChartEmitter, PlottersChartEmitter};
pub use style::parse_color;
