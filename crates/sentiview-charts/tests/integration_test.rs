//! Integration tests for sentiview-charts.

use plotters::style::IntoFont;
use sentiview_charts::pie::slices;
use sentiview_charts::{ChartEmitter, PlottersChartEmitter};
use sentiview_common::test_utils::{create_temp_dir, init_test_logging};
use sentiview_common::{ChartSeries, SentimentLabel, SentimentTally};

fn tally_of(labels: &[SentimentLabel]) -> SentimentTally {
    let mut tally = SentimentTally::new();
    for label in labels {
        tally.record(*label);
    }
    tally
}

#[test]
fn test_series_keeps_display_order_and_colors() {
    let tally = tally_of(&[SentimentLabel::Neutral, SentimentLabel::Positive]);
    let series = ChartSeries::from(&tally);

    assert_eq!(series.labels, vec!["Positive", "Negative", "Neutral"]);
    assert_eq!(series.counts, vec![1, 0, 1]);

    let pie = slices(&series);
    assert_eq!(pie.len(), 2);
    assert_eq!(pie[0].annotation(), "50.0% (1)");
    assert_eq!(pie[1].label, "Neutral");
}

#[test]
fn test_empty_tally_produces_no_files() {
    init_test_logging();
    let dir = create_temp_dir();
    let emitter = PlottersChartEmitter::new(dir.path(), "pie_chart.png", "bar_chart.png");
    let series = ChartSeries::from(&SentimentTally::new());

    assert!(emitter.render_pie(&series).unwrap().is_none());
    assert!(emitter.render_bar(&series).unwrap().is_none());
    assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
}

/// Chart text needs a system sans-serif font; hosts without one skip rendering tests.
fn font_available() -> bool {
    ("sans-serif", 16).into_font().box_size("Ag").is_ok()
}

#[test]
fn test_renders_png_files() {
    init_test_logging();
    if !font_available() {
        eprintln!("skipping chart rendering: no sans-serif font found");
        return;
    }
    let dir = create_temp_dir();
    let emitter =
        PlottersChartEmitter::new(dir.path().join("static"), "pie_chart.png", "bar_chart.png");
    let series = ChartSeries::from(&tally_of(&[
        SentimentLabel::Positive,
        SentimentLabel::Negative,
        SentimentLabel::Neutral,
    ]));

    let pie = emitter.render_pie(&series).unwrap().unwrap();
    let bar = emitter.render_bar(&series).unwrap().unwrap();

    assert_eq!(pie, dir.path().join("static/pie_chart.png"));
    assert_eq!(bar, dir.path().join("static/bar_chart.png"));
    assert!(std::fs::metadata(&pie).unwrap().len() > 0);
    assert!(std::fs::metadata(&bar).unwrap().len() > 0);
}

#[test]
fn test_rerender_overwrites_single_label_chart() {
    init_test_logging();
    if !font_available() {
        eprintln!("skipping chart rendering: no sans-serif font found");
        return;
    }
    let dir = create_temp_dir();
    let emitter = PlottersChartEmitter::new(dir.path(), "pie_chart.png", "bar_chart.png");

    let first = ChartSeries::from(&tally_of(&[SentimentLabel::Negative]));
    let second = ChartSeries::from(&tally_of(&[
        SentimentLabel::Positive,
        SentimentLabel::Positive,
    ]));

    let pie = emitter.render_pie(&first).unwrap().unwrap();
    assert_eq!(emitter.render_pie(&second).unwrap(), Some(pie.clone()));
    assert!(std::fs::metadata(&pie).unwrap().len() > 0);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}
