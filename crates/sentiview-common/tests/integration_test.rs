//! Integration tests for sentiview-common.

use sentiview_common::{
    init_logging, split_lines, truncate_chars, ChartSeries, LoggingConfig, SentiViewError,
    SentimentLabel, SentimentResult, SentimentTally,
};

#[test]
fn test_submission_splits_into_three_lines() {
    let lines = split_lines("I love this.\nI hate this.\nIt is a table.");
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[2], "It is a table.");
}

#[test]
fn test_results_feed_tally_and_series() {
    let results = [
        SentimentResult::with_emoji("a", SentimentLabel::Positive, 0.6),
        SentimentResult::with_emoji("b", SentimentLabel::Positive.flipped(), 0.6),
        SentimentResult::with_emoji("c", SentimentLabel::Neutral, 0.0),
    ];

    let mut tally = SentimentTally::new();
    for result in &results {
        tally.record(result.label);
    }

    let series = ChartSeries::from(&tally);
    assert_eq!(series.counts, vec![1, 1, 1]);
    assert_eq!(series.total(), results.len() as u64);
    assert_eq!(results[1].emoji.as_deref(), Some("😢"));
}

#[test]
fn test_result_round_trips_through_json() {
    let result = SentimentResult::with_emoji("This is wonderful", SentimentLabel::Positive, 0.5);
    let json = serde_json::to_string(&result).unwrap();
    let back: SentimentResult = serde_json::from_str(&json).unwrap();
    assert_eq!(back, result);
}

#[test]
fn test_logging_rejects_unwritable_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = LoggingConfig {
        file_path: Some(dir.path().join("missing-dir").join("sentiview.log")),
        ..LoggingConfig::default()
    };

    let err = init_logging(&config).unwrap_err();
    assert!(matches!(err, SentiViewError::Io(_)));
}

#[test]
fn test_json_format_writes_one_object_per_event() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sentiview.log");
    let config = LoggingConfig {
        json_format: true,
        file_path: Some(path.clone()),
        ..LoggingConfig::default()
    };

    init_logging(&config).unwrap();
    tracing::info!(answer = 42, "json logging enabled");

    let contents = std::fs::read_to_string(&path).unwrap();
    let line = contents
        .lines()
        .find(|line| line.contains("json logging enabled"))
        .unwrap();
    let event: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(event["level"], "INFO");
    assert_eq!(event["fields"]["message"], "json logging enabled");
    assert_eq!(event["fields"]["answer"], 42);
}

#[test]
fn test_truncate_for_log_preview() {
    assert_eq!(truncate_chars("short", 10), "short");
    assert_eq!(truncate_chars("héllo wörld", 8), "héllo...");
}
