//! Test utilities and shared test helpers for SentiView.
//!
//! Enabled for unit tests and for other crates through the `testing` feature.

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Initialize logging for tests. Safe to call from every test.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
#[cfg(feature = "tempfile")]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Assert that two floating point numbers are approximately equal within a tolerance.
pub fn assert_approx_eq(left: f64, right: f64, tolerance: f64) {
    let diff = (left - right).abs();
    assert!(
        diff <= tolerance,
        "assertion failed: `{left}` is not within {tolerance} of `{right}` (diff: {diff})"
    );
}

/// Sample submissions used across crates.
pub mod fixtures {
    /// Three lines, one per label, for the polarity engine.
    pub const MIXED_SUBMISSION: &str = "I love this.\nI hate this.\nIt is a table.";

    /// Clearly positive line with no negation.
    pub const POSITIVE_LINE: &str = "This is wonderful";

    /// The positive line with a negation token.
    pub const NEGATED_POSITIVE_LINE: &str = "This is not wonderful";
}
