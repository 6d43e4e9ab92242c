//! Per-submission label counting.

use sentiview_common::{SentimentResult, SentimentTally};

/// Counts results per label. Labels with no lines are kept at zero.
pub fn tally<'a, I>(results: I) -> SentimentTally
where
    I: IntoIterator<Item = &'a SentimentResult>,
{
    results
        .into_iter()
        .fold(SentimentTally::new(), |mut tally, result| {
            tally.record(result.label);
            tally
        })
}
