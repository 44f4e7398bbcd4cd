//! Phase-windowed assessment means.
//!
//! Tweets carry the timestamp, assessments carry the score; the two are
//! inner-joined on `(school, tweet_id)` and each joined pair lands in at most
//! one calendar-year window. Unlike the source mergers this step coerces:
//! an unparseable timestamp or score drops the pair, not the run.

use std::collections::HashMap;
use std::path::Path;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{BuildError, Result};
use crate::record::{SCORE_PLACES, SchoolIndex};
use crate::sources::read_rows;
use crate::utility::{mean, round_to};

/// Number of phase windows, one per `phaseN` key on the record.
pub const WINDOW_COUNT: usize = 3;

/// An inclusive range of calendar years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearWindow {
    pub start: i32,
    pub end: i32,
}

impl YearWindow {
    pub const fn new(start: i32, end: i32) -> Self {
        YearWindow { start, end }
    }

    pub fn contains(&self, year: i32) -> bool {
        self.start <= year && year <= self.end
    }
}

/// Windows for `phase1`, `phase2` and `phase3`, in that order.
pub const DEFAULT_WINDOWS: [YearWindow; WINDOW_COUNT] = [
    YearWindow::new(2012, 2019),
    YearWindow::new(2020, 2023),
    YearWindow::new(2024, 2026),
];

/// Checks that every window is non-empty and that they ascend without overlap.
pub fn validate_windows(windows: &[YearWindow; WINDOW_COUNT]) -> Result<()> {
    for (i, w) in windows.iter().enumerate() {
        if w.start > w.end {
            return Err(BuildError::Config(format!(
                "phase{} window starts after it ends ({}..={})",
                i + 1,
                w.start,
                w.end
            )));
        }
    }
    for (i, pair) in windows.windows(2).enumerate() {
        if pair[1].start <= pair[0].end {
            return Err(BuildError::Config(format!(
                "phase{} and phase{} windows overlap or are out of order",
                i + 1,
                i + 2
            )));
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize)]
pub struct TweetRow {
    pub school: String,
    pub tweet_id: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoreRow {
    pub school: String,
    pub tweet_id: String,
    pub score: String,
}

/// Counters for one aggregation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhaseSummary {
    /// Joined (tweet, score) pairs that produced a data point.
    pub joined: usize,
    /// Joined pairs dropped for an unparseable timestamp.
    pub undated: usize,
    /// Joined pairs dropped for a missing or non-numeric score.
    pub unscored: usize,
    /// Dated pairs whose year is outside every window.
    pub out_of_window: usize,
    /// Score rows with no matching tweet.
    pub unmatched: usize,
    /// Registry schools that received at least one phase mean.
    pub schools: usize,
}

/// Extracts the calendar year from the timestamp formats seen in tweet exports.
pub fn parse_year(raw: &str) -> Option<i32> {
    const ZONED: &[&str] = &[
        "%Y-%m-%d %H:%M:%S%:z",
        "%Y-%m-%d %H:%M:%S%.f%:z",
        "%Y-%m-%d %H:%M:%S%z",
        "%a %b %d %H:%M:%S %z %Y",
    ];
    const NAIVE: &[&str] = &[
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M",
    ];

    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.year());
    }
    for fmt in ZONED {
        if let Ok(dt) = DateTime::parse_from_str(raw, fmt) {
            return Some(dt.year());
        }
    }
    for fmt in NAIVE {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.year());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|d| d.year())
}

fn parse_score(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|s| s.is_finite())
}

/// Per-school rounded means, one slot per window.
pub type PhaseMeans = HashMap<String, [Option<f64>; WINDOW_COUNT]>;

/// Joins tweets with scores and averages each school's scores per window.
pub fn compute_phase_means(
    tweets: &[TweetRow],
    scores: &[ScoreRow],
    windows: &[YearWindow; WINDOW_COUNT],
) -> (PhaseMeans, PhaseSummary) {
    let mut summary = PhaseSummary::default();

    let mut years: HashMap<(&str, &str), Vec<Option<i32>>> = HashMap::new();
    for t in tweets {
        years
            .entry((t.school.as_str(), t.tweet_id.as_str()))
            .or_default()
            .push(parse_year(&t.created_at));
    }

    let mut buckets: HashMap<&str, [Vec<f64>; WINDOW_COUNT]> = HashMap::new();
    for s in scores {
        let Some(tweet_years) = years.get(&(s.school.as_str(), s.tweet_id.as_str())) else {
            summary.unmatched += 1;
            continue;
        };
        let score = parse_score(&s.score);

        // every tweet row with this key pairs with this score row
        for year in tweet_years {
            let Some(score) = score else {
                summary.unscored += 1;
                continue;
            };
            let Some(year) = *year else {
                summary.undated += 1;
                continue;
            };
            match windows.iter().position(|w| w.contains(year)) {
                Some(w) => {
                    summary.joined += 1;
                    buckets.entry(s.school.as_str()).or_default()[w].push(score);
                }
                None => summary.out_of_window += 1,
            }
        }
    }

    let means = buckets
        .into_iter()
        .map(|(school, series)| {
            let slots = series
                .map(|values| mean(&values).map(|m| round_to(m, SCORE_PLACES)));
            (school.to_string(), slots)
        })
        .collect();

    (means, summary)
}

/// Joins the tweet and assessment tables and writes phase means onto `index`.
///
/// Returns `Ok(None)` without touching the index unless both files exist.
#[tracing::instrument(skip(index, windows), fields(tweets = %tweets_path.display(), scores = %scores_path.display()))]
pub fn aggregate_phases(
    tweets_path: &Path,
    scores_path: &Path,
    windows: &[YearWindow; WINDOW_COUNT],
    index: &mut SchoolIndex,
) -> Result<Option<PhaseSummary>> {
    if !tweets_path.exists() || !scores_path.exists() {
        info!(
            tweets_present = tweets_path.exists(),
            scores_present = scores_path.exists(),
            "Assessment tables incomplete, skipping phase scores"
        );
        return Ok(None);
    }

    let tweets: Vec<TweetRow> = read_rows(tweets_path, "tweets")?
        .into_iter()
        .map(|(_, row)| row)
        .collect();
    let scores: Vec<ScoreRow> = read_rows(scores_path, "assessments")?
        .into_iter()
        .map(|(_, row)| row)
        .collect();
    debug!(tweets = tweets.len(), scores = scores.len(), "Assessment tables loaded");

    let (means, mut summary) = compute_phase_means(&tweets, &scores, windows);

    for (school, slots) in means {
        let Some(record) = index.get_mut(&school) else {
            debug!(school = %school, "Phase scores for unknown handle dropped");
            continue;
        };
        for (w, value) in slots.into_iter().enumerate() {
            if let (Some(value), Some(slot)) = (value, record.phases.slot_mut(w)) {
                *slot = Some(value);
            }
        }
        if !record.phases.is_empty() {
            summary.schools += 1;
        }
    }

    info!(
        joined = summary.joined,
        undated = summary.undated,
        unscored = summary.unscored,
        out_of_window = summary.out_of_window,
        unmatched = summary.unmatched,
        schools = summary.schools,
        "Phase scores aggregated"
    );
    Ok(Some(summary))
}
