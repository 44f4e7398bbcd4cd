//! Mean tweet bias per school.

use serde::Deserialize;

use super::{FieldError, Source, finite};
use crate::classify::bias_label;
use crate::record::{BiasFields, SCORE_PLACES, SchoolRecord};
use crate::utility::round_to;

#[derive(Debug, Deserialize)]
pub struct BiasRow {
    pub school: String,
    pub mean_score: f64,
    pub n_tweets: u64,
}

pub struct BiasSource;

impl Source for BiasSource {
    const NAME: &'static str = "bias";
    const KEY: &'static str = "school";
    type Row = BiasRow;
    type Fields = BiasFields;

    fn derive(row: BiasRow) -> Result<BiasFields, FieldError> {
        let score = finite(row.mean_score, "mean_score")?;
        Ok(BiasFields {
            bias_score: round_to(score, SCORE_PLACES),
            tweet_count: row.n_tweets,
            // labelled from the unrounded score
            bias_label: bias_label(Some(score)),
        })
    }

    fn slot(record: &mut SchoolRecord) -> &mut Option<BiasFields> {
        &mut record.bias
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::BiasLabel;

    fn row(score: f64) -> BiasRow {
        BiasRow {
            school: "Yale".into(),
            mean_score: score,
            n_tweets: 250,
        }
    }

    #[test]
    fn test_derive_rounds_and_labels() {
        let fields = BiasSource::derive(row(-41.234)).unwrap();
        assert_eq!(fields.bias_score, -41.23);
        assert_eq!(fields.tweet_count, 250);
        assert_eq!(fields.bias_label, BiasLabel::StrongLiberal);
    }

    #[test]
    fn test_label_uses_unrounded_score() {
        // rounds to -40.0 but the raw score is above the boundary
        let fields = BiasSource::derive(row(-39.999)).unwrap();
        assert_eq!(fields.bias_score, -40.0);
        assert_eq!(fields.bias_label, BiasLabel::Liberal);
    }

    #[test]
    fn test_nan_score_is_rejected() {
        let err = BiasSource::derive(row(f64::NAN)).unwrap_err();
        assert_eq!(err.field, "mean_score");
    }
}
