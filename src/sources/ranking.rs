//! FIRE free-speech rankings.

use serde::Deserialize;

use super::{FieldError, Source, finite};
use crate::record::{RankingFields, SCORE_PLACES, SchoolRecord};
use crate::utility::round_to;

#[derive(Debug, Deserialize)]
pub struct RankingRow {
    pub handle: String,
    pub fire_rank: u32,
    pub fire_score: f64,
    pub fire_grade: String,
}

pub struct RankingSource;

impl Source for RankingSource {
    const NAME: &'static str = "ranking";
    const KEY: &'static str = "handle";
    type Row = RankingRow;
    type Fields = RankingFields;

    fn derive(row: RankingRow) -> Result<RankingFields, FieldError> {
        Ok(RankingFields {
            fire_rank: row.fire_rank,
            fire_score: round_to(finite(row.fire_score, "fire_score")?, SCORE_PLACES),
            fire_grade: row.fire_grade,
        })
    }

    fn slot(record: &mut SchoolRecord) -> &mut Option<RankingFields> {
        &mut record.ranking
    }
}
