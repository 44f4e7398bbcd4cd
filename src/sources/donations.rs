//! FEC campaign donations by school employees.

use serde::Deserialize;

use super::{FieldError, Source, finite};
use crate::record::{DonationFields, PCT_PLACES, SCORE_PLACES, SchoolRecord};
use crate::utility::round_to;

#[derive(Debug, Deserialize)]
pub struct DonationRow {
    pub school: String,
    pub dem_pct: f64,
    pub rep_pct: f64,
    pub total_donations: f64,
    pub n_contributions: u64,
    pub fec_bias_score: f64,
}

pub struct DonationSource;

impl Source for DonationSource {
    const NAME: &'static str = "donations";
    const KEY: &'static str = "school";
    type Row = DonationRow;
    type Fields = DonationFields;

    fn derive(row: DonationRow) -> Result<DonationFields, FieldError> {
        Ok(DonationFields {
            fec_dem_pct: Some(round_to(finite(row.dem_pct, "dem_pct")?, PCT_PLACES)),
            fec_rep_pct: Some(round_to(finite(row.rep_pct, "rep_pct")?, PCT_PLACES)),
            fec_total: round_to(finite(row.total_donations, "total_donations")?, 0) as i64,
            fec_contributions: row.n_contributions,
            fec_bias_score: round_to(finite(row.fec_bias_score, "fec_bias_score")?, SCORE_PLACES),
        })
    }

    fn slot(record: &mut SchoolRecord) -> &mut Option<DonationFields> {
        &mut record.donations
    }
}
