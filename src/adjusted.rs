//! Adjusted ranking: US News rank blended with a conservative-friendliness
//! composite built from the enrichment fields.
//!
//! Every factor is normalized to 0–1 where higher is friendlier; a missing
//! factor counts as neutral (0.5).

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{BuildError, Result};
use crate::record::{DonationFields, SchoolRecord};
use crate::utility::unit;

const NEUTRAL: f64 = 0.5;

/// Relative weight of each factor in the conservative composite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FactorWeights {
    pub bias: f64,
    pub fec: f64,
    pub fire: f64,
    pub dei: f64,
}

impl Default for FactorWeights {
    fn default() -> Self {
        FactorWeights {
            bias: 0.35,
            fec: 0.25,
            fire: 0.25,
            dei: 0.15,
        }
    }
}

impl FactorWeights {
    /// Weights must be non-negative and sum to 1.
    pub fn validate(&self) -> Result<()> {
        let all = [self.bias, self.fec, self.fire, self.dei];
        if all.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(BuildError::Config(format!(
                "factor weights must be non-negative: {self:?}"
            )));
        }
        let sum: f64 = all.iter().sum();
        if (sum - 1.0).abs() > 1e-6 {
            return Err(BuildError::Config(format!(
                "factor weights must sum to 1, got {sum}"
            )));
        }
        Ok(())
    }
}

/// Tweet bias mapped from roughly [-80, 80].
pub fn norm_bias(s: &SchoolRecord) -> f64 {
    match &s.bias {
        Some(b) => unit((b.bias_score + 80.0) / 160.0),
        None => NEUTRAL,
    }
}

/// Republican share of donations, else the donation bias score mapped
/// from [-100, 100].
pub fn norm_fec(s: &SchoolRecord) -> f64 {
    match &s.donations {
        Some(DonationFields {
            fec_rep_pct: Some(rep),
            ..
        }) => rep / 100.0,
        Some(d) => unit((d.fec_bias_score + 100.0) / 200.0),
        None => NEUTRAL,
    }
}

/// FIRE score out of 100.
pub fn norm_fire(s: &SchoolRecord) -> f64 {
    match &s.ranking {
        Some(r) => unit(r.fire_score / 100.0),
        None => NEUTRAL,
    }
}

/// Fewer DEI staff scores higher; 25 or more scores zero.
pub fn norm_dei(s: &SchoolRecord) -> f64 {
    match &s.staffing {
        Some(st) => (1.0 - f64::from(st.dei_staff) / 25.0).max(0.0),
        None => NEUTRAL,
    }
}

pub fn conservative_score(s: &SchoolRecord, w: &FactorWeights) -> f64 {
    w.bias * norm_bias(s) + w.fec * norm_fec(s) + w.fire * norm_fire(s) + w.dei * norm_dei(s)
}

/// 1.0 for rank 1 down to ~0 at rank 150; unranked counts as 150.
pub fn usnews_quality(s: &SchoolRecord) -> f64 {
    let r = if (1..=150).contains(&s.rank) { s.rank } else { 150 };
    f64::from(151 - r) / 150.0
}

/// `(1 - c) * usnews + c * conservative`.
pub fn composite_score(s: &SchoolRecord, conservative_weight: f64, w: &FactorWeights) -> f64 {
    (1.0 - conservative_weight) * usnews_quality(s) + conservative_weight * conservative_score(s, w)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustedRank<'a> {
    pub adjusted_rank: usize,
    pub composite_score: f64,
    #[serde(flatten)]
    pub school: &'a SchoolRecord,
}

/// Case-insensitive name order; names equal up to case put lowercase first.
fn name_order(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// Orders schools by composite score, best first, and numbers them from 1.
/// Ties go to the better US News rank, then to the name.
pub fn assign_adjusted_ranks<'a>(
    schools: &'a [SchoolRecord],
    conservative_weight: f64,
    w: &FactorWeights,
) -> Result<Vec<AdjustedRank<'a>>> {
    if !(0.0..=1.0).contains(&conservative_weight) {
        return Err(BuildError::Config(format!(
            "conservative weight must be within 0..=1, got {conservative_weight}"
        )));
    }
    w.validate()?;

    let mut scored: Vec<(f64, &SchoolRecord)> = schools
        .iter()
        .map(|s| (composite_score(s, conservative_weight, w), s))
        .collect();

    scored.sort_by(|(sa, a), (sb, b)| {
        sb.partial_cmp(sa)
            .unwrap_or(Ordering::Equal)
            .then(a.rank.cmp(&b.rank))
            .then_with(|| name_order(&a.name, &b.name))
    });

    Ok(scored
        .into_iter()
        .enumerate()
        .map(|(i, (composite_score, school))| AdjustedRank {
            adjusted_rank: i + 1,
            composite_score,
            school,
        })
        .collect())
}
