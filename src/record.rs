//! The consolidated per-school record and the index the passes enrich.
//!
//! Each enrichment pass owns one field group, and every group has its own
//! type. A pass can therefore only reach the slot whose type matches its
//! output, which keeps the passes from overwriting each other's fields.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::classify::{BiasLabel, Tier, tier};
use crate::error::{BuildError, Result};
use crate::geo::state_for;
use crate::registry::RegistryEntry;
use crate::utility::round_to;

/// Decimal places for scores and means.
pub const SCORE_PLACES: u32 = 2;
/// Decimal places for percentages.
pub const PCT_PLACES: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiasFields {
    pub bias_score: f64,
    pub tweet_count: u64,
    pub bias_label: BiasLabel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationFields {
    /// Always set by a build; a hand-edited file may carry only the score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fec_dem_pct: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fec_rep_pct: Option<f64>,
    pub fec_total: i64,
    pub fec_contributions: u64,
    pub fec_bias_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingFields {
    pub fire_rank: u32,
    pub fire_score: f64,
    pub fire_grade: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffingFields {
    pub dei_staff: u32,
}

/// Mean assessment score per phase window. A window with no data stays `None`
/// and is left out of the serialized record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseScores {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase1: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase3: Option<f64>,
}

impl PhaseScores {
    pub fn slot_mut(&mut self, window: usize) -> Option<&mut Option<f64>> {
        match window {
            0 => Some(&mut self.phase1),
            1 => Some(&mut self.phase2),
            2 => Some(&mut self.phase3),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.phase1.is_none() && self.phase2.is_none() && self.phase3.is_none()
    }
}

/// One school as published to the front-end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolRecord {
    pub handle: String,
    /// Numeric rank, 999 when unranked.
    pub rank: u32,
    pub rank_display: String,
    pub name: String,
    pub highlight: bool,
    pub tier: Tier,
    pub state: String,

    #[serde(flatten)]
    pub bias: Option<BiasFields>,
    #[serde(flatten)]
    pub donations: Option<DonationFields>,
    #[serde(flatten)]
    pub ranking: Option<RankingFields>,
    #[serde(flatten)]
    pub staffing: Option<StaffingFields>,
    #[serde(flatten)]
    pub phases: PhaseScores,
}

impl SchoolRecord {
    /// Builds the identity-only record for a registry entry.
    pub fn from_entry(entry: &RegistryEntry) -> Self {
        SchoolRecord {
            handle: entry.handle.to_string(),
            rank: entry.rank.sort_value(),
            rank_display: entry.rank.to_string(),
            name: entry.name.to_string(),
            highlight: entry.highlight,
            tier: tier(&entry.rank),
            state: state_for(entry.handle).to_string(),
            bias: None,
            donations: None,
            ranking: None,
            staffing: None,
            phases: PhaseScores::default(),
        }
    }

    /// True when no source contributed anything to this record.
    pub fn is_identity_only(&self) -> bool {
        self.bias.is_none()
            && self.donations.is_none()
            && self.ranking.is_none()
            && self.staffing.is_none()
            && self.phases.is_empty()
    }

    /// Applies the output rounding policy to every numeric enrichment field.
    pub fn normalize(&mut self) {
        if let Some(b) = &mut self.bias {
            b.bias_score = round_to(b.bias_score, SCORE_PLACES);
        }
        if let Some(d) = &mut self.donations {
            d.fec_dem_pct = d.fec_dem_pct.map(|v| round_to(v, PCT_PLACES));
            d.fec_rep_pct = d.fec_rep_pct.map(|v| round_to(v, PCT_PLACES));
            d.fec_bias_score = round_to(d.fec_bias_score, SCORE_PLACES);
        }
        if let Some(r) = &mut self.ranking {
            r.fire_score = round_to(r.fire_score, SCORE_PLACES);
        }
        for window in 0..3 {
            if let Some(Some(v)) = self.phases.slot_mut(window) {
                *v = round_to(*v, SCORE_PLACES);
            }
        }
    }
}

/// Records in registry order with a handle lookup on the side.
#[derive(Debug, Clone, Default)]
pub struct SchoolIndex {
    records: Vec<SchoolRecord>,
    positions: HashMap<String, usize>,
}

impl SchoolIndex {
    /// Seeds the index from the registry.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Config`] if a handle appears twice.
    pub fn from_registry(entries: &[RegistryEntry]) -> Result<Self> {
        let mut index = SchoolIndex::default();
        for entry in entries {
            if index.positions.contains_key(entry.handle) {
                return Err(BuildError::Config(format!(
                    "duplicate registry handle `{}`",
                    entry.handle
                )));
            }
            index
                .positions
                .insert(entry.handle.to_string(), index.records.len());
            index.records.push(SchoolRecord::from_entry(entry));
        }
        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, handle: &str) -> bool {
        self.positions.contains_key(handle)
    }

    pub fn get(&self, handle: &str) -> Option<&SchoolRecord> {
        self.positions.get(handle).map(|&i| &self.records[i])
    }

    pub fn get_mut(&mut self, handle: &str) -> Option<&mut SchoolRecord> {
        match self.positions.get(handle) {
            Some(&i) => Some(&mut self.records[i]),
            None => None,
        }
    }

    /// Records in registry order.
    pub fn records(&self) -> &[SchoolRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<SchoolRecord> {
        self.records
    }
}
