//! Categorical labels derived from raw numbers.
//!
//! Both classifiers are total: every input, including a missing one, maps to
//! exactly one label.

use serde::{Deserialize, Serialize};

use crate::registry::Rank;

/// US News rank band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "Top 25")]
    Top25,
    #[serde(rename = "26-50")]
    From26To50,
    #[serde(rename = "51-100")]
    From51To100,
    #[serde(rename = "101-150")]
    From101To150,
    #[serde(rename = "Conservative Highlight")]
    ConservativeHighlight,
}

impl Tier {
    pub const ALL: [Tier; 5] = [
        Tier::Top25,
        Tier::From26To50,
        Tier::From51To100,
        Tier::From101To150,
        Tier::ConservativeHighlight,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Top25 => "Top 25",
            Tier::From26To50 => "26-50",
            Tier::From51To100 => "51-100",
            Tier::From101To150 => "101-150",
            Tier::ConservativeHighlight => "Conservative Highlight",
        }
    }
}

/// Maps a registry rank onto its tier.
///
/// | Rank        | Tier                   |
/// |-------------|------------------------|
/// | <= 25       | Top 25                 |
/// | 26 – 50     | 26-50                  |
/// | 51 – 100    | 51-100                 |
/// | > 100       | 101-150                |
/// | unranked    | Conservative Highlight |
pub fn tier(rank: &Rank) -> Tier {
    match rank.position() {
        None => Tier::ConservativeHighlight,
        Some(r) if r <= 25 => Tier::Top25,
        Some(r) if r <= 50 => Tier::From26To50,
        Some(r) if r <= 100 => Tier::From51To100,
        Some(_) => Tier::From101To150,
    }
}

/// Political lean inferred from a mean bias score in roughly [-100, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BiasLabel {
    #[serde(rename = "No Data")]
    NoData,
    #[serde(rename = "Strong Liberal")]
    StrongLiberal,
    Liberal,
    Moderate,
    Conservative,
    #[serde(rename = "Strong Conservative")]
    StrongConservative,
}

impl BiasLabel {
    pub fn label(&self) -> &'static str {
        match self {
            BiasLabel::NoData => "No Data",
            BiasLabel::StrongLiberal => "Strong Liberal",
            BiasLabel::Liberal => "Liberal",
            BiasLabel::Moderate => "Moderate",
            BiasLabel::Conservative => "Conservative",
            BiasLabel::StrongConservative => "Strong Conservative",
        }
    }
}

/// Converts a bias score into a label. Boundary values fall in the lower band.
///
/// | Score        | Label               |
/// |--------------|---------------------|
/// | missing/NaN  | No Data             |
/// | <= -40       | Strong Liberal      |
/// | <= -15       | Liberal             |
/// | <= 15        | Moderate            |
/// | <= 40        | Conservative        |
/// | > 40         | Strong Conservative |
pub fn bias_label(score: Option<f64>) -> BiasLabel {
    match score {
        None => BiasLabel::NoData,
        Some(s) if s.is_nan() => BiasLabel::NoData,
        Some(s) if s <= -40.0 => BiasLabel::StrongLiberal,
        Some(s) if s <= -15.0 => BiasLabel::Liberal,
        Some(s) if s <= 15.0 => BiasLabel::Moderate,
        Some(s) if s <= 40.0 => BiasLabel::Conservative,
        Some(_) => BiasLabel::StrongConservative,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(tier(&Rank::Ranked(1)), Tier::Top25);
        assert_eq!(tier(&Rank::Ranked(25)), Tier::Top25);
        assert_eq!(tier(&Rank::Ranked(26)), Tier::From26To50);
        assert_eq!(tier(&Rank::Ranked(50)), Tier::From26To50);
        assert_eq!(tier(&Rank::Ranked(51)), Tier::From51To100);
        assert_eq!(tier(&Rank::Ranked(100)), Tier::From51To100);
        assert_eq!(tier(&Rank::Ranked(101)), Tier::From101To150);
        assert_eq!(tier(&Rank::Ranked(150)), Tier::From101To150);
        assert_eq!(tier(&Rank::Ranked(400)), Tier::From101To150);
    }

    #[test]
    fn test_unranked_is_highlight() {
        assert_eq!(tier(&Rank::Unranked("NR")), Tier::ConservativeHighlight);
        assert_eq!(tier(&Rank::Unranked("")), Tier::ConservativeHighlight);
    }

    #[test]
    fn test_tier_is_monotonic() {
        let mut last = Tier::Top25;
        for r in 1..=200 {
            let t = tier(&Rank::Ranked(r));
            assert!(t >= last, "tier went backwards at rank {r}");
            assert_ne!(t, Tier::ConservativeHighlight);
            last = t;
        }
    }

    #[test]
    fn test_bias_label_boundaries() {
        assert_eq!(bias_label(None), BiasLabel::NoData);
        assert_eq!(bias_label(Some(f64::NAN)), BiasLabel::NoData);
        assert_eq!(bias_label(Some(-100.0)), BiasLabel::StrongLiberal);
        assert_eq!(bias_label(Some(-40.0)), BiasLabel::StrongLiberal);
        assert_eq!(bias_label(Some(-39.99)), BiasLabel::Liberal);
        assert_eq!(bias_label(Some(-15.0)), BiasLabel::Liberal);
        assert_eq!(bias_label(Some(-14.99)), BiasLabel::Moderate);
        assert_eq!(bias_label(Some(15.0)), BiasLabel::Moderate);
        assert_eq!(bias_label(Some(15.01)), BiasLabel::Conservative);
        assert_eq!(bias_label(Some(40.0)), BiasLabel::Conservative);
        assert_eq!(bias_label(Some(40.01)), BiasLabel::StrongConservative);
        assert_eq!(bias_label(Some(100.0)), BiasLabel::StrongConservative);
    }

    #[test]
    fn test_labels_serialize_as_display_text() {
        assert_eq!(
            serde_json::to_string(&Tier::ConservativeHighlight).unwrap(),
            "\"Conservative Highlight\""
        );
        assert_eq!(
            serde_json::to_string(&BiasLabel::StrongLiberal).unwrap(),
            "\"Strong Liberal\""
        );
        for t in Tier::ALL {
            assert_eq!(
                serde_json::to_string(&t).unwrap(),
                format!("\"{}\"", t.label())
            );
        }
        for score in [None, Some(-50.0), Some(-20.0), Some(0.0), Some(20.0), Some(50.0)] {
            let label = bias_label(score);
            assert_eq!(
                serde_json::to_string(&label).unwrap(),
                format!("\"{}\"", label.label())
            );
        }
    }
}
