//! Tiered recommendation policy.
//!
//! A student's score is compared against three disjoint score windows:
//!
//! | Tier   | Window (relative)   | Order          |
//! |--------|---------------------|----------------|
//! | reach  | `[+5, +10]`         | score asc      |
//! | match  | `[-3, +3]`          | score desc     |
//! | safety | `[-20, -10]`        | score desc     |
//!
//! Each tier is capped at [`RecommendationPolicy::limit`] records.

use serde::Serialize;

use crate::domain::criteria::{NumericRange, OrderBy, SortField, SortOrder};
use crate::domain::entities::AdmissionRecord;

/// Inclusive window of offsets relative to the student's score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWindow {
    pub low: f64,
    pub high: f64,
}

impl ScoreWindow {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Absolute score range for a given student score.
    pub fn around(&self, score: f64) -> NumericRange<f64> {
        NumericRange::between(score + self.low, score + self.high)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Reach,
    Match,
    Safety,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Reach, Tier::Match, Tier::Safety];

    /// Reach surfaces the cheapest stretch options first; the other tiers show
    /// the closest-to-cutoff programs first.
    pub fn score_order(&self) -> SortOrder {
        match self {
            Tier::Reach => SortOrder::Asc,
            Tier::Match | Tier::Safety => SortOrder::Desc,
        }
    }

    pub fn order_by(&self) -> OrderBy {
        OrderBy {
            field: SortField::MinScore,
            order: self.score_order(),
        }
    }
}

/// Window offsets and cap used by the recommendation service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendationPolicy {
    pub reach: ScoreWindow,
    pub matched: ScoreWindow,
    pub safety: ScoreWindow,
    pub limit: i64,
}

impl Default for RecommendationPolicy {
    fn default() -> Self {
        Self {
            reach: ScoreWindow::new(5.0, 10.0),
            matched: ScoreWindow::new(-3.0, 3.0),
            safety: ScoreWindow::new(-20.0, -10.0),
            limit: 20,
        }
    }
}

impl RecommendationPolicy {
    pub fn window(&self, tier: Tier) -> ScoreWindow {
        match tier {
            Tier::Reach => self.reach,
            Tier::Match => self.matched,
            Tier::Safety => self.safety,
        }
    }
}

/// Recommended programs grouped by tier.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Recommendation {
    pub reach: Vec<AdmissionRecord>,
    #[serde(rename = "match")]
    pub matched: Vec<AdmissionRecord>,
    pub safety: Vec<AdmissionRecord>,
}
