//! Client-side filtering and chart shaping for recommendation lists.
//!
//! Every function here is pure: inputs are borrowed, outputs are new values.

use serde::{Deserialize, Serialize};

use crate::models::{RecommendationLevel, RecommendationRecord, Role, User, ALL_LEVELS};

pub const IAR_CHART_LIMIT: usize = 10;
pub const IAR_LABEL_MAX: usize = 20;
pub const ROI_CHART_LIMIT: usize = 8;
pub const ROI_LABEL_MAX: usize = 15;

/// Level filter: everything, or a single level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum LevelFilter {
    #[default]
    All,
    Only(RecommendationLevel),
}

impl LevelFilter {
    /// Parse a select value: `"ALL"` or a wire level name.
    pub fn from_select(value: &str) -> Self {
        use crate::models::WireValue;
        RecommendationLevel::from_wire(value)
            .map(LevelFilter::Only)
            .unwrap_or(LevelFilter::All)
    }

    pub fn select_value(&self) -> &'static str {
        use crate::models::WireValue;
        match self {
            LevelFilter::All => "ALL",
            LevelFilter::Only(level) => level.as_wire(),
        }
    }
}

/// Filter state owned by a single section.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RecommendationFilter {
    /// Minimum IAR, 0 to 100.
    pub min_iar: u8,
    pub level: LevelFilter,
}

impl RecommendationFilter {
    pub fn new(min_iar: u8, level: LevelFilter) -> Self {
        Self {
            min_iar: min_iar.min(100),
            level,
        }
    }

    pub fn matches(&self, record: &RecommendationRecord) -> bool {
        let level_ok = match self.level {
            LevelFilter::All => true,
            LevelFilter::Only(level) => record.recommendation_level == Some(level),
        };
        record.iar_score >= f64::from(self.min_iar) && level_ok
    }

    /// Records passing the filter, in input order.
    pub fn apply(&self, records: &[RecommendationRecord]) -> Vec<RecommendationRecord> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

/// One bar in a chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

/// Chart label for a category: underscores become spaces, then cut to `max` chars.
pub fn display_category(category: &str, max: usize) -> String {
    category.replace('_', " ").chars().take(max).collect()
}

fn top_by<F>(records: &[RecommendationRecord], limit: usize, key: F) -> Vec<&RecommendationRecord>
where
    F: Fn(&RecommendationRecord) -> f64,
{
    let mut sorted: Vec<&RecommendationRecord> = records.iter().collect();
    // sort_by is stable, so ties keep their input order
    sorted.sort_by(|a, b| key(b).total_cmp(&key(a)));
    sorted.truncate(limit);
    sorted
}

/// IAR chart: ten highest scores, descending.
pub fn top_by_iar(records: &[RecommendationRecord]) -> Vec<ChartPoint> {
    top_by(records, IAR_CHART_LIMIT, |r| r.iar_score)
        .into_iter()
        .map(|r| ChartPoint {
            label: display_category(&r.category, IAR_LABEL_MAX),
            value: r.iar_score,
        })
        .collect()
}

/// ROI chart: eight highest annual estimates, in thousands.
pub fn top_by_roi(records: &[RecommendationRecord]) -> Vec<ChartPoint> {
    top_by(records, ROI_CHART_LIMIT, |r| r.annual_roi_estimate)
        .into_iter()
        .map(|r| ChartPoint {
            label: display_category(&r.category, ROI_LABEL_MAX),
            value: r.annual_roi_estimate / 1000.0,
        })
        .collect()
}

/// Count of records per level, always three buckets in fixed order.
pub fn level_distribution(records: &[RecommendationRecord]) -> Vec<(RecommendationLevel, usize)> {
    ALL_LEVELS
        .iter()
        .map(|level| {
            let count = records
                .iter()
                .filter(|r| r.recommendation_level == Some(*level))
                .count();
            (*level, count)
        })
        .collect()
}

/// Role filter for the user administration list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum RoleFilter {
    #[default]
    All,
    Only(Role),
}

impl RoleFilter {
    pub fn from_select(value: &str) -> Self {
        use crate::models::WireValue;
        Role::from_wire(value)
            .map(RoleFilter::Only)
            .unwrap_or(RoleFilter::All)
    }

    pub fn apply<'a>(&self, users: &'a [User]) -> Vec<&'a User> {
        users
            .iter()
            .filter(|u| match self {
                RoleFilter::All => true,
                RoleFilter::Only(role) => u.role == Some(*role),
            })
            .collect()
    }
}
