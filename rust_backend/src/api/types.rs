use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One requirement x month row as served to the requirements view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementRow {
    pub id: String,
    pub client: Option<String>,
    pub mission: Option<String>,
    pub role: Option<String>,
    pub scenario: Option<String>,
    pub seniority: Option<String>,
    pub month_start: NaiveDate,
    pub month_end: NaiveDate,
    pub capacity: f64,
    pub probability: f64,
    pub renewal: f64,
    pub effective_capacity: f64,
    /// Steady-state probability-weighted demand (`capacity * probability`),
    /// the solid overlay line in the requirements chart.
    pub prob_required: f64,
    pub projected_capacity: f64,
}

/// One mission-log x month row as served to the allocations view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationRow {
    pub id: String,
    pub requirement_id: Option<String>,
    pub explorer: Option<String>,
    pub role: Option<String>,
    pub mission: Option<String>,
    pub client: Option<String>,
    pub month_end: NaiveDate,
    pub capacity: f64,
    pub effective_capacity: f64,
}

/// One row of the gaps table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapTableRow {
    pub requirement_id: String,
    pub mission: Option<String>,
    pub role: Option<String>,
    pub seniority: Option<String>,
    pub month_end: NaiveDate,
    pub required_capacity: f64,
    pub allocated_capacity: f64,
    pub gap: f64,
    /// `gap * probability`, the probability-weighted shortfall overlay.
    pub weighted_gap: f64,
}

/// One row of the explorer utilization view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorerRow {
    pub explorer: Option<String>,
    pub role: Option<String>,
    pub belt_colour: Option<String>,
    pub active: bool,
    pub month_end: NaiveDate,
    pub allocated_capacity: f64,
    pub availability: f64,
}
