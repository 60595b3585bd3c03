use serde::{Deserialize, Serialize};

/// One fixed line-item of the nominal base monthly cost
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostComponent {
    pub name: String,
    pub cost: f64,
    /// Share of the base total, 0..=100
    pub percentage: f64,
    pub description: String,
}

/// Reference usage tier shown for comparison (not editable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalingScenario {
    pub label: String,
    pub monthly_cost: f64,
    pub hourly_rate: f64,
    pub dominant_driver: String,
}

/// Optional add-on a user may toggle on or off
///
/// `name` is the selection key and is unique within a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditionalConsideration {
    pub name: String,
    pub incremental_cost: f64,
    pub description: String,
}

/// Explanatory text attached to a base component
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentInsight {
    /// What influences this cost
    pub influences: String,
    /// Optimization tips
    pub optimization_tips: String,
}

/// Read-only snapshot of the whole catalog, in display order
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSnapshot<'a> {
    pub base_costs: &'a [CostComponent],
    pub scenarios: &'a [ScalingScenario],
    pub additional_considerations: &'a [AdditionalConsideration],
}
