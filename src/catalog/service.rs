use crate::catalog::data;
use crate::catalog::models::{
    AdditionalConsideration, CatalogSnapshot, ComponentInsight, CostComponent, ScalingScenario,
};
use crate::error::CostModelError;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Immutable cost catalog
///
/// Keeps the ordered rows for display together with name indexes built once
/// at load time, so lookups by key never scan.
#[derive(Debug, Clone)]
pub struct CostCatalog {
    base_costs: Vec<CostComponent>,
    scenarios: Vec<ScalingScenario>,
    considerations: Vec<AdditionalConsideration>,
    insights: HashMap<String, ComponentInsight>,
    component_index: HashMap<String, usize>,
    consideration_index: HashMap<String, usize>,
}

impl CostCatalog {
    /// Build a catalog from explicit rows
    ///
    /// Fails if two additional considerations share a name, since the name
    /// is the selection key.
    pub fn new(
        base_costs: Vec<CostComponent>,
        scenarios: Vec<ScalingScenario>,
        considerations: Vec<AdditionalConsideration>,
    ) -> Result<Self, CostModelError> {
        let mut seen = HashSet::with_capacity(considerations.len());
        for consideration in &considerations {
            if !seen.insert(consideration.name.as_str()) {
                return Err(CostModelError::DuplicateConsideration(
                    consideration.name.clone(),
                ));
            }
        }

        Ok(Self::from_rows(base_costs, scenarios, considerations))
    }

    fn from_rows(
        base_costs: Vec<CostComponent>,
        scenarios: Vec<ScalingScenario>,
        considerations: Vec<AdditionalConsideration>,
    ) -> Self {
        let component_index = base_costs
            .iter()
            .enumerate()
            .map(|(idx, component)| (component.name.clone(), idx))
            .collect();

        let consideration_index = considerations
            .iter()
            .enumerate()
            .map(|(idx, consideration)| (consideration.name.clone(), idx))
            .collect();

        let insights = data::COMPONENT_INSIGHTS
            .iter()
            .map(|(name, influences, tips)| {
                (
                    name.to_string(),
                    ComponentInsight {
                        influences: influences.to_string(),
                        optimization_tips: tips.to_string(),
                    },
                )
            })
            .collect();

        Self {
            base_costs,
            scenarios,
            considerations,
            insights,
            component_index,
            consideration_index,
        }
    }

    /// The built-in AV Digital Proving Ground catalog
    pub fn builtin() -> Self {
        let base_costs = data::BASE_COSTS
            .iter()
            .map(|(name, cost, percentage, description)| CostComponent {
                name: name.to_string(),
                cost: *cost,
                percentage: *percentage,
                description: description.to_string(),
            })
            .collect();

        let scenarios = data::SCALING_SCENARIOS
            .iter()
            .map(|(label, monthly_cost, hourly_rate, driver)| ScalingScenario {
                label: label.to_string(),
                monthly_cost: *monthly_cost,
                hourly_rate: *hourly_rate,
                dominant_driver: driver.to_string(),
            })
            .collect();

        let considerations = data::ADDITIONAL_CONSIDERATIONS
            .iter()
            .map(|(name, cost, description)| AdditionalConsideration {
                name: name.to_string(),
                incremental_cost: *cost,
                description: description.to_string(),
            })
            .collect();

        let catalog = Self::from_rows(base_costs, scenarios, considerations);
        debug!(
            components = catalog.base_costs.len(),
            scenarios = catalog.scenarios.len(),
            considerations = catalog.considerations.len(),
            "Loaded built-in cost catalog"
        );
        catalog
    }

    pub fn base_costs(&self) -> &[CostComponent] {
        &self.base_costs
    }

    pub fn scenarios(&self) -> &[ScalingScenario] {
        &self.scenarios
    }

    pub fn additional_considerations(&self) -> &[AdditionalConsideration] {
        &self.considerations
    }

    /// Read-only view of all three tables
    pub fn snapshot(&self) -> CatalogSnapshot<'_> {
        CatalogSnapshot {
            base_costs: &self.base_costs,
            scenarios: &self.scenarios,
            additional_considerations: &self.considerations,
        }
    }

    /// Fixed base total that selections are added to
    pub fn base_total(&self) -> f64 {
        data::BASE_TOTAL
    }

    pub fn find_component(&self, name: &str) -> Option<&CostComponent> {
        self.component_index
            .get(name)
            .map(|&idx| &self.base_costs[idx])
    }

    /// Position of a base component in display order
    pub fn component_position(&self, name: &str) -> Option<usize> {
        self.component_index.get(name).copied()
    }

    pub fn find_consideration(&self, name: &str) -> Option<&AdditionalConsideration> {
        self.consideration_index
            .get(name)
            .map(|&idx| &self.considerations[idx])
    }

    /// Insight text for a component, with generic fallbacks for unknown names
    pub fn insight(&self, component: &str) -> ComponentInsight {
        self.insights
            .get(component)
            .cloned()
            .unwrap_or_else(|| ComponentInsight {
                influences: data::DEFAULT_INFLUENCES.to_string(),
                optimization_tips: data::DEFAULT_OPTIMIZATION_TIPS.to_string(),
            })
    }
}

impl Default for CostCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
