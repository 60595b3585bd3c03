pub mod data;
pub mod models;
pub mod service;

pub use data::BASE_TOTAL;
pub use models::{
    AdditionalConsideration, CatalogSnapshot, ComponentInsight, CostComponent, ScalingScenario,
};
pub use service::CostCatalog;
