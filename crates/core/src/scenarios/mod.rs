//! Scenarios module - scenario catalogs, domain models, and providers.
//!
//! A [`Scenario`] is one fraud/security situation a user judges as scam or
//! legitimate. Scenarios are authored content grouped into per-medium
//! [`ScenarioCatalog`]s, fixed at construction and immutable for the
//! lifetime of a catalog instance.

mod builtin;
mod catalog;
mod scenarios_model;
mod scenarios_service;
mod scenarios_traits;

pub use builtin::{all_builtin_catalogs, builtin_catalog};
pub use catalog::{CatalogError, ScenarioCatalog};
pub use scenarios_model::{Scenario, ScenarioContent, SimulationKind};
pub use scenarios_service::BuiltinCatalogProvider;
pub use scenarios_traits::CatalogProviderTrait;
