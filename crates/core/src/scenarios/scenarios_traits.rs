use std::sync::Arc;

use crate::errors::Result;
use crate::scenarios::{ScenarioCatalog, SimulationKind};

/// Trait for supplying scenario catalogs to the simulation engine.
///
/// The default implementation serves the built-in catalogs; shells may
/// inject their own provider to launch simulations with custom content.
pub trait CatalogProviderTrait: Send + Sync {
    /// The catalog for a simulation kind.
    fn catalog(&self, kind: SimulationKind) -> Result<Arc<ScenarioCatalog>>;

    /// Simulation kinds this provider can launch, in presentation order.
    fn kinds(&self) -> Vec<SimulationKind>;
}
