use std::collections::HashMap;
use std::sync::Arc;

use crate::errors::Result;
use crate::scenarios::builtin::builtin_catalog;
use crate::scenarios::scenarios_traits::CatalogProviderTrait;
use crate::scenarios::{ScenarioCatalog, SimulationKind};

/// Catalog provider backed by the built-in authored catalogs.
///
/// All catalogs are constructed and validated once, up front, so malformed
/// authored content fails at startup rather than mid-session.
pub struct BuiltinCatalogProvider {
    catalogs: HashMap<SimulationKind, Arc<ScenarioCatalog>>,
}

impl BuiltinCatalogProvider {
    pub fn new() -> Result<Self> {
        let mut catalogs = HashMap::with_capacity(SimulationKind::ALL.len());
        for kind in SimulationKind::ALL {
            catalogs.insert(kind, builtin_catalog(kind)?);
        }
        Ok(BuiltinCatalogProvider { catalogs })
    }
}

impl CatalogProviderTrait for BuiltinCatalogProvider {
    fn catalog(&self, kind: SimulationKind) -> Result<Arc<ScenarioCatalog>> {
        // Every kind is inserted in new(), so a miss cannot happen; keep the
        // lookup fallible anyway for custom providers sharing the trait.
        self.catalogs
            .get(&kind)
            .cloned()
            .ok_or_else(|| crate::scenarios::CatalogError::UnknownKind(kind.to_string()).into())
    }

    fn kinds(&self) -> Vec<SimulationKind> {
        SimulationKind::ALL.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_serves_all_kinds() {
        let provider = BuiltinCatalogProvider::new().unwrap();
        for kind in provider.kinds() {
            let catalog = provider.catalog(kind).unwrap();
            assert_eq!(catalog.kind(), kind);
        }
    }
}
