//! Scenario catalog: a fixed, ordered collection of authored scenarios.

use std::collections::HashSet;

use thiserror::Error;

use super::scenarios_model::{Scenario, SimulationKind};

/// Errors for catalog construction and lookup.
///
/// Construction errors are configuration faults in authored content and are
/// fatal at load time; they must prevent the simulation from starting.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Scenario not found: {0}")]
    ScenarioNotFound(String),

    #[error("Catalog '{0}' contains no scenarios")]
    EmptyCatalog(SimulationKind),

    #[error("Duplicate scenario id: {0}")]
    DuplicateScenarioId(String),

    #[error("Scenario '{0}' has an empty explanation")]
    MissingExplanation(String),

    #[error("Scenario '{id}' has kind {scenario_kind} but belongs to a {catalog_kind} catalog")]
    KindMismatch {
        id: String,
        scenario_kind: SimulationKind,
        catalog_kind: SimulationKind,
    },

    #[error("Unknown simulation kind: {0}")]
    UnknownKind(String),
}

/// An immutable, ordered catalog of scenarios for one simulation kind.
///
/// Order is fixed for a given catalog instance; quiz runs advance through
/// it sequentially.
#[derive(Debug, Clone)]
pub struct ScenarioCatalog {
    kind: SimulationKind,
    scenarios: Vec<Scenario>,
}

impl ScenarioCatalog {
    /// Builds a catalog, validating the authored content.
    ///
    /// Rejects empty catalogs, duplicate scenario ids, empty explanations,
    /// and scenarios whose kind does not match the catalog's.
    pub fn new(
        kind: SimulationKind,
        scenarios: Vec<Scenario>,
    ) -> std::result::Result<Self, CatalogError> {
        if scenarios.is_empty() {
            return Err(CatalogError::EmptyCatalog(kind));
        }

        let mut seen_ids: HashSet<&str> = HashSet::with_capacity(scenarios.len());
        for scenario in &scenarios {
            if !seen_ids.insert(scenario.id.as_str()) {
                return Err(CatalogError::DuplicateScenarioId(scenario.id.clone()));
            }
            if scenario.explanation.trim().is_empty() {
                return Err(CatalogError::MissingExplanation(scenario.id.clone()));
            }
            if scenario.kind != kind {
                return Err(CatalogError::KindMismatch {
                    id: scenario.id.clone(),
                    scenario_kind: scenario.kind,
                    catalog_kind: kind,
                });
            }
        }

        Ok(ScenarioCatalog { kind, scenarios })
    }

    pub fn kind(&self) -> SimulationKind {
        self.kind
    }

    /// Looks up a scenario by id.
    ///
    /// A miss is a configuration fault, not user input; shells map it to a
    /// neutral "scenario unavailable" state.
    pub fn get(&self, id: &str) -> std::result::Result<&Scenario, CatalogError> {
        self.scenarios
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| CatalogError::ScenarioNotFound(id.to_string()))
    }

    /// All scenarios in fixed presentation order.
    pub fn all(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Scenario at a 0-based position, if in range.
    pub fn at(&self, index: usize) -> Option<&Scenario> {
        self.scenarios.get(index)
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenarios::ScenarioContent;

    fn sms_scenario(id: &str, is_scam: bool, explanation: &str) -> Scenario {
        Scenario {
            id: id.to_string(),
            kind: SimulationKind::Sms,
            content: ScenarioContent::SmsMessage {
                sender: "+1 555 0100".to_string(),
                body: "Test message".to_string(),
            },
            is_scam,
            explanation: explanation.to_string(),
            flags: vec!["flag".to_string()],
        }
    }

    #[test]
    fn builds_valid_catalog_and_preserves_order() {
        let catalog = ScenarioCatalog::new(
            SimulationKind::Sms,
            vec![
                sms_scenario("a", true, "scam"),
                sms_scenario("b", false, "legit"),
            ],
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.all()[0].id, "a");
        assert_eq!(catalog.all()[1].id, "b");
        assert_eq!(catalog.get("b").unwrap().is_scam, false);
    }

    #[test]
    fn rejects_empty_catalog() {
        let result = ScenarioCatalog::new(SimulationKind::Sms, vec![]);
        assert!(matches!(result, Err(CatalogError::EmptyCatalog(_))));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = ScenarioCatalog::new(
            SimulationKind::Sms,
            vec![
                sms_scenario("dup", true, "x"),
                sms_scenario("dup", false, "y"),
            ],
        );
        assert!(matches!(result, Err(CatalogError::DuplicateScenarioId(id)) if id == "dup"));
    }

    #[test]
    fn rejects_empty_explanation() {
        let result =
            ScenarioCatalog::new(SimulationKind::Sms, vec![sms_scenario("a", true, "  ")]);
        assert!(matches!(result, Err(CatalogError::MissingExplanation(_))));
    }

    #[test]
    fn rejects_kind_mismatch() {
        let mut scenario = sms_scenario("a", true, "x");
        scenario.kind = SimulationKind::Email;
        let result = ScenarioCatalog::new(SimulationKind::Sms, vec![scenario]);
        assert!(matches!(result, Err(CatalogError::KindMismatch { .. })));
    }

    #[test]
    fn unknown_id_is_not_found() {
        let catalog =
            ScenarioCatalog::new(SimulationKind::Sms, vec![sms_scenario("a", true, "x")]).unwrap();
        assert!(matches!(
            catalog.get("missing"),
            Err(CatalogError::ScenarioNotFound(_))
        ));
    }
}
