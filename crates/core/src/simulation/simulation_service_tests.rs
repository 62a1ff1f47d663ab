//! Tests for the SimulationService launch contract.
//!
//! These cover the session registry, the achievement hooks, and the state
//! machine guarantees as observed through the service API.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::achievements::{
    known_achievements, Achievement, AchievementRepositoryTrait, AchievementService,
    AchievementServiceTrait, EarnedAchievement,
};
use crate::constants::{
    ACHIEVEMENT_FIRST_CORRECT_ANSWER, ACHIEVEMENT_FIRST_SIMULATION_COMPLETED,
};
use crate::errors::Result;
use crate::scenarios::{
    CatalogProviderTrait, Scenario, ScenarioCatalog, ScenarioContent, SimulationKind,
};
use crate::simulation::{
    AdvanceOutcome, SimulationError, SimulationService, SimulationServiceTrait,
};
use crate::Error;

// ============== Mocks ==============

struct FixedCatalogProvider {
    catalog: Arc<ScenarioCatalog>,
}

impl FixedCatalogProvider {
    fn with_truths(truths: &[bool]) -> Self {
        let scenarios = truths
            .iter()
            .enumerate()
            .map(|(i, &is_scam)| Scenario {
                id: format!("s{i}"),
                kind: SimulationKind::Sms,
                content: ScenarioContent::SmsMessage {
                    sender: "sender".to_string(),
                    body: "body".to_string(),
                },
                is_scam,
                explanation: "because".to_string(),
                flags: vec![],
            })
            .collect();
        Self {
            catalog: Arc::new(ScenarioCatalog::new(SimulationKind::Sms, scenarios).unwrap()),
        }
    }
}

impl CatalogProviderTrait for FixedCatalogProvider {
    fn catalog(&self, _kind: SimulationKind) -> Result<Arc<ScenarioCatalog>> {
        Ok(self.catalog.clone())
    }

    fn kinds(&self) -> Vec<SimulationKind> {
        vec![SimulationKind::Sms]
    }
}

#[derive(Default)]
struct MockAchievementRepository {
    earned: RwLock<Vec<EarnedAchievement>>,
    fail_writes: bool,
}

#[async_trait]
impl AchievementRepositoryTrait for MockAchievementRepository {
    fn is_earned(&self, achievement_id: &str) -> Result<bool> {
        Ok(self
            .earned
            .read()
            .unwrap()
            .iter()
            .any(|e| e.achievement_id == achievement_id))
    }

    fn list_earned(&self) -> Result<Vec<EarnedAchievement>> {
        Ok(self.earned.read().unwrap().clone())
    }

    async fn mark_earned(
        &self,
        achievement_id: &str,
        earned_at: DateTime<Utc>,
    ) -> Result<EarnedAchievement> {
        if self.fail_writes {
            return Err(Error::Repository("write failed".to_string()));
        }
        let record = EarnedAchievement {
            achievement_id: achievement_id.to_string(),
            earned_at,
        };
        self.earned.write().unwrap().push(record.clone());
        Ok(record)
    }
}

fn service_with(
    truths: &[bool],
    repo: Arc<MockAchievementRepository>,
) -> SimulationService {
    SimulationService::new(
        Arc::new(FixedCatalogProvider::with_truths(truths)),
        Arc::new(AchievementService::new(repo)),
    )
}

struct NoopAchievementService;

#[async_trait]
impl AchievementServiceTrait for NoopAchievementService {
    fn has_achievement(&self, _id: &str) -> Result<bool> {
        Ok(false)
    }
    async fn grant_achievement(&self, _id: &str) -> Result<Option<EarnedAchievement>> {
        Ok(None)
    }
    fn list_achievements(&self) -> Vec<Achievement> {
        known_achievements()
    }
    fn earned_achievements(&self) -> Result<Vec<EarnedAchievement>> {
        Ok(vec![])
    }
}

// ============== Tests ==============

#[tokio::test]
async fn full_run_grants_completion_and_expert_badges() {
    let repo = Arc::new(MockAchievementRepository::default());
    let service = service_with(&[true, false], repo.clone());

    let launch = service.start_simulation(SimulationKind::Sms).unwrap();
    assert_eq!(launch.progress.total, 2);
    assert_eq!(service.active_session_count(), 1);

    let outcome = service.submit_answer(&launch.session_id, true).await.unwrap();
    assert!(outcome.feedback.correct);
    assert!(outcome
        .achievements_granted
        .contains(&ACHIEVEMENT_FIRST_CORRECT_ANSWER.to_string()));

    match service.advance(&launch.session_id).await.unwrap() {
        AdvanceOutcome::Presenting { scenario, progress } => {
            assert_eq!(scenario.id, "s1");
            assert_eq!(progress.current_index, 1);
        }
        other => panic!("expected Presenting, got {other:?}"),
    }

    service.submit_answer(&launch.session_id, false).await.unwrap();
    match service.advance(&launch.session_id).await.unwrap() {
        AdvanceOutcome::Completed {
            summary,
            achievements_granted,
        } => {
            assert_eq!(summary.score, 100);
            assert!(achievements_granted
                .contains(&ACHIEVEMENT_FIRST_SIMULATION_COMPLETED.to_string()));
            assert!(achievements_granted
                .contains(&SimulationKind::Sms.expert_achievement_id()));
        }
        other => panic!("expected Completed, got {other:?}"),
    }
}

#[tokio::test]
async fn imperfect_run_earns_no_expert_badge() {
    let repo = Arc::new(MockAchievementRepository::default());
    let service = service_with(&[true, true], repo.clone());
    let launch = service.start_simulation(SimulationKind::Sms).unwrap();

    service.submit_answer(&launch.session_id, true).await.unwrap();
    service.advance(&launch.session_id).await.unwrap();
    service.submit_answer(&launch.session_id, false).await.unwrap();

    match service.advance(&launch.session_id).await.unwrap() {
        AdvanceOutcome::Completed {
            summary,
            achievements_granted,
        } => {
            assert_eq!(summary.score, 50);
            assert!(!achievements_granted
                .contains(&SimulationKind::Sms.expert_achievement_id()));
        }
        other => panic!("expected Completed, got {other:?}"),
    }
}

#[tokio::test]
async fn first_correct_answer_badge_is_granted_only_once() {
    let repo = Arc::new(MockAchievementRepository::default());
    let service = service_with(&[true, true], repo.clone());
    let launch = service.start_simulation(SimulationKind::Sms).unwrap();

    let first = service.submit_answer(&launch.session_id, true).await.unwrap();
    assert_eq!(first.achievements_granted.len(), 1);

    service.advance(&launch.session_id).await.unwrap();
    let second = service.submit_answer(&launch.session_id, true).await.unwrap();
    assert!(second.achievements_granted.is_empty());

    let earned = repo.list_earned().unwrap();
    assert_eq!(
        earned
            .iter()
            .filter(|e| e.achievement_id == ACHIEVEMENT_FIRST_CORRECT_ANSWER)
            .count(),
        1
    );
}

#[tokio::test]
async fn achievement_write_failure_does_not_fail_the_quiz() {
    let repo = Arc::new(MockAchievementRepository {
        earned: RwLock::new(Vec::new()),
        fail_writes: true,
    });
    let service = service_with(&[true], repo);
    let launch = service.start_simulation(SimulationKind::Sms).unwrap();

    let outcome = service.submit_answer(&launch.session_id, true).await.unwrap();
    assert!(outcome.feedback.correct);
    assert!(outcome.achievements_granted.is_empty());
}

#[tokio::test]
async fn unknown_session_is_rejected() {
    let service = SimulationService::new(
        Arc::new(FixedCatalogProvider::with_truths(&[true])),
        Arc::new(NoopAchievementService),
    );

    let err = service.submit_answer("missing", true).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Simulation(SimulationError::SessionNotFound(_))
    ));
    assert!(service.advance("missing").await.is_err());
    assert!(service.restart("missing").is_err());
}

#[tokio::test]
async fn restart_returns_to_first_scenario() {
    let service = SimulationService::new(
        Arc::new(FixedCatalogProvider::with_truths(&[true, false])),
        Arc::new(NoopAchievementService),
    );
    let launch = service.start_simulation(SimulationKind::Sms).unwrap();

    service.submit_answer(&launch.session_id, false).await.unwrap();
    service.advance(&launch.session_id).await.unwrap();

    let relaunch = service.restart(&launch.session_id).unwrap();
    assert_eq!(relaunch.session_id, launch.session_id);
    assert_eq!(relaunch.scenario.id, "s0");
    assert_eq!(relaunch.progress.answered, 0);
}

#[tokio::test]
async fn close_discards_the_session() {
    let service = SimulationService::new(
        Arc::new(FixedCatalogProvider::with_truths(&[true])),
        Arc::new(NoopAchievementService),
    );
    let launch = service.start_simulation(SimulationKind::Sms).unwrap();
    assert_eq!(service.active_session_count(), 1);

    service.close_simulation(&launch.session_id);
    assert_eq!(service.active_session_count(), 0);
    assert!(service.submit_answer(&launch.session_id, true).await.is_err());

    // Closing again is a no-op.
    service.close_simulation(&launch.session_id);
}

#[tokio::test]
async fn double_submit_through_the_service_is_rejected() {
    let service = SimulationService::new(
        Arc::new(FixedCatalogProvider::with_truths(&[true])),
        Arc::new(NoopAchievementService),
    );
    let launch = service.start_simulation(SimulationKind::Sms).unwrap();

    service.submit_answer(&launch.session_id, true).await.unwrap();
    let err = service.submit_answer(&launch.session_id, true).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Simulation(SimulationError::InvalidTransition { .. })
    ));
}
