use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use log::{debug, error};
use uuid::Uuid;

use crate::achievements::AchievementServiceTrait;
use crate::constants::{
    ACHIEVEMENT_FIRST_CORRECT_ANSWER, ACHIEVEMENT_FIRST_SIMULATION_COMPLETED,
    EXPERT_SCORE_THRESHOLD,
};
use crate::errors::Result;
use crate::scenarios::{CatalogProviderTrait, SimulationKind};
use crate::simulation::session::QuizSession;
use crate::simulation::simulation_model::{
    AdvanceOutcome, AnswerOutcome, QuizPhase, QuizSummary, SimulationError, SimulationLaunch,
};
use crate::simulation::simulation_traits::SimulationServiceTrait;

/// Session registry implementing the launch contract.
///
/// Each live quiz run is one [`QuizSession`] keyed by a uuid. Sessions are
/// created on launch, discarded on close, and never persisted. Achievement
/// grants are injected through [`AchievementServiceTrait`] instead of being
/// read and written ad hoc from call sites.
pub struct SimulationService {
    sessions: DashMap<String, QuizSession>,
    catalog_provider: Arc<dyn CatalogProviderTrait>,
    achievement_service: Arc<dyn AchievementServiceTrait>,
}

impl SimulationService {
    pub fn new(
        catalog_provider: Arc<dyn CatalogProviderTrait>,
        achievement_service: Arc<dyn AchievementServiceTrait>,
    ) -> Self {
        SimulationService {
            sessions: DashMap::new(),
            catalog_provider,
            achievement_service,
        }
    }

    fn launch_view(&self, session_id: &str, session: &QuizSession) -> Result<SimulationLaunch> {
        let scenario = session
            .current_scenario()
            .ok_or_else(|| SimulationError::SessionNotFound(session_id.to_string()))?
            .clone();
        Ok(SimulationLaunch {
            session_id: session_id.to_string(),
            kind: session.catalog().kind(),
            scenario,
            progress: session.progress(),
        })
    }

    /// Grants a badge, recording it in `granted` on success.
    ///
    /// Reward bookkeeping never blocks the quiz: persistence failures are
    /// logged and swallowed.
    async fn try_grant(&self, achievement_id: &str, granted: &mut Vec<String>) {
        match self
            .achievement_service
            .grant_achievement(achievement_id)
            .await
        {
            Ok(Some(_)) => granted.push(achievement_id.to_string()),
            Ok(None) => {}
            Err(e) => error!("Failed to grant achievement {}: {}", achievement_id, e),
        }
    }

    async fn completion_grants(&self, kind: SimulationKind, summary: &QuizSummary) -> Vec<String> {
        let mut granted = Vec::new();
        self.try_grant(ACHIEVEMENT_FIRST_SIMULATION_COMPLETED, &mut granted)
            .await;
        if summary.score >= EXPERT_SCORE_THRESHOLD {
            self.try_grant(&kind.expert_achievement_id(), &mut granted)
                .await;
        }
        granted
    }
}

#[async_trait]
impl SimulationServiceTrait for SimulationService {
    fn start_simulation(&self, kind: SimulationKind) -> Result<SimulationLaunch> {
        let catalog = self.catalog_provider.catalog(kind)?;
        let session = QuizSession::start(catalog);
        let session_id = Uuid::new_v4().to_string();

        let launch = self.launch_view(&session_id, &session)?;
        self.sessions.insert(session_id.clone(), session);
        debug!("Started {} simulation session {}", kind, session_id);
        Ok(launch)
    }

    async fn submit_answer(&self, session_id: &str, choice: bool) -> Result<AnswerOutcome> {
        // Mutate the session inside the map guard, then drop the guard
        // before any await so a slow repository can't stall the registry.
        let (feedback, progress) = {
            let mut session = self
                .sessions
                .get_mut(session_id)
                .ok_or_else(|| SimulationError::SessionNotFound(session_id.to_string()))?;
            let feedback = session.submit_answer(choice)?;
            (feedback, session.progress())
        };

        let mut granted = Vec::new();
        if feedback.correct {
            self.try_grant(ACHIEVEMENT_FIRST_CORRECT_ANSWER, &mut granted)
                .await;
        }

        Ok(AnswerOutcome {
            feedback,
            progress,
            achievements_granted: granted,
        })
    }

    async fn advance(&self, session_id: &str) -> Result<AdvanceOutcome> {
        enum Step {
            Presenting(crate::scenarios::Scenario, crate::simulation::QuizProgress),
            Completed(SimulationKind, QuizSummary),
        }

        let step = {
            let mut session = self
                .sessions
                .get_mut(session_id)
                .ok_or_else(|| SimulationError::SessionNotFound(session_id.to_string()))?;
            match session.advance()? {
                QuizPhase::Presenting => {
                    let scenario = session
                        .current_scenario()
                        .ok_or_else(|| SimulationError::SessionNotFound(session_id.to_string()))?
                        .clone();
                    Step::Presenting(scenario, session.progress())
                }
                _ => Step::Completed(session.catalog().kind(), session.summary()?),
            }
        };

        match step {
            Step::Presenting(scenario, progress) => {
                Ok(AdvanceOutcome::Presenting { scenario, progress })
            }
            Step::Completed(kind, summary) => {
                let granted = self.completion_grants(kind, &summary).await;
                debug!(
                    "Session {} completed with score {}",
                    session_id, summary.score
                );
                Ok(AdvanceOutcome::Completed {
                    summary,
                    achievements_granted: granted,
                })
            }
        }
    }

    fn restart(&self, session_id: &str) -> Result<SimulationLaunch> {
        let mut session = self
            .sessions
            .get_mut(session_id)
            .ok_or_else(|| SimulationError::SessionNotFound(session_id.to_string()))?;
        session.restart();
        self.launch_view(session_id, &session)
    }

    fn close_simulation(&self, session_id: &str) {
        if self.sessions.remove(session_id).is_some() {
            debug!("Closed simulation session {}", session_id);
        }
    }

    fn active_session_count(&self) -> usize {
        self.sessions.len()
    }
}
