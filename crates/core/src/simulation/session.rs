//! Quiz session state machine.

use std::sync::Arc;

use crate::scenarios::{Scenario, ScenarioCatalog};
use crate::simulation::scoring::score;
use crate::simulation::simulation_model::{
    AnswerFeedback, QuizPhase, QuizProgress, QuizSummary, SimulationError,
};

/// One pass through a scenario catalog.
///
/// A session owns its state exclusively; all transitions are synchronous and
/// atomic from the caller's perspective. The machine has three phases and
/// the only way out of [`QuizPhase::Completed`] is [`QuizSession::restart`].
#[derive(Debug, Clone)]
pub struct QuizSession {
    catalog: Arc<ScenarioCatalog>,
    current_index: usize,
    answer_log: Vec<bool>,
    pending_answer: Option<bool>,
    phase: QuizPhase,
}

impl QuizSession {
    /// Starts a run at the first scenario of the catalog.
    ///
    /// Catalogs are validated non-empty at construction, so index 0 always
    /// refers to a scenario.
    pub fn start(catalog: Arc<ScenarioCatalog>) -> Self {
        QuizSession {
            catalog,
            current_index: 0,
            answer_log: Vec::new(),
            pending_answer: None,
            phase: QuizPhase::Presenting,
        }
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn catalog(&self) -> &Arc<ScenarioCatalog> {
        &self.catalog
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn answer_log(&self) -> &[bool] {
        &self.answer_log
    }

    pub fn pending_answer(&self) -> Option<bool> {
        self.pending_answer
    }

    /// The scenario at the current index, until the run completes.
    pub fn current_scenario(&self) -> Option<&Scenario> {
        match self.phase {
            QuizPhase::Completed => None,
            _ => self.catalog.at(self.current_index),
        }
    }

    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            current_index: self.current_index,
            total: self.catalog.len(),
            answered: self.answer_log.len(),
        }
    }

    /// Records the user's judgement for the active scenario.
    ///
    /// Only legal while presenting. Submitting during feedback is rejected
    /// so an answer can never be double-counted; submitting after
    /// completion is rejected outright.
    pub fn submit_answer(
        &mut self,
        choice: bool,
    ) -> std::result::Result<AnswerFeedback, SimulationError> {
        if self.phase != QuizPhase::Presenting {
            return Err(SimulationError::invalid_transition(
                self.phase,
                "submit an answer",
            ));
        }

        // Presenting always has a scenario in range; the index only moves
        // past the end together with the phase change to Completed.
        let scenario = self
            .catalog
            .at(self.current_index)
            .ok_or_else(|| SimulationError::invalid_transition(self.phase, "submit an answer"))?;

        let correct = choice == scenario.is_scam;
        self.answer_log.push(correct);
        self.pending_answer = Some(choice);
        self.phase = QuizPhase::Feedback;

        Ok(AnswerFeedback {
            scenario_id: scenario.id.clone(),
            correct,
            is_scam: scenario.is_scam,
            explanation: scenario.explanation.clone(),
            flags: scenario.flags.clone(),
        })
    }

    /// Moves past the feedback view: to the next scenario, or to completion
    /// after the last one.
    ///
    /// Only legal from the feedback phase. Rejected calls leave the index
    /// and the answer log untouched.
    pub fn advance(&mut self) -> std::result::Result<QuizPhase, SimulationError> {
        if self.phase != QuizPhase::Feedback {
            return Err(SimulationError::invalid_transition(self.phase, "advance"));
        }

        self.pending_answer = None;
        if self.current_index + 1 < self.catalog.len() {
            self.current_index += 1;
            self.phase = QuizPhase::Presenting;
        } else {
            self.current_index += 1;
            self.phase = QuizPhase::Completed;
        }
        Ok(self.phase)
    }

    /// Resets the run: index 0, cleared log, presenting.
    ///
    /// Legal from any phase, regardless of the prior run's history.
    pub fn restart(&mut self) {
        self.current_index = 0;
        self.answer_log.clear();
        self.pending_answer = None;
        self.phase = QuizPhase::Presenting;
    }

    /// The final summary of a completed run.
    pub fn summary(&self) -> std::result::Result<QuizSummary, SimulationError> {
        if self.phase != QuizPhase::Completed {
            return Err(SimulationError::invalid_transition(
                self.phase,
                "read the summary",
            ));
        }

        Ok(QuizSummary {
            total: self.catalog.len(),
            correct_count: self.answer_log.iter().filter(|&&c| c).count(),
            score: score(&self.answer_log)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenarios::{Scenario, ScenarioContent, SimulationKind};

    fn catalog(truths: &[bool]) -> Arc<ScenarioCatalog> {
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
        Arc::new(ScenarioCatalog::new(SimulationKind::Sms, scenarios).unwrap())
    }

    #[test]
    fn full_run_through_two_scenarios() {
        let mut session = QuizSession::start(catalog(&[true, false]));
        assert_eq!(session.phase(), QuizPhase::Presenting);
        assert_eq!(session.current_scenario().unwrap().id, "s0");

        let feedback = session.submit_answer(true).unwrap();
        assert!(feedback.correct);
        assert_eq!(session.phase(), QuizPhase::Feedback);
        assert_eq!(session.pending_answer(), Some(true));

        assert_eq!(session.advance().unwrap(), QuizPhase::Presenting);
        assert_eq!(session.current_scenario().unwrap().id, "s1");
        assert_eq!(session.pending_answer(), None);

        let feedback = session.submit_answer(true).unwrap();
        assert!(!feedback.correct);

        assert_eq!(session.advance().unwrap(), QuizPhase::Completed);
        let summary = session.summary().unwrap();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.correct_count, 1);
        assert_eq!(summary.score, 50);
    }

    #[test]
    fn single_scenario_catalog_completes_after_one_round() {
        let mut session = QuizSession::start(catalog(&[true]));
        session.submit_answer(true).unwrap();
        assert_eq!(session.advance().unwrap(), QuizPhase::Completed);
        assert_eq!(session.summary().unwrap().score, 100);
    }

    #[test]
    fn wrong_answer_on_scam_scores_zero() {
        let mut session = QuizSession::start(catalog(&[true]));
        session.submit_answer(false).unwrap();
        session.advance().unwrap();
        assert_eq!(session.answer_log(), &[false]);
        assert_eq!(session.summary().unwrap().score, 0);
    }

    #[test]
    fn correct_answer_on_legitimate_scores_full() {
        let mut session = QuizSession::start(catalog(&[false]));
        session.submit_answer(false).unwrap();
        session.advance().unwrap();
        assert_eq!(session.answer_log(), &[true]);
        assert_eq!(session.summary().unwrap().score, 100);
    }

    #[test]
    fn advance_while_presenting_is_rejected_without_state_change() {
        let mut session = QuizSession::start(catalog(&[true, false]));
        let err = session.advance().unwrap_err();
        assert!(matches!(err, SimulationError::InvalidTransition { .. }));
        assert_eq!(session.current_index(), 0);
        assert!(session.answer_log().is_empty());
        assert_eq!(session.phase(), QuizPhase::Presenting);
    }

    #[test]
    fn double_submit_is_rejected_and_never_double_counts() {
        let mut session = QuizSession::start(catalog(&[true]));
        session.submit_answer(true).unwrap();
        let err = session.submit_answer(false).unwrap_err();
        assert!(matches!(err, SimulationError::InvalidTransition { .. }));
        assert_eq!(session.answer_log().len(), 1);
    }

    #[test]
    fn submit_after_completion_is_rejected() {
        let mut session = QuizSession::start(catalog(&[true]));
        session.submit_answer(true).unwrap();
        session.advance().unwrap();
        assert!(session.submit_answer(true).is_err());
        assert!(session.advance().is_err());
        assert!(session.current_scenario().is_none());
    }

    #[test]
    fn restart_from_completed_resets_everything() {
        let mut session = QuizSession::start(catalog(&[true, false]));
        session.submit_answer(false).unwrap();
        session.advance().unwrap();
        session.submit_answer(true).unwrap();
        session.advance().unwrap();
        assert_eq!(session.phase(), QuizPhase::Completed);

        session.restart();
        assert_eq!(session.phase(), QuizPhase::Presenting);
        assert_eq!(session.current_index(), 0);
        assert!(session.answer_log().is_empty());
        assert_eq!(session.pending_answer(), None);
    }

    #[test]
    fn summary_before_completion_is_rejected() {
        let mut session = QuizSession::start(catalog(&[true]));
        assert!(session.summary().is_err());
        session.submit_answer(true).unwrap();
        assert!(session.summary().is_err());
    }
}
