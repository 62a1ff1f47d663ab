//! Simulation domain models.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::scenarios::{Scenario, SimulationKind};

/// Errors for quiz-session state transitions and scoring.
///
/// Invalid transitions are programming errors in the calling shell, not
/// recoverable runtime conditions; they are rejected without any state
/// change so a log can never be partially advanced or double-counted.
#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("Invalid transition: cannot {action} while in the {phase} phase")]
    InvalidTransition { phase: QuizPhase, action: String },

    #[error("Simulation session not found: {0}")]
    SessionNotFound(String),

    #[error("Cannot score an empty answer log")]
    EmptyAnswerLog,
}

impl SimulationError {
    pub(crate) fn invalid_transition(phase: QuizPhase, action: &str) -> Self {
        SimulationError::InvalidTransition {
            phase,
            action: action.to_string(),
        }
    }
}

/// The three phases of a quiz run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuizPhase {
    /// A scenario is shown and no answer has been submitted yet.
    Presenting,
    /// An answer was submitted; explanation and correctness are shown.
    Feedback,
    /// The run has passed the last scenario; the score is available.
    Completed,
}

impl QuizPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuizPhase::Presenting => "presenting",
            QuizPhase::Feedback => "feedback",
            QuizPhase::Completed => "completed",
        }
    }
}

impl fmt::Display for QuizPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Feedback returned to the shell after an answer is submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerFeedback {
    pub scenario_id: String,
    /// Whether the user's judgement matched the ground truth.
    pub correct: bool,
    /// The authored classification, revealed with the feedback.
    pub is_scam: bool,
    pub explanation: String,
    pub flags: Vec<String>,
}

/// Position within a quiz run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizProgress {
    pub current_index: usize,
    pub total: usize,
    pub answered: usize,
}

/// Derived result of a completed run. Computed once, at completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSummary {
    pub total: usize,
    pub correct_count: usize,
    /// Integer percentage: round(100 * correct / total).
    pub score: u8,
}

/// Returned when a simulation is launched or restarted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationLaunch {
    pub session_id: String,
    pub kind: SimulationKind,
    pub scenario: Scenario,
    pub progress: QuizProgress,
}

/// Returned by the session service after an answer submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerOutcome {
    pub feedback: AnswerFeedback,
    pub progress: QuizProgress,
    /// Achievement ids newly earned by this submission.
    pub achievements_granted: Vec<String>,
}

/// Returned by the session service after advancing past feedback.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "phase")]
pub enum AdvanceOutcome {
    /// The next scenario to present.
    #[serde(rename_all = "camelCase")]
    Presenting {
        scenario: Scenario,
        progress: QuizProgress,
    },
    /// The run is over; the summary is final.
    #[serde(rename_all = "camelCase")]
    Completed {
        summary: QuizSummary,
        /// Achievement ids newly earned by completing the run.
        achievements_granted: Vec<String>,
    },
}
