//! Simulation module - quiz sessions, scoring, and the session service.
//!
//! One [`QuizSession`] is a single pass through a scenario catalog:
//! present a scenario, capture the user's scam/legitimate judgement, reveal
//! feedback, advance, and score the run at completion. Sessions are owned
//! exclusively by one run and hold no locks; the [`SimulationService`]
//! registry hands out sessions by id to presentation shells.

mod scoring;
mod session;
mod simulation_model;
mod simulation_service;
mod simulation_traits;

#[cfg(test)]
mod simulation_service_tests;

pub use scoring::score;
pub use session::QuizSession;
pub use simulation_model::{
    AdvanceOutcome, AnswerFeedback, AnswerOutcome, QuizPhase, QuizProgress, QuizSummary,
    SimulationError, SimulationLaunch,
};
pub use simulation_service::SimulationService;
pub use simulation_traits::SimulationServiceTrait;
