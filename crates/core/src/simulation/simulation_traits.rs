use async_trait::async_trait;

use crate::errors::Result;
use crate::scenarios::SimulationKind;
use crate::simulation::simulation_model::{AdvanceOutcome, AnswerOutcome, SimulationLaunch};

/// Launch contract between presentation shells and the simulation engine.
///
/// Shells call these operations in response to user gestures and render
/// whatever scenario content they are handed, without interpreting it.
/// Closing a simulation simply discards its session state; there are no
/// further cleanup obligations.
#[async_trait]
pub trait SimulationServiceTrait: Send + Sync {
    /// Launches a new quiz run for a simulation kind.
    fn start_simulation(&self, kind: SimulationKind) -> Result<SimulationLaunch>;

    /// Submits the user's scam/legitimate judgement for the active scenario.
    async fn submit_answer(&self, session_id: &str, choice: bool) -> Result<AnswerOutcome>;

    /// Moves past the feedback view to the next scenario or to completion.
    async fn advance(&self, session_id: &str) -> Result<AdvanceOutcome>;

    /// Resets a run to its first scenario with a cleared answer log.
    fn restart(&self, session_id: &str) -> Result<SimulationLaunch>;

    /// Discards a session. Idempotent: closing an unknown id is a no-op.
    fn close_simulation(&self, session_id: &str);

    /// Number of sessions currently live.
    fn active_session_count(&self) -> usize;
}
