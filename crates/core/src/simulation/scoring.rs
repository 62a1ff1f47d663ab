//! Quiz scoring.

use crate::constants::MAX_SCORE;
use crate::simulation::SimulationError;

/// Scores an answer log as an integer percentage.
///
/// Defined as `round(100 * correct / total)`. An empty log is an error
/// input: the session state machine never produces one at completion, but
/// callers must guard it explicitly rather than assume a default.
pub fn score(answer_log: &[bool]) -> std::result::Result<u8, SimulationError> {
    if answer_log.is_empty() {
        return Err(SimulationError::EmptyAnswerLog);
    }

    let correct = answer_log.iter().filter(|&&c| c).count();
    let pct = (f64::from(MAX_SCORE) * correct as f64 / answer_log.len() as f64).round();
    Ok(pct as u8)
}
