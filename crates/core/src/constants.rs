/// Score (percent) required to earn a category expert badge
pub const EXPERT_SCORE_THRESHOLD: u8 = 100;

/// Maximum score a quiz run can produce
pub const MAX_SCORE: u8 = 100;

/// Achievement granted on the first correct answer across all simulations
pub const ACHIEVEMENT_FIRST_CORRECT_ANSWER: &str = "first-correct-answer";

/// Achievement granted on the first completed simulation run
pub const ACHIEVEMENT_FIRST_SIMULATION_COMPLETED: &str = "first-simulation-completed";
