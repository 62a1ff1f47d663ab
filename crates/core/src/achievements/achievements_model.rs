//! Achievements domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{ACHIEVEMENT_FIRST_CORRECT_ANSWER, ACHIEVEMENT_FIRST_SIMULATION_COMPLETED};
use crate::scenarios::SimulationKind;

#[derive(Error, Debug)]
pub enum AchievementError {
    #[error("Unknown achievement id: {0}")]
    UnknownAchievement(String),
}

/// A badge a user can earn exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// A badge the user has earned, with the moment it was first granted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarnedAchievement {
    pub achievement_id: String,
    pub earned_at: DateTime<Utc>,
}

/// The static registry of badges the product knows about.
///
/// One global badge for the first correct answer, one for the first
/// completed run, and one expert badge per simulation category for a
/// perfect score.
pub fn known_achievements() -> Vec<Achievement> {
    let mut achievements = vec![
        Achievement {
            id: ACHIEVEMENT_FIRST_CORRECT_ANSWER.to_string(),
            name: "Sharp Eye".to_string(),
            description: "Spotted your first scenario correctly".to_string(),
        },
        Achievement {
            id: ACHIEVEMENT_FIRST_SIMULATION_COMPLETED.to_string(),
            name: "First Steps".to_string(),
            description: "Completed your first fraud simulation".to_string(),
        },
    ];

    for kind in SimulationKind::ALL {
        achievements.push(Achievement {
            id: kind.expert_achievement_id(),
            name: format!("{} Expert", capitalize(kind.as_str())),
            description: format!("Scored 100% in a {kind} simulation"),
        });
    }

    achievements
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_has_unique_ids() {
        let achievements = known_achievements();
        let mut ids: Vec<&str> = achievements.iter().map(|a| a.id.as_str()).collect();
        ids.sort();
        let before = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn registry_covers_every_simulation_kind() {
        let achievements = known_achievements();
        for kind in SimulationKind::ALL {
            let id = kind.expert_achievement_id();
            assert!(achievements.iter().any(|a| a.id == id), "missing {id}");
        }
    }
}
