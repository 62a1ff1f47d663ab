//! Achievements module - one-time badges earned across quiz runs.
//!
//! The only durable state in the engine: a small set of write-once flags
//! keyed by fixed achievement ids, persisted by the storage layer.

mod achievements_model;
mod achievements_service;
mod achievements_traits;

pub use achievements_model::{known_achievements, Achievement, AchievementError, EarnedAchievement};
pub use achievements_service::AchievementService;
pub use achievements_traits::{AchievementRepositoryTrait, AchievementServiceTrait};
