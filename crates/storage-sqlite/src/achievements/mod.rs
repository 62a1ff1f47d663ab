//! SQLite storage implementation for achievements.

mod model;
mod repository;

pub use model::AchievementRowDB;
pub use repository::AchievementRepository;

// Re-export trait from core for convenience
pub use scamguard_core::achievements::AchievementRepositoryTrait;
