use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::achievements::achievements_model::{Achievement, EarnedAchievement};
use crate::errors::Result;

/// Trait for achievement persistence.
///
/// Implementations store one row per earned badge under its fixed id.
/// `mark_earned` must be write-once: marking an already-earned badge keeps
/// the original timestamp.
#[async_trait]
pub trait AchievementRepositoryTrait: Send + Sync {
    fn is_earned(&self, achievement_id: &str) -> Result<bool>;
    fn list_earned(&self) -> Result<Vec<EarnedAchievement>>;
    async fn mark_earned(
        &self,
        achievement_id: &str,
        earned_at: DateTime<Utc>,
    ) -> Result<EarnedAchievement>;
}

/// Trait for achievement service operations.
#[async_trait]
pub trait AchievementServiceTrait: Send + Sync {
    fn has_achievement(&self, achievement_id: &str) -> Result<bool>;

    /// Grants a badge if it has not been earned yet.
    ///
    /// Returns `Some` with the earned record on first grant, `None` when the
    /// badge was already held.
    async fn grant_achievement(&self, achievement_id: &str) -> Result<Option<EarnedAchievement>>;

    /// The static registry of badges the product knows about.
    fn list_achievements(&self) -> Vec<Achievement>;

    fn earned_achievements(&self) -> Result<Vec<EarnedAchievement>>;
}
