use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;

use crate::achievements::achievements_model::{
    known_achievements, Achievement, AchievementError, EarnedAchievement,
};
use crate::achievements::achievements_traits::{
    AchievementRepositoryTrait, AchievementServiceTrait,
};
use crate::errors::Result;

pub struct AchievementService {
    achievement_repository: Arc<dyn AchievementRepositoryTrait>,
    known_ids: HashSet<String>,
}

impl AchievementService {
    pub fn new(achievement_repository: Arc<dyn AchievementRepositoryTrait>) -> Self {
        let known_ids = known_achievements().into_iter().map(|a| a.id).collect();
        AchievementService {
            achievement_repository,
            known_ids,
        }
    }

    fn validate_id(&self, achievement_id: &str) -> Result<()> {
        if self.known_ids.contains(achievement_id) {
            Ok(())
        } else {
            Err(AchievementError::UnknownAchievement(achievement_id.to_string()).into())
        }
    }
}

#[async_trait]
impl AchievementServiceTrait for AchievementService {
    fn has_achievement(&self, achievement_id: &str) -> Result<bool> {
        self.validate_id(achievement_id)?;
        self.achievement_repository.is_earned(achievement_id)
    }

    async fn grant_achievement(&self, achievement_id: &str) -> Result<Option<EarnedAchievement>> {
        self.validate_id(achievement_id)?;

        if self.achievement_repository.is_earned(achievement_id)? {
            debug!("Achievement {} already earned, skipping grant", achievement_id);
            return Ok(None);
        }

        let earned = self
            .achievement_repository
            .mark_earned(achievement_id, Utc::now())
            .await?;
        debug!("Granted achievement {}", achievement_id);
        Ok(Some(earned))
    }

    fn list_achievements(&self) -> Vec<Achievement> {
        known_achievements()
    }

    fn earned_achievements(&self) -> Result<Vec<EarnedAchievement>> {
        self.achievement_repository.list_earned()
    }
}
