use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::model::AchievementRowDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::achievements::dsl::*;
use scamguard_core::achievements::{AchievementRepositoryTrait, EarnedAchievement};
use scamguard_core::errors::Result;

pub struct AchievementRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl AchievementRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        AchievementRepository { pool, writer }
    }
}

#[async_trait]
impl AchievementRepositoryTrait for AchievementRepository {
    fn is_earned(&self, achievement_id_param: &str) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;
        let count: i64 = achievements
            .filter(achievement_id.eq(achievement_id_param))
            .count()
            .get_result(&mut conn)
            .into_core()?;
        Ok(count > 0)
    }

    fn list_earned(&self) -> Result<Vec<EarnedAchievement>> {
        let mut conn = get_connection(&self.pool)?;
        let rows: Vec<AchievementRowDB> = achievements
            .order(earned_at.asc())
            .load(&mut conn)
            .into_core()?;
        rows.into_iter().map(AchievementRowDB::into_domain).collect()
    }

    async fn mark_earned(
        &self,
        achievement_id_param: &str,
        earned_at_param: DateTime<Utc>,
    ) -> Result<EarnedAchievement> {
        let row = AchievementRowDB {
            achievement_id: achievement_id_param.to_string(),
            earned_at: earned_at_param.to_rfc3339(),
        };
        let key = achievement_id_param.to_string();

        // Write-once: an existing row wins and keeps its original timestamp.
        self.writer
            .exec(move |conn| {
                diesel::insert_or_ignore_into(achievements)
                    .values(&row)
                    .execute(conn)
                    .into_core()?;

                let stored: AchievementRowDB = achievements
                    .filter(achievement_id.eq(&key))
                    .first(conn)
                    .into_core()?;
                stored.into_domain()
            })
            .await
    }
}
