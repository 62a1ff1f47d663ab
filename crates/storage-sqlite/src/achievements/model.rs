//! Database model for earned achievements.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use scamguard_core::achievements::EarnedAchievement;
use scamguard_core::errors::{DatabaseError, Error};

/// Database row for a write-once achievement flag.
#[derive(Queryable, Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::achievements)]
#[serde(rename_all = "camelCase")]
pub struct AchievementRowDB {
    pub achievement_id: String,
    /// RFC 3339 timestamp of the first grant.
    pub earned_at: String,
}

impl AchievementRowDB {
    pub fn into_domain(self) -> Result<EarnedAchievement, Error> {
        let earned_at = DateTime::parse_from_rfc3339(&self.earned_at)
            .map_err(|e| {
                Error::Database(DatabaseError::Internal(format!(
                    "invalid earned_at timestamp for {}: {}",
                    self.achievement_id, e
                )))
            })?
            .with_timezone(&Utc);
        Ok(EarnedAchievement {
            achievement_id: self.achievement_id,
            earned_at,
        })
    }
}
