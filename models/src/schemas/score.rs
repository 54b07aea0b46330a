use chrono::{DateTime, FixedOffset};
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domains::scores;

/// One leaderboard row. Rank is the position in the returned list.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, FromQueryResult, ToSchema)]
pub struct LeaderboardEntry {
    pub username: String,
    pub score: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, ToSchema)]
pub struct ScoreSchema {
    pub game_name: String,
    pub score: i64,
    pub played_at: DateTime<FixedOffset>,
}

impl From<scores::Model> for ScoreSchema {
    fn from(record: scores::Model) -> Self {
        Self {
            game_name: record.game_name.id(),
            score: record.score,
            played_at: record.played_at,
        }
    }
}
