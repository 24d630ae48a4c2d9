use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::db::enums::MatchStatus;
use crate::db::models::booking::BookingInfo;
use crate::db::models::team::TeamBasicInfo;

// Match models
#[derive(Queryable, Selectable, Serialize, Clone)]
#[diesel(table_name = crate::schema::matches)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Match {
    pub id: Uuid,
    pub team_a_id: Uuid,
    pub team_b_id: Uuid,
    pub status: MatchStatus,
    pub team_a_score: Option<i32>,
    pub team_b_score: Option<i32>,
    pub created_by: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::matches)]
pub struct NewMatch {
    pub team_a_id: Uuid,
    pub team_b_id: Uuid,
    pub status: MatchStatus,
    pub created_by: Uuid,
}

// Match API DTOs
#[derive(Serialize)]
pub struct MatchDetail {
    pub id: Uuid,
    pub status: MatchStatus,
    pub team_a: TeamBasicInfo,
    pub team_b: TeamBasicInfo,
    pub team_a_score: Option<i32>,
    pub team_b_score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking: Option<BookingInfo>,
    pub created_by: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// One row of a competition's fixture list, ordered by kick-off time.
#[derive(Serialize)]
pub struct CompetitionMatch {
    pub id: Uuid,
    pub team_a: String,
    pub team_b: String,
    pub status: MatchStatus,
    pub pitch_id: Uuid,
    pub date_time: chrono::NaiveDateTime,
}

/// A fixture placed by the draw, as reported back to the caller.
#[derive(Serialize)]
pub struct ScheduledMatch {
    pub id: Uuid,
    pub date: chrono::NaiveDate,
    pub team_a_id: Uuid,
    pub team_b_id: Uuid,
}

#[derive(Serialize)]
pub struct DrawOutcome {
    pub matches: Vec<ScheduledMatch>,
}

#[derive(Deserialize, Validate)]
pub struct CreateMatchRequest {
    pub team_a_id: Uuid,
    pub team_b_id: Uuid,
    pub pitch_id: Uuid,
    pub date_time: chrono::NaiveDateTime,
    pub created_by: Uuid,
}

#[derive(Deserialize)]
pub struct UpdateMatchStatusRequest {
    pub status: String,
}

#[derive(Deserialize, Validate)]
pub struct UpdateMatchScoreRequest {
    #[validate(range(min = 0, message = "Score cannot be negative"))]
    pub team_a_score: i32,
    #[validate(range(min = 0, message = "Score cannot be negative"))]
    pub team_b_score: i32,
}
