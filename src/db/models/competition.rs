use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::db::enums::CompetitionStatus;
use crate::db::models::team::TeamBasicInfo;

// Competition models
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone)]
#[diesel(table_name = crate::schema::competitions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Competition {
    pub id: Uuid,
    pub name: String,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub status: CompetitionStatus,
    pub logo_url: Option<String>,
    pub is_draw: bool,
    pub created_by: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::competitions)]
pub struct NewCompetition {
    pub name: String,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub status: CompetitionStatus,
    pub logo_url: Option<String>,
    pub created_by: Uuid,
}

// Enrollment models (competition_teams)
#[derive(Queryable, Selectable, Serialize, Clone)]
#[diesel(table_name = crate::schema::competition_teams)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Enrollment {
    pub competition_id: Uuid,
    pub team_id: Uuid,
    pub joined_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::competition_teams)]
pub struct NewEnrollment {
    pub competition_id: Uuid,
    pub team_id: Uuid,
}

// Competition API DTOs
#[derive(Serialize)]
pub struct CompetitionDetail {
    pub id: Uuid,
    pub name: String,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub status: CompetitionStatus,
    pub logo_url: Option<String>,
    pub is_draw: bool,
    pub created_by: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub teams: Vec<TeamBasicInfo>,
}

#[derive(Deserialize, Validate)]
pub struct CreateCompetitionRequest {
    #[validate(length(min = 1, max = 255, message = "Competition name must be between 1 and 255 characters"))]
    pub name: String,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub status: Option<String>,
    pub logo_url: Option<String>,
    pub created_by: Uuid,
}

#[derive(Deserialize, Validate)]
pub struct UpdateCompetitionRequest {
    #[validate(length(min = 1, max = 255, message = "Competition name must be between 1 and 255 characters"))]
    pub name: Option<String>,
    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
    pub status: Option<String>,
    pub logo_url: Option<String>,
}

#[derive(Deserialize)]
pub struct CompetitionQueryParams {
    pub created_by: Option<Uuid>,
}

#[derive(Deserialize)]
pub struct EnrollTeamRequest {
    pub team_id: Uuid,
}
