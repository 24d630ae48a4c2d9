use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// Team models
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone)]
#[diesel(table_name = crate::schema::teams)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub short_name: String,
    pub logo_url: Option<String>,
    pub is_custom: bool,
    pub created_by: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::teams)]
pub struct NewTeam {
    pub name: String,
    pub short_name: String,
    pub logo_url: Option<String>,
    pub is_custom: bool,
    pub created_by: Uuid,
}

// Team API DTOs
#[derive(Queryable, Serialize, Clone)]
pub struct TeamBasicInfo {
    pub id: Uuid,
    pub name: String,
    pub short_name: String,
    pub logo_url: Option<String>,
}

impl From<Team> for TeamBasicInfo {
    fn from(team: Team) -> Self {
        Self {
            id: team.id,
            name: team.name,
            short_name: team.short_name,
            logo_url: team.logo_url,
        }
    }
}

#[derive(Deserialize, Validate)]
pub struct CreateTeamRequest {
    #[validate(length(min = 1, max = 255, message = "Team name must be between 1 and 255 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 10, message = "Team short name must be between 1 and 10 characters"))]
    pub short_name: String,
    pub logo_url: Option<String>,
    pub is_custom: Option<bool>,
    pub created_by: Uuid,
}

#[derive(Deserialize, Validate)]
pub struct UpdateTeamRequest {
    #[validate(length(min = 1, max = 255, message = "Team name must be between 1 and 255 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 10, message = "Team short name must be between 1 and 10 characters"))]
    pub short_name: Option<String>,
    pub logo_url: Option<String>,
}

#[derive(Deserialize)]
pub struct TeamQueryParams {
    pub created_by: Option<Uuid>,
    pub custom: Option<bool>,
}
