use diesel::prelude::*;
use serde::Serialize;
use uuid::Uuid;

use crate::db::enums::PitchStatus;

// Center models
#[derive(Queryable, Selectable, Serialize, Clone)]
#[diesel(table_name = crate::schema::centers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Center {
    pub id: Uuid,
    pub name: String,
    pub address: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Queryable, Selectable, Serialize, Clone)]
#[diesel(table_name = crate::schema::pitches)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Pitch {
    pub id: Uuid,
    pub center_id: Uuid,
    pub kind: String,
    pub surface: Option<String>,
    pub status: PitchStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// Center API DTOs
#[derive(Serialize, Clone)]
pub struct PitchSummary {
    pub id: Uuid,
    pub kind: String,
    pub surface: Option<String>,
    pub status: PitchStatus,
}

#[derive(Serialize)]
pub struct CenterWithPitches {
    pub id: Uuid,
    pub name: String,
    pub address: Option<String>,
    pub pitches: Vec<PitchSummary>,
}
