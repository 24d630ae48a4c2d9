use diesel::prelude::*;
use serde::Serialize;
use uuid::Uuid;

// Booking models
#[derive(Queryable, Selectable, Serialize, Clone)]
#[diesel(table_name = crate::schema::bookings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Booking {
    pub id: Uuid,
    pub pitch_id: Uuid,
    pub date_time: chrono::NaiveDateTime,
    pub match_id: Option<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::bookings)]
pub struct NewBooking {
    pub pitch_id: Uuid,
    pub date_time: chrono::NaiveDateTime,
    pub match_id: Option<Uuid>,
}

// Booking API DTOs
#[derive(Serialize, Clone)]
pub struct BookingInfo {
    pub pitch_id: Uuid,
    pub date_time: chrono::NaiveDateTime,
}
