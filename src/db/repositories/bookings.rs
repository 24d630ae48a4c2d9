use diesel::prelude::*;
use uuid::Uuid;

use crate::db::models::booking::{Booking, NewBooking};

pub struct BookingsRepo;

impl BookingsRepo {
    pub fn insert(
        conn: &mut PgConnection,
        new_booking: &NewBooking,
    ) -> Result<Booking, diesel::result::Error> {
        diesel::insert_into(crate::schema::bookings::table)
            .values(new_booking)
            .get_result(conn)
    }

    /// Every reserved (pitch, date-time) slot, across all pitches. Seeds the
    /// draw planner's view of the grid.
    pub fn occupied_slots(
        conn: &mut PgConnection,
    ) -> Result<Vec<(Uuid, chrono::NaiveDateTime)>, diesel::result::Error> {
        use crate::schema::bookings::dsl::*;
        bookings
            .select((pitch_id, date_time))
            .load::<(Uuid, chrono::NaiveDateTime)>(conn)
    }

    pub fn slot_taken(
        conn: &mut PgConnection,
        pitch: Uuid,
        at: chrono::NaiveDateTime,
    ) -> Result<bool, diesel::result::Error> {
        use crate::schema::bookings::dsl::*;
        bookings
            .filter(pitch_id.eq(pitch))
            .filter(date_time.eq(at))
            .select(id)
            .first::<Uuid>(conn)
            .optional()
            .map(|row| row.is_some())
    }

    pub fn delete_by_match_id(
        conn: &mut PgConnection,
        match_: Uuid,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::bookings::dsl::*;
        diesel::delete(bookings.filter(match_id.eq(Some(match_)))).execute(conn)
    }

    pub fn delete_by_match_ids(
        conn: &mut PgConnection,
        match_ids: &[Uuid],
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::bookings::dsl::*;
        let keys: Vec<Option<Uuid>> = match_ids.iter().copied().map(Some).collect();
        diesel::delete(bookings.filter(match_id.eq_any(keys))).execute(conn)
    }

    pub fn list_by_pitch(
        conn: &mut PgConnection,
        pitch: Uuid,
    ) -> Result<Vec<Booking>, diesel::result::Error> {
        use crate::schema::bookings::dsl::*;
        bookings
            .filter(pitch_id.eq(pitch))
            .order(date_time.asc())
            .load::<Booking>(conn)
    }

    pub fn find_by_match_id(
        conn: &mut PgConnection,
        match_: Uuid,
    ) -> Result<Option<Booking>, diesel::result::Error> {
        use crate::schema::bookings::dsl::*;
        bookings
            .filter(match_id.eq(Some(match_)))
            .first::<Booking>(conn)
            .optional()
    }
}
