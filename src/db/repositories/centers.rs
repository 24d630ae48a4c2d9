use diesel::prelude::*;
use uuid::Uuid;

use crate::db::enums::PitchStatus;
use crate::db::models::center::{Center, Pitch};

pub struct CentersRepo;

impl CentersRepo {
    /// Centers with their pitches; a center with no pitches still appears.
    pub fn list_with_pitches(
        conn: &mut PgConnection,
    ) -> Result<Vec<(Center, Option<Pitch>)>, diesel::result::Error> {
        use crate::schema::{centers, pitches};
        centers::table
            .left_join(pitches::table)
            .order((centers::name.asc(), centers::id.asc(), pitches::id.asc()))
            .select((Center::as_select(), Option::<Pitch>::as_select()))
            .load::<(Center, Option<Pitch>)>(conn)
    }
}

pub struct PitchesRepo;

impl PitchesRepo {
    /// Schedulable pitches, ascending by id. The draw scans them in this
    /// order.
    pub fn active_ids(conn: &mut PgConnection) -> Result<Vec<Uuid>, diesel::result::Error> {
        use crate::schema::pitches::dsl::*;
        pitches
            .filter(status.eq(PitchStatus::Active))
            .order(id.asc())
            .select(id)
            .load::<Uuid>(conn)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        pitch_id: Uuid,
    ) -> Result<Option<Pitch>, diesel::result::Error> {
        use crate::schema::pitches::dsl::*;
        pitches
            .filter(id.eq(pitch_id))
            .first::<Pitch>(conn)
            .optional()
    }

    pub fn center_of(
        conn: &mut PgConnection,
        pitch: Uuid,
    ) -> Result<Option<Center>, diesel::result::Error> {
        use crate::schema::{centers, pitches};
        pitches::table
            .inner_join(centers::table)
            .filter(pitches::id.eq(pitch))
            .select(Center::as_select())
            .first::<Center>(conn)
            .optional()
    }
}
