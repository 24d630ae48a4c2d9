use diesel::prelude::*;
use uuid::Uuid;

use crate::db::enums::MatchStatus;
use crate::db::models::matches::{Match, NewMatch};

pub struct MatchesRepo;

impl MatchesRepo {
    pub fn insert(
        conn: &mut PgConnection,
        new_match: &NewMatch,
    ) -> Result<Match, diesel::result::Error> {
        diesel::insert_into(crate::schema::matches::table)
            .values(new_match)
            .get_result(conn)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        match_id: Uuid,
    ) -> Result<Option<Match>, diesel::result::Error> {
        use crate::schema::matches::dsl::*;
        matches
            .filter(id.eq(match_id))
            .first::<Match>(conn)
            .optional()
    }

    pub fn set_status(
        conn: &mut PgConnection,
        match_id: Uuid,
        new_status: MatchStatus,
    ) -> Result<Match, diesel::result::Error> {
        use crate::schema::matches::dsl::*;
        diesel::update(matches.filter(id.eq(match_id)))
            .set(status.eq(new_status))
            .get_result(conn)
    }

    pub fn set_score(
        conn: &mut PgConnection,
        match_id: Uuid,
        score_a: i32,
        score_b: i32,
        new_status: MatchStatus,
    ) -> Result<Match, diesel::result::Error> {
        use crate::schema::matches::dsl::*;
        diesel::update(matches.filter(id.eq(match_id)))
            .set((
                team_a_score.eq(score_a),
                team_b_score.eq(score_b),
                status.eq(new_status),
            ))
            .get_result(conn)
    }

    /// Ids of matches where either side is one of the given teams.
    pub fn ids_by_either_team(
        conn: &mut PgConnection,
        team_ids: &[Uuid],
    ) -> Result<Vec<Uuid>, diesel::result::Error> {
        use crate::schema::matches::dsl::*;
        matches
            .filter(
                team_a_id
                    .eq_any(team_ids)
                    .or(team_b_id.eq_any(team_ids)),
            )
            .select(id)
            .load::<Uuid>(conn)
    }

    pub fn delete_by_ids(
        conn: &mut PgConnection,
        match_ids: &[Uuid],
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::matches::dsl::*;
        diesel::delete(matches.filter(id.eq_any(match_ids))).execute(conn)
    }

    /// Matches whose both sides belong to the given team set, with their
    /// booking, ordered by kick-off time.
    pub fn list_with_bookings(
        conn: &mut PgConnection,
        team_ids: &[Uuid],
    ) -> Result<Vec<(Match, (Uuid, chrono::NaiveDateTime))>, diesel::result::Error> {
        use crate::schema::{bookings, matches};
        matches::table
            .inner_join(bookings::table.on(bookings::match_id.eq(matches::id.nullable())))
            .filter(matches::team_a_id.eq_any(team_ids))
            .filter(matches::team_b_id.eq_any(team_ids))
            .order(bookings::date_time.asc())
            .select((
                Match::as_select(),
                (bookings::pitch_id, bookings::date_time),
            ))
            .load::<(Match, (Uuid, chrono::NaiveDateTime))>(conn)
    }
}
