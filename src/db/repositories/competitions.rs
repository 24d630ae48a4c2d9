use diesel::prelude::*;
use uuid::Uuid;

use crate::db::enums::CompetitionStatus;
use crate::db::models::competition::{Competition, Enrollment, NewCompetition, NewEnrollment};
use crate::db::models::team::TeamBasicInfo;

pub struct CompetitionsRepo;

impl CompetitionsRepo {
    pub fn insert(
        conn: &mut PgConnection,
        new_competition: &NewCompetition,
    ) -> Result<Competition, diesel::result::Error> {
        diesel::insert_into(crate::schema::competitions::table)
            .values(new_competition)
            .get_result(conn)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        competition_id: Uuid,
    ) -> Result<Option<Competition>, diesel::result::Error> {
        use crate::schema::competitions::dsl::*;
        competitions
            .filter(id.eq(competition_id))
            .first::<Competition>(conn)
            .optional()
    }

    /// Row-locked read. Only meaningful inside a transaction; concurrent
    /// callers block here until the holder commits or rolls back.
    pub fn lock_by_id(
        conn: &mut PgConnection,
        competition_id: Uuid,
    ) -> Result<Option<Competition>, diesel::result::Error> {
        use crate::schema::competitions::dsl::*;
        competitions
            .filter(id.eq(competition_id))
            .for_update()
            .first::<Competition>(conn)
            .optional()
    }

    pub fn list_all(conn: &mut PgConnection) -> Result<Vec<Competition>, diesel::result::Error> {
        use crate::schema::competitions::dsl::*;
        competitions
            .order(created_at.desc())
            .load::<Competition>(conn)
    }

    pub fn list_by_creator(
        conn: &mut PgConnection,
        creator: Uuid,
    ) -> Result<Vec<Competition>, diesel::result::Error> {
        use crate::schema::competitions::dsl::*;
        competitions
            .filter(created_by.eq(creator))
            .order(created_at.desc())
            .load::<Competition>(conn)
    }

    pub fn update_fields(
        conn: &mut PgConnection,
        competition_id: Uuid,
        name: Option<&str>,
        start_date: Option<chrono::NaiveDate>,
        end_date: Option<chrono::NaiveDate>,
        status: Option<CompetitionStatus>,
        logo_url: Option<&str>,
    ) -> Result<Competition, diesel::result::Error> {
        use crate::schema::competitions::dsl as c;

        // Update each field individually
        if let Some(name_val) = name {
            diesel::update(c::competitions.filter(c::id.eq(competition_id)))
                .set(c::name.eq(name_val))
                .execute(conn)?;
        }
        if let Some(start) = start_date {
            diesel::update(c::competitions.filter(c::id.eq(competition_id)))
                .set(c::start_date.eq(start))
                .execute(conn)?;
        }
        if let Some(end) = end_date {
            diesel::update(c::competitions.filter(c::id.eq(competition_id)))
                .set(c::end_date.eq(end))
                .execute(conn)?;
        }
        if let Some(status_val) = status {
            diesel::update(c::competitions.filter(c::id.eq(competition_id)))
                .set(c::status.eq(status_val))
                .execute(conn)?;
        }
        if let Some(logo) = logo_url {
            diesel::update(c::competitions.filter(c::id.eq(competition_id)))
                .set(c::logo_url.eq(logo))
                .execute(conn)?;
        }

        // Return the updated competition
        c::competitions
            .filter(c::id.eq(competition_id))
            .first::<Competition>(conn)
    }

    pub fn delete_by_id(
        conn: &mut PgConnection,
        competition_id: Uuid,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::competitions::dsl::*;
        diesel::delete(competitions.filter(id.eq(competition_id))).execute(conn)
    }

    pub fn set_draw_flag(
        conn: &mut PgConnection,
        competition_id: Uuid,
        flag: bool,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::competitions::dsl::*;
        diesel::update(competitions.filter(id.eq(competition_id)))
            .set(is_draw.eq(flag))
            .execute(conn)
    }

    /// Enrolled team ids in enrollment order; this order drives fixture
    /// generation.
    pub fn enrolled_team_ids(
        conn: &mut PgConnection,
        comp_id: Uuid,
    ) -> Result<Vec<Uuid>, diesel::result::Error> {
        use crate::schema::competition_teams::dsl::*;
        competition_teams
            .filter(competition_id.eq(comp_id))
            .order((joined_at.asc(), team_id.asc()))
            .select(team_id)
            .load::<Uuid>(conn)
    }

    pub fn enrollment_count(
        conn: &mut PgConnection,
        comp_id: Uuid,
    ) -> Result<i64, diesel::result::Error> {
        use crate::schema::competition_teams::dsl::*;
        competition_teams
            .filter(competition_id.eq(comp_id))
            .count()
            .get_result(conn)
    }

    pub fn is_enrolled(
        conn: &mut PgConnection,
        comp_id: Uuid,
        team: Uuid,
    ) -> Result<bool, diesel::result::Error> {
        use crate::schema::competition_teams::dsl::*;
        competition_teams
            .find((comp_id, team))
            .first::<Enrollment>(conn)
            .optional()
            .map(|row| row.is_some())
    }

    pub fn add_team(
        conn: &mut PgConnection,
        enrollment: &NewEnrollment,
    ) -> Result<Enrollment, diesel::result::Error> {
        diesel::insert_into(crate::schema::competition_teams::table)
            .values(enrollment)
            .get_result(conn)
    }

    pub fn remove_team(
        conn: &mut PgConnection,
        comp_id: Uuid,
        team: Uuid,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::competition_teams::dsl::*;
        diesel::delete(
            competition_teams
                .filter(competition_id.eq(comp_id))
                .filter(team_id.eq(team)),
        )
        .execute(conn)
    }

    pub fn enrolled_teams(
        conn: &mut PgConnection,
        comp_id: Uuid,
    ) -> Result<Vec<TeamBasicInfo>, diesel::result::Error> {
        use crate::schema::{competition_teams, teams};
        competition_teams::table
            .inner_join(teams::table.on(competition_teams::team_id.eq(teams::id)))
            .filter(competition_teams::competition_id.eq(comp_id))
            .order((
                competition_teams::joined_at.asc(),
                competition_teams::team_id.asc(),
            ))
            .select((teams::id, teams::name, teams::short_name, teams::logo_url))
            .load::<TeamBasicInfo>(conn)
    }

    /// Custom teams not yet enrolled in this competition.
    pub fn available_custom_teams(
        conn: &mut PgConnection,
        comp_id: Uuid,
    ) -> Result<Vec<TeamBasicInfo>, diesel::result::Error> {
        use crate::schema::{competition_teams, teams};
        let enrolled = competition_teams::table
            .filter(competition_teams::competition_id.eq(comp_id))
            .select(competition_teams::team_id);
        teams::table
            .filter(teams::is_custom.eq(true))
            .filter(teams::id.ne_all(enrolled))
            .order(teams::name.asc())
            .select((teams::id, teams::name, teams::short_name, teams::logo_url))
            .load::<TeamBasicInfo>(conn)
    }
}
