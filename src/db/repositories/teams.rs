use diesel::prelude::*;
use uuid::Uuid;

use crate::db::models::team::{NewTeam, Team};

pub struct TeamsRepo;

impl TeamsRepo {
    pub fn insert(
        conn: &mut PgConnection,
        new_team: &NewTeam,
    ) -> Result<Team, diesel::result::Error> {
        diesel::insert_into(crate::schema::teams::table)
            .values(new_team)
            .get_result(conn)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        team_id: Uuid,
    ) -> Result<Option<Team>, diesel::result::Error> {
        use crate::schema::teams::dsl::*;
        teams.filter(id.eq(team_id)).first::<Team>(conn).optional()
    }

    pub fn name_exists(
        conn: &mut PgConnection,
        team_name: &str,
    ) -> Result<bool, diesel::result::Error> {
        use crate::schema::teams::dsl::*;
        teams
            .filter(name.eq(team_name))
            .select(id)
            .first::<Uuid>(conn)
            .optional()
            .map(|row| row.is_some())
    }

    /// Name conflict check for renames; the team's own row does not count.
    pub fn name_exists_excluding(
        conn: &mut PgConnection,
        team_name: &str,
        team_id: Uuid,
    ) -> Result<bool, diesel::result::Error> {
        use crate::schema::teams::dsl::*;
        teams
            .filter(name.eq(team_name))
            .filter(id.ne(team_id))
            .select(id)
            .first::<Uuid>(conn)
            .optional()
            .map(|row| row.is_some())
    }

    pub fn list(
        conn: &mut PgConnection,
        creator: Option<Uuid>,
        custom: Option<bool>,
    ) -> Result<Vec<Team>, diesel::result::Error> {
        use crate::schema::teams::dsl::*;
        let mut query = teams.into_boxed();
        if let Some(creator_id) = creator {
            query = query.filter(created_by.eq(creator_id));
        }
        if let Some(custom_flag) = custom {
            query = query.filter(is_custom.eq(custom_flag));
        }
        query.order(name.asc()).load::<Team>(conn)
    }

    pub fn update_fields(
        conn: &mut PgConnection,
        team_id: Uuid,
        name: Option<&str>,
        short_name: Option<&str>,
        logo_url: Option<&str>,
    ) -> Result<Team, diesel::result::Error> {
        use crate::schema::teams::dsl as t;

        // Update each field individually
        if let Some(name_val) = name {
            diesel::update(t::teams.filter(t::id.eq(team_id)))
                .set(t::name.eq(name_val))
                .execute(conn)?;
        }
        if let Some(short) = short_name {
            diesel::update(t::teams.filter(t::id.eq(team_id)))
                .set(t::short_name.eq(short))
                .execute(conn)?;
        }
        if let Some(logo) = logo_url {
            diesel::update(t::teams.filter(t::id.eq(team_id)))
                .set(t::logo_url.eq(logo))
                .execute(conn)?;
        }

        // Return the updated team
        t::teams.filter(t::id.eq(team_id)).first::<Team>(conn)
    }

    pub fn delete_by_id(
        conn: &mut PgConnection,
        team_id: Uuid,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::teams::dsl::*;
        diesel::delete(teams.filter(id.eq(team_id))).execute(conn)
    }

    pub fn names_by_ids(
        conn: &mut PgConnection,
        team_ids: &[Uuid],
    ) -> Result<Vec<(Uuid, String)>, diesel::result::Error> {
        use crate::schema::teams::dsl::*;
        teams
            .filter(id.eq_any(team_ids))
            .select((id, name))
            .load::<(Uuid, String)>(conn)
    }
}
