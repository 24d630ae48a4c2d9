use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    db::models::api::error_codes,
    db::models::team::{CreateTeamRequest, NewTeam, Team, UpdateTeamRequest},
    db::repositories::teams::TeamsRepo,
    error::AppError,
    validation,
};

/// Stock badge applied when a team is created without a logo.
pub const DEFAULT_TEAM_LOGO: &str =
    "https://espndeportes.espn.com/i/teamlogos/soccer/500/default-team-logo-500.png?h=100&w=100";

pub struct TeamsService;

impl TeamsService {
    pub fn create(conn: &mut PgConnection, req: &CreateTeamRequest) -> Result<Team, AppError> {
        validation::team::validate_name(&req.name)?;
        validation::team::validate_short_name(&req.short_name)?;

        if TeamsRepo::name_exists(conn, req.name.trim())? {
            return Err(AppError::conflict_with_code(
                "Team name already in use.",
                Some("name".to_string()),
                error_codes::TEAM_NAME_EXISTS,
            ));
        }

        let new_team = NewTeam {
            name: req.name.trim().to_string(),
            short_name: req.short_name.trim().to_string(),
            logo_url: Some(
                req.logo_url
                    .clone()
                    .unwrap_or_else(|| DEFAULT_TEAM_LOGO.to_string()),
            ),
            is_custom: req.is_custom.unwrap_or(false),
            created_by: req.created_by,
        };
        TeamsRepo::insert(conn, &new_team).map_err(AppError::from)
    }

    pub fn get(conn: &mut PgConnection, team_id: Uuid) -> Result<Team, AppError> {
        TeamsRepo::find_by_id(conn, team_id)?
            .ok_or_else(|| AppError::not_found("Team not found."))
    }

    pub fn list(
        conn: &mut PgConnection,
        created_by: Option<Uuid>,
        custom: Option<bool>,
    ) -> Result<Vec<Team>, AppError> {
        TeamsRepo::list(conn, created_by, custom).map_err(AppError::from)
    }

    pub fn update(
        conn: &mut PgConnection,
        team_id: Uuid,
        req: &UpdateTeamRequest,
    ) -> Result<Team, AppError> {
        TeamsRepo::find_by_id(conn, team_id)?
            .ok_or_else(|| AppError::not_found("Team not found."))?;

        if let Some(name) = &req.name {
            validation::team::validate_name(name)?;
            if TeamsRepo::name_exists_excluding(conn, name.trim(), team_id)? {
                return Err(AppError::conflict_with_code(
                    "Team name already in use.",
                    Some("name".to_string()),
                    error_codes::TEAM_NAME_EXISTS,
                ));
            }
        }
        if let Some(short_name) = &req.short_name {
            validation::team::validate_short_name(short_name)?;
        }

        TeamsRepo::update_fields(
            conn,
            team_id,
            req.name.as_deref().map(str::trim),
            req.short_name.as_deref().map(str::trim),
            req.logo_url.as_deref(),
        )
        .map_err(AppError::from)
    }

    pub fn delete(conn: &mut PgConnection, team_id: Uuid) -> Result<(), AppError> {
        let deleted = TeamsRepo::delete_by_id(conn, team_id)?;
        if deleted == 0 {
            return Err(AppError::not_found("Team not found."));
        }
        Ok(())
    }
}
