use std::collections::HashMap;
use std::str::FromStr;

use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    db::enums::CompetitionStatus,
    db::models::api::error_codes,
    db::models::competition::{
        Competition, CompetitionDetail, CreateCompetitionRequest, Enrollment, NewCompetition,
        NewEnrollment, UpdateCompetitionRequest,
    },
    db::models::matches::CompetitionMatch,
    db::models::team::TeamBasicInfo,
    db::repositories::competitions::CompetitionsRepo,
    db::repositories::matches::MatchesRepo,
    db::repositories::teams::TeamsRepo,
    error::AppError,
    validation,
};

pub const MAX_TEAMS_PER_COMPETITION: i64 = 20;

pub struct CompetitionsService;

impl CompetitionsService {
    pub fn create(
        conn: &mut PgConnection,
        req: &CreateCompetitionRequest,
    ) -> Result<Competition, AppError> {
        validation::competition::validate_name(&req.name)?;
        validation::competition::validate_window(req.start_date, req.end_date)?;
        let status = match req.status.as_deref() {
            Some(raw) => CompetitionStatus::from_str(raw).map_err(|e| AppError::validation(e))?,
            None => CompetitionStatus::Scheduled,
        };

        let new_competition = NewCompetition {
            name: req.name.trim().to_string(),
            start_date: req.start_date,
            end_date: req.end_date,
            status,
            logo_url: req.logo_url.clone(),
            created_by: req.created_by,
        };
        CompetitionsRepo::insert(conn, &new_competition).map_err(AppError::from)
    }

    pub fn get_detail(
        conn: &mut PgConnection,
        competition_id: Uuid,
    ) -> Result<CompetitionDetail, AppError> {
        let competition = CompetitionsRepo::find_by_id(conn, competition_id)?
            .ok_or_else(|| AppError::not_found("Competition not found."))?;
        let teams = CompetitionsRepo::enrolled_teams(conn, competition_id)?;
        Ok(CompetitionDetail {
            id: competition.id,
            name: competition.name,
            start_date: competition.start_date,
            end_date: competition.end_date,
            status: competition.status,
            logo_url: competition.logo_url,
            is_draw: competition.is_draw,
            created_by: competition.created_by,
            created_at: competition.created_at,
            updated_at: competition.updated_at,
            teams,
        })
    }

    pub fn list(
        conn: &mut PgConnection,
        created_by: Option<Uuid>,
    ) -> Result<Vec<Competition>, AppError> {
        let rows = match created_by {
            Some(creator) => CompetitionsRepo::list_by_creator(conn, creator)?,
            None => CompetitionsRepo::list_all(conn)?,
        };
        Ok(rows)
    }

    pub fn update(
        conn: &mut PgConnection,
        competition_id: Uuid,
        req: &UpdateCompetitionRequest,
    ) -> Result<Competition, AppError> {
        let existing = CompetitionsRepo::find_by_id(conn, competition_id)?
            .ok_or_else(|| AppError::not_found("Competition not found."))?;

        if let Some(name) = &req.name {
            validation::competition::validate_name(name)?;
        }
        let status = match req.status.as_deref() {
            Some(raw) => {
                Some(CompetitionStatus::from_str(raw).map_err(|e| AppError::validation(e))?)
            }
            None => None,
        };
        // The window rule holds for the merged value, not just the request.
        let merged_start = req.start_date.unwrap_or(existing.start_date);
        let merged_end = req.end_date.unwrap_or(existing.end_date);
        validation::competition::validate_window(merged_start, merged_end)?;

        CompetitionsRepo::update_fields(
            conn,
            competition_id,
            req.name.as_deref().map(str::trim),
            req.start_date,
            req.end_date,
            status,
            req.logo_url.as_deref(),
        )
        .map_err(AppError::from)
    }

    pub fn delete(conn: &mut PgConnection, competition_id: Uuid) -> Result<(), AppError> {
        let deleted = CompetitionsRepo::delete_by_id(conn, competition_id)?;
        if deleted == 0 {
            return Err(AppError::not_found("Competition not found."));
        }
        Ok(())
    }

    pub fn add_team(
        conn: &mut PgConnection,
        competition_id: Uuid,
        team_id: Uuid,
    ) -> Result<Enrollment, AppError> {
        CompetitionsRepo::find_by_id(conn, competition_id)?
            .ok_or_else(|| AppError::not_found("Competition not found."))?;
        TeamsRepo::find_by_id(conn, team_id)?
            .ok_or_else(|| AppError::not_found("Team not found."))?;

        let count = CompetitionsRepo::enrollment_count(conn, competition_id)?;
        if count >= MAX_TEAMS_PER_COMPETITION {
            return Err(AppError::validation(
                "Maximum of 20 teams reached for this competition.",
            ));
        }
        if CompetitionsRepo::is_enrolled(conn, competition_id, team_id)? {
            return Err(AppError::conflict_with_code(
                "Team is already enrolled in this competition.",
                Some("team_id".to_string()),
                error_codes::COMPETITION_TEAM_ENROLLED,
            ));
        }

        CompetitionsRepo::add_team(
            conn,
            &NewEnrollment {
                competition_id,
                team_id,
            },
        )
        .map_err(AppError::from)
    }

    pub fn remove_team(
        conn: &mut PgConnection,
        competition_id: Uuid,
        team_id: Uuid,
    ) -> Result<(), AppError> {
        let removed = CompetitionsRepo::remove_team(conn, competition_id, team_id)?;
        if removed == 0 {
            return Err(AppError::not_found("Team not found in competition."));
        }
        Ok(())
    }

    pub fn teams_of(
        conn: &mut PgConnection,
        competition_id: Uuid,
    ) -> Result<Vec<TeamBasicInfo>, AppError> {
        CompetitionsRepo::find_by_id(conn, competition_id)?
            .ok_or_else(|| AppError::not_found("Competition not found."))?;
        CompetitionsRepo::enrolled_teams(conn, competition_id).map_err(AppError::from)
    }

    /// Custom teams that could still be enrolled here.
    pub fn available_custom_teams(
        conn: &mut PgConnection,
        competition_id: Uuid,
    ) -> Result<Vec<TeamBasicInfo>, AppError> {
        CompetitionsRepo::find_by_id(conn, competition_id)?
            .ok_or_else(|| AppError::not_found("Competition not found."))?;
        CompetitionsRepo::available_custom_teams(conn, competition_id).map_err(AppError::from)
    }

    /// The competition's fixture list: matches where both sides are
    /// enrolled, with their booking, ordered by kick-off time.
    pub fn list_matches(
        conn: &mut PgConnection,
        competition_id: Uuid,
    ) -> Result<Vec<CompetitionMatch>, AppError> {
        CompetitionsRepo::find_by_id(conn, competition_id)?
            .ok_or_else(|| AppError::not_found("Competition not found."))?;
        let enrolled = CompetitionsRepo::enrolled_team_ids(conn, competition_id)?;
        if enrolled.is_empty() {
            return Ok(Vec::new());
        }

        let rows = MatchesRepo::list_with_bookings(conn, &enrolled)?;
        let names: HashMap<Uuid, String> = TeamsRepo::names_by_ids(conn, &enrolled)?
            .into_iter()
            .collect();

        Ok(rows
            .into_iter()
            .map(|(match_row, (pitch_id, date_time))| CompetitionMatch {
                id: match_row.id,
                team_a: names.get(&match_row.team_a_id).cloned().unwrap_or_default(),
                team_b: names.get(&match_row.team_b_id).cloned().unwrap_or_default(),
                status: match_row.status,
                pitch_id,
                date_time,
            })
            .collect())
    }
}
