use std::str::FromStr;

use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    db::enums::{MatchStatus, PitchStatus},
    db::models::{
        BookingInfo, CreateMatchRequest, Match, MatchDetail, NewBooking, NewMatch,
        UpdateMatchScoreRequest, UpdateMatchStatusRequest,
    },
    db::repositories::bookings::BookingsRepo,
    db::repositories::centers::PitchesRepo,
    db::repositories::matches::MatchesRepo,
    db::repositories::teams::TeamsRepo,
    error::AppError,
};

pub struct MatchesService;

impl MatchesService {
    /// Create a one-off match and reserve its pitch slot. The availability
    /// check and both inserts run in one transaction, so concurrent requests
    /// cannot claim the same slot.
    pub fn create(
        conn: &mut PgConnection,
        req: &CreateMatchRequest,
    ) -> Result<MatchDetail, AppError> {
        if req.team_a_id == req.team_b_id {
            return Err(AppError::validation("A team cannot play against itself."));
        }

        conn.transaction::<MatchDetail, AppError, _>(|conn| {
            let team_a = TeamsRepo::find_by_id(conn, req.team_a_id)?
                .ok_or_else(|| AppError::not_found("Team not found."))?;
            let team_b = TeamsRepo::find_by_id(conn, req.team_b_id)?
                .ok_or_else(|| AppError::not_found("Team not found."))?;
            let pitch = PitchesRepo::find_by_id(conn, req.pitch_id)?
                .ok_or_else(|| AppError::not_found("Pitch not found."))?;

            if pitch.status != PitchStatus::Active {
                return Err(AppError::validation("The selected pitch is not active."));
            }
            if BookingsRepo::slot_taken(conn, req.pitch_id, req.date_time)? {
                return Err(AppError::validation(
                    "The selected pitch is already reserved at this date and time.",
                ));
            }

            let match_row = MatchesRepo::insert(
                conn,
                &NewMatch {
                    team_a_id: req.team_a_id,
                    team_b_id: req.team_b_id,
                    status: MatchStatus::Scheduled,
                    created_by: req.created_by,
                },
            )?;
            let booking = BookingsRepo::insert(
                conn,
                &NewBooking {
                    pitch_id: req.pitch_id,
                    date_time: req.date_time,
                    match_id: Some(match_row.id),
                },
            )?;

            tracing::info!(
                match_id = %match_row.id,
                pitch_id = %booking.pitch_id,
                date_time = %booking.date_time,
                "match created"
            );

            Ok(MatchDetail {
                id: match_row.id,
                status: match_row.status,
                team_a: team_a.into(),
                team_b: team_b.into(),
                team_a_score: match_row.team_a_score,
                team_b_score: match_row.team_b_score,
                booking: Some(BookingInfo {
                    pitch_id: booking.pitch_id,
                    date_time: booking.date_time,
                }),
                created_by: match_row.created_by,
                created_at: match_row.created_at,
            })
        })
    }

    pub fn get_detail(conn: &mut PgConnection, match_id: Uuid) -> Result<MatchDetail, AppError> {
        let match_row = MatchesRepo::find_by_id(conn, match_id)?
            .ok_or_else(|| AppError::not_found("Match not found."))?;
        let team_a = TeamsRepo::find_by_id(conn, match_row.team_a_id)?
            .ok_or_else(|| AppError::not_found("Team not found."))?;
        let team_b = TeamsRepo::find_by_id(conn, match_row.team_b_id)?
            .ok_or_else(|| AppError::not_found("Team not found."))?;
        let booking = BookingsRepo::find_by_match_id(conn, match_id)?;

        Ok(MatchDetail {
            id: match_row.id,
            status: match_row.status,
            team_a: team_a.into(),
            team_b: team_b.into(),
            team_a_score: match_row.team_a_score,
            team_b_score: match_row.team_b_score,
            booking: booking.map(|b| BookingInfo {
                pitch_id: b.pitch_id,
                date_time: b.date_time,
            }),
            created_by: match_row.created_by,
            created_at: match_row.created_at,
        })
    }

    pub fn set_status(
        conn: &mut PgConnection,
        match_id: Uuid,
        req: &UpdateMatchStatusRequest,
    ) -> Result<Match, AppError> {
        let new_status =
            MatchStatus::from_str(&req.status).map_err(|e| AppError::validation(e))?;

        MatchesRepo::find_by_id(conn, match_id)?
            .ok_or_else(|| AppError::not_found("Match not found."))?;

        MatchesRepo::set_status(conn, match_id, new_status).map_err(AppError::from)
    }

    /// Record a final score. A scored match is considered played, so the
    /// status moves to completed in the same update.
    pub fn set_score(
        conn: &mut PgConnection,
        match_id: Uuid,
        req: &UpdateMatchScoreRequest,
    ) -> Result<Match, AppError> {
        MatchesRepo::find_by_id(conn, match_id)?
            .ok_or_else(|| AppError::not_found("Match not found."))?;

        MatchesRepo::set_score(
            conn,
            match_id,
            req.team_a_score,
            req.team_b_score,
            MatchStatus::Completed,
        )
        .map_err(AppError::from)
    }

    /// Cancel a match and release its booking in the same transaction.
    pub fn cancel(conn: &mut PgConnection, match_id: Uuid) -> Result<Match, AppError> {
        conn.transaction::<Match, AppError, _>(|conn| {
            let match_row = MatchesRepo::find_by_id(conn, match_id)?
                .ok_or_else(|| AppError::not_found("Match not found."))?;

            if match_row.status == MatchStatus::Canceled {
                return Err(AppError::validation("Match is already canceled."));
            }

            let updated = MatchesRepo::set_status(conn, match_id, MatchStatus::Canceled)?;
            BookingsRepo::delete_by_match_id(conn, match_id)?;

            tracing::info!(match_id = %match_id, "match canceled, booking released");

            Ok(updated)
        })
    }
}
