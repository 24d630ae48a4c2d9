use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    db::enums::MatchStatus,
    db::models::booking::NewBooking,
    db::models::matches::{DrawOutcome, NewMatch, ScheduledMatch},
    db::repositories::bookings::BookingsRepo,
    db::repositories::centers::PitchesRepo,
    db::repositories::competitions::CompetitionsRepo,
    db::repositories::matches::MatchesRepo,
    error::AppError,
    services::fixtures::{SlotPlanner, round_robin_pairs},
};

pub struct DrawService;

impl DrawService {
    /// Run the draw: generate the double round-robin for the competition's
    /// enrolled teams and reserve a slot for every fixture that fits.
    ///
    /// Everything happens inside one transaction. The competition row is
    /// locked up front, so a concurrent draw for the same competition waits
    /// and then fails the `is_draw` guard instead of generating twice.
    /// Fixtures that find no free slot are logged and skipped; they do not
    /// fail the run.
    pub fn generate(
        conn: &mut PgConnection,
        competition_id: Uuid,
    ) -> Result<DrawOutcome, AppError> {
        conn.transaction::<DrawOutcome, AppError, _>(|conn| {
            let competition = CompetitionsRepo::lock_by_id(conn, competition_id)?
                .ok_or_else(|| AppError::not_found("Competition not found."))?;
            if competition.is_draw {
                return Err(AppError::validation(
                    "Draw has already been completed for this competition.",
                ));
            }

            let team_ids = CompetitionsRepo::enrolled_team_ids(conn, competition_id)?;
            if team_ids.len() < 2 {
                return Err(AppError::validation("Not enough teams to create matches."));
            }

            let pitches = PitchesRepo::active_ids(conn)?;
            let existing = BookingsRepo::occupied_slots(conn)?;
            let mut planner = SlotPlanner::new(
                competition.start_date,
                competition.end_date,
                pitches,
                existing,
            );

            let fixtures = round_robin_pairs(&team_ids);
            tracing::info!(
                competition_id = %competition_id,
                teams = team_ids.len(),
                fixtures = fixtures.len(),
                "starting draw"
            );

            let mut scheduled = Vec::new();
            let mut skipped = 0usize;
            for fixture in fixtures {
                match planner.place(fixture) {
                    Some(slot) => {
                        let match_row = MatchesRepo::insert(
                            conn,
                            &NewMatch {
                                team_a_id: fixture.home,
                                team_b_id: fixture.away,
                                status: MatchStatus::Scheduled,
                                created_by: competition.created_by,
                            },
                        )?;
                        BookingsRepo::insert(
                            conn,
                            &NewBooking {
                                pitch_id: slot.pitch_id,
                                date_time: slot.kickoff,
                                match_id: Some(match_row.id),
                            },
                        )?;
                        scheduled.push(ScheduledMatch {
                            id: match_row.id,
                            date: slot.kickoff.date(),
                            team_a_id: fixture.home,
                            team_b_id: fixture.away,
                        });
                    }
                    None => {
                        skipped += 1;
                        tracing::warn!(
                            competition_id = %competition_id,
                            home = %fixture.home,
                            away = %fixture.away,
                            "no free slot left for fixture"
                        );
                    }
                }
            }

            CompetitionsRepo::set_draw_flag(conn, competition_id, true)?;
            tracing::info!(
                competition_id = %competition_id,
                scheduled = scheduled.len(),
                skipped,
                "draw completed"
            );
            Ok(DrawOutcome { matches: scheduled })
        })
    }

    /// Undo a draw: delete every match attached to the competition's
    /// enrolled teams together with those matches' bookings, then clear the
    /// flag. One transaction, bookings before matches, so no reservation
    /// outlives its match.
    pub fn reset(conn: &mut PgConnection, competition_id: Uuid) -> Result<usize, AppError> {
        conn.transaction::<usize, AppError, _>(|conn| {
            CompetitionsRepo::lock_by_id(conn, competition_id)?
                .ok_or_else(|| AppError::not_found("Competition not found."))?;

            let team_ids = CompetitionsRepo::enrolled_team_ids(conn, competition_id)?;
            let match_ids = if team_ids.is_empty() {
                Vec::new()
            } else {
                MatchesRepo::ids_by_either_team(conn, &team_ids)?
            };

            BookingsRepo::delete_by_match_ids(conn, &match_ids)?;
            let deleted = MatchesRepo::delete_by_ids(conn, &match_ids)?;
            CompetitionsRepo::set_draw_flag(conn, competition_id, false)?;

            tracing::info!(
                competition_id = %competition_id,
                matches_deleted = deleted,
                "draw reset"
            );
            Ok(deleted)
        })
    }
}
