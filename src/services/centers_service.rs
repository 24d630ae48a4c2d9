use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    db::models::{Booking, Center, CenterWithPitches, Pitch, PitchSummary},
    db::repositories::bookings::BookingsRepo,
    db::repositories::centers::{CentersRepo, PitchesRepo},
    error::AppError,
};

pub struct CentersService;

impl CentersService {
    /// List every sports center with its pitches. Centers without pitches
    /// still appear, with an empty list.
    pub fn list_with_pitches(conn: &mut PgConnection) -> Result<Vec<CenterWithPitches>, AppError> {
        let rows = CentersRepo::list_with_pitches(conn)?;
        Ok(group_center_rows(rows))
    }

    pub fn center_of_pitch(conn: &mut PgConnection, pitch_id: Uuid) -> Result<Center, AppError> {
        PitchesRepo::center_of(conn, pitch_id)?
            .ok_or_else(|| AppError::not_found("Pitch not found."))
    }

    pub fn pitch_bookings(
        conn: &mut PgConnection,
        pitch_id: Uuid,
    ) -> Result<Vec<Booking>, AppError> {
        PitchesRepo::find_by_id(conn, pitch_id)?
            .ok_or_else(|| AppError::not_found("Pitch not found."))?;

        BookingsRepo::list_by_pitch(conn, pitch_id).map_err(AppError::from)
    }
}

/// One entry per center, keyed by id. Center names carry no uniqueness
/// constraint, so adjacent rows are not guaranteed to belong to the same
/// center.
pub fn group_center_rows(rows: Vec<(Center, Option<Pitch>)>) -> Vec<CenterWithPitches> {
    let mut centers: Vec<CenterWithPitches> = Vec::new();
    for (center, pitch) in rows {
        let slot = match centers.iter().position(|c| c.id == center.id) {
            Some(slot) => slot,
            None => {
                centers.push(CenterWithPitches {
                    id: center.id,
                    name: center.name,
                    address: center.address,
                    pitches: Vec::new(),
                });
                centers.len() - 1
            }
        };
        if let Some(pitch) = pitch {
            centers[slot].pitches.push(PitchSummary {
                id: pitch.id,
                kind: pitch.kind,
                surface: pitch.surface,
                status: pitch.status,
            });
        }
    }
    centers
}
