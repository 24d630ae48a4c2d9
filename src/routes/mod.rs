pub mod centers;
pub mod competitions;
pub mod matches;
pub mod teams;

use crate::db::DbPool;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

pub fn create_router(pool: Arc<DbPool>) -> Router {
    Router::new()
        .route("/competitions", post(competitions::create_competition))
        .route("/competitions", get(competitions::get_competitions))
        .route(
            "/competitions/:competition_id",
            get(competitions::get_competition),
        )
        .route(
            "/competitions/:competition_id",
            put(competitions::update_competition),
        )
        .route(
            "/competitions/:competition_id",
            delete(competitions::delete_competition),
        )
        .route(
            "/competitions/:competition_id/teams",
            post(competitions::add_team_to_competition),
        )
        .route(
            "/competitions/:competition_id/teams",
            get(competitions::get_competition_teams),
        )
        .route(
            "/competitions/:competition_id/teams/:team_id",
            delete(competitions::remove_team_from_competition),
        )
        .route(
            "/competitions/:competition_id/available-teams",
            get(competitions::get_available_teams),
        )
        .route(
            "/competitions/:competition_id/matches",
            get(competitions::get_competition_matches),
        )
        .route(
            "/competitions/:competition_id/matches",
            delete(competitions::reset_draw),
        )
        .route(
            "/competitions/:competition_id/draw",
            post(competitions::generate_draw),
        )
        .route("/teams", post(teams::create_team))
        .route("/teams", get(teams::get_teams))
        .route("/teams/:team_id", get(teams::get_team))
        .route("/teams/:team_id", put(teams::update_team))
        .route("/teams/:team_id", delete(teams::delete_team))
        .route("/centers", get(centers::get_centers))
        .route("/pitches/:pitch_id/center", get(centers::get_pitch_center))
        .route(
            "/pitches/:pitch_id/bookings",
            get(centers::get_pitch_bookings),
        )
        .route("/matches", post(matches::create_match))
        .route("/matches/:match_id", get(matches::get_match))
        .route("/matches/:match_id/status", put(matches::update_match_status))
        .route("/matches/:match_id/score", put(matches::update_match_score))
        .route("/matches/:match_id/cancel", post(matches::cancel_match))
        .with_state(pool)
}
