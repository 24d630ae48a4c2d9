use crate::db::{models::*, DbPool};
use crate::services::{CompetitionsService, DrawService};
use crate::validation::ValidatedJson;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

pub async fn create_competition(
    State(pool): State<Arc<DbPool>>,
    ValidatedJson(payload): ValidatedJson<CreateCompetitionRequest>,
) -> impl IntoResponse {
    let mut conn = match pool.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match CompetitionsService::create(&mut conn, &payload) {
        Ok(competition) => {
            let response = ApiResponse::created(competition, "Competition created successfully");
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn get_competitions(
    State(pool): State<Arc<DbPool>>,
    Query(params): Query<CompetitionQueryParams>,
) -> impl IntoResponse {
    let mut conn = match pool.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match CompetitionsService::list(&mut conn, params.created_by) {
        Ok(competitions) => {
            let response =
                ApiResponse::success(competitions, "Competitions retrieved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn get_competition(
    State(pool): State<Arc<DbPool>>,
    Path(competition_id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = match pool.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match CompetitionsService::get_detail(&mut conn, competition_id) {
        Ok(detail) => {
            let response = ApiResponse::success(detail, "Competition retrieved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn update_competition(
    State(pool): State<Arc<DbPool>>,
    Path(competition_id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateCompetitionRequest>,
) -> impl IntoResponse {
    let mut conn = match pool.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match CompetitionsService::update(&mut conn, competition_id, &payload) {
        Ok(competition) => {
            let response = ApiResponse::success(competition, "Competition updated successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn delete_competition(
    State(pool): State<Arc<DbPool>>,
    Path(competition_id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = match pool.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match CompetitionsService::delete(&mut conn, competition_id) {
        Ok(()) => {
            let response = ApiResponse::<()>::ok("Competition deleted successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn add_team_to_competition(
    State(pool): State<Arc<DbPool>>,
    Path(competition_id): Path<Uuid>,
    Json(payload): Json<EnrollTeamRequest>,
) -> impl IntoResponse {
    let mut conn = match pool.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match CompetitionsService::add_team(&mut conn, competition_id, payload.team_id) {
        Ok(_) => {
            let response = ApiResponse::<()>::ok("Team added to competition successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn remove_team_from_competition(
    State(pool): State<Arc<DbPool>>,
    Path((competition_id, team_id)): Path<(Uuid, Uuid)>,
) -> impl IntoResponse {
    let mut conn = match pool.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match CompetitionsService::remove_team(&mut conn, competition_id, team_id) {
        Ok(()) => {
            let response = ApiResponse::<()>::ok("Team removed from competition successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn get_competition_teams(
    State(pool): State<Arc<DbPool>>,
    Path(competition_id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = match pool.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match CompetitionsService::teams_of(&mut conn, competition_id) {
        Ok(teams) => {
            let response = ApiResponse::success(teams, "Competition teams retrieved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn get_available_teams(
    State(pool): State<Arc<DbPool>>,
    Path(competition_id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = match pool.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match CompetitionsService::available_custom_teams(&mut conn, competition_id) {
        Ok(teams) => {
            let response = ApiResponse::success(teams, "Available teams retrieved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn get_competition_matches(
    State(pool): State<Arc<DbPool>>,
    Path(competition_id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = match pool.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match CompetitionsService::list_matches(&mut conn, competition_id) {
        Ok(matches) => {
            let response = ApiResponse::success(matches, "Matches retrieved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

/// Run the draw: build the double round-robin fixture list and reserve a
/// pitch slot for every fixture that fits the competition window.
pub async fn generate_draw(
    State(pool): State<Arc<DbPool>>,
    Path(competition_id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = match pool.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match DrawService::generate(&mut conn, competition_id) {
        Ok(outcome) => {
            let response =
                ApiResponse::success(outcome, "Matches created and slots reserved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

/// Undo the draw: delete the competition's matches with their bookings and
/// clear the draw flag so the draw can run again.
pub async fn reset_draw(
    State(pool): State<Arc<DbPool>>,
    Path(competition_id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = match pool.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match DrawService::reset(&mut conn, competition_id) {
        Ok(deleted) => {
            let response = ApiResponse::success(
                serde_json::json!({ "deleted_matches": deleted }),
                "Matches deleted and draw reset for the competition",
            );
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}
