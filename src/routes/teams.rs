use crate::db::{models::*, DbPool};
use crate::services::TeamsService;
use crate::validation::ValidatedJson;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

pub async fn create_team(
    State(pool): State<Arc<DbPool>>,
    ValidatedJson(payload): ValidatedJson<CreateTeamRequest>,
) -> impl IntoResponse {
    let mut conn = match pool.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match TeamsService::create(&mut conn, &payload) {
        Ok(team) => {
            let response = ApiResponse::created(team, "Team created successfully");
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn get_teams(
    State(pool): State<Arc<DbPool>>,
    Query(params): Query<TeamQueryParams>,
) -> impl IntoResponse {
    let mut conn = match pool.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match TeamsService::list(&mut conn, params.created_by, params.custom) {
        Ok(teams) => {
            let response = ApiResponse::success(teams, "Teams retrieved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn get_team(
    State(pool): State<Arc<DbPool>>,
    Path(team_id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = match pool.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match TeamsService::get(&mut conn, team_id) {
        Ok(team) => {
            let response = ApiResponse::success(team, "Team retrieved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn update_team(
    State(pool): State<Arc<DbPool>>,
    Path(team_id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateTeamRequest>,
) -> impl IntoResponse {
    let mut conn = match pool.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match TeamsService::update(&mut conn, team_id, &payload) {
        Ok(team) => {
            let response = ApiResponse::success(team, "Team updated successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn delete_team(
    State(pool): State<Arc<DbPool>>,
    Path(team_id): Path<Uuid>,
) -> impl IntoResponse {
    let mut conn = match pool.get() {
        Ok(conn) => conn,
        Err(_) => {
            let response = ApiResponse::<()>::internal_error("Database connection failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response();
        }
    };

    match TeamsService::delete(&mut conn, team_id) {
        Ok(()) => {
            let response = ApiResponse::<()>::ok("Team deleted successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => err.into_response(),
    }
}
